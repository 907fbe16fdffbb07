//! Application command (slash command and context menu) interactions.

use std::convert::From;

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Number;

use super::{InteractionId, InteractionType, Respondable, ResponseState};
use crate::internal::prelude::*;
use crate::model::guild::Member;
use crate::model::id::{ApplicationId, ChannelId, CommandId, GuildId, MessageId, TargetId, UserId};
use crate::model::user::User;

/// An interaction triggered by an application command: a slash command typed
/// into chat, or a context menu entry applied to a user or message.
#[derive(Clone, Debug, Serialize)]
#[non_exhaustive]
pub struct ApplicationCommandInteraction {
    /// Id of the interaction.
    pub id: InteractionId,
    /// Id of the application this interaction is for.
    pub application_id: ApplicationId,
    /// The type of interaction.
    #[serde(rename = "type")]
    pub kind: InteractionType,
    /// The command data payload.
    pub data: CommandData,
    /// The guild Id this interaction was sent from, if there is one.
    pub guild_id: Option<GuildId>,
    /// The channel Id this interaction was sent from, if there is one.
    pub channel_id: Option<ChannelId>,
    /// The membership record of the invoking user, if invoked in a guild.
    pub member: Option<Member>,
    /// The invoking user.
    pub user: User,
    /// A token authorizing responses to the interaction.
    pub token: SecretString,
    /// Always `1`.
    pub version: u8,
    /// Which response operations have succeeded so far. Local bookkeeping,
    /// never part of the payload.
    #[serde(skip)]
    pub(crate) state: ResponseState,
}

impl Respondable for ApplicationCommandInteraction {
    fn interaction_id(&self) -> InteractionId {
        self.id
    }

    fn interaction_token(&self) -> &SecretString {
        &self.token
    }

    fn response_state(&self) -> &ResponseState {
        &self.state
    }

    fn response_state_mut(&mut self) -> &mut ResponseState {
        &mut self.state
    }
}

impl<'de> Deserialize<'de> for ApplicationCommandInteraction {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> StdResult<Self, D::Error> {
        let mut map = JsonMap::deserialize(deserializer)?;

        let id = map.get("guild_id").and_then(|x| x.as_str()).and_then(|x| x.parse::<u64>().ok());

        if let Some(guild_id) = id {
            if let Some(member) = map.get_mut("member").and_then(|x| x.as_object_mut()) {
                member.insert("guild_id".to_string(), Value::Number(Number::from(guild_id)));
            }
        }

        let id = map
            .remove("id")
            .ok_or_else(|| DeError::custom("expected id"))
            .and_then(InteractionId::deserialize)
            .map_err(DeError::custom)?;

        let application_id = map
            .remove("application_id")
            .ok_or_else(|| DeError::custom("expected application id"))
            .and_then(ApplicationId::deserialize)
            .map_err(DeError::custom)?;

        let kind = map
            .remove("type")
            .ok_or_else(|| DeError::custom("expected type"))
            .and_then(InteractionType::deserialize)
            .map_err(DeError::custom)?;

        let data = map
            .remove("data")
            .ok_or_else(|| DeError::custom("expected data"))
            .and_then(CommandData::deserialize)
            .map_err(DeError::custom)?;

        let guild_id = match map.contains_key("guild_id") {
            true => Some(
                map.remove("guild_id")
                    .ok_or_else(|| DeError::custom("expected guild_id"))
                    .and_then(GuildId::deserialize)
                    .map_err(DeError::custom)?,
            ),
            false => None,
        };

        let channel_id = match map.contains_key("channel_id") {
            true => Some(
                map.remove("channel_id")
                    .ok_or_else(|| DeError::custom("expected channel_id"))
                    .and_then(ChannelId::deserialize)
                    .map_err(DeError::custom)?,
            ),
            false => None,
        };

        let member = match map.contains_key("member") {
            true => Some(
                map.remove("member")
                    .ok_or_else(|| DeError::custom("expected member"))
                    .and_then(Member::deserialize)
                    .map_err(DeError::custom)?,
            ),
            false => None,
        };

        let user = match map.contains_key("user") {
            true => map
                .remove("user")
                .ok_or_else(|| DeError::custom("expected user"))
                .and_then(User::deserialize)
                .map_err(DeError::custom)?,
            false => member
                .as_ref()
                .map(|member| member.user.clone())
                .ok_or_else(|| DeError::custom("expected user or member"))?,
        };

        let token = map
            .remove("token")
            .ok_or_else(|| DeError::custom("expected token"))
            .and_then(SecretString::deserialize)
            .map_err(DeError::custom)?;

        let version = map
            .remove("version")
            .ok_or_else(|| DeError::custom("expected version"))
            .and_then(u8::deserialize)
            .map_err(DeError::custom)?;

        Ok(Self {
            id,
            application_id,
            kind,
            data,
            guild_id,
            channel_id,
            member,
            user,
            token,
            version,
            state: ResponseState::default(),
        })
    }
}

/// The command data payload.
#[derive(Clone, Debug, Serialize)]
#[non_exhaustive]
pub struct CommandData {
    /// The Id of the invoked command.
    pub id: CommandId,
    /// The name of the invoked command.
    pub name: String,
    /// The application command type of the triggered command.
    ///
    /// Older payloads omit the field; it is then inferred from the presence
    /// of a target, so the value is fixed once deserialization completes.
    #[serde(rename = "type")]
    pub kind: CommandType,
    /// The parameters and the given values.
    #[serde(default)]
    pub options: Vec<CommandDataOption>,
    /// The targeted user or message, if the triggered command is a context
    /// menu command.
    pub target_id: Option<TargetId>,
}

impl<'de> Deserialize<'de> for CommandData {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> StdResult<Self, D::Error> {
        let mut map = JsonMap::deserialize(deserializer)?;

        let id = map
            .remove("id")
            .ok_or_else(|| DeError::custom("expected id"))
            .and_then(CommandId::deserialize)
            .map_err(DeError::custom)?;

        let name = map
            .remove("name")
            .ok_or_else(|| DeError::custom("expected name"))
            .and_then(String::deserialize)
            .map_err(DeError::custom)?;

        let options = match map.contains_key("options") {
            true => map
                .remove("options")
                .ok_or_else(|| DeError::custom("expected options"))
                .and_then(Vec::deserialize)
                .map_err(DeError::custom)?,
            false => vec![],
        };

        let target_id = match map.contains_key("target_id") {
            true => Some(
                map.remove("target_id")
                    .ok_or_else(|| DeError::custom("expected target_id"))
                    .and_then(TargetId::deserialize)
                    .map_err(DeError::custom)?,
            ),
            false => None,
        };

        // Payloads from API v8 predate context menus and carry no command
        // type; the presence of a target decides the flavor.
        let kind = match map.contains_key("type") {
            true => map
                .remove("type")
                .ok_or_else(|| DeError::custom("expected type"))
                .and_then(CommandType::deserialize)
                .map_err(DeError::custom)?,
            false => match target_id.is_some() {
                true => CommandType::User,
                false => CommandType::ChatInput,
            },
        };

        Ok(Self {
            id,
            name,
            kind,
            options,
            target_id,
        })
    }
}

/// A parameter and the value the user gave for it.
///
/// An option either carries an input `value` or denotes a sub-command or
/// group, in which case it carries another vector of `options` instead.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[non_exhaustive]
pub struct CommandDataOption {
    /// The name of the parameter.
    pub name: String,
    /// The given value.
    pub value: Option<Value>,
    /// The value type.
    #[serde(rename = "type")]
    pub kind: CommandOptionType,
    /// The nested options.
    ///
    /// **Note**: It is only present if the option is a group or a subcommand.
    #[serde(default)]
    pub options: Vec<CommandDataOption>,
    /// For autocomplete interactions, `true` on the option the user is
    /// currently typing in.
    #[serde(default)]
    pub focused: bool,
}

/// The application command type of an [`ApplicationCommandInteraction`].
#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq, PartialOrd, Ord)]
#[non_exhaustive]
#[repr(u8)]
pub enum CommandType {
    ChatInput = 1,
    User = 2,
    Message = 3,
    Unknown = !0,
}

enum_number!(CommandType {
    ChatInput,
    User,
    Message
});

/// The value type of a [`CommandDataOption`].
#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq, PartialOrd, Ord)]
#[non_exhaustive]
#[repr(u8)]
pub enum CommandOptionType {
    SubCommand = 1,
    SubCommandGroup = 2,
    String = 3,
    Integer = 4,
    Boolean = 5,
    User = 6,
    Channel = 7,
    Role = 8,
    Mentionable = 9,
    Number = 10,
    Unknown = !0,
}

enum_number!(CommandOptionType {
    SubCommand,
    SubCommandGroup,
    String,
    Integer,
    Boolean,
    User,
    Channel,
    Role,
    Mentionable,
    Number
});

impl TargetId {
    /// Converts this [`TargetId`] to [`UserId`].
    #[must_use]
    pub fn to_user_id(self) -> UserId {
        self.0.into()
    }

    /// Converts this [`TargetId`] to [`MessageId`].
    #[must_use]
    pub fn to_message_id(self) -> MessageId {
        self.0.into()
    }
}

impl From<MessageId> for TargetId {
    fn from(id: MessageId) -> Self {
        Self(id.0)
    }
}

impl From<UserId> for TargetId {
    fn from(id: UserId) -> Self {
        Self(id.0)
    }
}

impl From<TargetId> for MessageId {
    fn from(id: TargetId) -> Self {
        Self(id.0)
    }
}

impl From<TargetId> for UserId {
    fn from(id: TargetId) -> Self {
        Self(id.0)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{ApplicationCommandInteraction, CommandType};

    #[test]
    fn guild_payload_injects_guild_id_and_falls_back_to_member_user() {
        let value = json!({
            "id": "3",
            "application_id": "1",
            "type": 2,
            "data": {
                "id": "10",
                "name": "ping",
                "type": 1,
            },
            "guild_id": "81384788765712384",
            "channel_id": "5",
            "member": {
                "deaf": false,
                "joined_at": "2021-09-02T22:42:52.566000+00:00",
                "mute": false,
                "roles": [],
                "user": {
                    "id": "7",
                    "username": "invoker",
                    "discriminator": "0001",
                },
            },
            "token": "aW50ZXJhY3Rpb24",
            "version": 1,
        });

        let interaction: ApplicationCommandInteraction = serde_json::from_value(value).unwrap();

        assert_eq!(interaction.user.id, 7);
        let member = interaction.member.unwrap();
        assert_eq!(member.guild_id, 81_384_788_765_712_384_u64);
        assert_eq!(member.user.id, interaction.user.id);
        assert_eq!(interaction.data.kind, CommandType::ChatInput);
        assert!(interaction.data.target_id.is_none());
    }

    #[test]
    fn command_type_inferred_when_absent() {
        let value = json!({
            "id": "3",
            "application_id": "1",
            "type": 2,
            "data": {
                "id": "10",
                "name": "Report",
                "target_id": "7",
            },
            "channel_id": "5",
            "user": {
                "id": "7",
                "username": "invoker",
                "discriminator": "0001",
            },
            "token": "aW50ZXJhY3Rpb24",
            "version": 1,
        });

        let interaction: ApplicationCommandInteraction = serde_json::from_value(value).unwrap();

        assert_eq!(interaction.data.kind, CommandType::User);
        assert!(interaction.data.target_id.is_some());
    }
}
