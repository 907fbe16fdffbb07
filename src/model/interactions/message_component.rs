//! Message component interactions: button presses and select menu choices.

use serde::de::Error as DeError;
use serde::ser::Serializer;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Number;

use super::{ComponentType, InteractionType, Respondable, ResponseState};
use crate::internal::prelude::*;
use crate::model::channel::{Message, MessageFlags};
use crate::model::guild::Member;
use crate::model::id::{ApplicationId, ChannelId, GuildId, InteractionId, MessageId};
use crate::model::user::User;
use crate::model::utils::has_field;

/// An interaction triggered by a component attached to a message: a button
/// press or a select menu submission.
#[derive(Clone, Debug, Serialize)]
#[non_exhaustive]
pub struct MessageComponentInteraction {
    /// Id of the interaction.
    pub id: InteractionId,
    /// Id of the application this interaction is for.
    pub application_id: ApplicationId,
    /// The type of interaction.
    #[serde(rename = "type")]
    pub kind: InteractionType,
    /// The component data payload.
    pub data: ComponentData,
    /// The message the component was attached to.
    pub message: InteractionMessage,
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

impl Respondable for MessageComponentInteraction {
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

impl<'de> Deserialize<'de> for MessageComponentInteraction {
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
            .and_then(ComponentData::deserialize)
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

        let message = {
            let value = map
                .remove("message")
                .ok_or_else(|| DeError::custom("expected message"))?;

            // Messages sent as ephemeral responses come back author-less and
            // reduced; field presence is the only discriminant.
            if has_field(&value, "author") {
                InteractionMessage::Regular(Message::deserialize(value).map_err(DeError::custom)?)
            } else {
                InteractionMessage::Ephemeral(
                    EphemeralMessage::deserialize(value).map_err(DeError::custom)?,
                )
            }
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
            message,
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

/// The component data payload.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[non_exhaustive]
pub struct ComponentData {
    /// The custom id of the component.
    pub custom_id: String,
    /// The type of the component.
    pub component_type: ComponentType,
    /// The given values of a select menu, in the order the user picked them.
    #[serde(default)]
    pub values: Vec<String>,
}

/// The message a component interaction originated from.
///
/// Messages that were themselves sent as ephemeral interaction responses come
/// back in a reduced form.
#[derive(Clone, Debug, Deserialize)]
pub enum InteractionMessage {
    Regular(Message),
    Ephemeral(EphemeralMessage),
}

impl InteractionMessage {
    /// Whether the message is ephemeral.
    #[must_use]
    pub fn is_ephemeral(&self) -> bool {
        matches!(self, InteractionMessage::Ephemeral(_))
    }

    /// Gets the message Id.
    #[must_use]
    pub fn id(&self) -> MessageId {
        match self {
            InteractionMessage::Regular(m) => m.id,
            InteractionMessage::Ephemeral(m) => m.id,
        }
    }

    /// Converts this to a regular message, if it is one.
    #[must_use]
    pub fn regular(self) -> Option<Message> {
        match self {
            InteractionMessage::Regular(m) => Some(m),
            InteractionMessage::Ephemeral(_) => None,
        }
    }

    /// Converts this to an ephemeral message, if it is one.
    #[must_use]
    pub fn ephemeral(self) -> Option<EphemeralMessage> {
        match self {
            InteractionMessage::Regular(_) => None,
            InteractionMessage::Ephemeral(m) => Some(m),
        }
    }
}

impl Serialize for InteractionMessage {
    fn serialize<S>(&self, serializer: S) -> StdResult<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            InteractionMessage::Regular(m) => Message::serialize(m, serializer),
            InteractionMessage::Ephemeral(m) => EphemeralMessage::serialize(m, serializer),
        }
    }
}

/// An ephemeral message given in an interaction.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct EphemeralMessage {
    /// The message flags.
    pub flags: MessageFlags,
    /// The message Id.
    pub id: MessageId,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::MessageComponentInteraction;
    use crate::model::interactions::ComponentType;

    fn payload(message: serde_json::Value) -> serde_json::Value {
        json!({
            "id": "3",
            "application_id": "1",
            "type": 3,
            "data": {
                "custom_id": "accept",
                "component_type": 2,
            },
            "message": message,
            "channel_id": "5",
            "user": {
                "id": "7",
                "username": "presser",
                "discriminator": "0001",
            },
            "token": "aW50ZXJhY3Rpb24",
            "version": 1,
        })
    }

    #[test]
    fn message_with_author_is_regular() {
        let value = payload(json!({
            "id": "11",
            "channel_id": "5",
            "content": "pick one",
            "author": {
                "id": "2",
                "username": "app",
                "discriminator": "0002",
                "bot": true,
            },
            "timestamp": "2021-09-02T22:42:52.566000+00:00",
            "tts": false,
            "pinned": false,
            "attachments": [],
            "embeds": [],
        }));

        let interaction: MessageComponentInteraction = serde_json::from_value(value).unwrap();
        assert!(!interaction.message.is_ephemeral());
        assert_eq!(interaction.message.id(), 11);
        assert_eq!(interaction.data.component_type, ComponentType::Button);
    }

    #[test]
    fn message_without_author_is_ephemeral() {
        let value = payload(json!({
            "id": "11",
            "flags": 64,
        }));

        let interaction: MessageComponentInteraction = serde_json::from_value(value).unwrap();
        assert!(interaction.message.is_ephemeral());
        assert_eq!(interaction.message.id(), 11);
    }
}
