//! Interactions and the vocabulary used to classify and answer them.
//!
//! An inbound `INTERACTION_CREATE` payload is resolved into exactly one
//! [`Interaction`] variant while it is deserialized; every later check is a
//! plain match on that tag rather than a probe of the raw payload.

pub mod application_command;
pub mod autocomplete;
pub mod message_component;
pub mod ping;
mod respondable;

use bitflags::bitflags;
use serde::de::{Deserialize, Deserializer, Error as DeError};
use serde::ser::{Serialize, Serializer};

use self::application_command::ApplicationCommandInteraction;
use self::autocomplete::AutocompleteInteraction;
use self::message_component::MessageComponentInteraction;
use self::ping::PingInteraction;
pub use self::respondable::{Respondable, ResponseState};
use crate::cache::Cache;
use crate::internal::prelude::*;
use crate::model::channel::GuildChannel;
use crate::model::guild::{Guild, Member};
use crate::model::id::{ApplicationId, ChannelId, GuildId, InteractionId};
use crate::model::permissions::Permissions;
use crate::model::timestamp::Timestamp;
use crate::model::user::User;

/// An interaction received from the gateway, classified by its wire `type`
/// code and, where the code alone is ambiguous, by the discriminating fields
/// the payload carried.
#[derive(Clone, Debug)]
pub enum Interaction {
    Ping(PingInteraction),
    ApplicationCommand(ApplicationCommandInteraction),
    Autocomplete(AutocompleteInteraction),
    MessageComponent(MessageComponentInteraction),
}

impl Interaction {
    /// Gets the interaction Id.
    #[must_use]
    pub fn id(&self) -> InteractionId {
        match self {
            Interaction::Ping(i) => i.id,
            Interaction::ApplicationCommand(i) => i.id,
            Interaction::Autocomplete(i) => i.id,
            Interaction::MessageComponent(i) => i.id,
        }
    }

    /// Gets the interaction type.
    #[must_use]
    pub fn kind(&self) -> InteractionType {
        match self {
            Interaction::Ping(_) => InteractionType::Ping,
            Interaction::ApplicationCommand(_) => InteractionType::ApplicationCommand,
            Interaction::Autocomplete(_) => InteractionType::Autocomplete,
            Interaction::MessageComponent(_) => InteractionType::MessageComponent,
        }
    }

    /// Gets the interaction application Id.
    #[must_use]
    pub fn application_id(&self) -> ApplicationId {
        match self {
            Interaction::Ping(i) => i.application_id,
            Interaction::ApplicationCommand(i) => i.application_id,
            Interaction::Autocomplete(i) => i.application_id,
            Interaction::MessageComponent(i) => i.application_id,
        }
    }

    /// Gets the interaction token: the time-limited credential authorizing
    /// responses. The wrapper keeps it out of `Debug` output.
    #[must_use]
    pub fn token(&self) -> &SecretString {
        match self {
            Interaction::Ping(i) => &i.token,
            Interaction::ApplicationCommand(i) => &i.token,
            Interaction::Autocomplete(i) => &i.token,
            Interaction::MessageComponent(i) => &i.token,
        }
    }

    /// Gets the Id of the guild the interaction was sent from, if any.
    #[must_use]
    pub fn guild_id(&self) -> Option<GuildId> {
        match self {
            Interaction::Ping(_) => None,
            Interaction::ApplicationCommand(i) => i.guild_id,
            Interaction::Autocomplete(i) => i.guild_id,
            Interaction::MessageComponent(i) => i.guild_id,
        }
    }

    /// Gets the Id of the channel the interaction was sent from.
    ///
    /// Pings do not originate from a channel, and other interactions may
    /// arrive without one.
    #[must_use]
    pub fn channel_id(&self) -> Option<ChannelId> {
        match self {
            Interaction::Ping(_) => None,
            Interaction::ApplicationCommand(i) => i.channel_id,
            Interaction::Autocomplete(i) => i.channel_id,
            Interaction::MessageComponent(i) => i.channel_id,
        }
    }

    /// Gets the invoking user.
    ///
    /// Pings carry no user.
    #[must_use]
    pub fn user(&self) -> Option<&User> {
        match self {
            Interaction::Ping(_) => None,
            Interaction::ApplicationCommand(i) => Some(&i.user),
            Interaction::Autocomplete(i) => Some(&i.user),
            Interaction::MessageComponent(i) => Some(&i.user),
        }
    }

    /// Gets the membership record the payload carried for the invoking user,
    /// present only for interactions sent from a guild.
    #[must_use]
    pub fn member(&self) -> Option<&Member> {
        match self {
            Interaction::Ping(_) => None,
            Interaction::ApplicationCommand(i) => i.member.as_ref(),
            Interaction::Autocomplete(i) => i.member.as_ref(),
            Interaction::MessageComponent(i) => i.member.as_ref(),
        }
    }

    /// The invoking member's permissions in the originating channel, as
    /// snapshotted by the platform when the interaction was created.
    ///
    /// `None` whenever the payload carried no bitfield; absence is never read
    /// as an empty set.
    #[must_use]
    pub fn member_permissions(&self) -> Option<Permissions> {
        self.member().and_then(|member| member.permissions)
    }

    /// Gets the interaction protocol version. Informational only.
    #[must_use]
    pub fn version(&self) -> u8 {
        match self {
            Interaction::Ping(i) => i.version,
            Interaction::ApplicationCommand(i) => i.version,
            Interaction::Autocomplete(i) => i.version,
            Interaction::MessageComponent(i) => i.version,
        }
    }

    /// The time the interaction was created at, derived from its snowflake Id.
    #[must_use]
    pub fn created_at(&self) -> Timestamp {
        self.id().created_at()
    }

    /// Whether this is an application command interaction of either flavor,
    /// slash command or context menu.
    #[must_use]
    pub fn is_application_command(&self) -> bool {
        matches!(self, Interaction::ApplicationCommand(_))
    }

    /// Whether this is a plain slash command, which targets nothing.
    #[must_use]
    pub fn is_command(&self) -> bool {
        matches!(self, Interaction::ApplicationCommand(i) if i.data.target_id.is_none())
    }

    /// Whether this is a context menu command, invoked on a target user or
    /// message.
    #[must_use]
    pub fn is_context_menu(&self) -> bool {
        matches!(self, Interaction::ApplicationCommand(i) if i.data.target_id.is_some())
    }

    /// Whether this is an autocomplete request for a command option.
    #[must_use]
    pub fn is_autocomplete(&self) -> bool {
        matches!(self, Interaction::Autocomplete(_))
    }

    /// Whether this is a message component interaction of any component kind.
    #[must_use]
    pub fn is_message_component(&self) -> bool {
        matches!(self, Interaction::MessageComponent(_))
    }

    /// Whether this is a button press.
    #[must_use]
    pub fn is_button(&self) -> bool {
        matches!(
            self,
            Interaction::MessageComponent(i) if i.data.component_type == ComponentType::Button
        )
    }

    /// Whether the interaction was sent from a guild, cached locally or not.
    #[must_use]
    pub fn in_guild(&self) -> bool {
        self.guild_id().is_some() && self.member().is_some()
    }

    /// Whether the interaction was sent from a guild the [`Cache`] currently
    /// holds.
    ///
    /// Cache state can change between calls, so this is recomputed every time
    /// rather than resolved once.
    #[must_use]
    pub fn in_cached_guild(&self, cache: &Cache) -> bool {
        self.member().is_some()
            && self.guild_id().map_or(false, |id| cache.guild(id).is_some())
    }

    /// Whether the interaction was sent from a guild that is *not* locally
    /// cached, leaving the attached membership record unresolvable to a full
    /// guild.
    #[must_use]
    pub fn in_raw_guild(&self, cache: &Cache) -> bool {
        self.member().is_some()
            && self.guild_id().map_or(false, |id| cache.guild(id).is_none())
    }

    /// Looks the originating guild up in the cache. `None` on a cache miss or
    /// for interactions sent outside a guild.
    #[must_use]
    pub fn guild(&self, cache: &Cache) -> Option<Guild> {
        cache.guild(self.guild_id()?)
    }

    /// Looks the originating channel up in the cache. `None` on a cache miss.
    #[must_use]
    pub fn channel(&self, cache: &Cache) -> Option<GuildChannel> {
        cache.channel(self.channel_id()?)
    }

    /// Converts this to a [`PingInteraction`].
    #[must_use]
    pub fn ping(self) -> Option<PingInteraction> {
        match self {
            Interaction::Ping(i) => Some(i),
            _ => None,
        }
    }

    /// Converts this to an [`ApplicationCommandInteraction`].
    #[must_use]
    pub fn application_command(self) -> Option<ApplicationCommandInteraction> {
        match self {
            Interaction::ApplicationCommand(i) => Some(i),
            _ => None,
        }
    }

    /// Converts this to an [`AutocompleteInteraction`].
    #[must_use]
    pub fn autocomplete(self) -> Option<AutocompleteInteraction> {
        match self {
            Interaction::Autocomplete(i) => Some(i),
            _ => None,
        }
    }

    /// Converts this to a [`MessageComponentInteraction`].
    #[must_use]
    pub fn message_component(self) -> Option<MessageComponentInteraction> {
        match self {
            Interaction::MessageComponent(i) => Some(i),
            _ => None,
        }
    }

    /// Borrows this as an [`ApplicationCommandInteraction`].
    #[must_use]
    pub fn as_application_command(&self) -> Option<&ApplicationCommandInteraction> {
        match self {
            Interaction::ApplicationCommand(i) => Some(i),
            _ => None,
        }
    }

    /// Borrows this as an [`AutocompleteInteraction`].
    #[must_use]
    pub fn as_autocomplete(&self) -> Option<&AutocompleteInteraction> {
        match self {
            Interaction::Autocomplete(i) => Some(i),
            _ => None,
        }
    }

    /// Borrows this as a [`MessageComponentInteraction`].
    #[must_use]
    pub fn as_message_component(&self) -> Option<&MessageComponentInteraction> {
        match self {
            Interaction::MessageComponent(i) => Some(i),
            _ => None,
        }
    }
}

impl<'de> Deserialize<'de> for Interaction {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> StdResult<Self, D::Error> {
        let map = JsonMap::deserialize(deserializer)?;

        let kind = map
            .get("type")
            .ok_or_else(|| DeError::custom("expected type"))
            .and_then(InteractionType::deserialize)
            .map_err(DeError::custom)?;

        match kind {
            InteractionType::Ping => serde_json::from_value::<PingInteraction>(Value::Object(map))
                .map(Interaction::Ping)
                .map_err(DeError::custom),
            InteractionType::ApplicationCommand => {
                serde_json::from_value::<ApplicationCommandInteraction>(Value::Object(map))
                    .map(Interaction::ApplicationCommand)
                    .map_err(DeError::custom)
            },
            InteractionType::Autocomplete => {
                serde_json::from_value::<AutocompleteInteraction>(Value::Object(map))
                    .map(Interaction::Autocomplete)
                    .map_err(DeError::custom)
            },
            InteractionType::MessageComponent => {
                serde_json::from_value::<MessageComponentInteraction>(Value::Object(map))
                    .map(Interaction::MessageComponent)
                    .map_err(DeError::custom)
            },
            InteractionType::Unknown => Err(DeError::custom("Unknown interaction type")),
        }
    }
}

impl Serialize for Interaction {
    fn serialize<S>(&self, serializer: S) -> StdResult<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Interaction::Ping(i) => PingInteraction::serialize(i, serializer),
            Interaction::ApplicationCommand(i) => {
                ApplicationCommandInteraction::serialize(i, serializer)
            },
            Interaction::Autocomplete(i) => AutocompleteInteraction::serialize(i, serializer),
            Interaction::MessageComponent(i) => {
                MessageComponentInteraction::serialize(i, serializer)
            },
        }
    }
}

/// The type of an Interaction.
#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq, PartialOrd, Ord)]
#[non_exhaustive]
#[repr(u8)]
pub enum InteractionType {
    Ping = 1,
    ApplicationCommand = 2,
    MessageComponent = 3,
    Autocomplete = 4,
    Unknown = !0,
}

enum_number!(InteractionType {
    Ping,
    ApplicationCommand,
    MessageComponent,
    Autocomplete
});

/// The type of a component the platform can attach to a message.
#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq, PartialOrd, Ord)]
#[non_exhaustive]
#[repr(u8)]
pub enum ComponentType {
    ActionRow = 1,
    Button = 2,
    SelectMenu = 3,
    Unknown = !0,
}

enum_number!(ComponentType {
    ActionRow,
    Button,
    SelectMenu
});

/// The available responses types for an interaction response.
///
/// Codes 2 and 3 are reserved upstream; they have no variant here, never
/// obtain a name, and fail deserialization.
#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq, PartialOrd, Ord)]
#[non_exhaustive]
#[repr(u8)]
pub enum InteractionResponseType {
    Pong = 1,
    ChannelMessageWithSource = 4,
    DeferredChannelMessageWithSource = 5,
    DeferredUpdateMessage = 6,
    UpdateMessage = 7,
    Autocomplete = 8,
}

enum_number!(InteractionResponseType {
    Pong,
    ChannelMessageWithSource,
    DeferredChannelMessageWithSource,
    DeferredUpdateMessage,
    UpdateMessage,
    Autocomplete
});

bitflags! {
    /// The flags for an interaction response message.
    #[derive(Copy, Clone, Default, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
    pub struct InteractionResponseFlags: u64 {
        /// Interaction message will only be visible to the sender and will
        /// be quickly deleted.
        const EPHEMERAL = 1 << 6;
    }
}

impl<'de> Deserialize<'de> for InteractionResponseFlags {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> StdResult<Self, D::Error> {
        Ok(InteractionResponseFlags::from_bits_truncate(u64::deserialize(deserializer)?))
    }
}

impl Serialize for InteractionResponseFlags {
    fn serialize<S: Serializer>(&self, serializer: S) -> StdResult<S::Ok, S::Error> {
        serializer.serialize_u64(self.bits())
    }
}

/// Sent when a [`Message`] is a response to an [`Interaction`]; identifies
/// the interaction that produced the message.
///
/// [`Message`]: crate::model::channel::Message
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[non_exhaustive]
pub struct MessageInteraction {
    /// The Id of the interaction.
    pub id: InteractionId,
    /// The type of the interaction.
    #[serde(rename = "type")]
    pub kind: InteractionType,
    /// The name of the invoked application command.
    pub name: String,
    /// The user who invoked the interaction.
    pub user: User,
}

#[cfg(test)]
mod tests {
    use serde_test::{assert_tokens, Token};

    use super::{ComponentType, InteractionResponseType, InteractionType};

    #[test]
    fn wire_shape_is_a_bare_integer() {
        assert_tokens(&InteractionType::MessageComponent, &[Token::U64(3)]);
        assert_tokens(&ComponentType::SelectMenu, &[Token::U64(3)]);
        assert_tokens(&InteractionResponseType::UpdateMessage, &[Token::U64(7)]);
    }

    #[test]
    fn codes_round_trip_through_names() {
        assert_eq!(InteractionType::ApplicationCommand.num(), 2);
        assert_eq!(InteractionType::ApplicationCommand.name(), Some("ApplicationCommand"));
        assert_eq!(
            InteractionType::from_name("Autocomplete"),
            Some(InteractionType::Autocomplete)
        );
        assert_eq!(ComponentType::from_name("Button"), Some(ComponentType::Button));
        assert_eq!(InteractionType::Unknown.name(), None);
    }

    #[test]
    fn reserved_response_codes_have_no_mapping() {
        assert!(serde_json::from_str::<InteractionResponseType>("2").is_err());
        assert!(serde_json::from_str::<InteractionResponseType>("3").is_err());
        assert_eq!(
            serde_json::from_str::<InteractionResponseType>("8").unwrap(),
            InteractionResponseType::Autocomplete
        );
        assert_eq!(InteractionResponseType::from_name("Pong"), Some(InteractionResponseType::Pong));
    }

    #[test]
    fn unlisted_type_codes_fail_deserialization() {
        assert!(serde_json::from_str::<InteractionType>("9").is_err());
        assert_eq!(
            serde_json::from_str::<InteractionType>("3").unwrap(),
            InteractionType::MessageComponent
        );
    }
}
