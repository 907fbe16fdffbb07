//! A collection of newtypes defining type-strong IDs.

use std::fmt::{self, Display};

use serde::{Deserialize, Deserializer, Serialize};

use super::timestamp::Timestamp;
use super::utils::U64Visitor;
use crate::internal::prelude::*;

macro_rules! id_u64 {
    ($($name:ident;)*) => {
        $(
            impl $name {
                /// Retrieves the inner ID as u64.
                #[inline]
                #[must_use]
                pub const fn as_u64(&self) -> u64 {
                    self.0
                }

                /// Retrieves the time that the Id was created at.
                #[must_use]
                pub fn created_at(&self) -> Timestamp {
                    Timestamp::from_discord_id(self.0)
                }
            }

            // This is a hack so functions can accept iterators that either:
            // 1. return the id itself (e.g: `MessageId`)
            // 2. return a reference to it (`&MessageId`).
            impl AsRef<$name> for $name {
                fn as_ref(&self) -> &$name {
                    self
                }
            }

            impl<'a> From<&'a $name> for $name {
                fn from(id: &'a $name) -> $name {
                    id.clone()
                }
            }

            impl From<u64> for $name {
                fn from(id_as_u64: u64) -> $name {
                    $name(id_as_u64)
                }
            }

            impl PartialEq<u64> for $name {
                fn eq(&self, u: &u64) -> bool {
                    self.0 == *u
                }
            }

            impl Display for $name {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    Display::fmt(&self.0, f)
                }
            }

            impl From<$name> for u64 {
                fn from(id: $name) -> u64 {
                    id.0
                }
            }

            impl<'de> Deserialize<'de> for $name {
                fn deserialize<D: Deserializer<'de>>(deserializer: D) -> StdResult<Self, D::Error> {
                    deserializer.deserialize_any(U64Visitor).map($name)
                }
            }
        )*
    }
}

/// An identifier for an Application.
#[derive(Copy, Clone, Default, Debug, Eq, Hash, PartialOrd, Ord, PartialEq, Serialize)]
pub struct ApplicationId(pub u64);

/// An identifier for an attachment.
#[derive(Copy, Clone, Default, Debug, Eq, Hash, PartialOrd, Ord, PartialEq, Serialize)]
pub struct AttachmentId(pub u64);

/// An identifier for a Channel.
#[derive(Copy, Clone, Default, Debug, Eq, Hash, PartialOrd, Ord, PartialEq, Serialize)]
pub struct ChannelId(pub u64);

/// An identifier for a slash command.
#[derive(Copy, Clone, Default, Debug, Eq, Hash, PartialOrd, Ord, PartialEq, Serialize)]
pub struct CommandId(pub u64);

/// An identifier for a Guild.
#[derive(Copy, Clone, Default, Debug, Eq, Hash, PartialOrd, Ord, PartialEq, Serialize)]
pub struct GuildId(pub u64);

/// An identifier for an interaction.
#[derive(Copy, Clone, Default, Debug, Eq, Hash, PartialOrd, Ord, PartialEq, Serialize)]
pub struct InteractionId(pub u64);

/// An identifier for a Message.
#[derive(Copy, Clone, Default, Debug, Eq, Hash, PartialOrd, Ord, PartialEq, Serialize)]
pub struct MessageId(pub u64);

/// An identifier for a Role.
#[derive(Copy, Clone, Default, Debug, Eq, Hash, PartialOrd, Ord, PartialEq, Serialize)]
pub struct RoleId(pub u64);

/// An identifier for the target of a context menu command. The underlying Id
/// belongs to either a user or a message.
#[derive(Copy, Clone, Default, Debug, Eq, Hash, PartialOrd, Ord, PartialEq, Serialize)]
pub struct TargetId(pub u64);

/// An identifier for a User.
#[derive(Copy, Clone, Default, Debug, Eq, Hash, PartialOrd, Ord, PartialEq, Serialize)]
pub struct UserId(pub u64);

/// An identifier for a [`Webhook`].
///
/// [`Webhook`]: super::webhook::Webhook
#[derive(Copy, Clone, Default, Debug, Eq, Hash, PartialOrd, Ord, PartialEq, Serialize)]
pub struct WebhookId(pub u64);

id_u64! {
    ApplicationId;
    AttachmentId;
    ChannelId;
    CommandId;
    GuildId;
    InteractionId;
    MessageId;
    RoleId;
    TargetId;
    UserId;
    WebhookId;
}

#[cfg(test)]
mod tests {
    use super::GuildId;

    #[test]
    fn created_at_from_snowflake() {
        // (175928847299117063 >> 22) + 1420070400000 ms = 2016-04-30T11:18:25.796Z
        let id = GuildId(175_928_847_299_117_063);
        assert_eq!(id.created_at().unix_timestamp(), 1_462_015_105);
        assert_eq!(id.created_at().to_string(), "2016-04-30T11:18:25.796Z");
    }

    #[test]
    fn string_and_number_forms_deserialize() {
        let from_str: GuildId = serde_json::from_str(r#""81384788765712384""#).unwrap();
        let from_num: GuildId = serde_json::from_str("81384788765712384").unwrap();
        assert_eq!(from_str, from_num);
        assert_eq!(from_str, 81_384_788_765_712_384_u64);
    }
}
