//! Models relating to guilds and their members.
//!
//! The crate never requests guild state on its own. The owning application
//! already holds a gateway connection; whatever it learns about guilds it
//! hands over through the [`Cache`].
//!
//! [`Cache`]: crate::cache::Cache

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::channel::GuildChannel;
use super::id::{ChannelId, GuildId, RoleId, UserId};
use super::permissions::Permissions;
use super::timestamp::Timestamp;
use super::user::User;
use super::utils::{deserialize_guild_channels, deserialize_members, serialize_gen_map};

/// Information about a guild, to the extent the owning application shared it.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[non_exhaustive]
pub struct Guild {
    /// The unique Id identifying the guild.
    ///
    /// This is equivalent to the Id of the default role (`@everyone`).
    pub id: GuildId,
    /// The name of the guild.
    pub name: String,
    /// The Id of the user who owns the guild.
    pub owner_id: UserId,
    /// Indicator of whether the guild is unavailable.
    #[serde(default)]
    pub unavailable: bool,
    /// All of the guild's channels.
    #[serde(
        default,
        serialize_with = "serialize_gen_map",
        deserialize_with = "deserialize_guild_channels"
    )]
    pub channels: HashMap<ChannelId, GuildChannel>,
    /// Users who are members of the guild.
    #[serde(
        default,
        serialize_with = "serialize_gen_map",
        deserialize_with = "deserialize_members"
    )]
    pub members: HashMap<UserId, Member>,
}

/// Information about a member of a guild.
///
/// Interaction payloads carry one of these for the invoking user whenever the
/// interaction was sent from a guild.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[non_exhaustive]
pub struct Member {
    /// Indicator of whether the member can hear in voice channels.
    #[serde(default)]
    pub deaf: bool,
    /// The unique Id of the guild that the member is a part of.
    ///
    /// The member object on the wire does not carry this field; it is
    /// injected from the surrounding payload while decoding.
    #[serde(default)]
    pub guild_id: GuildId,
    /// Timestamp representing the date when the member joined.
    pub joined_at: Option<Timestamp>,
    /// Indicator of whether the member can speak in voice channels.
    #[serde(default)]
    pub mute: bool,
    /// The member's nickname, if present.
    ///
    /// Can't be longer than 32 characters.
    pub nick: Option<String>,
    /// Timestamp representing the date since when the member is boosting the
    /// guild.
    pub premium_since: Option<Timestamp>,
    /// Vector of Ids of roles given to the member.
    #[serde(default)]
    pub roles: Vec<RoleId>,
    /// Attached User struct.
    pub user: User,
    /// The total permissions of the member in the channel the payload was
    /// sent from, including overwrites.
    ///
    /// Only sent within interaction payloads. Absence stays `None`; it is
    /// never read as an empty set.
    #[serde(default)]
    pub permissions: Option<Permissions>,
}

impl Member {
    /// The name displayed for the member: the nickname when one is set,
    /// otherwise the account name.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.nick.as_deref().unwrap_or(&self.user.name)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::Member;
    use crate::model::permissions::Permissions;

    fn member_value() -> serde_json::Value {
        json!({
            "nick": "kf",
            "roles": ["3", "5"],
            "joined_at": "2021-03-01T10:00:00Z",
            "user": {
                "id": "1",
                "avatar": null,
                "discriminator": "0007",
                "username": "bird",
            },
        })
    }

    #[test]
    fn absent_permissions_stay_none() {
        let member: Member = serde_json::from_value(member_value()).unwrap();
        assert_eq!(member.permissions, None);
        assert_eq!(member.display_name(), "kf");
        assert_eq!(member.roles.len(), 2);
    }

    #[test]
    fn zero_permissions_are_an_empty_set() {
        let mut value = member_value();
        value["permissions"] = json!("0");

        let member: Member = serde_json::from_value(value).unwrap();
        assert_eq!(member.permissions, Some(Permissions::empty()));
    }
}
