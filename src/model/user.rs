//! User information-related models.

use serde::{Deserialize, Serialize};

use super::id::UserId;
use super::timestamp::Timestamp;
use super::utils::deserialize_u16;

/// Information about a user.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[non_exhaustive]
pub struct User {
    /// The unique Id of the user. Can be used to calculate the account's
    /// creation date.
    pub id: UserId,
    /// Optional avatar hash.
    pub avatar: Option<String>,
    /// Indicator of whether the user is a bot.
    #[serde(default)]
    pub bot: bool,
    /// The account's discriminator to differentiate the user from others with
    /// the same username. The name and discriminator pair is always unique.
    #[serde(deserialize_with = "deserialize_u16")]
    pub discriminator: u16,
    /// The account's username. Changing the username will trigger a
    /// discriminator change if the pair becomes non-unique.
    #[serde(rename = "username")]
    pub name: String,
}

impl User {
    /// Retrieves the time that this account was created at.
    #[must_use]
    pub fn created_at(&self) -> Timestamp {
        self.id.created_at()
    }

    /// Returns the formatted tag of the user, e.g. `username#discriminator`.
    #[must_use]
    pub fn tag(&self) -> String {
        format!("{}#{:04}", self.name, self.discriminator)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::User;

    #[test]
    fn discriminator_accepts_both_wire_forms() {
        let user: User = serde_json::from_value(json!({
            "id": "81384788765712384",
            "avatar": null,
            "discriminator": "0001",
            "username": "crow",
        }))
        .unwrap();
        assert_eq!(user.discriminator, 1);
        assert_eq!(user.tag(), "crow#0001");
        assert!(!user.bot);

        let user: User = serde_json::from_value(json!({
            "id": "81384788765712384",
            "avatar": null,
            "discriminator": 1,
            "username": "crow",
            "bot": true,
        }))
        .unwrap();
        assert_eq!(user.discriminator, 1);
        assert!(user.bot);
    }
}
