//! Models relating to channels and the messages within them.

mod embed;
mod message;

pub use self::embed::*;
pub use self::message::*;

use serde::{Deserialize, Serialize};

use super::id::{ChannelId, GuildId};

/// Represents a guild's text, news, or voice channel.
///
/// Some methods are available only for voice channels and some are only
/// available for text channels. The crate itself never fetches channels; the
/// owning application inserts what it knows into the [`Cache`].
///
/// [`Cache`]: crate::cache::Cache
#[derive(Clone, Debug, Deserialize, Serialize)]
#[non_exhaustive]
pub struct GuildChannel {
    /// The unique Id of the channel.
    pub id: ChannelId,
    /// The Id of the guild the channel is located in.
    #[serde(default)]
    pub guild_id: GuildId,
    /// Indicator of the type of channel this is.
    #[serde(rename = "type")]
    pub kind: ChannelType,
    /// The name of the channel.
    pub name: String,
    /// Indicator of whether the channel is NSFW.
    #[serde(default)]
    pub nsfw: bool,
    /// The position of the channel.
    ///
    /// The default channel is almost always at position `0`.
    #[serde(default)]
    pub position: i64,
    /// The topic of the channel, if it is a text channel.
    pub topic: Option<String>,
}

/// A representation of a type of channel.
#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq, PartialOrd, Ord)]
#[non_exhaustive]
#[repr(u8)]
pub enum ChannelType {
    /// An indicator that the channel is a text channel in a guild.
    Text = 0,
    /// An indicator that the channel is a direct message channel.
    Private = 1,
    /// An indicator that the channel is a voice channel in a guild.
    Voice = 2,
    /// An indicator that the channel is a channel category.
    Category = 4,
    /// An indicator that the channel is a news channel.
    News = 5,
    /// An indicator that the channel carried a type code added after this
    /// library version.
    Unknown = !0,
}

enum_number!(ChannelType {
    Text,
    Private,
    Voice,
    Category,
    News
});

#[cfg(test)]
mod tests {
    use super::ChannelType;

    #[test]
    fn reserved_code_slot_does_not_decode() {
        // 3 belongs to group DM channels, which guild interactions never
        // reference.
        assert!(serde_json::from_str::<ChannelType>("3").is_err());
        assert_eq!(serde_json::from_str::<ChannelType>("5").unwrap(), ChannelType::News);
    }

    #[test]
    fn name_table_skips_unknown() {
        assert_eq!(ChannelType::Category.name(), Some("Category"));
        assert_eq!(ChannelType::from_name("Voice"), Some(ChannelType::Voice));
        assert_eq!(ChannelType::Unknown.name(), None);
        assert_eq!(ChannelType::from_name("Unknown"), None);
    }
}
