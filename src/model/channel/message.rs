//! Models relating to Discord channels.

use bitflags::bitflags;
use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

use super::embed::Embed;
use crate::constants;
use crate::internal::prelude::*;
use crate::model::error::Error as ModelError;
use crate::model::id::{AttachmentId, ChannelId, GuildId, MessageId, WebhookId};
use crate::model::interactions::MessageInteraction;
use crate::model::timestamp::Timestamp;
use crate::model::user::User;

/// A representation of a message over a guild's text channel, a group, or a
/// private channel.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[non_exhaustive]
pub struct Message {
    /// The unique Id of the message. Can be used to calculate the time the
    /// message was sent at.
    pub id: MessageId,
    /// An vector of the files attached to a message.
    #[serde(default)]
    pub attachments: Vec<Attachment>,
    /// The user that sent the message.
    pub author: User,
    /// The Id of the [`GuildChannel`] that the message was sent to.
    ///
    /// [`GuildChannel`]: super::GuildChannel
    pub channel_id: ChannelId,
    /// The content of the message.
    #[serde(default)]
    pub content: String,
    /// The timestamp of the last time the message was updated, if it was.
    pub edited_timestamp: Option<Timestamp>,
    /// Array of embeds sent with the message.
    #[serde(default)]
    pub embeds: Vec<Embed>,
    /// Flags associated with the message.
    pub flags: Option<MessageFlags>,
    /// The Id of the [`Guild`] that the message was sent in. This value will
    /// only be present if this message was received over the gateway.
    ///
    /// [`Guild`]: crate::model::guild::Guild
    pub guild_id: Option<GuildId>,
    /// Indicator of whether the message is pinned.
    #[serde(default)]
    pub pinned: bool,
    /// The initial message creation time, calculated on the message's Id.
    pub timestamp: Timestamp,
    /// Indicator of whether the command is to be played back via
    /// text-to-speech.
    ///
    /// In the client, this is done via the `/tts` slash command.
    #[serde(default)]
    pub tts: bool,
    /// Sent with messages produced through the execution of an interaction;
    /// identifies that interaction.
    pub interaction: Option<MessageInteraction>,
    /// The Id of the webhook that sent this message, if one did.
    pub webhook_id: Option<WebhookId>,
}

impl Message {
    /// Retrieves the time that the message was created at.
    #[must_use]
    pub fn created_at(&self) -> Timestamp {
        self.id.created_at()
    }

    /// Whether the message is visible only to the invoking user.
    #[must_use]
    pub fn is_ephemeral(&self) -> bool {
        self.flags.map_or(false, |flags| flags.contains(MessageFlags::EPHEMERAL))
    }

    pub(crate) fn check_content_length(map: &JsonMap) -> Result<()> {
        if let Some(Value::String(content)) = map.get("content") {
            if let Some(length_over) = Message::overflow_length(content) {
                return Err(Error::Model(ModelError::MessageTooLong(length_over)));
            }
        }

        Ok(())
    }

    pub(crate) fn overflow_length(content: &str) -> Option<u64> {
        // Check if the content is over the maximum number of unicode code
        // points.
        let count = content.chars().count();

        if count > constants::MESSAGE_CODE_LIMIT {
            Some((count - constants::MESSAGE_CODE_LIMIT) as u64)
        } else {
            None
        }
    }

    pub(crate) fn check_embed_length(map: &JsonMap) -> Result<()> {
        let embeds = match map.get("embeds") {
            Some(Value::Array(embeds)) => embeds,
            _ => return Ok(()),
        };

        for embed in embeds {
            let mut total: u64 = 0;

            if let Some(Value::String(title)) = embed.get("title") {
                total += title.chars().count() as u64;
            }

            if let Some(Value::String(description)) = embed.get("description") {
                total += description.chars().count() as u64;
            }

            if let Some(Value::Array(fields)) = embed.get("fields") {
                for field in fields {
                    if let Some(Value::String(name)) = field.get("name") {
                        total += name.chars().count() as u64;
                    }

                    if let Some(Value::String(value)) = field.get("value") {
                        total += value.chars().count() as u64;
                    }
                }
            }

            if let Some(Value::Object(footer)) = embed.get("footer") {
                if let Some(Value::String(text)) = footer.get("text") {
                    total += text.chars().count() as u64;
                }
            }

            if let Some(Value::Object(author)) = embed.get("author") {
                if let Some(Value::String(name)) = author.get("name") {
                    total += name.chars().count() as u64;
                }
            }

            if total > constants::EMBED_MAX_LENGTH as u64 {
                return Err(Error::Model(ModelError::EmbedTooLarge(
                    total - constants::EMBED_MAX_LENGTH as u64,
                )));
            }
        }

        Ok(())
    }
}

/// A file uploaded with a message. Not to be confused with [`Embed`]s.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[non_exhaustive]
pub struct Attachment {
    /// The unique ID given to this attachment.
    pub id: AttachmentId,
    /// The filename of the file that was uploaded. This is equivalent to what
    /// the uploader had their file named.
    pub filename: String,
    /// If the attachment is an image, then the height of the image is
    /// provided.
    pub height: Option<u64>,
    /// The proxy URL.
    pub proxy_url: String,
    /// The size of the file in bytes.
    pub size: u64,
    /// The URL of the uploaded attachment.
    pub url: String,
    /// If the attachment is an image, then the width of the image is
    /// provided.
    pub width: Option<u64>,
}

impl Attachment {
    /// If this attachment is an image, then a tuple of the width and height
    /// in pixels is returned.
    #[must_use]
    pub fn dimensions(&self) -> Option<(u64, u64)> {
        self.width.and_then(|width| self.height.map(|height| (width, height)))
    }
}

bitflags! {
    /// Describes extra features of the message.
    #[derive(Copy, Clone, Default, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
    pub struct MessageFlags: u64 {
        /// This message has been published to subscribed channels (via
        /// Channel Following).
        const CROSSPOSTED = 1 << 0;
        /// This message originated from a message in another channel (via
        /// Channel Following).
        const IS_CROSSPOST = 1 << 1;
        /// Do not include any embeds when serializing this message.
        const SUPPRESS_EMBEDS = 1 << 2;
        /// The source message for this crosspost has been deleted (via
        /// Channel Following).
        const SOURCE_MESSAGE_DELETED = 1 << 3;
        /// This message came from the urgent message system.
        const URGENT = 1 << 4;
        /// This message is only visible to the user who invoked the
        /// interaction.
        const EPHEMERAL = 1 << 6;
        /// This message is an interaction response and the bot is "thinking".
        const LOADING = 1 << 7;
    }
}

impl<'de> Deserialize<'de> for MessageFlags {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> StdResult<Self, D::Error> {
        Ok(MessageFlags::from_bits_truncate(u64::deserialize(deserializer)?))
    }
}

impl Serialize for MessageFlags {
    fn serialize<S: Serializer>(&self, serializer: S) -> StdResult<S::Ok, S::Error> {
        serializer.serialize_u64(self.bits())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::Message;
    use crate::internal::prelude::*;
    use crate::model::error::Error as ModelError;

    #[test]
    fn content_over_the_code_point_limit_is_rejected() {
        let mut map = JsonMap::new();
        map.insert("content".to_string(), Value::String("ü".repeat(2001)));

        match Message::check_content_length(&map) {
            Err(Error::Model(ModelError::MessageTooLong(over))) => assert_eq!(over, 1),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn embed_totals_count_every_text_surface() {
        let map = serde_json::from_value::<JsonMap>(json!({
            "embeds": [{
                "title": "t".repeat(2000),
                "description": "d".repeat(2000),
                "fields": [{"name": "n".repeat(1000), "value": "v".repeat(1001)}],
            }],
        }))
        .unwrap();

        match Message::check_embed_length(&map) {
            Err(Error::Model(ModelError::EmbedTooLarge(over))) => assert_eq!(over, 1),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn short_payloads_pass_the_local_checks() {
        let map = serde_json::from_value::<JsonMap>(json!({
            "content": "hello",
            "embeds": [{"title": "hi"}],
        }))
        .unwrap();

        assert!(Message::check_content_length(&map).is_ok());
        assert!(Message::check_embed_length(&map).is_ok());
    }
}
