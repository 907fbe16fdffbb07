use std::collections::HashMap;

use super::CreateEmbed;
use crate::http::AttachmentType;
use crate::internal::prelude::*;
use crate::model::interactions::InteractionResponseFlags;
use crate::utils;

/// A builder for a followup message, sent through the interaction's webhook
/// after the lifecycle has been opened. The same shape edits an existing
/// followup.
#[derive(Debug, Default)]
pub struct CreateInteractionResponseFollowup<'a>(
    pub HashMap<&'static str, Value>,
    pub Vec<AttachmentType<'a>>,
);

impl<'a> CreateInteractionResponseFollowup<'a> {
    /// Set whether the message is text-to-speech.
    ///
    /// Defaults to `false`.
    pub fn tts(&mut self, tts: bool) -> &mut Self {
        self.0.insert("tts", Value::from(tts));
        self
    }

    /// Set the content of the message.
    ///
    /// **Note**: Message contents must be under 2000 unicode code points.
    #[inline]
    pub fn content<D: ToString>(&mut self, content: D) -> &mut Self {
        self._content(content.to_string())
    }

    fn _content(&mut self, content: String) -> &mut Self {
        self.0.insert("content", Value::String(content));
        self
    }

    /// Override the default name of the webhook for this message.
    pub fn username<D: ToString>(&mut self, username: D) -> &mut Self {
        self.0.insert("username", Value::String(username.to_string()));
        self
    }

    /// Override the default avatar of the webhook for this message.
    pub fn avatar_url<D: ToString>(&mut self, avatar_url: D) -> &mut Self {
        self.0.insert("avatar_url", Value::String(avatar_url.to_string()));
        self
    }

    /// Create an embed for the message, appending it to the embed list.
    pub fn embed<F>(&mut self, f: F) -> &mut Self
    where
        F: FnOnce(&mut CreateEmbed) -> &mut CreateEmbed,
    {
        let mut embed = CreateEmbed::default();
        f(&mut embed);
        self.add_embed(embed)
    }

    /// Appends an embed to the message.
    pub fn add_embed(&mut self, embed: CreateEmbed) -> &mut Self {
        let map = utils::hashmap_to_json_map(embed.0);
        let embed = Value::Object(map);

        let embeds = self.0.entry("embeds").or_insert_with(|| Value::Array(vec![]));

        if let Some(embeds) = embeds.as_array_mut() {
            embeds.push(embed);
        }

        self
    }

    /// Replaces the message's embed list with the given embeds.
    pub fn set_embeds(&mut self, embeds: impl IntoIterator<Item = CreateEmbed>) -> &mut Self {
        let embeds = embeds
            .into_iter()
            .map(|embed| Value::Object(utils::hashmap_to_json_map(embed.0)))
            .collect::<Vec<Value>>();

        self.0.insert("embeds", Value::Array(embeds));
        self
    }

    /// Sets the flags for the message.
    pub fn flags(&mut self, flags: InteractionResponseFlags) -> &mut Self {
        self.0.insert("flags", Value::from(flags.bits()));
        self
    }

    /// Adds or removes the ephemeral flag, leaving the other flags as they
    /// are.
    ///
    /// Unlike an ephemeral opening, an ephemeral followup affects only
    /// itself.
    pub fn ephemeral(&mut self, ephemeral: bool) -> &mut Self {
        let mut flags = InteractionResponseFlags::from_bits_truncate(
            self.0.get("flags").and_then(Value::as_u64).unwrap_or(0),
        );

        flags.set(InteractionResponseFlags::EPHEMERAL, ephemeral);

        self.flags(flags)
    }

    /// Add a file to the message.
    pub fn add_file<T: Into<AttachmentType<'a>>>(&mut self, file: T) -> &mut Self {
        self.1.push(file.into());
        self
    }

    /// Add multiple files to the message.
    pub fn add_files<T, It>(&mut self, files: It) -> &mut Self
    where
        T: Into<AttachmentType<'a>>,
        It: IntoIterator<Item = T>,
    {
        self.1.extend(files.into_iter().map(Into::into));
        self
    }

    /// Sets a list of files to include in the message, replacing any
    /// previously added.
    pub fn files<T, It>(&mut self, files: It) -> &mut Self
    where
        T: Into<AttachmentType<'a>>,
        It: IntoIterator<Item = T>,
    {
        self.1 = files.into_iter().map(Into::into).collect();
        self
    }
}
