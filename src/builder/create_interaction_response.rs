use std::collections::HashMap;

use super::CreateEmbed;
use crate::http::AttachmentType;
use crate::internal::prelude::*;
use crate::model::interactions::{InteractionResponseFlags, InteractionResponseType};
use crate::utils;

/// A builder for a complete interaction callback, for callers driving the
/// callback endpoint by hand. The [`Respondable`] methods build this shape
/// themselves.
///
/// [`Respondable`]: crate::model::interactions::Respondable
#[derive(Clone, Debug)]
pub struct CreateInteractionResponse<'a>(
    pub HashMap<&'static str, Value>,
    pub Vec<AttachmentType<'a>>,
);

impl<'a> CreateInteractionResponse<'a> {
    /// Sets the [`InteractionResponseType`] of the callback.
    ///
    /// Defaults to [`ChannelMessageWithSource`].
    ///
    /// [`ChannelMessageWithSource`]: InteractionResponseType::ChannelMessageWithSource
    pub fn kind(&mut self, kind: InteractionResponseType) -> &mut Self {
        self.0.insert("type", Value::from(kind.num()));
        self
    }

    /// Sets the response data for the callback.
    pub fn interaction_response_data<F>(&mut self, f: F) -> &mut Self
    where
        for<'b> F: FnOnce(
            &'b mut CreateInteractionResponseData<'a>,
        ) -> &'b mut CreateInteractionResponseData<'a>,
    {
        let mut data = CreateInteractionResponseData::default();
        f(&mut data);
        self.1 = std::mem::take(&mut data.1);

        let map = utils::hashmap_to_json_map(data.0);

        self.0.insert("data", Value::Object(map));
        self
    }
}

impl<'a> Default for CreateInteractionResponse<'a> {
    fn default() -> CreateInteractionResponse<'a> {
        let mut map = HashMap::new();
        map.insert("type", Value::from(InteractionResponseType::ChannelMessageWithSource.num()));

        CreateInteractionResponse(map, Vec::new())
    }
}

/// A builder for the message half of an interaction callback.
#[derive(Debug, Default)]
pub struct CreateInteractionResponseData<'a>(
    pub HashMap<&'static str, Value>,
    pub Vec<AttachmentType<'a>>,
);

impl<'a> CreateInteractionResponseData<'a> {
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
    /// An ephemeral opening fixes the response lifecycle: the original
    /// response of an ephemeral reply can never be deleted.
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

    pub(crate) fn requested_ephemeral(&self) -> bool {
        self.0
            .get("flags")
            .and_then(Value::as_u64)
            .map_or(false, |bits| {
                InteractionResponseFlags::from_bits_truncate(bits)
                    .contains(InteractionResponseFlags::EPHEMERAL)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::CreateInteractionResponseData;
    use crate::model::interactions::InteractionResponseFlags;

    #[test]
    fn ephemeral_toggles_only_its_own_bit() {
        let mut data = CreateInteractionResponseData::default();
        data.flags(InteractionResponseFlags::from_bits_truncate(1 << 2)).ephemeral(true);

        assert!(data.requested_ephemeral());
        assert_eq!(data.0["flags"].as_u64(), Some((1 << 2) | (1 << 6)));

        data.ephemeral(false);
        assert!(!data.requested_ephemeral());
        assert_eq!(data.0["flags"].as_u64(), Some(1 << 2));
    }

    #[test]
    fn embed_appends_and_set_embeds_replaces() {
        let mut data = CreateInteractionResponseData::default();
        data.embed(|e| e.title("one")).embed(|e| e.title("two"));

        assert_eq!(data.0["embeds"].as_array().unwrap().len(), 2);

        let mut replacement = crate::builder::CreateEmbed::default();
        replacement.title("three");
        data.set_embeds(vec![replacement]);

        let embeds = data.0["embeds"].as_array().unwrap();
        assert_eq!(embeds.len(), 1);
        assert_eq!(embeds[0]["title"], "three");
    }
}
