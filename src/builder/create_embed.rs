//! Developer note:
//!
//! This is a set of embed builders for rich embeds.
//!
//! The only builder that should be exposed is [`CreateEmbed`]. The rest of
//! these have no real reason for being exposed, but are for completeness'
//! sake.
//!
//! Documentation for embeds can be found [here].
//!
//! [here]: https://discord.com/developers/docs/resources/channel#embed-object

use std::collections::HashMap;

use crate::internal::prelude::*;
use crate::model::timestamp::Timestamp;
use crate::utils;

/// A builder to create a fake [`Embed`] object, for use with the
/// interaction response and webhook builders.
///
/// [`Embed`]: crate::model::channel::Embed
#[derive(Clone, Debug)]
pub struct CreateEmbed(pub HashMap<&'static str, Value>);

impl CreateEmbed {
    /// Set the author of the embed.
    pub fn author<F>(&mut self, f: F) -> &mut Self
    where
        F: FnOnce(&mut CreateEmbedAuthor) -> &mut CreateEmbedAuthor,
    {
        let mut author = CreateEmbedAuthor::default();
        f(&mut author);

        let map = utils::hashmap_to_json_map(author.0);

        self.0.insert("author", Value::Object(map));
        self
    }

    /// Set the colour of the left-hand side of the embed.
    pub fn colour(&mut self, colour: u32) -> &mut Self {
        self.0.insert("color", Value::from(colour));
        self
    }

    /// Alias of [`Self::colour`].
    #[inline]
    pub fn color(&mut self, colour: u32) -> &mut Self {
        self.colour(colour)
    }

    /// Set the description of the embed.
    ///
    /// **Note**: This can't be longer than 4096 characters.
    pub fn description<D: ToString>(&mut self, description: D) -> &mut Self {
        self.0.insert("description", Value::String(description.to_string()));
        self
    }

    /// Set a field. Note that this will not overwrite other fields, and will
    /// add to them.
    ///
    /// **Note**: Maximum amount of characters you can put is 256 in a field
    /// name and 1024 in a field value.
    pub fn field<T, U>(&mut self, name: T, value: U, inline: bool) -> &mut Self
    where
        T: ToString,
        U: ToString,
    {
        let entry = self.0.entry("fields").or_insert_with(|| Value::Array(vec![]));

        if let Some(fields) = entry.as_array_mut() {
            let mut field = JsonMap::new();
            field.insert("name".to_string(), Value::String(name.to_string()));
            field.insert("value".to_string(), Value::String(value.to_string()));
            field.insert("inline".to_string(), Value::Bool(inline));

            fields.push(Value::Object(field));
        }

        self
    }

    /// Adds multiple fields at once.
    pub fn fields<T, U, It>(&mut self, fields: It) -> &mut Self
    where
        It: IntoIterator<Item = (T, U, bool)>,
        T: ToString,
        U: ToString,
    {
        for (name, value, inline) in fields {
            self.field(name, value, inline);
        }

        self
    }

    /// Set the footer of the embed.
    pub fn footer<F>(&mut self, f: F) -> &mut Self
    where
        F: FnOnce(&mut CreateEmbedFooter) -> &mut CreateEmbedFooter,
    {
        let mut footer = CreateEmbedFooter::default();
        f(&mut footer);

        let map = utils::hashmap_to_json_map(footer.0);

        self.0.insert("footer", Value::Object(map));
        self
    }

    /// Set the image associated with the embed.
    pub fn image<S: ToString>(&mut self, url: S) -> &mut Self {
        let mut image = JsonMap::new();
        image.insert("url".to_string(), Value::String(url.to_string()));

        self.0.insert("image", Value::Object(image));
        self
    }

    /// Set the thumbnail of the embed.
    pub fn thumbnail<S: ToString>(&mut self, url: S) -> &mut Self {
        let mut thumbnail = JsonMap::new();
        thumbnail.insert("url".to_string(), Value::String(url.to_string()));

        self.0.insert("thumbnail", Value::Object(thumbnail));
        self
    }

    /// Set the timestamp displayed in the footer row.
    pub fn timestamp(&mut self, timestamp: Timestamp) -> &mut Self {
        self.0.insert("timestamp", Value::String(timestamp.to_string()));
        self
    }

    /// Set the title of the embed.
    pub fn title<D: ToString>(&mut self, title: D) -> &mut Self {
        self.0.insert("title", Value::String(title.to_string()));
        self
    }

    /// Set the URL the title links to.
    pub fn url<S: ToString>(&mut self, url: S) -> &mut Self {
        self.0.insert("url", Value::String(url.to_string()));
        self
    }
}

impl Default for CreateEmbed {
    /// Creates a builder with default values, setting the `type` to `rich`.
    fn default() -> CreateEmbed {
        let mut map = HashMap::new();
        map.insert("type", Value::String("rich".to_string()));

        CreateEmbed(map)
    }
}

/// A builder to create the author data of an embed. See
/// [`CreateEmbed::author`].
#[derive(Clone, Debug, Default)]
pub struct CreateEmbedAuthor(pub HashMap<&'static str, Value>);

impl CreateEmbedAuthor {
    /// Set the URL of the author's icon.
    pub fn icon_url<S: ToString>(&mut self, icon_url: S) -> &mut Self {
        self.0.insert("icon_url", Value::String(icon_url.to_string()));
        self
    }

    /// Set the author's name.
    pub fn name<S: ToString>(&mut self, name: S) -> &mut Self {
        self.0.insert("name", Value::String(name.to_string()));
        self
    }

    /// Set the URL of the author.
    pub fn url<S: ToString>(&mut self, url: S) -> &mut Self {
        self.0.insert("url", Value::String(url.to_string()));
        self
    }
}

/// A builder to create the footer data of an embed. See
/// [`CreateEmbed::footer`].
#[derive(Clone, Debug, Default)]
pub struct CreateEmbedFooter(pub HashMap<&'static str, Value>);

impl CreateEmbedFooter {
    /// Set the icon URL's value. This only supports HTTP(S).
    pub fn icon_url<S: ToString>(&mut self, icon_url: S) -> &mut Self {
        self.0.insert("icon_url", Value::String(icon_url.to_string()));
        self
    }

    /// Set the footer's text.
    pub fn text<S: ToString>(&mut self, text: S) -> &mut Self {
        self.0.insert("text", Value::String(text.to_string()));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::CreateEmbed;
    use crate::utils::hashmap_to_json_map;

    #[test]
    fn fields_accumulate_in_order() {
        let mut embed = CreateEmbed::default();
        embed.title("stats").field("wins", "3", true).field("losses", "1", true);

        let map = hashmap_to_json_map(embed.0);
        let fields = map["fields"].as_array().unwrap();

        assert_eq!(map["type"], "rich");
        assert_eq!(fields.len(), 2);
        assert_eq!(fields[0]["name"], "wins");
        assert_eq!(fields[1]["inline"], true);
    }
}
