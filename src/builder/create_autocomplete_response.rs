use std::collections::HashMap;

use crate::internal::prelude::*;

/// A builder for the choice list answering an autocomplete interaction.
///
/// The platform accepts at most 25 choices; anything beyond that is rejected
/// by the API, not trimmed here.
#[derive(Clone, Debug, Default)]
pub struct CreateAutocompleteResponse(pub HashMap<&'static str, Value>);

impl CreateAutocompleteResponse {
    /// For autocomplete responses this sets their autocomplete suggestions.
    ///
    /// See the official docs on [`Application Command Option Choices`] for more information.
    ///
    /// [`Application Command Option Choices`]: https://discord.com/developers/docs/interactions/application-commands#application-command-object-application-command-option-choice-structure
    pub fn set_choices(&mut self, choices: Value) -> &mut Self {
        self.0.insert("choices", choices);
        self
    }

    /// Adds a string autocomplete choice.
    ///
    /// **Note**: There can be no more than 25 choices set. Name must be
    /// between 1 and 100 characters. Value must be up to 100 characters.
    pub fn add_string_choice<D: ToString, E: ToString>(&mut self, name: D, value: E) -> &mut Self {
        let choice = serde_json::json!({
            "name": name.to_string(),
            "value": value.to_string(),
        });
        self.add_choice(choice)
    }

    /// Adds an integer autocomplete choice.
    ///
    /// **Note**: There can be no more than 25 choices set. Name must be
    /// between 1 and 100 characters.
    pub fn add_int_choice<D: ToString>(&mut self, name: D, value: i64) -> &mut Self {
        let choice = serde_json::json!({
            "name": name.to_string(),
            "value": value,
        });
        self.add_choice(choice)
    }

    /// Adds a number autocomplete choice.
    ///
    /// **Note**: There can be no more than 25 choices set. Name must be
    /// between 1 and 100 characters.
    pub fn add_number_choice<D: ToString>(&mut self, name: D, value: f64) -> &mut Self {
        let choice = serde_json::json!({
            "name": name.to_string(),
            "value": value,
        });
        self.add_choice(choice)
    }

    fn add_choice(&mut self, value: Value) -> &mut Self {
        let choices = self.0.entry("choices").or_insert_with(|| Value::Array(vec![]));

        if let Some(choices) = choices.as_array_mut() {
            choices.push(value);
        }

        self
    }
}

#[cfg(test)]
mod tests {
    use super::CreateAutocompleteResponse;

    #[test]
    fn choices_keep_their_value_types() {
        let mut response = CreateAutocompleteResponse::default();
        response
            .add_string_choice("first", "one")
            .add_int_choice("second", 2)
            .add_number_choice("third", 3.5);

        let choices = response.0["choices"].as_array().unwrap();
        assert_eq!(choices.len(), 3);
        assert!(choices[0]["value"].is_string());
        assert!(choices[1]["value"].is_i64());
        assert!(choices[2]["value"].is_f64());
    }
}
