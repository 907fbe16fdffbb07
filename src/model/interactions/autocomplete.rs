//! Autocomplete interactions, sent while the user is still typing a slash
//! command option.

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Number;

use super::application_command::CommandData;
use super::{InteractionResponseType, InteractionType};
use crate::builder::CreateAutocompleteResponse;
use crate::http::Http;
use crate::internal::prelude::*;
use crate::model::guild::Member;
use crate::model::id::{ApplicationId, ChannelId, GuildId, InteractionId};
use crate::model::user::User;
use crate::utils;

/// An interaction sent while the user types an option with autocompletion
/// enabled.
///
/// This is outside the response lifecycle: the only valid answer is a set of
/// suggestions, and the platform sends a fresh interaction per keystroke, so
/// nothing here tracks acknowledgment.
#[derive(Clone, Debug, Serialize)]
#[non_exhaustive]
pub struct AutocompleteInteraction {
    /// Id of the interaction.
    pub id: InteractionId,
    /// Id of the application this interaction is for.
    pub application_id: ApplicationId,
    /// The type of interaction.
    #[serde(rename = "type")]
    pub kind: InteractionType,
    /// The command data payload, with [`focused`] set on the option being
    /// typed.
    ///
    /// [`focused`]: super::application_command::CommandDataOption::focused
    pub data: CommandData,
    /// The guild Id this interaction was sent from, if there is one.
    pub guild_id: Option<GuildId>,
    /// The channel Id this interaction was sent from, if there is one.
    pub channel_id: Option<ChannelId>,
    /// The membership record of the invoking user, if invoked in a guild.
    pub member: Option<Member>,
    /// The invoking user.
    pub user: User,
    /// A token authorizing responses to the interaction.
    pub token: SecretString,
    /// Always `1`.
    pub version: u8,
}

impl AutocompleteInteraction {
    /// Responds with up to 25 autocomplete choices.
    ///
    /// # Errors
    ///
    /// Returns an [`Error::Http`] if the API rejects the response, such as
    /// when the interaction already timed out.
    ///
    /// [`Error::Http`]: crate::Error::Http
    pub async fn create_autocomplete_response<F>(
        &self,
        http: impl AsRef<Http>,
        f: F,
    ) -> Result<()>
    where
        F: FnOnce(&mut CreateAutocompleteResponse) -> &mut CreateAutocompleteResponse,
    {
        let mut response = CreateAutocompleteResponse::default();
        f(&mut response);

        let data = utils::hashmap_to_json_map(response.0);

        let mut map = JsonMap::new();
        map.insert("type".to_string(), Value::from(InteractionResponseType::Autocomplete.num()));
        map.insert("data".to_string(), Value::Object(data));

        http.as_ref()
            .create_interaction_response(
                self.id.0,
                self.token.expose_secret(),
                &Value::Object(map),
            )
            .await
    }
}

impl<'de> Deserialize<'de> for AutocompleteInteraction {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> StdResult<Self, D::Error> {
        let mut map = JsonMap::deserialize(deserializer)?;

        let id = map.get("guild_id").and_then(|x| x.as_str()).and_then(|x| x.parse::<u64>().ok());

        if let Some(guild_id) = id {
            if let Some(member) = map.get_mut("member").and_then(|x| x.as_object_mut()) {
                member.insert("guild_id".to_string(), Value::Number(Number::from(guild_id)));
            }
        }

        let id = map
            .remove("id")
            .ok_or_else(|| DeError::custom("expected id"))
            .and_then(InteractionId::deserialize)
            .map_err(DeError::custom)?;

        let application_id = map
            .remove("application_id")
            .ok_or_else(|| DeError::custom("expected application id"))
            .and_then(ApplicationId::deserialize)
            .map_err(DeError::custom)?;

        let kind = map
            .remove("type")
            .ok_or_else(|| DeError::custom("expected type"))
            .and_then(InteractionType::deserialize)
            .map_err(DeError::custom)?;

        let data = map
            .remove("data")
            .ok_or_else(|| DeError::custom("expected data"))
            .and_then(CommandData::deserialize)
            .map_err(DeError::custom)?;

        let guild_id = match map.contains_key("guild_id") {
            true => Some(
                map.remove("guild_id")
                    .ok_or_else(|| DeError::custom("expected guild_id"))
                    .and_then(GuildId::deserialize)
                    .map_err(DeError::custom)?,
            ),
            false => None,
        };

        let channel_id = match map.contains_key("channel_id") {
            true => Some(
                map.remove("channel_id")
                    .ok_or_else(|| DeError::custom("expected channel_id"))
                    .and_then(ChannelId::deserialize)
                    .map_err(DeError::custom)?,
            ),
            false => None,
        };

        let member = match map.contains_key("member") {
            true => Some(
                map.remove("member")
                    .ok_or_else(|| DeError::custom("expected member"))
                    .and_then(Member::deserialize)
                    .map_err(DeError::custom)?,
            ),
            false => None,
        };

        let user = match map.contains_key("user") {
            true => map
                .remove("user")
                .ok_or_else(|| DeError::custom("expected user"))
                .and_then(User::deserialize)
                .map_err(DeError::custom)?,
            false => member
                .as_ref()
                .map(|member| member.user.clone())
                .ok_or_else(|| DeError::custom("expected user or member"))?,
        };

        let token = map
            .remove("token")
            .ok_or_else(|| DeError::custom("expected token"))
            .and_then(SecretString::deserialize)
            .map_err(DeError::custom)?;

        let version = map
            .remove("version")
            .ok_or_else(|| DeError::custom("expected version"))
            .and_then(u8::deserialize)
            .map_err(DeError::custom)?;

        Ok(Self {
            id,
            application_id,
            kind,
            data,
            guild_id,
            channel_id,
            member,
            user,
            token,
            version,
        })
    }
}
