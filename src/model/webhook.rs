//! Webhook model and implementations.

use serde::{Deserialize, Serialize};

use crate::builder::{EditWebhookMessage, ExecuteWebhook};
use crate::http::Http;
use crate::internal::prelude::*;
use crate::model::channel::Message;
use crate::model::error::Error as ModelError;
use crate::model::id::{ApplicationId, ChannelId, GuildId, MessageId, WebhookId};
use crate::model::user::User;
use crate::utils;

/// A representation of a type of webhook.
#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq, PartialOrd, Ord)]
#[non_exhaustive]
#[repr(u8)]
pub enum WebhookType {
    /// An indicator that the webhook can post messages to channels with a
    /// token.
    Incoming = 1,
    /// An indicator that the webhook is managed by Discord for posting new
    /// messages to channels that another channel is following.
    ChannelFollower = 2,
    /// An indicator that the webhook is used with interactions.
    Application = 3,
    /// An indicator that the webhook carried a type code added after this
    /// library version.
    Unknown = !0,
}

enum_number!(WebhookType {
    Incoming,
    ChannelFollower,
    Application
});

/// A representation of a webhook, which is a low-effort way to post messages
/// to channels. They do not necessarily require a bot user or authentication
/// to use.
///
/// The methods on this struct require the webhook to carry its own
/// [`token`]; a webhook acquired without one can still be driven through the
/// [`Http`] endpoints directly.
///
/// [`token`]: Self::token
#[derive(Clone, Debug, Deserialize, Serialize)]
#[non_exhaustive]
pub struct Webhook {
    /// The unique Id.
    ///
    /// Can be used to calculate the creation date of the webhook.
    pub id: WebhookId,
    /// The type of the webhook.
    #[serde(rename = "type")]
    pub kind: WebhookType,
    /// The Id of the application that owns the webhook, if one does.
    pub application_id: Option<ApplicationId>,
    /// The Id of the channel that owns the webhook.
    ///
    /// Not present for application-owned webhooks.
    pub channel_id: Option<ChannelId>,
    /// The Id of the guild that owns the webhook.
    pub guild_id: Option<GuildId>,
    /// The default name of the webhook.
    ///
    /// This can be temporarily overridden via [`ExecuteWebhook::username`].
    pub name: Option<String>,
    /// The default avatar hash of the webhook.
    ///
    /// This can be temporarily overridden via [`ExecuteWebhook::avatar_url`].
    pub avatar: Option<String>,
    /// The webhook's secure token, present for incoming webhooks and for
    /// webhooks requested by token.
    pub token: Option<SecretString>,
    /// The user that created the webhook.
    ///
    /// **Note**: This is not received when requesting the webhook by its
    /// token.
    pub user: Option<User>,
}

impl Webhook {
    /// Requests a webhook by its Id and token, returning one that can be used
    /// without further authentication.
    ///
    /// # Errors
    ///
    /// Returns an [`Error::Http`] if the id-token pair does not name a
    /// webhook.
    ///
    /// [`Error::Http`]: crate::Error::Http
    pub async fn from_id_with_token(
        http: impl AsRef<Http>,
        id: impl Into<WebhookId>,
        token: &str,
    ) -> Result<Self> {
        http.as_ref().get_webhook_with_token(id.into().0, token).await
    }

    /// Executes the webhook, posting a message through it.
    ///
    /// When `wait` is set, the created [`Message`] is requested back and
    /// returned; otherwise the call resolves to `Ok(None)` as soon as the
    /// platform accepts it.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::NoTokenSet`] if the webhook carries no token,
    /// or an [`Error::Http`] if the execution fails.
    ///
    /// [`Error::Http`]: crate::Error::Http
    pub async fn execute<'a, F>(
        &self,
        http: impl AsRef<Http>,
        wait: bool,
        f: F,
    ) -> Result<Option<Message>>
    where
        for<'b> F: FnOnce(&'b mut ExecuteWebhook<'a>) -> &'b mut ExecuteWebhook<'a>,
    {
        let token = self.token.as_ref().ok_or(Error::Model(ModelError::NoTokenSet))?;

        let mut execute_webhook = ExecuteWebhook::default();
        f(&mut execute_webhook);

        let files = std::mem::take(&mut execute_webhook.1);
        let map = utils::hashmap_to_json_map(execute_webhook.0);
        let map = Value::Object(map);

        let http = http.as_ref();

        if files.is_empty() {
            http.execute_webhook(self.id.0, token.expose_secret(), wait, &map).await
        } else {
            http.execute_webhook_with_files(self.id.0, token.expose_secret(), wait, &map, files)
                .await
        }
    }

    /// Gets a previously sent message from the webhook.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::NoTokenSet`] if the webhook carries no token,
    /// or an [`Error::Http`] if the message no longer exists.
    ///
    /// [`Error::Http`]: crate::Error::Http
    pub async fn get_message(
        &self,
        http: impl AsRef<Http>,
        message_id: MessageId,
    ) -> Result<Message> {
        let token = self.token.as_ref().ok_or(Error::Model(ModelError::NoTokenSet))?;

        http.as_ref().get_webhook_message(self.id.0, token.expose_secret(), message_id.0).await
    }

    /// Edits a webhook-sent message with the fields set via the given
    /// closure.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::NoTokenSet`] if the webhook carries no token,
    /// or an [`Error::Http`] if the edit is rejected.
    ///
    /// [`Error::Http`]: crate::Error::Http
    pub async fn edit_message<F>(
        &self,
        http: impl AsRef<Http>,
        message_id: MessageId,
        f: F,
    ) -> Result<Message>
    where
        F: FnOnce(&mut EditWebhookMessage) -> &mut EditWebhookMessage,
    {
        let token = self.token.as_ref().ok_or(Error::Model(ModelError::NoTokenSet))?;

        let mut edit_webhook_message = EditWebhookMessage::default();
        f(&mut edit_webhook_message);

        let map = utils::hashmap_to_json_map(edit_webhook_message.0);

        http.as_ref()
            .edit_webhook_message(
                self.id.0,
                token.expose_secret(),
                message_id.0,
                &Value::Object(map),
            )
            .await
    }

    /// Deletes a webhook-sent message.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::NoTokenSet`] if the webhook carries no token,
    /// or an [`Error::Http`] if the deletion is rejected.
    ///
    /// [`Error::Http`]: crate::Error::Http
    pub async fn delete_message(
        &self,
        http: impl AsRef<Http>,
        message_id: MessageId,
    ) -> Result<()> {
        let token = self.token.as_ref().ok_or(Error::Model(ModelError::NoTokenSet))?;

        http.as_ref().delete_webhook_message(self.id.0, token.expose_secret(), message_id.0).await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{Webhook, WebhookType};

    #[test]
    fn token_is_redacted_in_debug_output() {
        let webhook: Webhook = serde_json::from_value(json!({
            "id": "223704706495545344",
            "type": 1,
            "channel_id": "199737254929760256",
            "name": "test webhook",
            "avatar": null,
            "token": "3d89bb7572e0fb30d8128367b3b1b44fecd1726de135cbe28a41f8b2f777c372ba2939e72279b94526ff5d1bd4358d65cf11",
        }))
        .unwrap();

        assert_eq!(webhook.kind, WebhookType::Incoming);
        let dump = format!("{:?}", webhook);
        assert!(dump.contains("<secret>"));
        assert!(!dump.contains("3d89bb7572e0fb30d8128367b3b1b44fecd1726de135cbe28a41f8b2f777c372"));
    }

    #[test]
    fn application_webhooks_have_no_channel() {
        let webhook: Webhook = serde_json::from_value(json!({
            "id": "658822586720976555",
            "type": 3,
            "application_id": "658822586720976555",
            "name": "Clyde",
            "avatar": null,
        }))
        .unwrap();

        assert_eq!(webhook.kind, WebhookType::Application);
        assert!(webhook.channel_id.is_none());
        assert!(webhook.token.is_none());
    }
}
