//! The response lifecycle shared by command and component interactions.
//!
//! The platform accepts exactly one callback per interaction token: one of
//! reply, update, or either deferral. Everything after that first callback
//! goes through the interaction's webhook. [`ResponseState`] tracks which
//! side of that line an interaction is on, and [`Respondable`] implements the
//! operations once for every interaction type that can answer.

use async_trait::async_trait;

use crate::builder::{
    CreateInteractionResponseData,
    CreateInteractionResponseFollowup,
    EditInteractionResponse,
};
use crate::http::Http;
use crate::internal::prelude::*;
use crate::model::channel::Message;
use crate::model::error::Error as ModelError;
use crate::model::id::{InteractionId, MessageId};
use crate::model::interactions::InteractionResponseType;
use crate::utils;

/// Which response operations have succeeded for one interaction.
///
/// One instance lives inside each answerable interaction, starts empty, and
/// is never serialized. Flags commit only after the transport call succeeds,
/// so a failed opening leaves the interaction fresh.
#[derive(Clone, Debug, Default)]
pub struct ResponseState {
    /// Whether a deferred acknowledgment has been sent.
    pub(crate) deferred: bool,
    /// Whether a substantive reply, update, or edit has been sent.
    pub(crate) replied: bool,
    /// Whether the response was opened ephemerally. Fixed by the first
    /// reply-path opening; `None` until then.
    pub(crate) ephemeral: Option<bool>,
}

impl ResponseState {
    /// Rejects a second opening operation.
    pub(crate) fn check_opening(&self) -> Result<()> {
        if self.deferred || self.replied {
            return Err(Error::Model(ModelError::AlreadyAcknowledged));
        }

        Ok(())
    }

    /// Rejects operations on the original response before any opening.
    pub(crate) fn check_opened(&self) -> Result<()> {
        if self.deferred || self.replied {
            return Ok(());
        }

        Err(Error::Model(ModelError::NotYetAcknowledged))
    }

    /// Rejects deletion of an ephemerally-opened response.
    pub(crate) fn check_deletable(&self) -> Result<()> {
        if self.ephemeral == Some(true) {
            return Err(Error::Model(ModelError::EphemeralNotDeletable));
        }

        Ok(())
    }

    /// Records a successful opening callback.
    ///
    /// Only the reply-path openings fix the ephemeral flag; `update` and
    /// `defer_update` leave it untouched.
    pub(crate) fn commit_opening(&mut self, kind: InteractionResponseType, ephemeral: bool) {
        match kind {
            InteractionResponseType::DeferredChannelMessageWithSource => {
                self.deferred = true;
                self.ephemeral = Some(ephemeral);
            },
            InteractionResponseType::DeferredUpdateMessage => self.deferred = true,
            InteractionResponseType::UpdateMessage => self.replied = true,
            _ => {
                self.replied = true;
                self.ephemeral = Some(ephemeral);
            },
        }
    }
}

/// The capability to answer an interaction.
///
/// Implemented by [`ApplicationCommandInteraction`] and
/// [`MessageComponentInteraction`]; autocomplete requests answer through
/// their own choice endpoint and pings are acknowledged by the gateway
/// upstream, so neither implements this.
///
/// The four opening operations take `&mut self`: a single logical flow
/// drives one interaction, and the exclusive borrow encodes that. None of
/// the operations retry, log, or otherwise absorb transport failures; an
/// expired interaction token surfaces as the [`Error::Http`] it causes.
///
/// [`ApplicationCommandInteraction`]: super::application_command::ApplicationCommandInteraction
/// [`MessageComponentInteraction`]: super::message_component::MessageComponentInteraction
/// [`Error::Http`]: crate::Error::Http
#[async_trait]
pub trait Respondable {
    /// The Id of the interaction being answered.
    fn interaction_id(&self) -> InteractionId;

    /// The interaction's response token.
    fn interaction_token(&self) -> &SecretString;

    #[doc(hidden)]
    fn response_state(&self) -> &ResponseState;

    #[doc(hidden)]
    fn response_state_mut(&mut self) -> &mut ResponseState;

    /// Responds with a message, opening the lifecycle.
    ///
    /// When `fetch_reply` is set, the created message is requested back and
    /// returned; otherwise the call resolves to `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::AlreadyAcknowledged`] if the lifecycle was
    /// already opened, [`ModelError::MessageTooLong`] or
    /// [`ModelError::EmbedTooLarge`] if the content fails the local length
    /// checks, or an [`Error::Http`] if the API rejects the callback.
    ///
    /// [`Error::Http`]: crate::Error::Http
    async fn reply<'a, F>(
        &mut self,
        http: impl AsRef<Http> + Send + Sync,
        fetch_reply: bool,
        f: F,
    ) -> Result<Option<Message>>
    where
        for<'b> F: FnOnce(
                &'b mut CreateInteractionResponseData<'a>,
            ) -> &'b mut CreateInteractionResponseData<'a>
            + Send,
    {
        self.open(http, InteractionResponseType::ChannelMessageWithSource, fetch_reply, f).await
    }

    /// Acknowledges the interaction, showing a loading state until the
    /// response is edited in.
    ///
    /// The builder is only consulted for the ephemeral flag.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::AlreadyAcknowledged`] if the lifecycle was
    /// already opened, or an [`Error::Http`] if the API rejects the callback.
    ///
    /// [`Error::Http`]: crate::Error::Http
    async fn defer_reply<'a, F>(
        &mut self,
        http: impl AsRef<Http> + Send + Sync,
        fetch_reply: bool,
        f: F,
    ) -> Result<Option<Message>>
    where
        for<'b> F: FnOnce(
                &'b mut CreateInteractionResponseData<'a>,
            ) -> &'b mut CreateInteractionResponseData<'a>
            + Send,
    {
        self.open(http, InteractionResponseType::DeferredChannelMessageWithSource, fetch_reply, f)
            .await
    }

    /// Acknowledges the interaction without altering the originating message;
    /// an update can be edited in later.
    ///
    /// Unlike the reply-path openings this never fixes the ephemeral flag.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::AlreadyAcknowledged`] if the lifecycle was
    /// already opened, or an [`Error::Http`] if the API rejects the callback.
    ///
    /// [`Error::Http`]: crate::Error::Http
    async fn defer_update(
        &mut self,
        http: impl AsRef<Http> + Send + Sync,
        fetch_reply: bool,
    ) -> Result<Option<Message>> {
        self.response_state().check_opening()?;

        let token = self.interaction_token().clone();
        let http = http.as_ref();

        let mut body = JsonMap::new();
        body.insert(
            "type".to_string(),
            Value::from(InteractionResponseType::DeferredUpdateMessage.num()),
        );

        http.create_interaction_response(
            self.interaction_id().0,
            token.expose_secret(),
            &Value::Object(body),
        )
        .await?;

        self.response_state_mut()
            .commit_opening(InteractionResponseType::DeferredUpdateMessage, false);

        if fetch_reply {
            http.get_original_interaction_response(token.expose_secret()).await.map(Some)
        } else {
            Ok(None)
        }
    }

    /// Responds by editing the originating message, opening the lifecycle.
    ///
    /// Like [`defer_update`], this never fixes the ephemeral flag.
    ///
    /// [`defer_update`]: Self::defer_update
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::AlreadyAcknowledged`] if the lifecycle was
    /// already opened, a length-check [`ModelError`], or an [`Error::Http`]
    /// if the API rejects the callback.
    ///
    /// [`ModelError`]: crate::model::ModelError
    /// [`Error::Http`]: crate::Error::Http
    async fn update<'a, F>(
        &mut self,
        http: impl AsRef<Http> + Send + Sync,
        fetch_reply: bool,
        f: F,
    ) -> Result<Option<Message>>
    where
        for<'b> F: FnOnce(
                &'b mut CreateInteractionResponseData<'a>,
            ) -> &'b mut CreateInteractionResponseData<'a>
            + Send,
    {
        self.open(http, InteractionResponseType::UpdateMessage, fetch_reply, f).await
    }

    #[doc(hidden)]
    async fn open<'a, F>(
        &mut self,
        http: impl AsRef<Http> + Send + Sync,
        kind: InteractionResponseType,
        fetch_reply: bool,
        f: F,
    ) -> Result<Option<Message>>
    where
        for<'b> F: FnOnce(
                &'b mut CreateInteractionResponseData<'a>,
            ) -> &'b mut CreateInteractionResponseData<'a>
            + Send,
    {
        self.response_state().check_opening()?;

        let mut data = CreateInteractionResponseData::default();
        f(&mut data);

        let ephemeral = data.requested_ephemeral();
        let files = std::mem::take(&mut data.1);
        let data = utils::hashmap_to_json_map(data.0);

        Message::check_content_length(&data)?;
        Message::check_embed_length(&data)?;

        let mut body = JsonMap::new();
        body.insert("type".to_string(), Value::from(kind.num()));
        body.insert("data".to_string(), Value::Object(data));
        let body = Value::Object(body);

        let token = self.interaction_token().clone();
        let http = http.as_ref();

        if files.is_empty() {
            http.create_interaction_response(
                self.interaction_id().0,
                token.expose_secret(),
                &body,
            )
            .await?;
        } else {
            http.create_interaction_response_with_files(
                self.interaction_id().0,
                token.expose_secret(),
                &body,
                files,
            )
            .await?;
        }

        self.response_state_mut().commit_opening(kind, ephemeral);

        if fetch_reply {
            http.get_original_interaction_response(token.expose_secret()).await.map(Some)
        } else {
            Ok(None)
        }
    }

    /// Edits the original response.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::NotYetAcknowledged`] if the lifecycle has not
    /// been opened, a length-check [`ModelError`], or an [`Error::Http`] if
    /// the edit is rejected.
    ///
    /// [`ModelError`]: crate::model::ModelError
    /// [`Error::Http`]: crate::Error::Http
    async fn edit_reply<F>(
        &mut self,
        http: impl AsRef<Http> + Send + Sync,
        f: F,
    ) -> Result<Message>
    where
        F: FnOnce(&mut EditInteractionResponse) -> &mut EditInteractionResponse + Send,
    {
        self.response_state().check_opened()?;

        let mut edit = EditInteractionResponse::default();
        f(&mut edit);

        let map = utils::hashmap_to_json_map(edit.0);

        Message::check_content_length(&map)?;
        Message::check_embed_length(&map)?;

        let token = self.interaction_token().clone();

        let message = http
            .as_ref()
            .edit_original_interaction_response(token.expose_secret(), &Value::Object(map))
            .await?;

        self.response_state_mut().replied = true;

        Ok(message)
    }

    /// Deletes the original response.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::EphemeralNotDeletable`] if the response was
    /// opened ephemerally, or an [`Error::Http`] if the deletion is
    /// rejected, such as when the response was already deleted.
    ///
    /// [`Error::Http`]: crate::Error::Http
    async fn delete_reply(&self, http: impl AsRef<Http> + Send + Sync) -> Result<()> {
        self.response_state().check_deletable()?;

        http.as_ref()
            .delete_original_interaction_response(self.interaction_token().expose_secret())
            .await
    }

    /// Gets the original response. Never mutates the lifecycle.
    ///
    /// # Errors
    ///
    /// Returns an [`Error::Http`] if there is no original response.
    ///
    /// [`Error::Http`]: crate::Error::Http
    async fn fetch_reply(&self, http: impl AsRef<Http> + Send + Sync) -> Result<Message> {
        http.as_ref()
            .get_original_interaction_response(self.interaction_token().expose_secret())
            .await
    }

    /// Posts a followup message tied to the same interaction token.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::NotYetAcknowledged`] if the lifecycle has not
    /// been opened, a length-check [`ModelError`], or an [`Error::Http`] if
    /// the API rejects the message.
    ///
    /// [`ModelError`]: crate::model::ModelError
    /// [`Error::Http`]: crate::Error::Http
    async fn follow_up<'a, F>(
        &self,
        http: impl AsRef<Http> + Send + Sync,
        f: F,
    ) -> Result<Message>
    where
        for<'b> F: FnOnce(
                &'b mut CreateInteractionResponseFollowup<'a>,
            ) -> &'b mut CreateInteractionResponseFollowup<'a>
            + Send,
    {
        self.response_state().check_opened()?;

        let mut followup = CreateInteractionResponseFollowup::default();
        f(&mut followup);

        let files = std::mem::take(&mut followup.1);
        let map = utils::hashmap_to_json_map(followup.0);

        Message::check_content_length(&map)?;
        Message::check_embed_length(&map)?;

        let token = self.interaction_token().expose_secret();
        let http = http.as_ref();

        if files.is_empty() {
            http.create_followup_message(token, &Value::Object(map)).await
        } else {
            http.create_followup_message_with_files(token, &Value::Object(map), files).await
        }
    }

    /// Edits a previously sent followup message.
    ///
    /// # Errors
    ///
    /// Returns a length-check [`ModelError`], or an [`Error::Http`] if the
    /// edit is rejected.
    ///
    /// [`ModelError`]: crate::model::ModelError
    /// [`Error::Http`]: crate::Error::Http
    async fn edit_followup<'a, F, M>(
        &self,
        http: impl AsRef<Http> + Send + Sync,
        message_id: M,
        f: F,
    ) -> Result<Message>
    where
        M: Into<MessageId> + Send,
        for<'b> F: FnOnce(
                &'b mut CreateInteractionResponseFollowup<'a>,
            ) -> &'b mut CreateInteractionResponseFollowup<'a>
            + Send,
    {
        let mut followup = CreateInteractionResponseFollowup::default();
        f(&mut followup);

        let map = utils::hashmap_to_json_map(followup.0);

        Message::check_content_length(&map)?;
        Message::check_embed_length(&map)?;

        http.as_ref()
            .edit_followup_message(
                self.interaction_token().expose_secret(),
                message_id.into().0,
                &Value::Object(map),
            )
            .await
    }

    /// Deletes a followup message.
    ///
    /// # Errors
    ///
    /// Returns an [`Error::Http`] if the deletion is rejected, such as when
    /// the message was already deleted.
    ///
    /// [`Error::Http`]: crate::Error::Http
    async fn delete_followup<M: Into<MessageId> + Send>(
        &self,
        http: impl AsRef<Http> + Send + Sync,
        message_id: M,
    ) -> Result<()> {
        http.as_ref()
            .delete_followup_message(self.interaction_token().expose_secret(), message_id.into().0)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::ResponseState;
    use crate::internal::prelude::*;
    use crate::model::error::Error as ModelError;
    use crate::model::interactions::InteractionResponseType;

    fn fresh() -> ResponseState {
        ResponseState::default()
    }

    #[test]
    fn fresh_state_accepts_one_opening() {
        let state = fresh();
        assert!(state.check_opening().is_ok());
        assert!(matches!(
            state.check_opened(),
            Err(Error::Model(ModelError::NotYetAcknowledged))
        ));
    }

    #[test]
    fn deferred_state_rejects_every_further_opening() {
        let mut state = fresh();
        state.deferred = true;

        assert!(matches!(
            state.check_opening(),
            Err(Error::Model(ModelError::AlreadyAcknowledged))
        ));
        assert!(state.check_opened().is_ok());
    }

    #[test]
    fn replied_state_rejects_every_further_opening() {
        let mut state = fresh();
        state.replied = true;
        state.ephemeral = Some(false);

        assert!(matches!(
            state.check_opening(),
            Err(Error::Model(ModelError::AlreadyAcknowledged))
        ));
        assert!(state.check_opened().is_ok());
        assert!(state.check_deletable().is_ok());
    }

    #[test]
    fn ephemeral_replies_are_not_deletable() {
        let mut state = fresh();
        state.replied = true;
        state.ephemeral = Some(true);

        assert!(matches!(
            state.check_deletable(),
            Err(Error::Model(ModelError::EphemeralNotDeletable))
        ));
    }

    #[test]
    fn undetermined_ephemeral_state_allows_deletion() {
        // defer_update never fixes the flag; deletion stays transport-gated.
        let mut state = fresh();
        state.deferred = true;
        assert!(state.check_deletable().is_ok());
    }

    #[test]
    fn reply_openings_fix_the_ephemeral_flag() {
        let mut state = fresh();
        state.commit_opening(InteractionResponseType::ChannelMessageWithSource, true);

        assert!(state.replied);
        assert_eq!(state.ephemeral, Some(true));

        let mut state = fresh();
        state.commit_opening(InteractionResponseType::DeferredChannelMessageWithSource, false);

        assert!(state.deferred);
        assert_eq!(state.ephemeral, Some(false));
    }

    #[test]
    fn update_openings_leave_the_ephemeral_flag_untouched() {
        let mut state = fresh();
        state.commit_opening(InteractionResponseType::UpdateMessage, true);

        assert!(state.replied);
        assert_eq!(state.ephemeral, None);
        assert!(state.check_deletable().is_ok());

        let mut state = fresh();
        state.commit_opening(InteractionResponseType::DeferredUpdateMessage, true);

        assert!(state.deferred);
        assert_eq!(state.ephemeral, None);
    }
}
