//! The client glues the crate together for the common case.
//!
//! The owning application keeps its own gateway connection; a [`Client`] here
//! only receives the dispatches that connection forwards through
//! [`Client::process`], decodes them, applies cache side effects, and hands
//! the result to the registered [`EventHandler`].

mod context;
mod dispatch;
mod error;
mod event_handler;

pub use self::context::Context;
pub use self::error::Error as ClientError;
pub use self::event_handler::EventHandler;

use std::sync::Arc;

use tokio::sync::RwLock;
use typemap_rev::{TypeMap, TypeMapKey};

use crate::cache::Cache;
use crate::constants;
use crate::http::Http;
use crate::internal::prelude::*;
use crate::model::event::{deserialize_event_with_type, Event, EventType};
use crate::model::id::ApplicationId;
use crate::utils;

/// A builder implementing a useful interface for setting up a [`Client`].
///
/// The only required pieces are the token passed to [`Client::builder`], an
/// [application Id], and an [event handler]; everything is checked when
/// [`Self::build`] runs, so a misconfigured client never exists.
///
/// [application Id]: Self::application_id
/// [event handler]: Self::event_handler
pub struct ClientBuilder {
    token: String,
    application_id: Option<ApplicationId>,
    api_version: u8,
    data: TypeMap,
    event_handler: Option<Arc<dyn EventHandler>>,
}

impl ClientBuilder {
    fn _new(token: impl AsRef<str>) -> Self {
        Self {
            token: token.as_ref().trim().to_string(),
            application_id: None,
            api_version: constants::DEFAULT_API_VERSION,
            data: TypeMap::new(),
            event_handler: None,
        }
    }

    /// Construct a new builder to call methods on for the client
    /// construction.
    ///
    /// The `token` will automatically be prefixed "Bot " if not already.
    #[must_use]
    pub fn new(token: impl AsRef<str>) -> Self {
        Self::_new(token)
    }

    /// Sets the application Id interaction responses are issued for.
    ///
    /// This is required; the followup and original-response endpoints are
    /// keyed by it.
    #[must_use]
    pub fn application_id(mut self, application_id: ApplicationId) -> Self {
        self.application_id = Some(application_id);

        self
    }

    /// Sets the API version requests are issued against.
    ///
    /// Defaults to [`constants::DEFAULT_API_VERSION`]. Versions outside
    /// [`constants::SUPPORTED_API_VERSIONS`] are rejected by
    /// [`Self::build`].
    #[must_use]
    pub fn api_version(mut self, version: u8) -> Self {
        self.api_version = version;

        self
    }

    /// Sets the entire [`TypeMap`] that will be available in [`Context`]s.
    ///
    /// A [`TypeMap`] must not be constructed manually:
    /// [`Self::type_map_insert`] can be used to insert one type at a time.
    #[must_use]
    pub fn type_map(mut self, type_map: TypeMap) -> Self {
        self.data = type_map;

        self
    }

    /// Insert a single `value` into the internal [`TypeMap`] that will be
    /// available in [`Context::data`].
    ///
    /// This method can be called multiple times in order to populate the
    /// [`TypeMap`] with `value`s.
    #[must_use]
    pub fn type_map_insert<T: TypeMapKey>(mut self, value: T::Value) -> Self {
        self.data.insert::<T>(value);

        self
    }

    /// Sets the handler for managing discord events. How this works is that
    /// the events are dispatched to the registered handler's methods.
    #[must_use]
    pub fn event_handler<H: EventHandler + 'static>(mut self, event_handler: H) -> Self {
        self.event_handler = Some(Arc::new(event_handler));

        self
    }

    /// Checks the configuration and constructs the [`Client`].
    ///
    /// # Errors
    ///
    /// Returns an [`Error::Client`] wrapping the first [`ClientError`] the
    /// configuration hits: a malformed token, a missing application Id, an
    /// API version without interaction support, or a missing event handler.
    ///
    /// [`Error::Client`]: crate::Error::Client
    pub fn build(self) -> Result<Client> {
        utils::validate_token(&self.token)?;

        let application_id =
            self.application_id.ok_or(ClientError::ApplicationIdMissing)?;

        if !constants::SUPPORTED_API_VERSIONS.contains(&self.api_version) {
            return Err(ClientError::UnsupportedApiVersion(self.api_version).into());
        }

        let event_handler = self.event_handler.ok_or(ClientError::EventHandlerMissing)?;

        Ok(Client {
            data: Arc::new(RwLock::new(self.data)),
            cache: Arc::new(Cache::new()),
            http: Arc::new(Http::new(&self.token, self.api_version, application_id)),
            event_handler,
        })
    }
}

/// The entry point for forwarded gateway dispatches.
///
/// The client never connects anywhere on its own. The owning application
/// feeds every dispatch it wants handled into [`Self::process`]; the client
/// decodes, updates the [`Cache`], and calls the registered [`EventHandler`].
#[non_exhaustive]
pub struct Client {
    /// A TypeMap which requires types to be Send + Sync. This is a map that
    /// can be safely shared across contexts.
    ///
    /// The purpose of the data field is to be accessible and persistent
    /// across contexts; that is, data can be modified by one context, and
    /// will persist through the future and be accessible through other
    /// contexts.
    pub data: Arc<RwLock<TypeMap>>,
    /// The cache the client fills from interaction payloads, and which the
    /// owning application fills with its own guild state.
    pub cache: Arc<Cache>,
    /// The HTTP client bound to the configured token, API version, and
    /// application Id.
    pub http: Arc<Http>,
    event_handler: Arc<dyn EventHandler>,
}

impl Client {
    /// Construct a new builder to call methods on for the client
    /// construction.
    ///
    /// The `token` will automatically be prefixed "Bot " if not already.
    #[must_use]
    pub fn builder(token: impl AsRef<str>) -> ClientBuilder {
        ClientBuilder::new(token)
    }

    /// Decodes one forwarded gateway dispatch and hands it to the registered
    /// [`EventHandler`].
    ///
    /// `kind` is the dispatch name as received, e.g. `"INTERACTION_CREATE"`.
    /// Unmodeled dispatch names are not an error; they reach the handler's
    /// [`unknown`] method untouched.
    ///
    /// Handler failures are the handler's own business; this only fails when
    /// the payload cannot be decoded.
    ///
    /// # Errors
    ///
    /// Returns an [`Error::Json`] if the payload does not match the shape its
    /// dispatch name requires, which includes interaction payloads with an
    /// unrecognized `type` code.
    ///
    /// [`unknown`]: EventHandler::unknown
    /// [`Error::Json`]: crate::Error::Json
    pub async fn process(&self, kind: &str, payload: Value) -> Result<()> {
        let mut event = deserialize_event_with_type(EventType::from(kind), payload)?;

        if let Event::InteractionCreate(ref mut event) = event {
            self.cache.update(event);
        }

        let context =
            Context::new(Arc::clone(&self.data), Arc::clone(&self.http), Arc::clone(&self.cache));

        dispatch::dispatch(event, context, &self.event_handler).await;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{Client, ClientError};
    use crate::internal::prelude::*;
    use crate::model::id::ApplicationId;
    use crate::model::interactions::Interaction;

    struct Handler;

    #[crate::async_trait]
    impl super::EventHandler for Handler {
        async fn interaction_create(&self, _ctx: super::Context, _interaction: Interaction) {}
    }

    const TOKEN: &str = "MTAwMDAwMDAwMDAwMDAwMDAw.GfGfGf.fGfGfGfGfGfGfGfGfGfGfGfGfGfGfGfGfGfG";

    #[test]
    fn build_requires_an_application_id() {
        let result = Client::builder(TOKEN).event_handler(Handler).build();

        assert!(matches!(
            result,
            Err(Error::Client(ClientError::ApplicationIdMissing))
        ));
    }

    #[test]
    fn build_rejects_pre_interaction_api_versions() {
        let result = Client::builder(TOKEN)
            .application_id(ApplicationId(1))
            .event_handler(Handler)
            .api_version(6)
            .build();

        assert!(matches!(
            result,
            Err(Error::Client(ClientError::UnsupportedApiVersion(6)))
        ));
    }

    #[test]
    fn build_rejects_malformed_tokens() {
        let result = Client::builder("not a token")
            .application_id(ApplicationId(1))
            .event_handler(Handler)
            .build();

        assert!(matches!(result, Err(Error::Client(ClientError::InvalidToken))));
    }

    #[test]
    fn build_requires_an_event_handler() {
        let result = Client::builder(TOKEN).application_id(ApplicationId(1)).build();

        assert!(matches!(
            result,
            Err(Error::Client(ClientError::EventHandlerMissing))
        ));
    }
}
