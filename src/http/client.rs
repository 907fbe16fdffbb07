use reqwest::{Client, ClientBuilder, Response as ReqwestResponse, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use super::multipart::Multipart;
use super::request::Request;
use super::routing::RouteInfo;
use super::{AttachmentType, ErrorResponse, HttpError};
use crate::constants;
use crate::internal::prelude::*;
use crate::model::channel::Message;
use crate::model::id::ApplicationId;
use crate::model::webhook::Webhook;

/// A low-level client for Discord's interaction and webhook endpoints.
///
/// Every method issues its request exactly once. Rate limit headers are
/// neither tracked nor honored, and unsuccessful responses come back as
/// [`HttpError::UnsuccessfulRequest`] untouched.
#[derive(Debug)]
pub struct Http {
    pub(crate) client: Client,
    /// The application Id the interaction webhook endpoints are keyed by.
    pub application_id: ApplicationId,
    token: SecretString,
    base_url: String,
}

impl Http {
    /// Builds a client for the given bot token, API version, and application
    /// Id.
    ///
    /// The `Bot ` authorization prefix is added when missing. The version is
    /// taken as given here; [`ClientBuilder::build`] is where unsupported
    /// versions are rejected.
    ///
    /// [`ClientBuilder::build`]: crate::client::ClientBuilder::build
    #[must_use]
    pub fn new(token: impl AsRef<str>, api_version: u8, application_id: ApplicationId) -> Self {
        let builder = configure_client_backend(Client::builder());
        let client = builder.build().expect("Cannot build reqwest::Client");

        let token = token.as_ref().trim();
        let token = if token.starts_with("Bot ") {
            token.to_string()
        } else {
            format!("Bot {}", token)
        };

        Self {
            client,
            application_id,
            token: SecretString::new(token),
            base_url: constants::api_base(api_version),
        }
    }

    /// Answers an interaction with the given response payload.
    ///
    /// This is the first-callback endpoint: it accepts replies, updates, both
    /// deferrals, and autocomplete suggestions, and the API accepts exactly
    /// one call per interaction.
    ///
    /// # Errors
    ///
    /// Returns an [`Error::Http`] if the callback is rejected.
    ///
    /// [`Error::Http`]: crate::Error::Http
    pub async fn create_interaction_response(
        &self,
        interaction_id: u64,
        token: &str,
        map: &Value,
    ) -> Result<()> {
        self.wind(204, Request {
            body: Some(serde_json::to_vec(map)?),
            multipart: None,
            headers: None,
            route: RouteInfo::CreateInteractionResponse {
                interaction_id,
                token,
            },
        })
        .await
    }

    /// Answers an interaction with a response payload plus file uploads.
    ///
    /// # Errors
    ///
    /// Returns an [`Error::Http`] if the callback is rejected, or an
    /// [`Error::Io`] if a file cannot be read.
    ///
    /// [`Error::Http`]: crate::Error::Http
    /// [`Error::Io`]: crate::Error::Io
    pub async fn create_interaction_response_with_files<'a>(
        &self,
        interaction_id: u64,
        token: &str,
        map: &Value,
        files: Vec<AttachmentType<'a>>,
    ) -> Result<()> {
        self.wind(204, Request {
            body: None,
            multipart: Some(Multipart {
                files,
                payload_json: Some(map.clone()),
            }),
            headers: None,
            route: RouteInfo::CreateInteractionResponse {
                interaction_id,
                token,
            },
        })
        .await
    }

    /// Gets the initial interaction response.
    ///
    /// # Errors
    ///
    /// Returns an [`Error::Http`] if no initial response exists yet.
    ///
    /// [`Error::Http`]: crate::Error::Http
    pub async fn get_original_interaction_response(&self, token: &str) -> Result<Message> {
        self.fire(Request {
            body: None,
            multipart: None,
            headers: None,
            route: RouteInfo::GetOriginalInteractionResponse {
                application_id: self.application_id.0,
                token,
            },
        })
        .await
    }

    /// Edits the initial interaction response.
    ///
    /// # Errors
    ///
    /// Returns an [`Error::Http`] if the edit is rejected.
    ///
    /// [`Error::Http`]: crate::Error::Http
    pub async fn edit_original_interaction_response(
        &self,
        token: &str,
        map: &Value,
    ) -> Result<Message> {
        self.fire(Request {
            body: Some(serde_json::to_vec(map)?),
            multipart: None,
            headers: None,
            route: RouteInfo::EditOriginalInteractionResponse {
                application_id: self.application_id.0,
                token,
            },
        })
        .await
    }

    /// Deletes the initial interaction response.
    ///
    /// # Errors
    ///
    /// Returns an [`Error::Http`] if the response was already deleted.
    ///
    /// [`Error::Http`]: crate::Error::Http
    pub async fn delete_original_interaction_response(&self, token: &str) -> Result<()> {
        self.wind(204, Request {
            body: None,
            multipart: None,
            headers: None,
            route: RouteInfo::DeleteOriginalInteractionResponse {
                application_id: self.application_id.0,
                token,
            },
        })
        .await
    }

    /// Creates a followup message for an interaction.
    ///
    /// # Errors
    ///
    /// Returns an [`Error::Http`] if the message is rejected.
    ///
    /// [`Error::Http`]: crate::Error::Http
    pub async fn create_followup_message(&self, token: &str, map: &Value) -> Result<Message> {
        self.fire(Request {
            body: Some(serde_json::to_vec(map)?),
            multipart: None,
            headers: None,
            route: RouteInfo::CreateFollowupMessage {
                application_id: self.application_id.0,
                token,
            },
        })
        .await
    }

    /// Creates a followup message with file uploads.
    ///
    /// # Errors
    ///
    /// Returns an [`Error::Http`] if the message is rejected, or an
    /// [`Error::Io`] if a file cannot be read.
    ///
    /// [`Error::Http`]: crate::Error::Http
    /// [`Error::Io`]: crate::Error::Io
    pub async fn create_followup_message_with_files<'a>(
        &self,
        token: &str,
        map: &Value,
        files: Vec<AttachmentType<'a>>,
    ) -> Result<Message> {
        self.fire(Request {
            body: None,
            multipart: Some(Multipart {
                files,
                payload_json: Some(map.clone()),
            }),
            headers: None,
            route: RouteInfo::CreateFollowupMessage {
                application_id: self.application_id.0,
                token,
            },
        })
        .await
    }

    /// Edits a followup message for an interaction.
    ///
    /// # Errors
    ///
    /// Returns an [`Error::Http`] if the edit is rejected.
    ///
    /// [`Error::Http`]: crate::Error::Http
    pub async fn edit_followup_message(
        &self,
        token: &str,
        message_id: u64,
        map: &Value,
    ) -> Result<Message> {
        self.fire(Request {
            body: Some(serde_json::to_vec(map)?),
            multipart: None,
            headers: None,
            route: RouteInfo::EditFollowupMessage {
                application_id: self.application_id.0,
                token,
                message_id,
            },
        })
        .await
    }

    /// Deletes a followup message for an interaction.
    ///
    /// # Errors
    ///
    /// Returns an [`Error::Http`] if the message was already deleted.
    ///
    /// [`Error::Http`]: crate::Error::Http
    pub async fn delete_followup_message(&self, token: &str, message_id: u64) -> Result<()> {
        self.wind(204, Request {
            body: None,
            multipart: None,
            headers: None,
            route: RouteInfo::DeleteFollowupMessage {
                application_id: self.application_id.0,
                token,
                message_id,
            },
        })
        .await
    }

    /// Gets a webhook by its Id and token, requiring neither authentication
    /// nor the webhook's guild.
    ///
    /// # Errors
    ///
    /// Returns an [`Error::Http`] if the id-token pair does not name a
    /// webhook.
    ///
    /// [`Error::Http`]: crate::Error::Http
    pub async fn get_webhook_with_token(&self, webhook_id: u64, token: &str) -> Result<Webhook> {
        self.fire(Request {
            body: None,
            multipart: None,
            headers: None,
            route: RouteInfo::GetWebhookWithToken {
                webhook_id,
                token,
            },
        })
        .await
    }

    /// Executes a webhook, posting a message into its channel.
    ///
    /// When `wait` is set, the API blocks until the message is created and
    /// returns it; otherwise it answers `204 No Content` immediately and this
    /// resolves to `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns an [`Error::Http`] if the execution is rejected.
    ///
    /// [`Error::Http`]: crate::Error::Http
    pub async fn execute_webhook(
        &self,
        webhook_id: u64,
        token: &str,
        wait: bool,
        map: &Value,
    ) -> Result<Option<Message>> {
        let response = self
            .request(Request {
                body: Some(serde_json::to_vec(map)?),
                multipart: None,
                headers: None,
                route: RouteInfo::ExecuteWebhook {
                    webhook_id,
                    token,
                    wait,
                },
            })
            .await?;

        if response.status() == StatusCode::NO_CONTENT {
            return Ok(None);
        }

        response.json::<Message>().await.map(Some).map_err(|e| HttpError::from(e).into())
    }

    /// Executes a webhook with file uploads attached to the message.
    ///
    /// # Errors
    ///
    /// Returns an [`Error::Http`] if the execution is rejected, or an
    /// [`Error::Io`] if a file cannot be read.
    ///
    /// [`Error::Http`]: crate::Error::Http
    /// [`Error::Io`]: crate::Error::Io
    pub async fn execute_webhook_with_files<'a>(
        &self,
        webhook_id: u64,
        token: &str,
        wait: bool,
        map: &Value,
        files: Vec<AttachmentType<'a>>,
    ) -> Result<Option<Message>> {
        let response = self
            .request(Request {
                body: None,
                multipart: Some(Multipart {
                    files,
                    payload_json: Some(map.clone()),
                }),
                headers: None,
                route: RouteInfo::ExecuteWebhook {
                    webhook_id,
                    token,
                    wait,
                },
            })
            .await?;

        if response.status() == StatusCode::NO_CONTENT {
            return Ok(None);
        }

        response.json::<Message>().await.map(Some).map_err(|e| HttpError::from(e).into())
    }

    /// Gets a message sent by a webhook.
    ///
    /// # Errors
    ///
    /// Returns an [`Error::Http`] if the message no longer exists.
    ///
    /// [`Error::Http`]: crate::Error::Http
    pub async fn get_webhook_message(
        &self,
        webhook_id: u64,
        token: &str,
        message_id: u64,
    ) -> Result<Message> {
        self.fire(Request {
            body: None,
            multipart: None,
            headers: None,
            route: RouteInfo::GetWebhookMessage {
                webhook_id,
                token,
                message_id,
            },
        })
        .await
    }

    /// Edits a message sent by a webhook.
    ///
    /// # Errors
    ///
    /// Returns an [`Error::Http`] if the edit is rejected.
    ///
    /// [`Error::Http`]: crate::Error::Http
    pub async fn edit_webhook_message(
        &self,
        webhook_id: u64,
        token: &str,
        message_id: u64,
        map: &Value,
    ) -> Result<Message> {
        self.fire(Request {
            body: Some(serde_json::to_vec(map)?),
            multipart: None,
            headers: None,
            route: RouteInfo::EditWebhookMessage {
                webhook_id,
                token,
                message_id,
            },
        })
        .await
    }

    /// Deletes a message sent by a webhook.
    ///
    /// # Errors
    ///
    /// Returns an [`Error::Http`] if the message was already deleted.
    ///
    /// [`Error::Http`]: crate::Error::Http
    pub async fn delete_webhook_message(
        &self,
        webhook_id: u64,
        token: &str,
        message_id: u64,
    ) -> Result<()> {
        self.wind(204, Request {
            body: None,
            multipart: None,
            headers: None,
            route: RouteInfo::DeleteWebhookMessage {
                webhook_id,
                token,
                message_id,
            },
        })
        .await
    }

    /// Fires off a request, deserializing the response body via the given
    /// type bound.
    ///
    /// If you don't need to deserialize the response and want the response
    /// instance itself, use [`Self::request`].
    ///
    /// # Errors
    ///
    /// Returns an [`Error::Http`] if the request fails or its body does not
    /// decode as `T`.
    ///
    /// [`Error::Http`]: crate::Error::Http
    #[instrument(skip_all)]
    pub async fn fire<T: DeserializeOwned>(&self, req: Request<'_>) -> Result<T> {
        let response = self.request(req).await?;

        response.json::<T>().await.map_err(|e| HttpError::from(e).into())
    }

    /// Performs a request with the configured token and API base.
    ///
    /// Returns the raw response. Use [`Self::fire`] to deserialize the body
    /// into some type.
    ///
    /// # Errors
    ///
    /// Returns an [`Error::Http`] if the request cannot be sent or a
    /// non-successful status code was received.
    ///
    /// [`Error::Http`]: crate::Error::Http
    #[instrument(skip_all)]
    pub async fn request(&self, req: Request<'_>) -> Result<ReqwestResponse> {
        let request = req
            .build(&self.client, self.token.expose_secret(), &self.base_url)
            .await?
            .build()
            .map_err(HttpError::Request)?;

        let response = self.client.execute(request).await.map_err(HttpError::Request)?;

        if response.status().is_success() {
            Ok(response)
        } else {
            Err(Error::Http(Box::new(HttpError::UnsuccessfulRequest(
                ErrorResponse::from_response(response).await,
            ))))
        }
    }

    /// Performs a request and then verifies that the response status code is
    /// equal to the expected value.
    ///
    /// This is a function that performs a light amount of work and returns an
    /// empty tuple, so it's called "self.wind" to denote that it's lightweight.
    #[instrument(skip_all)]
    pub(super) async fn wind(&self, expected: u16, req: Request<'_>) -> Result<()> {
        // The deconstructed path embeds the interaction token; log the
        // route's name instead.
        let route = req.route.name();
        let response = self.request(req).await?;

        if response.status().as_u16() == expected {
            return Ok(());
        }

        debug!("Expected {} from {}, got {}", expected, route, response.status());

        Err(Error::Http(Box::new(HttpError::UnsuccessfulRequest(
            ErrorResponse::from_response(response).await,
        ))))
    }
}

fn configure_client_backend(builder: ClientBuilder) -> ClientBuilder {
    builder.use_rustls_tls()
}

impl AsRef<Http> for Http {
    fn as_ref(&self) -> &Http {
        self
    }
}
