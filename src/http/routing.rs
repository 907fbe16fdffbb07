//! The route inventory: every endpoint the crate can hit, with the method it
//! uses and the path relative to the configured API base.

use std::borrow::Cow;

use super::LightMethod;

/// A route the crate can issue a request against.
///
/// Interaction callbacks are keyed by interaction Id and token; everything
/// after the callback goes through the application-owned webhook, keyed by
/// application Id and the same token.
#[derive(Clone, Copy, Debug)]
#[non_exhaustive]
pub enum RouteInfo<'a> {
    CreateInteractionResponse {
        interaction_id: u64,
        token: &'a str,
    },
    GetOriginalInteractionResponse {
        application_id: u64,
        token: &'a str,
    },
    EditOriginalInteractionResponse {
        application_id: u64,
        token: &'a str,
    },
    DeleteOriginalInteractionResponse {
        application_id: u64,
        token: &'a str,
    },
    CreateFollowupMessage {
        application_id: u64,
        token: &'a str,
    },
    EditFollowupMessage {
        application_id: u64,
        token: &'a str,
        message_id: u64,
    },
    DeleteFollowupMessage {
        application_id: u64,
        token: &'a str,
        message_id: u64,
    },
    GetWebhookWithToken {
        webhook_id: u64,
        token: &'a str,
    },
    ExecuteWebhook {
        webhook_id: u64,
        token: &'a str,
        wait: bool,
    },
    GetWebhookMessage {
        webhook_id: u64,
        token: &'a str,
        message_id: u64,
    },
    EditWebhookMessage {
        webhook_id: u64,
        token: &'a str,
        message_id: u64,
    },
    DeleteWebhookMessage {
        webhook_id: u64,
        token: &'a str,
        message_id: u64,
    },
}

impl<'a> RouteInfo<'a> {
    /// A short description of the route, safe to log.
    ///
    /// The deconstructed path embeds the interaction token; this never does.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            RouteInfo::CreateInteractionResponse { .. } => "CreateInteractionResponse",
            RouteInfo::GetOriginalInteractionResponse { .. } => "GetOriginalInteractionResponse",
            RouteInfo::EditOriginalInteractionResponse { .. } => "EditOriginalInteractionResponse",
            RouteInfo::DeleteOriginalInteractionResponse { .. } => {
                "DeleteOriginalInteractionResponse"
            },
            RouteInfo::CreateFollowupMessage { .. } => "CreateFollowupMessage",
            RouteInfo::EditFollowupMessage { .. } => "EditFollowupMessage",
            RouteInfo::DeleteFollowupMessage { .. } => "DeleteFollowupMessage",
            RouteInfo::GetWebhookWithToken { .. } => "GetWebhookWithToken",
            RouteInfo::ExecuteWebhook { .. } => "ExecuteWebhook",
            RouteInfo::GetWebhookMessage { .. } => "GetWebhookMessage",
            RouteInfo::EditWebhookMessage { .. } => "EditWebhookMessage",
            RouteInfo::DeleteWebhookMessage { .. } => "DeleteWebhookMessage",
        }
    }

    /// Breaks the route down into its HTTP method and base-relative path.
    #[must_use]
    pub fn deconstruct(&self) -> (LightMethod, Cow<'static, str>) {
        match *self {
            RouteInfo::CreateInteractionResponse {
                interaction_id,
                token,
            } => (
                LightMethod::Post,
                Cow::from(format!("/interactions/{}/{}/callback", interaction_id, token)),
            ),
            RouteInfo::GetOriginalInteractionResponse {
                application_id,
                token,
            } => (
                LightMethod::Get,
                Cow::from(format!("/webhooks/{}/{}/messages/@original", application_id, token)),
            ),
            RouteInfo::EditOriginalInteractionResponse {
                application_id,
                token,
            } => (
                LightMethod::Patch,
                Cow::from(format!("/webhooks/{}/{}/messages/@original", application_id, token)),
            ),
            RouteInfo::DeleteOriginalInteractionResponse {
                application_id,
                token,
            } => (
                LightMethod::Delete,
                Cow::from(format!("/webhooks/{}/{}/messages/@original", application_id, token)),
            ),
            RouteInfo::CreateFollowupMessage {
                application_id,
                token,
            } => (
                LightMethod::Post,
                Cow::from(format!("/webhooks/{}/{}", application_id, token)),
            ),
            RouteInfo::EditFollowupMessage {
                application_id,
                token,
                message_id,
            } => (
                LightMethod::Patch,
                Cow::from(format!(
                    "/webhooks/{}/{}/messages/{}",
                    application_id, token, message_id
                )),
            ),
            RouteInfo::DeleteFollowupMessage {
                application_id,
                token,
                message_id,
            } => (
                LightMethod::Delete,
                Cow::from(format!(
                    "/webhooks/{}/{}/messages/{}",
                    application_id, token, message_id
                )),
            ),
            RouteInfo::GetWebhookWithToken {
                webhook_id,
                token,
            } => (LightMethod::Get, Cow::from(format!("/webhooks/{}/{}", webhook_id, token))),
            RouteInfo::ExecuteWebhook {
                webhook_id,
                token,
                wait,
            } => (
                LightMethod::Post,
                Cow::from(format!("/webhooks/{}/{}?wait={}", webhook_id, token, wait)),
            ),
            RouteInfo::GetWebhookMessage {
                webhook_id,
                token,
                message_id,
            } => (
                LightMethod::Get,
                Cow::from(format!("/webhooks/{}/{}/messages/{}", webhook_id, token, message_id)),
            ),
            RouteInfo::EditWebhookMessage {
                webhook_id,
                token,
                message_id,
            } => (
                LightMethod::Patch,
                Cow::from(format!("/webhooks/{}/{}/messages/{}", webhook_id, token, message_id)),
            ),
            RouteInfo::DeleteWebhookMessage {
                webhook_id,
                token,
                message_id,
            } => (
                LightMethod::Delete,
                Cow::from(format!("/webhooks/{}/{}/messages/{}", webhook_id, token, message_id)),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{LightMethod, RouteInfo};

    #[test]
    fn callback_route_is_keyed_by_interaction() {
        let (method, path) = RouteInfo::CreateInteractionResponse {
            interaction_id: 3,
            token: "tok",
        }
        .deconstruct();

        assert_eq!(method, LightMethod::Post);
        assert_eq!(path, "/interactions/3/tok/callback");
    }

    #[test]
    fn original_response_routes_are_keyed_by_application() {
        let (method, path) = RouteInfo::EditOriginalInteractionResponse {
            application_id: 1,
            token: "tok",
        }
        .deconstruct();

        assert_eq!(method, LightMethod::Patch);
        assert_eq!(path, "/webhooks/1/tok/messages/@original");
    }

    #[test]
    fn route_names_never_carry_the_token() {
        let route = RouteInfo::ExecuteWebhook {
            webhook_id: 1,
            token: "aW50ZXJhY3Rpb24",
            wait: true,
        };

        assert_eq!(route.name(), "ExecuteWebhook");
        assert!(!route.name().contains("aW50ZXJhY3Rpb24"));
    }
}
