//! A set of builders used to make using methods on certain structs simpler to
//! use.
//!
//! These are used when not all parameters are required, all parameters are
//! optional, and/or sane default values for required parameters can be
//! applied. Every builder collects fields into a serializable map; nothing is
//! validated or sent until the owning method hands the map to the [`http`]
//! layer.
//!
//! [`http`]: crate::http

mod create_autocomplete_response;
mod create_embed;
mod create_interaction_response;
mod create_interaction_response_followup;
mod edit_interaction_response;
mod edit_webhook_message;
mod execute_webhook;

pub use self::create_autocomplete_response::CreateAutocompleteResponse;
pub use self::create_embed::{CreateEmbed, CreateEmbedAuthor, CreateEmbedFooter};
pub use self::create_interaction_response::{
    CreateInteractionResponse,
    CreateInteractionResponseData,
};
pub use self::create_interaction_response_followup::CreateInteractionResponseFollowup;
pub use self::edit_interaction_response::EditInteractionResponse;
pub use self::edit_webhook_message::EditWebhookMessage;
pub use self::execute_webhook::ExecuteWebhook;
