//! Kingfisher brings Discord interaction support — slash commands, context
//! menus, autocomplete, and message components — to applications whose client
//! stack predates interactions.
//!
//! The owning application keeps its own gateway connection and feeds every
//! `INTERACTION_CREATE` dispatch into [`Client::process`]. The crate decodes
//! the payload into an [`Interaction`], applies cache side effects, and hands
//! the classified value to the application's [`EventHandler`]. Responding goes
//! through the [`Respondable`] methods on the concrete interaction types,
//! which own the response lifecycle against Discord's REST API.
//!
//! # Example
//!
//! ```rust,no_run
//! use kingfisher::model::id::ApplicationId;
//! use kingfisher::model::interactions::{Interaction, Respondable};
//! use kingfisher::prelude::*;
//!
//! struct Handler;
//!
//! #[kingfisher::async_trait]
//! impl EventHandler for Handler {
//!     async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
//!         if let Some(mut command) = interaction.application_command() {
//!             let result = command
//!                 .reply(&ctx.http, false, |data| data.content("Pong!").ephemeral(true))
//!                 .await;
//!
//!             if let Err(why) = result {
//!                 println!("Cannot respond to slash command: {}", why);
//!             }
//!         }
//!     }
//! }
//!
//! # async fn run(kind: &str, payload: serde_json::Value) -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::builder("token")
//!     .application_id(ApplicationId(1))
//!     .event_handler(Handler)
//!     .build()?;
//!
//! // Inside the application's gateway loop:
//! client.process(kind, payload).await?;
//! # Ok(())
//! # }
//! ```
//!
//! No gateway connection, rate limiting, or retry policy is provided here;
//! transport failures surface unchanged as [`Error::Http`].
//!
//! [`Interaction`]: crate::model::interactions::Interaction
//! [`Respondable`]: crate::model::interactions::Respondable
#![deny(rust_2018_idioms)]
#![warn(clippy::unwrap_used, clippy::missing_errors_doc)]
#![allow(clippy::module_name_repetitions)]

#[macro_use]
mod internal;

pub mod builder;
pub mod cache;
pub mod client;
pub mod constants;
mod error;
pub mod http;
pub mod model;
pub mod prelude;
pub mod secret_string;
pub mod utils;

pub use async_trait::async_trait;

pub use crate::error::{Error, Result};
