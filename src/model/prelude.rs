//! The model prelude re-exports all types in the model sub-modules.
//!
//! This allows for quick and easy access to all of the model types.
//!
//! # Examples
//!
//! Import all model types into scope:
//!
//! ```rust,no_run
//! use kingfisher::model::prelude::*;
//! ```

pub use super::channel::*;
pub use super::error::Error as ModelError;
pub use super::event::*;
pub use super::guild::*;
pub use super::id::*;
pub use super::interactions::application_command::*;
pub use super::interactions::autocomplete::*;
pub use super::interactions::message_component::*;
pub use super::interactions::ping::*;
pub use super::interactions::*;
pub use super::permissions::Permissions;
pub use super::timestamp::Timestamp;
pub use super::user::*;
pub use super::webhook::*;
