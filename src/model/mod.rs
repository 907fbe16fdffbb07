//! Mappings of objects received from Discord's interaction API, with optional
//! helper methods for responding to them.
//!
//! Models can optionally have additional helper methods implemented on them,
//! which issue requests through the [`http`] module.
//!
//! Normally, the library deserializes models for you: the payload handed to
//! [`Client::process`] comes back as a classified
//! [`interactions::Interaction`].
//!
//! [`Client::process`]: crate::client::Client::process
//! [`http`]: crate::http

pub mod channel;
pub mod error;
pub mod event;
pub mod guild;
pub mod id;
pub mod interactions;
pub mod permissions;
pub mod prelude;
pub mod timestamp;
pub mod user;
pub mod utils;
pub mod webhook;

pub use self::error::Error as ModelError;
pub use self::permissions::Permissions;
pub use self::timestamp::Timestamp;
