//! A set of exports which can be helpful to use.
//!
//! Note that the `KingfisherError` re-export is equivalent to
//! [`kingfisher::Error`], although is re-exported as a separate name to remove
//! likely ambiguity with other crate error enums.
//!
//! # Examples
//!
//! Import all of the exports:
//!
//! ```rust
//! use kingfisher::prelude::*;
//! ```
//!
//! [`kingfisher::Error`]: crate::Error

pub use serde_json::Value;
pub use tokio::sync::{Mutex, RwLock};
pub use typemap_rev::{TypeMap, TypeMapKey};

pub use crate::client::{Client, ClientError, Context, EventHandler};
pub use crate::error::Error as KingfisherError;
pub use crate::http::HttpError;
pub use crate::model::ModelError;
