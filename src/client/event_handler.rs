use async_trait::async_trait;

use super::Context;
use crate::internal::prelude::*;
use crate::model::interactions::Interaction;

/// The core trait for handling events by the owning application.
///
/// Every method has an empty default body, so implementors only write the
/// ones they care about.
#[async_trait]
pub trait EventHandler: Send + Sync {
    /// Dispatched when an interaction is created, e.g. a slash command was
    /// used or a button was clicked.
    ///
    /// Provides the created interaction.
    async fn interaction_create(&self, _ctx: Context, _interaction: Interaction) {}

    /// Dispatched when a forwarded event is not modeled by this crate.
    ///
    /// Provides the event's name and its unparsed data.
    async fn unknown(&self, _ctx: Context, _name: String, _raw: Value) {}
}
