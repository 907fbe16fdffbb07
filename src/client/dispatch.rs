use std::sync::Arc;

use tracing::debug;

use super::{Context, EventHandler};
use crate::model::event::Event;

pub(super) async fn dispatch(event: Event, context: Context, handler: &Arc<dyn EventHandler>) {
    match event {
        Event::InteractionCreate(event) => {
            debug!(interaction_id = %event.interaction.id(), "dispatching interaction");

            handler.interaction_create(context, event.interaction).await;
        },
        Event::Unknown(event) => {
            debug!(kind = %event.kind, "dispatching unknown event");

            handler.unknown(context, event.kind, event.value).await;
        },
    }
}
