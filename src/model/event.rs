//! Gateway event models relevant to interactions.
//!
//! The owning application drives its own gateway connection; only the
//! dispatches it forwards through [`Client::process`] are modeled here.
//!
//! [`Client::process`]: crate::client::Client::process

use serde::de::{Error as DeError, Visitor};
use serde::ser::Serializer;
use serde::{Deserialize, Deserializer, Serialize};

use crate::cache::{Cache, CacheUpdate};
use crate::internal::prelude::*;
use crate::model::interactions::Interaction;

/// Event data for the interaction dispatch.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(transparent)]
#[non_exhaustive]
pub struct InteractionCreateEvent {
    pub interaction: Interaction,
}

impl CacheUpdate for InteractionCreateEvent {
    type Output = ();

    fn update(&mut self, cache: &Cache) -> Option<()> {
        if let Some(user) = self.interaction.user() {
            cache.insert_user(user.clone());
        }

        if let (Some(guild_id), Some(member)) =
            (self.interaction.guild_id(), self.interaction.member())
        {
            cache.insert_member(guild_id, member.clone());
        }

        None
    }
}

/// A dispatch the owning application forwarded but this crate does not model.
///
/// Kept around so callers can log the kind and move on.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[non_exhaustive]
pub struct UnknownEvent {
    pub kind: String,
    pub value: Value,
}

/// A forwarded gateway dispatch, classified.
#[derive(Clone, Debug)]
#[non_exhaustive]
pub enum Event {
    /// An interaction was created.
    InteractionCreate(InteractionCreateEvent),
    /// An event type not modeled by this crate.
    Unknown(UnknownEvent),
}

impl Event {
    /// The type of this event.
    #[must_use]
    pub fn event_type(&self) -> EventType {
        match self {
            Event::InteractionCreate(_) => EventType::InteractionCreate,
            Event::Unknown(unknown) => EventType::Other(unknown.kind.clone()),
        }
    }
}

/// The type of event dispatch received from the gateway.
///
/// This is useful for deciding how to deserialize a received payload.
///
/// A deserialization implementation is provided for raw event dispatch type
/// strings, e.g. deserializing `"INTERACTION_CREATE"` to
/// [`EventType::InteractionCreate`].
#[derive(Clone, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
#[non_exhaustive]
pub enum EventType {
    /// Indicator that an interaction create payload was received.
    ///
    /// This maps to [`InteractionCreateEvent`].
    InteractionCreate,
    /// An event type this crate does not model.
    Other(String),
}

impl EventType {
    const INTERACTION_CREATE: &'static str = "INTERACTION_CREATE";

    /// The name of this event type as dispatched over the gateway, when the
    /// type is one this crate models.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match self {
            EventType::InteractionCreate => Some(Self::INTERACTION_CREATE),
            EventType::Other(_) => None,
        }
    }
}

impl From<&str> for EventType {
    fn from(name: &str) -> Self {
        match name {
            EventType::INTERACTION_CREATE => EventType::InteractionCreate,
            other => EventType::Other(other.to_owned()),
        }
    }
}

impl<'de> Deserialize<'de> for EventType {
    fn deserialize<D>(deserializer: D) -> StdResult<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct EventTypeVisitor;

        impl<'de> Visitor<'de> for EventTypeVisitor {
            type Value = EventType;

            fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str("event type str")
            }

            fn visit_str<E>(self, v: &str) -> StdResult<Self::Value, E>
            where
                E: DeError,
            {
                Ok(match v {
                    EventType::INTERACTION_CREATE => EventType::InteractionCreate,
                    other => EventType::Other(other.to_owned()),
                })
            }
        }

        deserializer.deserialize_str(EventTypeVisitor)
    }
}

/// Deserializes a dispatch payload of an already-known type.
///
/// # Errors
///
/// Returns an [`Error::Json`] if the payload does not match the shape the
/// event type requires.
///
/// [`Error::Json`]: crate::Error::Json
pub fn deserialize_event_with_type(kind: EventType, v: Value) -> Result<Event> {
    Ok(match kind {
        EventType::InteractionCreate => Event::InteractionCreate(serde_json::from_value(v)?),
        EventType::Other(kind) => Event::Unknown(UnknownEvent {
            kind,
            value: v,
        }),
    })
}

// Serialize is only used by callers persisting events; the enum flattens to
// the payload the gateway dispatched.
impl Serialize for Event {
    fn serialize<S>(&self, serializer: S) -> StdResult<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Event::InteractionCreate(event) => event.serialize(serializer),
            Event::Unknown(event) => event.value.serialize(serializer),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{deserialize_event_with_type, Event, EventType};

    #[test]
    fn event_type_classifies_dispatch_names() {
        let kind: EventType = serde_json::from_value(json!("INTERACTION_CREATE")).unwrap();
        assert_eq!(kind, EventType::InteractionCreate);

        let kind: EventType = serde_json::from_value(json!("PRESENCE_UPDATE")).unwrap();
        assert_eq!(kind, EventType::Other("PRESENCE_UPDATE".to_string()));
    }

    #[test]
    fn unmodeled_dispatches_become_unknown_events() {
        let kind = EventType::Other("TYPING_START".to_string());
        let payload = json!({"channel_id": "1"});

        match deserialize_event_with_type(kind, payload.clone()).unwrap() {
            Event::Unknown(event) => {
                assert_eq!(event.kind, "TYPING_START");
                assert_eq!(event.value, payload);
            },
            other => panic!("unexpected event: {:?}", other),
        }
    }
}
