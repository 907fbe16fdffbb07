//! Liveness ping interactions.

use serde::{Deserialize, Serialize};

use super::InteractionType;
use crate::model::id::{ApplicationId, InteractionId};
use crate::secret_string::SecretString;

/// A liveness check sent to applications with a registered interactions
/// endpoint.
///
/// The gateway upstream acknowledges these itself; this type only exists so
/// the payload classifies cleanly.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[non_exhaustive]
pub struct PingInteraction {
    /// Id of the interaction.
    pub id: InteractionId,
    /// Id of the application this interaction is for.
    pub application_id: ApplicationId,
    /// The type of interaction.
    #[serde(rename = "type")]
    pub kind: InteractionType,
    /// A token authorizing responses to the interaction.
    pub token: SecretString,
    /// Always `1`.
    pub version: u8,
}
