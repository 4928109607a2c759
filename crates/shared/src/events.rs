use serde::{Deserialize, Serialize};

/// Outward control notification. Carries no payload; hosts that need the new
/// value read it back from the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ControlEvent {
    ValueChanged,
}
