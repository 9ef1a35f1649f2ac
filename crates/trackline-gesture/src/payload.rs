//! Drag hand-off payload.
//!
//! A drag may be started by one component and dropped on another. The
//! starting side serializes a `DragPayload`; the receiving side parses it and
//! commits. Text that does not parse aborts the drop.

use serde::{Deserialize, Serialize};
use trackline_core::{Result, TracklineError};
use trackline_timeline::{ClipId, TrackId};

/// Everything a drop needs to know about the clip in flight.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DragPayload {
    pub clip: ClipId,
    pub source_track: TrackId,
    /// Pointer x minus the clip's left edge at pick-up. Missing means 0.
    #[serde(default)]
    pub pointer_offset: f32,
}

impl DragPayload {
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self)
            .map_err(|e| TracklineError::Serialization(format!("Failed to encode drag payload: {e}")))
    }

    pub fn from_json(text: &str) -> Result<Self> {
        let payload: Self = serde_json::from_str(text)
            .map_err(|e| TracklineError::MalformedPayload(e.to_string()))?;
        if !payload.pointer_offset.is_finite() {
            return Err(TracklineError::MalformedPayload(format!(
                "pointer offset {} is not finite",
                payload.pointer_offset
            )));
        }
        Ok(payload)
    }
}
