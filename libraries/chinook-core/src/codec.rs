//! JSON wire format for playlist track views
//!
//! A view encodes to a bare object with the seven camelCase fields. There is
//! no envelope around it.

use crate::error::Result;
use crate::types::PlaylistTrackView;

/// Encode one view
pub fn to_json(view: &PlaylistTrackView) -> Result<String> {
    Ok(serde_json::to_string(view)?)
}

/// Decode one view
pub fn from_json(json: &str) -> Result<PlaylistTrackView> {
    serde_json::from_str(json).map_err(|e| {
        tracing::debug!("Failed to decode playlist track view: {}", e);
        e.into()
    })
}
