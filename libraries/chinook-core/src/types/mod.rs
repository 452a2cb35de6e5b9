//! View model types and their identifiers

mod ids;
mod playlist_track_view;

pub use ids::{PlaylistId, TrackId};
pub use playlist_track_view::{
    PlaylistTrackView, PlaylistTrackViewBuilder, PlaylistTrackViewParts,
};
