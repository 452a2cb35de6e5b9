//! Chinook Core
//!
//! View models handed from the library's query layer to whatever renders or
//! serializes a playlist.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **View Types**: `PlaylistTrackView`, one display-ready row per (track, playlist)
//! - **Identifiers**: `TrackId`, `PlaylistId`
//! - **Wire Format**: JSON helpers in [`codec`]
//! - **Error Handling**: Unified `ChinookError` and `Result` types
//!
//! Producing views (favorite lookups, playlist loading, track queries) lives
//! outside this crate.
//!
//! # Example
//!
//! ```rust
//! use chinook_core::types::{PlaylistId, PlaylistTrackView, TrackId};
//!
//! let view = PlaylistTrackView::builder()
//!     .track_id(12)
//!     .track_name("Desafinado")
//!     .album_title("Getz/Gilberto")
//!     .artist_name("João Gilberto")
//!     .is_favorite(true)
//!     .playlist_id(3)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(view.track_id(), TrackId::new(12));
//! assert_eq!(view.playlist_id(), PlaylistId::new(3));
//!
//! let json = chinook_core::codec::to_json(&view).unwrap();
//! assert!(json.contains("\"albumTitle\":\"Getz/Gilberto\""));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod codec;
pub mod error;
pub mod types;

// Re-export commonly used types
pub use error::{ChinookError, Result};
pub use types::{PlaylistId, PlaylistTrackView, PlaylistTrackViewBuilder, TrackId};
