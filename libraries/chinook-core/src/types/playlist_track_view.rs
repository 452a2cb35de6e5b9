//! Playlist track view model
//!
//! One row of a playlist as shown to a user: the track, its album and artist
//! names, the viewer's favorite flag and the playlist the row was built for.

use super::ids::{PlaylistId, TrackId};
use crate::error::{ChinookError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A track in the context of one playlist, denormalized for display
///
/// A track that sits in N playlists produces N views, each with its own
/// `playlist_id`. `is_favorite` and `playlists` are snapshots taken when the
/// view was built; re-fetch after a toggle.
///
/// Views are never mutated in place. The `with_*` methods consume the view
/// and hand back a new one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PlaylistTrackView {
    track_id: TrackId,
    track_name: String,
    album_title: Option<String>,
    artist_name: Option<String>,
    is_favorite: bool,
    playlist_id: PlaylistId,

    /// Playlists this track also belongs to (foreign keys, never owned)
    #[serde(default)]
    playlists: BTreeSet<PlaylistId>,
}

impl PlaylistTrackView {
    /// Create a view from all seven fields
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        track_id: TrackId,
        track_name: impl Into<String>,
        album_title: Option<String>,
        artist_name: Option<String>,
        is_favorite: bool,
        playlist_id: PlaylistId,
        playlists: impl IntoIterator<Item = PlaylistId>,
    ) -> Self {
        Self {
            track_id,
            track_name: track_name.into(),
            album_title,
            artist_name,
            is_favorite,
            playlist_id,
            playlists: playlists.into_iter().collect(),
        }
    }

    /// Start building a view field by field
    pub fn builder() -> PlaylistTrackViewBuilder {
        PlaylistTrackViewBuilder::default()
    }

    /// Identity of the underlying track
    pub fn track_id(&self) -> TrackId {
        self.track_id
    }

    /// Display name of the track
    pub fn track_name(&self) -> &str {
        &self.track_name
    }

    /// Album title, absent when the track has no album
    pub fn album_title(&self) -> Option<&str> {
        self.album_title.as_deref()
    }

    /// Performing artist, if known
    pub fn artist_name(&self) -> Option<&str> {
        self.artist_name.as_deref()
    }

    /// Viewer's favorite flag as of construction
    pub fn is_favorite(&self) -> bool {
        self.is_favorite
    }

    /// Playlist this row was materialized for
    pub fn playlist_id(&self) -> PlaylistId {
        self.playlist_id
    }

    /// Back-references to other playlists holding this track
    pub fn playlists(&self) -> &BTreeSet<PlaylistId> {
        &self.playlists
    }

    /// Whether the back-references mention `playlist_id`
    pub fn is_in_playlist(&self, playlist_id: PlaylistId) -> bool {
        self.playlists.contains(&playlist_id)
    }

    /// Same view with a new favorite snapshot
    #[must_use]
    pub fn with_favorite(self, is_favorite: bool) -> Self {
        Self {
            is_favorite,
            ..self
        }
    }

    /// Same track, materialized for another playlist
    #[must_use]
    pub fn with_playlist_id(self, playlist_id: PlaylistId) -> Self {
        Self {
            playlist_id,
            ..self
        }
    }

    /// Same view pointing at another track
    #[must_use]
    pub fn with_track_id(self, track_id: TrackId) -> Self {
        Self { track_id, ..self }
    }

    /// Same view with a new track name
    #[must_use]
    pub fn with_track_name(self, track_name: impl Into<String>) -> Self {
        Self {
            track_name: track_name.into(),
            ..self
        }
    }

    /// Same view with a new album title
    #[must_use]
    pub fn with_album_title(self, album_title: Option<String>) -> Self {
        Self {
            album_title,
            ..self
        }
    }

    /// Same view with a new artist name
    #[must_use]
    pub fn with_artist_name(self, artist_name: Option<String>) -> Self {
        Self {
            artist_name,
            ..self
        }
    }

    /// Same view with new back-references
    #[must_use]
    pub fn with_playlists(self, playlists: impl IntoIterator<Item = PlaylistId>) -> Self {
        Self {
            playlists: playlists.into_iter().collect(),
            ..self
        }
    }

    /// Reopen every field for editing
    pub fn into_builder(self) -> PlaylistTrackViewBuilder {
        PlaylistTrackViewBuilder {
            track_id: Some(self.track_id),
            track_name: Some(self.track_name),
            album_title: self.album_title,
            artist_name: self.artist_name,
            is_favorite: self.is_favorite,
            playlist_id: Some(self.playlist_id),
            playlists: self.playlists,
        }
    }

    /// Break the view into its public fields
    pub fn into_parts(self) -> PlaylistTrackViewParts {
        PlaylistTrackViewParts {
            track_id: self.track_id,
            track_name: self.track_name,
            album_title: self.album_title,
            artist_name: self.artist_name,
            is_favorite: self.is_favorite,
            playlist_id: self.playlist_id,
            playlists: self.playlists,
        }
    }
}

/// The seven fields of a `PlaylistTrackView`, all public
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistTrackViewParts {
    /// Identity of the underlying track
    pub track_id: TrackId,
    /// Display name of the track
    pub track_name: String,
    /// Album title, absent when the track has no album
    pub album_title: Option<String>,
    /// Performing artist, if known
    pub artist_name: Option<String>,
    /// Viewer's favorite flag
    pub is_favorite: bool,
    /// Playlist this row belongs to
    pub playlist_id: PlaylistId,
    /// Back-references to other playlists
    pub playlists: BTreeSet<PlaylistId>,
}

impl From<PlaylistTrackViewParts> for PlaylistTrackView {
    fn from(parts: PlaylistTrackViewParts) -> Self {
        Self {
            track_id: parts.track_id,
            track_name: parts.track_name,
            album_title: parts.album_title,
            artist_name: parts.artist_name,
            is_favorite: parts.is_favorite,
            playlist_id: parts.playlist_id,
            playlists: parts.playlists,
        }
    }
}

/// Builder for `PlaylistTrackView`
///
/// `track_id`, `track_name` and `playlist_id` are required. Values are
/// stored as given; an empty name or a negative id is not rejected.
#[derive(Debug, Clone, Default)]
pub struct PlaylistTrackViewBuilder {
    track_id: Option<TrackId>,
    track_name: Option<String>,
    album_title: Option<String>,
    artist_name: Option<String>,
    is_favorite: bool,
    playlist_id: Option<PlaylistId>,
    playlists: BTreeSet<PlaylistId>,
}

impl PlaylistTrackViewBuilder {
    /// Set the track id
    #[must_use]
    pub fn track_id(mut self, track_id: impl Into<TrackId>) -> Self {
        self.track_id = Some(track_id.into());
        self
    }

    /// Set the track name
    #[must_use]
    pub fn track_name(mut self, track_name: impl Into<String>) -> Self {
        self.track_name = Some(track_name.into());
        self
    }

    /// Set the album title
    #[must_use]
    pub fn album_title(mut self, album_title: impl Into<String>) -> Self {
        self.album_title = Some(album_title.into());
        self
    }

    /// Set or clear the album title (e.g. straight from a nullable column)
    #[must_use]
    pub fn maybe_album_title(mut self, album_title: Option<String>) -> Self {
        self.album_title = album_title;
        self
    }

    /// Set the artist name
    #[must_use]
    pub fn artist_name(mut self, artist_name: impl Into<String>) -> Self {
        self.artist_name = Some(artist_name.into());
        self
    }

    /// Set or clear the artist name
    #[must_use]
    pub fn maybe_artist_name(mut self, artist_name: Option<String>) -> Self {
        self.artist_name = artist_name;
        self
    }

    /// Set the favorite flag
    #[must_use]
    pub fn is_favorite(mut self, is_favorite: bool) -> Self {
        self.is_favorite = is_favorite;
        self
    }

    /// Set the owning playlist
    #[must_use]
    pub fn playlist_id(mut self, playlist_id: impl Into<PlaylistId>) -> Self {
        self.playlist_id = Some(playlist_id.into());
        self
    }

    /// Replace the back-references
    #[must_use]
    pub fn playlists(mut self, playlists: impl IntoIterator<Item = PlaylistId>) -> Self {
        self.playlists = playlists.into_iter().collect();
        self
    }

    /// Add one back-reference
    #[must_use]
    pub fn add_playlist(mut self, playlist_id: impl Into<PlaylistId>) -> Self {
        self.playlists.insert(playlist_id.into());
        self
    }

    /// Finish the view
    ///
    /// # Errors
    /// Returns `ChinookError::MissingField` naming the first required field
    /// that was never set.
    pub fn build(self) -> Result<PlaylistTrackView> {
        let track_id = self.track_id.ok_or_else(|| missing("track_id"))?;
        let track_name = self.track_name.ok_or_else(|| missing("track_name"))?;
        let playlist_id = self.playlist_id.ok_or_else(|| missing("playlist_id"))?;

        Ok(PlaylistTrackView {
            track_id,
            track_name,
            album_title: self.album_title,
            artist_name: self.artist_name,
            is_favorite: self.is_favorite,
            playlist_id,
            playlists: self.playlists,
        })
    }
}

fn missing(field: &'static str) -> ChinookError {
    ChinookError::missing_field(field)
}

#[cfg(feature = "sqlx-support")]
impl<'r> sqlx::FromRow<'r, sqlx::sqlite::SqliteRow> for PlaylistTrackView {
    /// Decode a joined playlist row
    ///
    /// Expects `track_id`, `track_name`, `album_title`, `artist_name`,
    /// `is_favorite` (0/1) and `playlist_id`. Rows carry no back-references.
    fn from_row(row: &'r sqlx::sqlite::SqliteRow) -> std::result::Result<Self, sqlx::Error> {
        use sqlx::Row;

        Ok(Self {
            track_id: row.try_get("track_id")?,
            track_name: row.try_get("track_name")?,
            album_title: row.try_get("album_title")?,
            artist_name: row.try_get("artist_name")?,
            is_favorite: row.try_get::<i64, _>("is_favorite")? != 0,
            playlist_id: row.try_get("playlist_id")?,
            playlists: BTreeSet::new(),
        })
    }
}
