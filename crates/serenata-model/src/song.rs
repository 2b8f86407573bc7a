use crate::color::ColorPolicy;
use crate::delay::DelayTable;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SongError {
    #[error("lyrics cannot be empty")]
    EmptyLyrics,
}

/// Title and artist as fetched from a song page or read from the cache.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SongMeta {
    pub title: String,
    pub artist: String,
}

impl SongMeta {
    pub fn new(title: impl Into<String>, artist: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
        }
    }
}

/// Resolved song information for one run: metadata plus the line count of
/// the lyrics being played. Immutable once constructed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SongInfo {
    pub total_lines: usize,
    pub title: String,
    pub artist: String,
}

impl SongInfo {
    pub fn new(total_lines: usize, meta: SongMeta) -> Self {
        Self {
            total_lines,
            title: meta.title,
            artist: meta.artist,
        }
    }
}

/// A playable song: lyrics, timing, coloring, and metadata fallbacks.
///
/// `title` and `artist` here are the hard-coded fallbacks used when both
/// the cache and the network fetch come up empty; the authoritative values
/// come from resolving `url`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Song {
    pub title: String,
    pub artist: String,
    /// Song page the metadata is fetched from (and the cache is keyed by).
    pub url: String,
    pub lines: Vec<String>,
    #[serde(default)]
    pub delays: DelayTable,
    pub color_policy: ColorPolicy,
}

impl Song {
    /// Check the song is renderable. Empty lyrics are the one fatal
    /// construction error in the system.
    pub fn validate(&self) -> Result<(), SongError> {
        if self.lines.is_empty() {
            return Err(SongError::EmptyLyrics);
        }
        Ok(())
    }

    /// The fallback metadata baked into the song definition.
    pub fn fallback_meta(&self) -> SongMeta {
        SongMeta::new(self.title.clone(), self.artist.clone())
    }
}
