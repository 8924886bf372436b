use crate::error::CatalogError;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    pub id: String,
    pub title: String,
    pub artist: String,
    pub album: String,
    // Opaque text, never parsed as a number.
    pub year: String,
    pub genre: String,
}

impl Song {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        artist: impl Into<String>,
        album: impl Into<String>,
        year: impl Into<String>,
        genre: impl Into<String>,
    ) -> Result<Self, CatalogError> {
        let song = Self {
            id: id.into(),
            title: title.into(),
            artist: artist.into(),
            album: album.into(),
            year: year.into(),
            genre: genre.into(),
        };

        if song.id.trim().is_empty() {
            return Err(CatalogError::InvalidInput(String::from(
                "song id must not be empty",
            )));
        }
        if song.title.trim().is_empty() {
            return Err(CatalogError::InvalidInput(String::from(
                "song title must not be empty",
            )));
        }
        Ok(song)
    }

    // Shared artist or shared genre, exact string match. Never similar to itself.
    pub fn is_similar_to(&self, other: &Song) -> bool {
        self.id != other.id && (self.artist == other.artist || self.genre == other.genre)
    }
}

impl fmt::Display for Song {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {} ({})", self.id, self.title, self.artist)
    }
}
