use crate::error::CatalogError;
use crate::model::Song;
use std::collections::VecDeque;

/// Canonical collection of every song the system knows about. Newest
/// additions sit at the head; every other structure holds clones or ids
/// that are resynchronized against this one.
#[derive(Debug, Default)]
pub struct Library {
    songs: VecDeque<Song>,
}

impl Library {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, song: Song) -> Result<(), CatalogError> {
        if self.find_by_id(&song.id).is_some() {
            return Err(CatalogError::DuplicateId(song.id));
        }
        self.songs.push_front(song);
        Ok(())
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Song> {
        self.songs.iter().find(|song| song.id == id)
    }

    /// Replaces the record at the position matching `id`; the position
    /// itself is preserved.
    pub fn update(&mut self, id: &str, new_song: Song) -> Result<(), CatalogError> {
        match self.songs.iter_mut().find(|song| song.id == id) {
            Some(slot) => {
                *slot = new_song;
                Ok(())
            }
            None => Err(CatalogError::NotFound(id.to_string())),
        }
    }

    pub fn delete(&mut self, id: &str) -> Option<Song> {
        let pos = self.songs.iter().position(|song| song.id == id)?;
        self.songs.remove(pos)
    }

    /// Head-to-tail traversal, most recently added first. Reversible, so
    /// index rebuilds can replay the original insertion order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Song> {
        self.songs.iter()
    }

    pub fn first(&self) -> Option<&Song> {
        self.songs.front()
    }

    pub fn len(&self) -> usize {
        self.songs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }
}
