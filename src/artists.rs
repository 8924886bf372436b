use crate::model::Song;
use indexmap::IndexMap;

/// Groups songs by exact artist name. Groups keep first-seen order,
/// songs within a group are most-recently-added-first, and a group
/// disappears once its last song is removed.
#[derive(Debug, Default)]
pub struct ArtistIndex {
    groups: IndexMap<String, Vec<Song>>,
}

impl ArtistIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, song: &Song) {
        self.groups
            .entry(song.artist.clone())
            .or_default()
            .insert(0, song.clone());
    }

    pub fn remove(&mut self, song: &Song) {
        let Some(group) = self.groups.get_mut(&song.artist) else {
            return;
        };
        if let Some(pos) = group.iter().position(|entry| entry.id == song.id) {
            group.remove(pos);
        }
        if group.is_empty() {
            self.groups.shift_remove(&song.artist);
        }
    }

    pub fn songs_for(&self, artist: &str) -> Option<&[Song]> {
        self.groups.get(artist).map(Vec::as_slice)
    }

    pub fn artists(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    pub fn clear(&mut self) {
        self.groups.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
