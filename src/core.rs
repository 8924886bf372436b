use crate::artists::ArtistIndex;
use crate::error::CatalogError;
use crate::graph::SimilarityGraph;
use crate::model::Song;
use crate::playlist::Playlist;
use crate::queue::{PlayHistory, UpNextQueue};
use crate::search::TitleIndex;
use crate::store::Library;

/// Owns the catalog, every derived index, and the playback state. The
/// presentation layer talks only to this type: ids and field values go
/// in, song clones or errors come out.
#[derive(Debug, Default)]
pub struct JukeboxCore {
    pub library: Library,
    pub playlist: Playlist,
    pub history: PlayHistory,
    pub up_next: UpNextQueue,
    pub artists: ArtistIndex,
    pub titles: TitleIndex,
    pub graph: SimilarityGraph,
    pub current_song: Option<Song>,
    pub in_playlist_mode: bool,
}

impl JukeboxCore {
    pub fn new() -> Self {
        Self::default()
    }

    // ----- catalog mutation -----

    pub fn add_song(&mut self, song: Song) -> Result<(), CatalogError> {
        self.library.add(song.clone())?;
        self.artists.add(&song);
        self.titles.insert(&song);
        self.graph.add_node(&song.id);

        let similar: Vec<String> = self
            .library
            .iter()
            .filter(|other| song.is_similar_to(other))
            .map(|other| other.id.clone())
            .collect();
        for other_id in similar {
            self.graph.add_edge(&song.id, &other_id);
        }
        Ok(())
    }

    pub fn update_song(&mut self, id: &str, new_song: Song) -> Result<(), CatalogError> {
        self.library.update(id, new_song)?;
        self.rebuild_indexes();
        Ok(())
    }

    pub fn delete_song(&mut self, id: &str) -> Result<Song, CatalogError> {
        let removed = self
            .library
            .delete(id)
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))?;
        // The song may or may not be on the playlist; absence is fine here.
        let _ = self.playlist.remove(id);
        self.rebuild_indexes();
        Ok(removed)
    }

    /// Derived indexes are rebuilt wholesale after update/delete so stale
    /// keys and edges never survive a mutation. The rebuild replays the
    /// library oldest-first, reproducing the incremental add sequence:
    /// artist groups stay first-seen-ordered with their newest song at the
    /// head, and duplicate folded titles keep the newest record.
    fn rebuild_indexes(&mut self) {
        self.artists.clear();
        self.titles.clear();
        self.graph.clear();

        for song in self.library.iter().rev() {
            self.artists.add(song);
            self.titles.insert(song);
            self.graph.add_node(&song.id);
        }

        let songs: Vec<Song> = self.library.iter().rev().cloned().collect();
        for (i, a) in songs.iter().enumerate() {
            for b in songs.iter().skip(i + 1) {
                if a.is_similar_to(b) {
                    self.graph.add_edge(&a.id, &b.id);
                }
            }
        }
    }

    // ----- queries -----

    pub fn songs(&self) -> impl Iterator<Item = &Song> {
        self.library.iter()
    }

    pub fn search_title(&self, title: &str) -> Option<&Song> {
        self.titles.search(title)
    }

    // ----- playlist & up-next management -----

    pub fn add_to_playlist(&mut self, id: &str) -> Result<(), CatalogError> {
        let song = self
            .library
            .find_by_id(id)
            .cloned()
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))?;
        self.playlist.append(song);
        Ok(())
    }

    pub fn remove_from_playlist(&mut self, id: &str) -> Result<Song, CatalogError> {
        self.playlist.remove(id)
    }

    pub fn enqueue_up_next(&mut self, id: &str) -> Result<(), CatalogError> {
        let song = self
            .library
            .find_by_id(id)
            .cloned()
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))?;
        self.up_next.enqueue(song);
        Ok(())
    }

    // ----- playback -----

    /// Switches playback to `song`, remembering the interrupted song on
    /// the history stack.
    pub fn play_song(&mut self, song: Song, from_playlist: bool) -> Song {
        if let Some(previous) = self.current_song.take() {
            self.history.push(previous);
        }
        self.current_song = Some(song.clone());
        self.in_playlist_mode = from_playlist;
        song
    }

    pub fn play_by_id(&mut self, id: &str, from_playlist: bool) -> Result<Song, CatalogError> {
        let song = self
            .library
            .find_by_id(id)
            .cloned()
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))?;
        Ok(self.play_song(song, from_playlist))
    }

    /// Sets the playlist cursor to `index` and plays that entry in
    /// playlist mode.
    pub fn play_from_playlist(&mut self, index: usize) -> Result<Song, CatalogError> {
        let song = self
            .playlist
            .set_cursor(index)
            .cloned()
            .ok_or_else(|| CatalogError::NotFound(format!("playlist index {index}")))?;
        Ok(self.play_song(song, true))
    }

    /// Leaves `in_playlist_mode` alone so a later play_next can resume
    /// from the playlist cursor.
    pub fn stop(&mut self) {
        self.current_song = None;
    }

    /// Decision order: playlist cursor successor, then the up-next queue,
    /// then similar songs of the current one, then the library head.
    pub fn play_next(&mut self) -> Option<Song> {
        if self.in_playlist_mode && self.playlist.current().is_some() {
            if let Some(song) = self.playlist.advance().cloned() {
                return Some(self.play_song(song, true));
            }
        }

        if let Some(song) = self.up_next.dequeue() {
            return Some(self.play_song(song, false));
        }

        let similar = match &self.current_song {
            Some(current) => self
                .graph
                .neighbors(&current.id)
                .find_map(|id| self.library.find_by_id(id))
                .cloned(),
            None => None,
        };
        if let Some(song) = similar {
            return Some(self.play_song(song, false));
        }

        if let Some(song) = self.library.first().cloned() {
            return Some(self.play_song(song, false));
        }
        None
    }

    /// Playlist cursor predecessor while in playlist mode, otherwise the
    /// history stack. Resuming from history does not push the interrupted
    /// song back, so repeated calls walk strictly backwards.
    pub fn play_prev(&mut self) -> Option<Song> {
        if self.in_playlist_mode && self.playlist.current().is_some() {
            if let Some(song) = self.playlist.retreat().cloned() {
                return Some(self.play_song(song, true));
            }
        }

        let song = self.history.pop()?;
        self.current_song = Some(song.clone());
        self.in_playlist_mode = false;
        Some(song)
    }
}
