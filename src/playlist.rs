use crate::error::CatalogError;
use crate::model::Song;

/// Ordered playback sequence with a cursor, independent of library order.
/// The cursor survives removals by sliding to the removed entry's
/// successor, then predecessor, before giving up.
#[derive(Debug, Default)]
pub struct Playlist {
    entries: Vec<Song>,
    cursor: Option<usize>,
}

impl Playlist {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, song: Song) {
        self.entries.push(song);
    }

    pub fn remove(&mut self, id: &str) -> Result<Song, CatalogError> {
        let pos = self
            .entries
            .iter()
            .position(|song| song.id == id)
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))?;

        let removed = self.entries.remove(pos);
        self.cursor = match self.cursor {
            Some(cursor) if cursor == pos => {
                if pos < self.entries.len() {
                    Some(pos)
                } else if pos > 0 {
                    Some(pos - 1)
                } else {
                    None
                }
            }
            Some(cursor) if cursor > pos => Some(cursor - 1),
            other => other,
        };
        Ok(removed)
    }

    /// 0-based from the head. Out of range unsets the cursor.
    pub fn set_cursor(&mut self, index: usize) -> Option<&Song> {
        if index < self.entries.len() {
            self.cursor = Some(index);
            self.entries.get(index)
        } else {
            self.cursor = None;
            None
        }
    }

    pub fn advance(&mut self) -> Option<&Song> {
        let cursor = self.cursor?;
        if cursor + 1 < self.entries.len() {
            self.cursor = Some(cursor + 1);
            self.entries.get(cursor + 1)
        } else {
            None
        }
    }

    pub fn retreat(&mut self) -> Option<&Song> {
        let cursor = self.cursor?;
        if cursor > 0 {
            self.cursor = Some(cursor - 1);
            self.entries.get(cursor - 1)
        } else {
            None
        }
    }

    pub fn current(&self) -> Option<&Song> {
        self.entries.get(self.cursor?)
    }

    pub fn cursor_position(&self) -> Option<usize> {
        self.cursor
    }

    pub fn iter(&self) -> impl Iterator<Item = &Song> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
