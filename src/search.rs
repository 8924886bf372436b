use crate::model::Song;
use std::collections::BTreeMap;

/// Exact-match title lookup over case-folded keys, with ordered
/// traversal. Duplicate folded titles are last-write-wins, so the index
/// holds exactly one song per distinct folded title.
#[derive(Debug, Default)]
pub struct TitleIndex {
    entries: BTreeMap<String, Song>,
}

fn fold_title(title: &str) -> String {
    title.to_lowercase()
}

impl TitleIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, song: &Song) {
        self.entries.insert(fold_title(&song.title), song.clone());
    }

    pub fn search(&self, title: &str) -> Option<&Song> {
        self.entries.get(&fold_title(title))
    }

    /// Songs in folded-title order.
    pub fn iter(&self) -> impl Iterator<Item = &Song> {
        self.entries.values()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
