use crate::model::Song;
use std::collections::VecDeque;

/// LIFO record of songs that were playing before the current one.
/// Unbounded, duplicates allowed.
#[derive(Debug, Default)]
pub struct PlayHistory {
    entries: Vec<Song>,
}

impl PlayHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, song: Song) {
        self.entries.push(song);
    }

    pub fn pop(&mut self) -> Option<Song> {
        self.entries.pop()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// FIFO of manually queued songs, consumed ahead of every other
/// play-next policy except an active playlist cursor.
#[derive(Debug, Default)]
pub struct UpNextQueue {
    entries: VecDeque<Song>,
}

impl UpNextQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enqueue(&mut self, song: Song) {
        self.entries.push_back(song);
    }

    pub fn dequeue(&mut self) -> Option<Song> {
        self.entries.pop_front()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn song(id: &str) -> Song {
        Song::new(id, format!("Title {id}"), "X", "", "", "Rock").unwrap()
    }

    #[test]
    fn history_pops_in_reverse_push_order() {
        let mut history = PlayHistory::new();
        history.push(song("a"));
        history.push(song("b"));
        history.push(song("a"));

        assert_eq!(history.pop().map(|s| s.id), Some(String::from("a")));
        assert_eq!(history.pop().map(|s| s.id), Some(String::from("b")));
        assert_eq!(history.pop().map(|s| s.id), Some(String::from("a")));
        assert_eq!(history.pop(), None);
    }

    #[test]
    fn queue_dequeues_oldest_first() {
        let mut queue = UpNextQueue::new();
        assert!(queue.is_empty());

        queue.enqueue(song("a"));
        queue.enqueue(song("b"));

        assert_eq!(queue.dequeue().map(|s| s.id), Some(String::from("a")));
        assert_eq!(queue.dequeue().map(|s| s.id), Some(String::from("b")));
        assert_eq!(queue.dequeue(), None);
    }
}
