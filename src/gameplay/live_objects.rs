//! Insertion-ordered FIFO of live falling objects.

use std::collections::VecDeque;

#[derive(Debug, Clone)]
pub struct LiveObjects<T> {
    items: VecDeque<T>,
}

impl<T> Default for LiveObjects<T> {
    fn default() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }
}

impl<T> LiveObjects<T> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn push_back(&mut self, item: T) {
        self.items.push_back(item);
    }

    /// Oldest surviving entry, or `None` when empty.
    pub fn retire_oldest(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    /// Retire from the head until `len() <= cap`; oldest first in the returned vec.
    pub fn cull_to(&mut self, cap: usize) -> Vec<T> {
        let excess = self.items.len().saturating_sub(cap);
        self.items.drain(..excess).collect()
    }

    pub fn drain_all(&mut self) -> Vec<T> {
        self.items.drain(..).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }
}
