//! Fixed-capacity slot storage with index handles
//!
//! Balls and pickups have hard caps. A slot is either occupied (the entity is
//! active) or free; activation takes the first free slot.

use serde::{Deserialize, Serialize};

/// Handle to an occupied slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SlotId(usize);

#[derive(Debug, Clone)]
pub struct Slots<T> {
    entries: Vec<Option<T>>,
}

impl<T> Slots<T> {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: std::iter::repeat_with(|| None).take(capacity).collect(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.entries.len()
    }

    /// Number of occupied slots
    pub fn len(&self) -> usize {
        self.entries.iter().filter(|e| e.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.iter().all(|e| e.is_none())
    }

    pub fn free_count(&self) -> usize {
        self.capacity() - self.len()
    }

    /// Place a value in the first free slot; `None` when full
    pub fn insert(&mut self, value: T) -> Option<SlotId> {
        let idx = self.entries.iter().position(|e| e.is_none())?;
        self.entries[idx] = Some(value);
        Some(SlotId(idx))
    }

    pub fn remove(&mut self, id: SlotId) -> Option<T> {
        self.entries.get_mut(id.0).and_then(Option::take)
    }

    pub fn get(&self, id: SlotId) -> Option<&T> {
        self.entries.get(id.0).and_then(Option::as_ref)
    }

    pub fn clear(&mut self) {
        self.entries.iter_mut().for_each(|e| *e = None);
    }

    /// Occupied slots in slot order
    pub fn iter(&self) -> impl Iterator<Item = (SlotId, &T)> {
        self.entries
            .iter()
            .enumerate()
            .filter_map(|(i, e)| e.as_ref().map(|v| (SlotId(i), v)))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (SlotId, &mut T)> {
        self.entries
            .iter_mut()
            .enumerate()
            .filter_map(|(i, e)| e.as_mut().map(|v| (SlotId(i), v)))
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.entries.iter().filter_map(Option::as_ref)
    }

    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.entries.iter_mut().filter_map(Option::as_mut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_until_full() {
        let mut slots = Slots::with_capacity(2);
        assert!(slots.is_empty());
        let a = slots.insert('a').expect("free slot");
        let b = slots.insert('b').expect("free slot");
        assert_ne!(a, b);
        assert_eq!(slots.insert('c'), None);
        assert_eq!(slots.len(), 2);
        assert_eq!(slots.free_count(), 0);
    }

    #[test]
    fn test_remove_frees_slot_for_reuse() {
        let mut slots = Slots::with_capacity(3);
        let a = slots.insert(1).expect("free slot");
        let _b = slots.insert(2).expect("free slot");
        assert_eq!(slots.remove(a), Some(1));
        assert_eq!(slots.remove(a), None);
        // First free slot is reused
        assert_eq!(slots.insert(3), Some(a));
        assert_eq!(slots.values().copied().collect::<Vec<_>>(), vec![3, 2]);
    }

    #[test]
    fn test_iter_mut_and_clear() {
        let mut slots = Slots::with_capacity(4);
        slots.insert(1);
        slots.insert(2);
        for (_, v) in slots.iter_mut() {
            *v *= 10;
        }
        assert_eq!(slots.values().sum::<i32>(), 30);
        slots.clear();
        assert!(slots.is_empty());
        assert_eq!(slots.capacity(), 4);
    }
}
