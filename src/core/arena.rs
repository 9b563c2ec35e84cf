//! Generational arena.
//!
//! Objects are stored in a flat `Vec` and referenced by handle. Vacated
//! slots are recycled through a free list; each reuse bumps the slot's
//! generation so handles to the previous occupant go stale instead of
//! silently aliasing the new one.

use super::ids::{ListenerId, TriggerId};

/// A handle type that can address an [`Arena`] slot.
pub trait ArenaKey: Copy {
    /// Build a handle from raw parts.
    fn from_parts(index: u32, generation: u32) -> Self;

    /// Slot index.
    fn slot(self) -> u32;

    /// Slot generation.
    fn stamp(self) -> u32;
}

impl ArenaKey for TriggerId {
    fn from_parts(index: u32, generation: u32) -> Self {
        Self::new(index, generation)
    }

    fn slot(self) -> u32 {
        self.index()
    }

    fn stamp(self) -> u32 {
        self.generation()
    }
}

impl ArenaKey for ListenerId {
    fn from_parts(index: u32, generation: u32) -> Self {
        Self::new(index, generation)
    }

    fn slot(self) -> u32 {
        self.index()
    }

    fn stamp(self) -> u32 {
        self.generation()
    }
}

#[derive(Clone, Debug)]
struct Entry<T> {
    generation: u32,
    value: Option<T>,
    /// Set while the value is checked out with [`Arena::take`].
    reserved: bool,
}

/// Arena of `T` addressed by generation-checked handles of type `K`.
#[derive(Clone, Debug)]
pub struct Arena<K, T> {
    entries: Vec<Entry<T>>,
    free: Vec<u32>,
    len: usize,
    _key: std::marker::PhantomData<K>,
}

impl<K: ArenaKey, T> Default for Arena<K, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: ArenaKey, T> Arena<K, T> {
    /// Create an empty arena.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            free: Vec::new(),
            len: 0,
            _key: std::marker::PhantomData,
        }
    }

    /// Store a value, returning its handle.
    pub fn insert(&mut self, value: T) -> K {
        self.len += 1;
        if let Some(index) = self.free.pop() {
            let entry = &mut self.entries[index as usize];
            entry.value = Some(value);
            return K::from_parts(index, entry.generation);
        }

        let index = self.entries.len() as u32;
        self.entries.push(Entry {
            generation: 0,
            value: Some(value),
            reserved: false,
        });
        K::from_parts(index, 0)
    }

    fn entry(&self, key: K) -> Option<&Entry<T>> {
        self.entries
            .get(key.slot() as usize)
            .filter(|e| e.generation == key.stamp())
    }

    fn entry_mut(&mut self, key: K) -> Option<&mut Entry<T>> {
        self.entries
            .get_mut(key.slot() as usize)
            .filter(|e| e.generation == key.stamp())
    }

    /// Get a value by handle. `None` for stale or checked-out handles.
    #[inline]
    #[must_use]
    pub fn get(&self, key: K) -> Option<&T> {
        self.entry(key).and_then(|e| e.value.as_ref())
    }

    /// Get a mutable value by handle.
    #[inline]
    pub fn get_mut(&mut self, key: K) -> Option<&mut T> {
        self.entry_mut(key).and_then(|e| e.value.as_mut())
    }

    /// Check whether a handle names a live value.
    #[inline]
    #[must_use]
    pub fn contains(&self, key: K) -> bool {
        self.get(key).is_some()
    }

    /// Remove a value, invalidating every copy of its handle.
    pub fn remove(&mut self, key: K) -> Option<T> {
        let entry = self.entry_mut(key)?;
        let value = entry.value.take()?;
        entry.generation = entry.generation.wrapping_add(1);
        self.free.push(key.slot());
        self.len -= 1;
        Some(value)
    }

    /// Check a value out without releasing its slot.
    ///
    /// While checked out the handle resolves to nothing, but it stays
    /// valid for [`restore`](Self::restore).
    pub fn take(&mut self, key: K) -> Option<T> {
        let entry = self.entry_mut(key)?;
        let value = entry.value.take()?;
        entry.reserved = true;
        self.len -= 1;
        Some(value)
    }

    /// Return a value checked out with [`take`](Self::take).
    ///
    /// Hands the value back if the slot is not reserved under this handle.
    pub fn restore(&mut self, key: K, value: T) -> Result<(), T> {
        match self.entry_mut(key) {
            Some(entry) if entry.reserved && entry.value.is_none() => {
                entry.reserved = false;
                entry.value = Some(value);
                self.len += 1;
                Ok(())
            }
            _ => Err(value),
        }
    }

    /// Free a slot checked out with [`take`](Self::take) without restoring it.
    pub fn release(&mut self, key: K) -> bool {
        match self.entry_mut(key) {
            Some(entry) if entry.reserved => {
                entry.reserved = false;
                entry.generation = entry.generation.wrapping_add(1);
                self.free.push(key.slot());
                true
            }
            _ => false,
        }
    }

    /// Number of live values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the arena holds no live values.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Iterate live values with their handles.
    pub fn iter(&self) -> impl Iterator<Item = (K, &T)> {
        self.entries.iter().enumerate().filter_map(|(i, e)| {
            e.value
                .as_ref()
                .map(|v| (K::from_parts(i as u32, e.generation), v))
        })
    }
}
