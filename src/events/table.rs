//! Per-trigger event table.
//!
//! A fixed-capacity, open-addressed hash table mapping an [`EventName`] to
//! the set of listeners registered for it. Collisions are resolved by
//! linear probing from `hash_key % capacity`, wrapping once around the
//! table.
//!
//! ## Slot Reclamation
//!
//! When the last listener leaves a slot, the slot is cleared completely
//! (name and storage) so it can later serve a different name. There are no
//! probe-chain tombstones: a lookup always scans the full probe sequence
//! until it finds the name, so clearing a slot in the middle of a chain
//! never hides names stored after it.
//!
//! ## Listener Cells
//!
//! Each slot keeps its listeners in a sparse sequence of cells. Removing a
//! listener empties its cell instead of shifting the rest, so indices stay
//! stable; the lowest empty cell is reused by the next insertion.

use smallvec::SmallVec;

use crate::core::ListenerId;

use super::name::EventName;

/// Result of probing the table for a name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlotLookup {
    /// The name occupies this slot.
    Found(usize),
    /// The name is absent; this is the first vacant slot on its probe path.
    VacantAt(usize),
    /// The name is absent and every slot is taken.
    Full,
}

/// Outcome of adding a listener to a named slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InsertOutcome {
    /// The listener was added.
    Added,
    /// The listener was already registered for this name.
    AlreadyPresent,
    /// The name had no slot and none could be created.
    TableFull,
}

/// One table entry: an event name and its listeners.
#[derive(Clone, Debug, Default)]
pub struct EventSlot {
    name: Option<EventName>,
    cells: SmallVec<[Option<ListenerId>; 4]>,
    live: usize,
}

impl EventSlot {
    /// The name stored here, `None` if the slot is vacant.
    #[must_use]
    pub fn name(&self) -> Option<EventName> {
        self.name
    }

    /// Check if the slot holds no name.
    #[must_use]
    pub fn is_vacant(&self) -> bool {
        self.name.is_none()
    }

    /// Number of occupied cells.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.live
    }

    /// All cells, including empty ones.
    #[must_use]
    pub fn cells(&self) -> &[Option<ListenerId>] {
        &self.cells
    }

    /// Occupied cells in index order.
    pub fn listeners(&self) -> impl Iterator<Item = ListenerId> + '_ {
        self.cells.iter().flatten().copied()
    }

    /// Check if a listener occupies a cell.
    #[must_use]
    pub fn contains(&self, listener: ListenerId) -> bool {
        self.cells.contains(&Some(listener))
    }

    fn claim(&mut self, name: EventName, listener: ListenerId) {
        self.name = Some(name);
        self.cells.clear();
        self.cells.push(Some(listener));
        self.live = 1;
    }

    fn add(&mut self, listener: ListenerId) -> InsertOutcome {
        if self.contains(listener) {
            return InsertOutcome::AlreadyPresent;
        }
        match self.cells.iter_mut().find(|c| c.is_none()) {
            Some(cell) => *cell = Some(listener),
            None => self.cells.push(Some(listener)),
        }
        self.live += 1;
        InsertOutcome::Added
    }

    /// Empty the listener's cell. Returns whether it was present.
    fn remove(&mut self, listener: ListenerId) -> bool {
        let Some(cell) = self.cells.iter_mut().find(|c| **c == Some(listener)) else {
            return false;
        };
        *cell = None;
        self.live -= 1;
        if self.live == 0 {
            tracing::trace!(name = ?self.name, "reclaiming event slot");
            *self = Self::default();
        }
        true
    }
}

/// Open-addressed event table of fixed capacity.
#[derive(Clone, Debug)]
pub struct EventTable {
    slots: Vec<EventSlot>,
}

impl EventTable {
    /// Create an empty table with `capacity` slots.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is 0.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "Event table needs at least 1 slot");
        Self {
            slots: vec![EventSlot::default(); capacity],
        }
    }

    /// Number of slots.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of slots holding a name.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| !s.is_vacant()).count()
    }

    /// Check if no slot holds a name.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(EventSlot::is_vacant)
    }

    /// Probe for `name`.
    ///
    /// Visits every slot once, starting at the name's home slot. Returns the
    /// slot holding the name, else the first vacant slot seen, else `Full`.
    #[must_use]
    pub fn find_slot(&self, name: EventName) -> SlotLookup {
        let capacity = self.slots.len();
        let home = name.hash_key() as usize % capacity;
        let mut vacant = None;

        for step in 0..capacity {
            let index = (home + step) % capacity;
            let slot = &self.slots[index];
            if slot.name == Some(name) {
                return SlotLookup::Found(index);
            }
            if vacant.is_none() && slot.is_vacant() {
                vacant = Some(index);
            }
        }

        vacant.map_or(SlotLookup::Full, SlotLookup::VacantAt)
    }

    /// Get the slot for a name, if present.
    #[must_use]
    pub fn get(&self, name: EventName) -> Option<&EventSlot> {
        match self.find_slot(name) {
            SlotLookup::Found(index) => Some(&self.slots[index]),
            _ => None,
        }
    }

    /// Get a slot by index.
    #[must_use]
    pub fn slot(&self, index: usize) -> Option<&EventSlot> {
        self.slots.get(index)
    }

    /// Check if `listener` is registered for `name`.
    #[must_use]
    pub fn contains(&self, name: EventName, listener: ListenerId) -> bool {
        self.get(name).is_some_and(|s| s.contains(listener))
    }

    /// Register `listener` for `name`, creating the slot if needed.
    pub fn insert(&mut self, name: EventName, listener: ListenerId) -> InsertOutcome {
        match self.find_slot(name) {
            SlotLookup::Found(index) => self.slots[index].add(listener),
            SlotLookup::VacantAt(index) => {
                self.slots[index].claim(name, listener);
                InsertOutcome::Added
            }
            SlotLookup::Full => InsertOutcome::TableFull,
        }
    }

    /// Unregister `listener` from `name`. Returns whether it was registered.
    pub fn remove(&mut self, name: EventName, listener: ListenerId) -> bool {
        match self.find_slot(name) {
            SlotLookup::Found(index) => self.slots[index].remove(listener),
            _ => false,
        }
    }

    /// Unregister `listener` from every name. Returns how many slots it left.
    pub fn remove_everywhere(&mut self, listener: ListenerId) -> usize {
        self.slots
            .iter_mut()
            .filter(|s| !s.is_vacant())
            .map(|s| s.remove(listener))
            .filter(|&removed| removed)
            .count()
    }

    /// Listeners registered for `name`, in cell order.
    #[must_use]
    pub fn listeners(&self, name: EventName) -> Vec<ListenerId> {
        self.get(name)
            .map(|s| s.listeners().collect())
            .unwrap_or_default()
    }

    /// Names currently holding a slot, in slot order.
    pub fn names(&self) -> impl Iterator<Item = EventName> + '_ {
        self.slots.iter().filter_map(EventSlot::name)
    }

    /// Names `listener` is registered for, in slot order.
    pub fn names_for(&self, listener: ListenerId) -> impl Iterator<Item = EventName> + '_ {
        self.slots
            .iter()
            .filter(move |s| s.contains(listener))
            .filter_map(EventSlot::name)
    }
}
