//! Trigger storage.
//!
//! A trigger is an event source. All it owns is its event table; every
//! listener registered on it for any name is also registered for the
//! reserved [`EventName::TRIGGER_DELETED`] name, so walking that one slot
//! reaches everyone who must detach when the trigger goes away.

use crate::core::ListenerId;
use crate::events::{EventName, EventTable};

/// An event source owned by a [`Hub`](crate::Hub).
#[derive(Clone, Debug)]
pub struct Trigger {
    table: EventTable,
}

impl Trigger {
    /// Create a trigger with an empty table of `table_size` slots.
    pub fn new(table_size: usize) -> Self {
        Self {
            table: EventTable::new(table_size),
        }
    }

    /// The trigger's event table.
    #[must_use]
    pub fn table(&self) -> &EventTable {
        &self.table
    }

    pub(crate) fn table_mut(&mut self) -> &mut EventTable {
        &mut self.table
    }

    /// Listeners that will be told when this trigger is deleted.
    #[must_use]
    pub fn watchers(&self) -> Vec<ListenerId> {
        self.table.listeners(EventName::TRIGGER_DELETED)
    }

    /// Application event names with at least one listener, in slot order.
    #[must_use]
    pub fn event_names(&self) -> Vec<EventName> {
        self.table
            .names()
            .filter(|name| *name != EventName::TRIGGER_DELETED)
            .collect()
    }
}
