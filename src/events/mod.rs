//! Event names and the per-trigger event table.
//!
//! ## Key Components
//!
//! - [`EventName`]: 4-byte event symbol, including the reserved lifecycle names
//! - [`EventTable`]: open-addressed table from name to listener set
//! - [`EventSlot`]: one table entry with its sparse listener cells
//!
//! The hub never interprets event payloads; it only routes them by name.

mod name;
mod table;

pub use name::{is_reserved_event_name, EventName};
pub use table::{EventSlot, EventTable, InsertOutcome, SlotLookup};
