//! # trigger-hub
//!
//! An in-process publish/subscribe dispatcher. Triggers emit named events;
//! listeners register for event names on specific triggers and get a
//! callback when a matching event fires.
//!
//! ## Design Principles
//!
//! 1. **Symmetric Lifecycle**: Triggers know their listeners and listeners
//!    know their triggers. Deleting either side, in any order, removes every
//!    cross-reference.
//!
//! 2. **Handles, Not Pointers**: The [`Hub`] owns everything in generational
//!    arenas. A deleted object's handle goes stale and is rejected, never
//!    followed.
//!
//! 3. **Soft Failures**: Duplicate registrations are no-ops, unknown
//!    unregistrations return `false`, a full event table is an `Err` and a
//!    log line. Nothing panics for normal traffic.
//!
//! ## Architecture
//!
//! - **Event Names**: 4-byte symbols; only the first four bytes of a name
//!   count. Three names are reserved for lifecycle plumbing.
//!
//! - **Event Table**: each trigger owns a fixed-capacity open-addressed
//!   table from name to a sparse list of listeners.
//!
//! - **Auto-Delete**: a listener may opt into being deleted (or told to
//!   delete itself) once it is no longer registered on any trigger.
//!
//! Everything is single-threaded and synchronous: `fire` runs callbacks on
//! the calling thread before returning.
//!
//! ## Modules
//!
//! - `core`: Handles, generational arena, configuration, errors
//! - `events`: Event names and the per-trigger event table
//! - `listeners`: Listener state, callbacks, auto-delete modes
//! - `triggers`: Trigger state
//! - `hub`: The owner of both, and the registration/dispatch/teardown protocol

pub mod core;
pub mod events;
pub mod hub;
pub mod listeners;
pub mod triggers;

// Re-export commonly used types
pub use crate::core::{HubConfig, ListenerId, Result, TriggerError, TriggerId, DEFAULT_TABLE_SIZE};

pub use crate::events::{is_reserved_event_name, EventName, EventSlot, EventTable, SlotLookup};

pub use crate::listeners::{AutoDeleteMode, Callback, Event, Listener, Payload};

pub use crate::triggers::Trigger;

pub use crate::hub::Hub;
