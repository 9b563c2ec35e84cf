//! Listeners: event sinks.
//!
//! ## Key Components
//!
//! - [`Listener`]: callback, data hook, auto-delete mode and trigger back-references
//! - [`AutoDeleteMode`]: what happens once the last registration is gone
//! - [`Callback`]: anything that can receive an [`Event`]
//!
//! ## Lifecycle
//!
//! ```text
//! Unregistered --listen--> Registered --last trigger deleted--> Drained
//!                          |        ^                              |
//!                          +--------+ listen / unlisten            |
//!                                                                  v
//!        Manual: idles until deleted or registered again
//!        NotifyOnly: callback gets `_LAu`, may delete itself
//!        AutoFree: the hub deletes it
//! ```

mod callback;
mod listener;

pub use callback::{Callback, Event, Payload};
pub use listener::{AutoDeleteMode, Listener};
