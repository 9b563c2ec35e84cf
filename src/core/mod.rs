//! Core types: handles, the generational arena, configuration, errors.
//!
//! Nothing here knows about events or callbacks; the `events`, `listeners`
//! and `hub` modules build on these pieces.

pub mod arena;
pub mod config;
pub mod error;
pub mod ids;

pub use arena::{Arena, ArenaKey};
pub use config::{HubConfig, DEFAULT_TABLE_SIZE};
pub use error::{Result, TriggerError};
pub use ids::{ListenerId, TriggerId};
