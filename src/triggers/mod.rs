//! Triggers: event sources.
//!
//! A [`Trigger`] owns one [`EventTable`](crate::events::EventTable). Triggers
//! are created, fired and deleted through the [`Hub`](crate::Hub), which
//! keeps every trigger's table consistent with its listeners' back-references.

mod trigger;

pub use trigger::Trigger;
