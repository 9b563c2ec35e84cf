use crate::events::EventName;

use super::ids::{ListenerId, TriggerId};

/// Errors reported by hub operations.
///
/// None of these are fatal: a failed operation leaves the hub consistent.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TriggerError {
    #[error("event table of {trigger} is full, cannot add '{name}'")]
    TableFull { trigger: TriggerId, name: EventName },

    #[error("unknown or deleted trigger: {0}")]
    UnknownTrigger(TriggerId),

    #[error("unknown or deleted listener: {0}")]
    UnknownListener(ListenerId),

    #[error("event name '{0}' is reserved")]
    ReservedEvent(EventName),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, TriggerError>;
