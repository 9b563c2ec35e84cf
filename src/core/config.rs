//! Hub configuration.
//!
//! The only tunable is the per-trigger event table capacity: the number of
//! distinct event names (including the reserved deletion name) a single
//! trigger can track. Larger tables cost memory per trigger; smaller ones
//! lengthen probe sequences and fill up sooner.

use serde::{Deserialize, Serialize};

use super::error::{Result, TriggerError};

/// Default event table capacity per trigger.
pub const DEFAULT_TABLE_SIZE: usize = 256;

/// Hub configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HubConfig {
    /// Event table capacity of every trigger created by the hub (default 256).
    /// Must be at least 1.
    pub table_size: usize,
}

impl Default for HubConfig {
    fn default() -> Self {
        Self {
            table_size: DEFAULT_TABLE_SIZE,
        }
    }
}

impl HubConfig {
    /// Set the per-trigger event table capacity (builder pattern).
    #[must_use]
    pub fn with_table_size(mut self, table_size: usize) -> Self {
        self.table_size = table_size;
        self
    }

    /// Check the configuration is usable.
    pub fn validate(&self) -> Result<()> {
        if self.table_size == 0 {
            return Err(TriggerError::InvalidConfig(
                "table_size must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
