//! Listener storage.
//!
//! A listener holds its callback, an opaque data hook, its auto-delete mode
//! and back-references to every trigger it is registered on. Back-references
//! are kept in sparse cells: a released trigger empties its cell and the
//! lowest empty cell is reused, mirroring the event table's listener cells.

use std::rc::Rc;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::TriggerId;

use super::callback::Callback;

/// What happens to a listener once it is no longer registered on any trigger.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AutoDeleteMode {
    /// Nothing; the listener idles until deleted or registered again.
    #[default]
    Manual,
    /// The listener's callback receives the auto-deletion signal and
    /// decides whether to delete itself.
    NotifyOnly,
    /// The hub deletes the listener.
    AutoFree,
}

impl AutoDeleteMode {
    /// Mode selected by `allow_auto_delete(free_on_delete)`.
    #[must_use]
    pub const fn from_free_on_delete(free_on_delete: bool) -> Self {
        if free_on_delete {
            Self::AutoFree
        } else {
            Self::NotifyOnly
        }
    }

    /// Check if this is one of the auto-delete modes.
    #[must_use]
    pub const fn is_auto(self) -> bool {
        !matches!(self, Self::Manual)
    }
}

/// An event sink owned by a [`Hub`](crate::Hub).
pub struct Listener<P, D> {
    triggers: SmallVec<[Option<TriggerId>; 4]>,
    live: usize,
    pub(crate) callback: Option<Rc<dyn Callback<P, D>>>,
    pub(crate) data: Option<D>,
    pub(crate) mode: AutoDeleteMode,
}

impl<P, D> Default for Listener<P, D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P, D> Listener<P, D> {
    /// Create an unregistered listener with no callback or data.
    pub fn new() -> Self {
        Self {
            triggers: SmallVec::new(),
            live: 0,
            callback: None,
            data: None,
            mode: AutoDeleteMode::Manual,
        }
    }

    /// Data hook.
    #[must_use]
    pub fn data(&self) -> Option<&D> {
        self.data.as_ref()
    }

    /// Auto-delete mode.
    #[must_use]
    pub fn mode(&self) -> AutoDeleteMode {
        self.mode
    }

    /// Check if a callback is installed.
    #[must_use]
    pub fn has_callback(&self) -> bool {
        self.callback.is_some()
    }

    /// Number of triggers this listener is registered on.
    #[must_use]
    pub fn trigger_count(&self) -> usize {
        self.live
    }

    /// Triggers this listener is registered on, in cell order.
    pub fn triggers(&self) -> impl Iterator<Item = TriggerId> + '_ {
        self.triggers.iter().flatten().copied()
    }

    /// Check if this listener holds a back-reference to `trigger`.
    #[must_use]
    pub fn knows(&self, trigger: TriggerId) -> bool {
        self.triggers.contains(&Some(trigger))
    }

    /// Remember `trigger`. Returns false if it was already known.
    pub(crate) fn add_trigger(&mut self, trigger: TriggerId) -> bool {
        if self.knows(trigger) {
            return false;
        }
        match self.triggers.iter_mut().find(|c| c.is_none()) {
            Some(cell) => *cell = Some(trigger),
            None => self.triggers.push(Some(trigger)),
        }
        self.live += 1;
        true
    }

    /// Forget `trigger`. Returns false if it was not known.
    pub(crate) fn remove_trigger(&mut self, trigger: TriggerId) -> bool {
        let Some(cell) = self.triggers.iter_mut().find(|c| **c == Some(trigger)) else {
            return false;
        };
        *cell = None;
        self.live -= 1;
        if self.live == 0 {
            self.triggers = SmallVec::new();
        }
        true
    }

    /// Drop every back-reference, returning the triggers that were known.
    pub(crate) fn drain_triggers(&mut self) -> Vec<TriggerId> {
        let known = self.triggers().collect();
        self.triggers = SmallVec::new();
        self.live = 0;
        known
    }
}

impl<P, D: std::fmt::Debug> std::fmt::Debug for Listener<P, D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Listener")
            .field("triggers", &self.triggers)
            .field("has_callback", &self.callback.is_some())
            .field("data", &self.data)
            .field("mode", &self.mode)
            .finish()
    }
}
