//! Registration protocol.
//!
//! `listen` touches both sides: the trigger's table gains the listener
//! (under the reserved deletion name and under the requested name) and the
//! listener gains a back-reference to the trigger. `unlisten` undoes only
//! the named registration: the listener keeps watching the trigger for its
//! deletion, and only that deletion drains it and runs its auto-delete
//! rule.

use crate::core::{ListenerId, Result, TriggerError, TriggerId};
use crate::events::{EventName, InsertOutcome};
use crate::listeners::{AutoDeleteMode, Payload};

use super::Hub;

impl<P: 'static, D: Clone + 'static> Hub<P, D> {
    /// Register `listener` for `name` events fired by `trigger`.
    ///
    /// Registering the same triple twice has no further effect. Fails with
    /// [`TriggerError::TableFull`] when the trigger cannot hold another
    /// event name, and with [`TriggerError::ReservedEvent`] for reserved names.
    pub fn listen(
        &mut self,
        trigger: TriggerId,
        name: impl Into<EventName>,
        listener: ListenerId,
    ) -> Result<()> {
        let name = name.into();
        if name.is_reserved() {
            tracing::warn!(%trigger, %listener, %name, "refusing to listen for a reserved event");
            return Err(TriggerError::ReservedEvent(name));
        }
        if !self.listeners.contains(listener) {
            return Err(TriggerError::UnknownListener(listener));
        }
        let state = self
            .triggers
            .get_mut(trigger)
            .ok_or(TriggerError::UnknownTrigger(trigger))?;

        // The deletion registration comes first: without it the back-reference
        // below could never be cleaned up by the trigger.
        let watch = state.table_mut().insert(EventName::TRIGGER_DELETED, listener);
        if watch == InsertOutcome::TableFull {
            tracing::warn!(%trigger, %listener, "event table full, could not add listener");
            return Err(TriggerError::TableFull {
                trigger,
                name: EventName::TRIGGER_DELETED,
            });
        }

        let outcome = state.table_mut().insert(name, listener);
        if outcome == InsertOutcome::TableFull {
            tracing::warn!(%trigger, %listener, %name, "event table full, could not add listener");
            // A first registration that did not fit leaves nothing behind.
            if watch == InsertOutcome::Added {
                state
                    .table_mut()
                    .remove(EventName::TRIGGER_DELETED, listener);
            }
            return Err(TriggerError::TableFull { trigger, name });
        }

        if let Some(state) = self.listeners.get_mut(listener) {
            state.add_trigger(trigger);
        }
        if outcome == InsertOutcome::Added {
            tracing::trace!(%trigger, %listener, %name, "listening");
        }
        Ok(())
    }

    /// Stop delivering `name` events from `trigger` to `listener`.
    ///
    /// Returns whether a registration was removed. Other registrations of
    /// the listener on this trigger are kept, and so is its deletion
    /// registration and back-reference, even when this was its last name.
    pub fn unlisten(
        &mut self,
        trigger: TriggerId,
        name: impl Into<EventName>,
        listener: ListenerId,
    ) -> bool {
        let name = name.into();
        if name.is_reserved() {
            return false;
        }
        let Some(state) = self.triggers.get_mut(trigger) else {
            return false;
        };
        if !state.table_mut().remove(name, listener) {
            return false;
        }
        tracing::trace!(%trigger, %listener, %name, "unlistened");
        true
    }

    /// Drop `listener`'s back-reference to a deleted `trigger` and apply
    /// the auto-delete rule if that was its last one.
    pub(super) fn release_trigger(&mut self, listener: ListenerId, trigger: TriggerId) {
        let Some(state) = self.listeners.get_mut(listener) else {
            return;
        };
        if !state.remove_trigger(trigger) || state.trigger_count() > 0 {
            return;
        }

        match state.mode() {
            AutoDeleteMode::Manual => {
                tracing::trace!(%listener, "listener drained");
            }
            AutoDeleteMode::AutoFree => {
                tracing::debug!(%listener, "auto-deleting listener");
                self.teardown_listener(listener, false);
                self.listeners.release(listener);
            }
            AutoDeleteMode::NotifyOnly => {
                tracing::debug!(%listener, "sending auto-delete signal");
                self.deliver(
                    listener,
                    EventName::LISTENER_AUTO_DELETE,
                    Payload::Listener(listener),
                );
            }
        }
    }
}
