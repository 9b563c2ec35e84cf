//! Trigger and listener teardown.
//!
//! Either side of a registration may be deleted first. Deleting a trigger
//! detaches it from every listener that watched it (possibly cascading into
//! auto-deletion); deleting a listener removes it from every trigger it
//! knows. Both remove the dying object from its arena before notifying
//! anyone, so nested calls made by callbacks see it as already gone.

use crate::core::{ListenerId, Result, TriggerError, TriggerId};
use crate::events::EventName;
use crate::listeners::{Event, Listener, Payload};

use super::Hub;

impl<P: 'static, D: Clone + 'static> Hub<P, D> {
    /// Delete a trigger.
    ///
    /// Every listener registered on it forgets it first; listeners left with
    /// no triggers then follow their auto-delete mode. The event table is
    /// released last.
    pub fn delete_trigger(&mut self, trigger: TriggerId) -> Result<()> {
        let state = self
            .triggers
            .remove(trigger)
            .ok_or(TriggerError::UnknownTrigger(trigger))?;

        let watchers = state.watchers();
        tracing::debug!(%trigger, watchers = watchers.len(), "deleting trigger");
        for listener in watchers {
            self.release_trigger(listener, trigger);
        }
        drop(state);
        Ok(())
    }

    /// Delete a listener.
    ///
    /// Its callback receives [`EventName::LISTENER_DELETED`] carrying the data
    /// hook, then every trigger it is registered on forgets it.
    ///
    /// Deleting an auto-delete listener by hand is allowed but logged: it is
    /// easy to race the hub's own deletion of it. A stale handle is reported
    /// as [`TriggerError::UnknownListener`].
    pub fn delete_listener(&mut self, listener: ListenerId) -> Result<()> {
        self.warn_if_auto(listener)?;
        self.teardown_listener(listener, true);
        self.listeners.release(listener);
        tracing::trace!(%listener, "deleted listener");
        Ok(())
    }

    /// Tear a listener down without invalidating its handle.
    ///
    /// Runs the same notification and detaching as
    /// [`delete_listener`](Hub::delete_listener); afterwards the handle names
    /// an unregistered listener that keeps its callback and auto-delete mode
    /// but has no data.
    pub fn delete_listener_inner(&mut self, listener: ListenerId) -> Result<()> {
        self.warn_if_auto(listener)?;
        if let Some(state) = self.teardown_listener(listener, true) {
            if self.listeners.restore(listener, state).is_err() {
                tracing::warn!(%listener, "listener slot lost during teardown");
            }
        }
        Ok(())
    }

    fn warn_if_auto(&self, listener: ListenerId) -> Result<()> {
        let state = self
            .listeners
            .get(listener)
            .ok_or(TriggerError::UnknownListener(listener))?;
        if state.mode().is_auto() {
            tracing::warn!(
                %listener,
                mode = ?state.mode(),
                "explicitly deleting an auto-delete listener; it must not have been auto-deleted already"
            );
        }
        Ok(())
    }

    /// Check a listener out of its arena, optionally notify it of its
    /// deletion, and remove it from every trigger it knows.
    ///
    /// The slot stays reserved; the caller restores or releases it.
    pub(super) fn teardown_listener(
        &mut self,
        listener: ListenerId,
        notify: bool,
    ) -> Option<Listener<P, D>> {
        let mut state = self.listeners.take(listener)?;

        let data = state.data.take();
        if notify {
            if let Some(callback) = state.callback.clone() {
                callback.on_event(
                    self,
                    Event {
                        name: EventName::LISTENER_DELETED,
                        payload: Payload::Data(data),
                        listener,
                        data: None,
                    },
                );
            }
        }

        for trigger in state.drain_triggers() {
            if let Some(peer) = self.triggers.get_mut(trigger) {
                let removed = peer.table_mut().remove_everywhere(listener);
                tracing::trace!(%listener, %trigger, removed, "trigger forgot listener");
            }
        }
        Some(state)
    }
}
