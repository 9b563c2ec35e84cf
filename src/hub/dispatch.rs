//! Event delivery.
//!
//! `fire` walks a snapshot of the slot's listeners so callbacks may
//! register, unregister or delete anything while the walk is in progress.
//! Before each delivery the walk re-checks that the trigger is still alive
//! and that the listener is still registered for the name; listeners added
//! during the walk are not reached by it.

use crate::core::{ListenerId, Result, TriggerError, TriggerId};
use crate::events::EventName;
use crate::listeners::{Event, Payload};

use super::Hub;

impl<P: 'static, D: Clone + 'static> Hub<P, D> {
    /// Deliver a `name` event from `trigger` to every listener registered for it.
    ///
    /// Firing a name nobody listens for is a no-op. Reserved names cannot be
    /// fired.
    pub fn fire(
        &mut self,
        trigger: TriggerId,
        name: impl Into<EventName>,
        data: Option<&P>,
    ) -> Result<()> {
        let name = name.into();
        if name.is_reserved() {
            tracing::warn!(%trigger, %name, "refusing to fire a reserved event");
            return Err(TriggerError::ReservedEvent(name));
        }
        let snapshot = self
            .triggers
            .get(trigger)
            .ok_or(TriggerError::UnknownTrigger(trigger))?
            .table()
            .listeners(name);

        for listener in snapshot {
            match self.triggers.get(trigger) {
                None => break,
                Some(state) if !state.table().contains(name, listener) => continue,
                Some(_) => {}
            }
            let payload = match data {
                Some(value) => Payload::Value(value),
                None => Payload::Empty,
            };
            self.deliver(listener, name, payload);
        }
        Ok(())
    }

    /// Hand one event to a listener's callback.
    ///
    /// Trigger deletion never comes through here; listeners detach from a
    /// dying trigger before any callback runs.
    pub(super) fn deliver(&mut self, listener: ListenerId, name: EventName, payload: Payload<'_, P, D>) {
        debug_assert_ne!(name, EventName::TRIGGER_DELETED);
        let Some(state) = self.listeners.get(listener) else {
            return;
        };
        let Some(callback) = state.callback.clone() else {
            return;
        };
        let data = state.data.clone();

        tracing::trace!(%listener, %name, "delivering event");
        callback.on_event(
            self,
            Event {
                name,
                payload,
                listener,
                data,
            },
        );
    }
}
