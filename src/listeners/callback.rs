//! Listener callbacks and the events they receive.

use crate::core::ListenerId;
use crate::events::EventName;
use crate::hub::Hub;

/// What an event carries.
#[derive(Debug)]
pub enum Payload<'a, P, D> {
    /// Fired without data.
    Empty,
    /// Fired with application data.
    Value(&'a P),
    /// Auto-deletion signal: the listener that lost its last trigger.
    Listener(ListenerId),
    /// Listener-deletion notice: the listener's data hook, handed over so
    /// the callback can release it.
    Data(Option<D>),
}

/// An event delivered to a listener callback.
#[derive(Debug)]
pub struct Event<'a, P, D> {
    /// Event name.
    pub name: EventName,
    /// Event payload.
    pub payload: Payload<'a, P, D>,
    /// The listener receiving the event.
    pub listener: ListenerId,
    /// The receiving listener's data hook (cleared for deletion notices).
    pub data: Option<D>,
}

impl<'a, P, D> Event<'a, P, D> {
    /// The application payload, if this is an ordinary fired event.
    #[must_use]
    pub fn value(&self) -> Option<&'a P> {
        match self.payload {
            Payload::Value(value) => Some(value),
            _ => None,
        }
    }

    /// Check if this is the listener-deletion notice.
    #[must_use]
    pub fn is_deletion(&self) -> bool {
        self.name == EventName::LISTENER_DELETED
    }

    /// Check if this is the auto-deletion signal.
    #[must_use]
    pub fn is_auto_delete(&self) -> bool {
        self.name == EventName::LISTENER_AUTO_DELETE
    }
}

/// Receives events for a listener.
///
/// Callbacks run synchronously inside the hub call that produced the event
/// and get the hub back, so they may register, unregister, fire and delete
/// (including deleting their own listener). Calls may nest, which is why
/// the receiver is `&self`; keep mutable state in a `Cell`/`RefCell`.
///
/// Any `Fn(&mut Hub<P, D>, Event<'_, P, D>)` closure is a callback.
pub trait Callback<P, D> {
    /// Handle one event.
    fn on_event(&self, hub: &mut Hub<P, D>, event: Event<'_, P, D>);
}

impl<P, D, F> Callback<P, D> for F
where
    F: Fn(&mut Hub<P, D>, Event<'_, P, D>),
{
    fn on_event(&self, hub: &mut Hub<P, D>, event: Event<'_, P, D>) {
        self(hub, event)
    }
}
