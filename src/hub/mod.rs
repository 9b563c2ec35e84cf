//! The hub: owner of all triggers and listeners.
//!
//! Triggers and listeners reference each other symmetrically: a trigger's
//! event table lists listeners, and each listener lists the triggers it is
//! registered on. Neither owns the other. The hub owns both in generational
//! arenas and keeps the two directions consistent across every operation,
//! so either side may be deleted first.
//!
//! ## Operations
//!
//! - registration: [`Hub::listen`], [`Hub::unlisten`]
//! - delivery: [`Hub::fire`]
//! - teardown: [`Hub::delete_trigger`], [`Hub::delete_listener`],
//!   [`Hub::delete_listener_inner`]
//!
//! ## Example
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use trigger_hub::Hub;
//!
//! let seen = Rc::new(RefCell::new(Vec::new()));
//! let mut hub: Hub<u32, u32> = Hub::new();
//!
//! let sink = seen.clone();
//! let listener = hub.new_listener_with(move |_hub, event| {
//!     sink.borrow_mut().push((event.name.to_string(), event.value().copied(), event.data));
//! });
//! hub.set_data(listener, 0x1111).unwrap();
//!
//! let trigger = hub.new_trigger();
//! hub.listen(trigger, "murr", listener).unwrap();
//! hub.fire(trigger, "murr", Some(&7)).unwrap();
//! hub.fire(trigger, "erm.", None).unwrap();
//!
//! assert_eq!(*seen.borrow(), vec![("murr".to_string(), Some(7), Some(0x1111))]);
//! ```

mod deletion;
mod dispatch;
mod registration;

use std::rc::Rc;

use crate::core::{Arena, HubConfig, ListenerId, Result, TriggerError, TriggerId};
use crate::events::{EventName, EventTable};
use crate::listeners::{AutoDeleteMode, Callback, Event, Listener};
use crate::triggers::Trigger;

/// Owner of triggers and listeners.
///
/// `P` is the payload type passed to [`fire`](Hub::fire); `D` is the data
/// hook type stored on listeners and handed to their callbacks.
pub struct Hub<P = (), D = ()> {
    config: HubConfig,
    triggers: Arena<TriggerId, Trigger>,
    listeners: Arena<ListenerId, Listener<P, D>>,
}

impl<P: 'static, D: Clone + 'static> Default for Hub<P, D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: 'static, D: Clone + 'static> Hub<P, D> {
    /// Create a hub with the default configuration.
    pub fn new() -> Self {
        Self {
            config: HubConfig::default(),
            triggers: Arena::new(),
            listeners: Arena::new(),
        }
    }

    /// Create a hub with a custom configuration.
    pub fn with_config(config: HubConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            triggers: Arena::new(),
            listeners: Arena::new(),
        })
    }

    /// The hub's configuration.
    #[must_use]
    pub fn config(&self) -> &HubConfig {
        &self.config
    }

    // === Triggers ===

    /// Create a trigger with an empty event table.
    pub fn new_trigger(&mut self) -> TriggerId {
        let id = self.triggers.insert(Trigger::new(self.config.table_size));
        tracing::trace!(trigger = %id, "created trigger");
        id
    }

    /// Check if a trigger handle is live.
    #[must_use]
    pub fn trigger_exists(&self, trigger: TriggerId) -> bool {
        self.triggers.contains(trigger)
    }

    /// Number of live triggers.
    #[must_use]
    pub fn trigger_count(&self) -> usize {
        self.triggers.len()
    }

    /// A trigger's event table.
    #[must_use]
    pub fn table(&self, trigger: TriggerId) -> Option<&EventTable> {
        self.triggers.get(trigger).map(Trigger::table)
    }

    /// Application event names with listeners on `trigger`.
    #[must_use]
    pub fn event_names(&self, trigger: TriggerId) -> Vec<EventName> {
        self.triggers
            .get(trigger)
            .map(Trigger::event_names)
            .unwrap_or_default()
    }

    /// Listeners registered for `name` on `trigger`, in delivery order.
    #[must_use]
    pub fn listeners_of(&self, trigger: TriggerId, name: impl Into<EventName>) -> Vec<ListenerId> {
        let name = name.into();
        self.triggers
            .get(trigger)
            .map(|t| t.table().listeners(name))
            .unwrap_or_default()
    }

    /// Check if `listener` is registered for `name` on `trigger`.
    #[must_use]
    pub fn is_listening(
        &self,
        trigger: TriggerId,
        name: impl Into<EventName>,
        listener: ListenerId,
    ) -> bool {
        let name = name.into();
        self.triggers
            .get(trigger)
            .is_some_and(|t| t.table().contains(name, listener))
    }

    // === Listeners ===

    /// Create an unregistered listener with no callback.
    pub fn new_listener(&mut self) -> ListenerId {
        let id = self.listeners.insert(Listener::new());
        tracing::trace!(listener = %id, "created listener");
        id
    }

    /// Create a listener with a callback.
    pub fn new_listener_with<F>(&mut self, callback: F) -> ListenerId
    where
        F: Fn(&mut Hub<P, D>, Event<'_, P, D>) + 'static,
    {
        let id = self.new_listener();
        if let Some(listener) = self.listeners.get_mut(id) {
            listener.callback = Some(Rc::new(callback));
        }
        id
    }

    /// Check if a listener handle is live.
    #[must_use]
    pub fn listener_exists(&self, listener: ListenerId) -> bool {
        self.listeners.contains(listener)
    }

    /// Number of live listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Get a listener.
    #[must_use]
    pub fn listener(&self, listener: ListenerId) -> Option<&Listener<P, D>> {
        self.listeners.get(listener)
    }

    fn listener_mut(&mut self, listener: ListenerId) -> Result<&mut Listener<P, D>> {
        self.listeners
            .get_mut(listener)
            .ok_or(TriggerError::UnknownListener(listener))
    }

    /// Install a closure callback, replacing any previous one.
    pub fn set_callback<F>(&mut self, listener: ListenerId, callback: F) -> Result<&mut Self>
    where
        F: Fn(&mut Hub<P, D>, Event<'_, P, D>) + 'static,
    {
        self.set_handler(listener, Rc::new(callback))
    }

    /// Install a shared callback, replacing any previous one.
    pub fn set_handler(
        &mut self,
        listener: ListenerId,
        callback: Rc<dyn Callback<P, D>>,
    ) -> Result<&mut Self> {
        self.listener_mut(listener)?.callback = Some(callback);
        Ok(self)
    }

    /// Remove the callback; events are then delivered to nobody.
    pub fn clear_callback(&mut self, listener: ListenerId) -> Result<&mut Self> {
        self.listener_mut(listener)?.callback = None;
        Ok(self)
    }

    /// Set the data hook passed to the callback with every event.
    pub fn set_data(&mut self, listener: ListenerId, data: D) -> Result<&mut Self> {
        self.listener_mut(listener)?.data = Some(data);
        Ok(self)
    }

    /// The listener's data hook.
    #[must_use]
    pub fn data(&self, listener: ListenerId) -> Option<&D> {
        self.listeners.get(listener).and_then(Listener::data)
    }

    /// Remove and return the listener's data hook.
    pub fn take_data(&mut self, listener: ListenerId) -> Option<D> {
        self.listeners.get_mut(listener)?.data.take()
    }

    /// Opt the listener into auto-deletion once its last trigger is gone.
    ///
    /// With `free_on_delete` the hub deletes it ([`AutoDeleteMode::AutoFree`]);
    /// otherwise its callback receives [`EventName::LISTENER_AUTO_DELETE`]
    /// and is in charge ([`AutoDeleteMode::NotifyOnly`]).
    pub fn allow_auto_delete(
        &mut self,
        listener: ListenerId,
        free_on_delete: bool,
    ) -> Result<&mut Self> {
        self.listener_mut(listener)?.mode = AutoDeleteMode::from_free_on_delete(free_on_delete);
        Ok(self)
    }

    /// The listener's auto-delete mode.
    #[must_use]
    pub fn auto_delete_mode(&self, listener: ListenerId) -> Option<AutoDeleteMode> {
        self.listeners.get(listener).map(Listener::mode)
    }

    /// Triggers `listener` is registered on.
    #[must_use]
    pub fn triggers_of(&self, listener: ListenerId) -> Vec<TriggerId> {
        self.listeners
            .get(listener)
            .map(|l| l.triggers().collect())
            .unwrap_or_default()
    }
}
