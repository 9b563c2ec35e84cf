//! Handle types for triggers and listeners.
//!
//! Every trigger and listener owned by a [`Hub`](crate::Hub) is addressed by
//! a small copyable handle instead of a pointer.
//!
//! ## Handle Layout
//!
//! A handle is an `(index, generation)` pair:
//! - `index`: the arena slot holding the object
//! - `generation`: bumped every time that slot is vacated
//!
//! A handle whose generation no longer matches its slot is *stale*: the
//! object it named has been deleted. Stale handles are detected on every
//! lookup, so a deleted trigger or listener can never be reached again.
//!
//! ```
//! use trigger_hub::Hub;
//!
//! let mut hub: Hub = Hub::new();
//! let trigger = hub.new_trigger();
//! assert!(hub.trigger_exists(trigger));
//!
//! hub.delete_trigger(trigger).unwrap();
//! assert!(!hub.trigger_exists(trigger));
//! ```

use serde::{Deserialize, Serialize};

macro_rules! handle_type {
    ($(#[$meta:meta])* $name:ident, $label:literal) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub struct $name {
            index: u32,
            generation: u32,
        }

        impl $name {
            /// Create a handle from its raw parts.
            #[must_use]
            pub const fn new(index: u32, generation: u32) -> Self {
                Self { index, generation }
            }

            /// Arena slot index.
            #[inline]
            #[must_use]
            pub const fn index(self) -> u32 {
                self.index
            }

            /// Generation of the slot when this handle was issued.
            #[inline]
            #[must_use]
            pub const fn generation(self) -> u32 {
                self.generation
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, concat!($label, "({}v{})"), self.index, self.generation)
            }
        }

        impl From<(u32, u32)> for $name {
            fn from((index, generation): (u32, u32)) -> Self {
                Self::new(index, generation)
            }
        }
    };
}

handle_type!(
    /// Handle to a trigger (an event source).
    TriggerId,
    "Trigger"
);

handle_type!(
    /// Handle to a listener (an event sink).
    ListenerId,
    "Listener"
);
