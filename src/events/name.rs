//! Event names.
//!
//! An event name is a fixed-width 4-byte symbol. Longer names are cut to
//! their first four bytes, so `"murray"` and `"murr"` are the same event;
//! shorter names are padded with zero bytes.
//!
//! Three names are reserved for the hub's own lifecycle plumbing and must
//! not be used for application events:
//!
//! | Name   | Constant                           | Meaning                              |
//! |--------|------------------------------------|--------------------------------------|
//! | `_TDe` | [`EventName::TRIGGER_DELETED`]     | a trigger is being deleted           |
//! | `_LDe` | [`EventName::LISTENER_DELETED`]    | a listener is being deleted          |
//! | `_LAu` | [`EventName::LISTENER_AUTO_DELETE`]| a listener has lost its last trigger |

use serde::{Deserialize, Serialize};

/// A 4-byte event symbol.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EventName([u8; 4]);

impl EventName {
    /// Broadcast by a trigger to its listeners when it is deleted.
    /// Never reaches a listener callback.
    pub const TRIGGER_DELETED: EventName = EventName(*b"_TDe");

    /// Sent to a listener's own callback when it is explicitly deleted.
    pub const LISTENER_DELETED: EventName = EventName(*b"_LDe");

    /// Sent to a notify-only auto-delete listener once it has no triggers left.
    pub const LISTENER_AUTO_DELETE: EventName = EventName(*b"_LAu");

    /// Create an event name from a string. Only the first four bytes count.
    #[must_use]
    pub fn new(name: &str) -> Self {
        let mut bytes = [0u8; 4];
        for (dst, src) in bytes.iter_mut().zip(name.bytes()) {
            *dst = src;
        }
        Self(bytes)
    }

    /// Create an event name from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 4]) -> Self {
        Self(bytes)
    }

    /// Raw bytes of the name.
    #[inline]
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 4] {
        &self.0
    }

    /// Check if this is one of the three reserved lifecycle names.
    #[must_use]
    pub fn is_reserved(self) -> bool {
        self == Self::TRIGGER_DELETED
            || self == Self::LISTENER_DELETED
            || self == Self::LISTENER_AUTO_DELETE
    }

    /// 8-bit table key.
    ///
    /// Each byte is rotated by a different amount before XOR-ing so that
    /// names differing only in byte order still spread across the table.
    /// Stable across runs and platforms.
    #[inline]
    #[must_use]
    pub const fn hash_key(self) -> u8 {
        let [a, b, c, d] = self.0;
        a ^ b.rotate_right(2) ^ c.rotate_right(4) ^ d.rotate_right(6)
    }
}

/// Check whether `name` is one of the hub's reserved event names.
///
/// ```
/// use trigger_hub::is_reserved_event_name;
///
/// assert!(is_reserved_event_name("_TDe"));
/// assert!(!is_reserved_event_name("yerf"));
/// ```
#[must_use]
pub fn is_reserved_event_name(name: impl Into<EventName>) -> bool {
    name.into().is_reserved()
}

impl From<&str> for EventName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<&String> for EventName {
    fn from(name: &String) -> Self {
        Self::new(name)
    }
}

impl From<[u8; 4]> for EventName {
    fn from(bytes: [u8; 4]) -> Self {
        Self(bytes)
    }
}

impl From<&[u8; 4]> for EventName {
    fn from(bytes: &[u8; 4]) -> Self {
        Self(*bytes)
    }
}

impl std::fmt::Display for EventName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let len = self.0.iter().rposition(|&b| b != 0).map_or(0, |i| i + 1);
        write!(f, "{}", self.0[..len].escape_ascii())
    }
}
