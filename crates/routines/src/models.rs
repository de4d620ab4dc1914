//! The Routine entity.
//!
//! A routine is stored as a plain JSON document in the `routines`
//! collection.  `time` is kept as an opaque integer; its unit is owned by
//! whoever schedules the routine, not by this service.

use serde::{Deserialize, Serialize};

/// Collection every routine document is written to and read from.
pub const ROUTINES_COLLECTION: &str = "routines";

/// Upper bound on the number of routines returned by a single list call.
pub const LIST_LIMIT: usize = 100;

/// Inclusive length bounds (in characters) for every text field.
pub const MIN_TEXT_LEN: usize = 1;
pub const MAX_TEXT_LEN: usize = 16;

/// A validated routine, exactly as forwarded to the document store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Routine {
    pub name: String,
    pub time: i64,
    pub action: String,
    /// Recurrence descriptor, free-form beyond the length bound.
    pub repeat: String,
}

impl Routine {
    /// Convenience constructor for testing.
    pub fn new(
        name: impl Into<String>,
        time: i64,
        action: impl Into<String>,
        repeat: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            time,
            action: action.into(),
            repeat: repeat.into(),
        }
    }
}
