//! Error types for sessions and the cart hand-off.

use rig_model::{Category, Slot};
use thiserror::Error;

/// A pick the session refused. These come from user input, so they are
/// reported instead of panicking.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("unknown part id: {id}")]
    UnknownPart { id: String },

    #[error("part {id} is a {category} and cannot go in slot {slot}")]
    WrongSlot {
        id: String,
        category: Category,
        slot: Slot,
    },

    #[error("part {id} is blocked: {reason}")]
    Blocked { id: String, reason: String },
}

#[derive(Debug, Error)]
pub enum HandoffError {
    #[error("build is empty")]
    EmptyBuild,

    #[error("build has {count} unresolved conflict(s): {first}")]
    Conflicts { count: usize, first: String },

    #[error("failed to encode part {id}: {source}")]
    Encode {
        id: String,
        #[source]
        source: serde_json::Error,
    },
}
