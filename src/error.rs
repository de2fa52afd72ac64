//! Errors raised while assembling a palette or rendering its artifacts.

use crate::palette::{Mode, Slot};
use thiserror::Error;

/// A palette that cannot be rendered.
///
/// Every variant is detected before any artifact is produced, so a render
/// either yields the full artifact set or this error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    /// The palette defines neither a dark nor a light mode.
    #[error("palette defines no modes; expected at least one of \"dark\" or \"light\"")]
    NoModes,

    /// The same mode appears more than once.
    #[error("palette defines the {0} mode more than once")]
    DuplicateMode(Mode),

    /// A mode key other than `dark` or `light`.
    #[error("unknown palette mode \"{0}\"; expected \"dark\" or \"light\"")]
    UnknownMode(String),

    /// A mode is missing one of its sixteen color slots.
    #[error("{mode} palette is missing required color \"{slot}\"")]
    MissingSlot {
        /// Mode whose slots are incomplete.
        mode: Mode,
        /// First missing slot, in accent-then-shade order.
        slot: Slot,
    },
}

/// Failure while rendering artifacts from a valid palette.
#[derive(Debug, Error)]
pub enum RenderError {
    /// A structured document could not be encoded as JSON.
    #[error("failed to serialize {path}")]
    Serialize {
        /// Destination of the artifact being rendered.
        path: String,
        /// Underlying encoder error.
        #[source]
        source: serde_json::Error,
    },
}
