//! Errors that cross the public query surface.
//!
//! Almost nothing does: per-transport query failures are folded into
//! zero-valued results inside the aggregation layer, and subscriber-id
//! lookup failures collapse to "unavailable". The one exception is a
//! caller input error — asking for a package the registry does not
//! know. `StatsError` serializes as `{ "kind": "...", "message": "..." }`
//! so the embedding runtime can distinguish error categories without
//! parsing message text.

use serde::ser::SerializeStruct;

/// Error returned by the by-package query surface.
#[derive(Debug, thiserror::Error)]
pub enum StatsError {
    /// The requested package is not present in the host's application registry.
    #[error("package not installed: {0}")]
    AppNotFound(String),
}

impl StatsError {
    /// Returns the error kind as a string matching the variant name.
    pub fn kind(&self) -> &'static str {
        match self {
            StatsError::AppNotFound(_) => "AppNotFound",
        }
    }
}

/// Custom Serialize: produces `{ "kind": "Variant", "message": "..." }`.
impl serde::Serialize for StatsError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut s = serializer.serialize_struct("StatsError", 2)?;
        s.serialize_field("kind", self.kind())?;
        s.serialize_field("message", &self.to_string())?;
        s.end()
    }
}
