//! Query entry points invoked by the embedding runtime.
//!
//! - [`fleet`] — [`StatsEngine`], the fleet-wide and by-package queries
//! - [`subscriber`] — best-effort carrier subscriber-identity resolution

pub mod fleet;
pub mod subscriber;

pub use fleet::StatsEngine;
