//! Per-application network usage accounting queries.
//!
//! The host OS tracks traffic per application and per transport
//! (Wi-Fi, cellular). This crate turns a `(time range, network
//! selector, optional package)` request into the underlying
//! per-transport accounting queries, sums the returned counters, and
//! produces one tabular record per application.
//!
//! The OS facilities themselves — traffic accounting, application
//! registry, telephony — are injected collaborators (see [`host`]);
//! the embedding runtime acquires them and hands them to a
//! [`StatsEngine`]. A query failure on one transport for one app
//! contributes zero to that app's row instead of failing the report.

pub mod bridge;
pub mod config;
pub mod core;
pub mod error;
pub mod host;
pub mod query;

pub use crate::core::transport::{NetworkType, Transport};
pub use crate::core::usage::{AppIdentity, AppNetworkSummary, AppUsageBuckets, UsageBucket};
pub use crate::error::StatsError;
pub use crate::host::{AppRegistry, QueryError, TelephonyAccess, UsageStatsProvider};
pub use crate::query::StatsEngine;

/// Install the default `tracing` subscriber for an embedding runtime.
///
/// Honors `RUST_LOG` when set, otherwise falls back to
/// [`config::DEFAULT_LOG_FILTER`]. Safe to call more than once; later
/// calls are no-ops.
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config::DEFAULT_LOG_FILTER.into()),
        )
        .try_init();
}
