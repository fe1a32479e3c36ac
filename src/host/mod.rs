//! Host collaborator boundary.
//!
//! The OS facilities this crate aggregates over are injected by the
//! embedding runtime, which acquires and releases the underlying
//! service handles:
//! - [`UsageStatsProvider`] — the per-app traffic accounting facility
//! - [`AppRegistry`] — the installed-application registry
//! - [`TelephonyAccess`] — the carrier subscriber-identity lookup
//!
//! Raw queries fail with an explicit [`QueryError`] so callers fold
//! failure into zero/empty results deliberately rather than by
//! accident. The aggregation layer never distinguishes the variants;
//! they exist for the debug log trail.

pub mod memory;

pub use memory::MemoryHost;

use crate::core::transport::Transport;
use crate::core::usage::{AppIdentity, UsageBucket};

/// Failure of one raw accounting query.
#[derive(Debug, Clone, thiserror::Error)]
pub enum QueryError {
    /// The caller lacks the host permission guarding usage data.
    #[error("permission denied: {0}")]
    PermissionDenied(String),

    /// The host does not account traffic for this transport.
    #[error("not supported by this host: {0}")]
    Unsupported(String),

    /// Any other host-side failure, treated as transient.
    #[error("{0}")]
    Host(String),
}

/// The host's per-application traffic accounting facility.
pub trait UsageStatsProvider {
    /// Query the accounting intervals for one app on one transport.
    ///
    /// `subscriber_id` scopes cellular queries on hosts that track
    /// usage per carrier subscription; it is `None` for Wi-Fi. An
    /// inverted time range yields an empty bucket set, not an error.
    fn query_usage(
        &self,
        transport: Transport,
        subscriber_id: Option<&str>,
        start: i64,
        end: i64,
        uid: u32,
    ) -> Result<Vec<UsageBucket>, QueryError>;
}

/// The host's installed-application registry.
pub trait AppRegistry {
    /// Every installed application, in the registry's own order.
    fn installed_apps(&self) -> Vec<AppIdentity>;

    /// Look up a single application by package name.
    fn app_by_package(&self, package: &str) -> Option<AppIdentity>;
}

/// The host's telephony service, policy gate included.
pub trait TelephonyAccess {
    /// Whether host policy permits reading the subscriber identity at
    /// all. When false, no lookup is attempted.
    fn subscriber_id_readable(&self) -> bool;

    /// Raw subscriber-identity lookup. `Ok(None)` when the telephony
    /// service is present but has no identity to report.
    fn subscriber_id(&self) -> Result<Option<String>, QueryError>;
}

impl<P: UsageStatsProvider + ?Sized> UsageStatsProvider for &P {
    fn query_usage(
        &self,
        transport: Transport,
        subscriber_id: Option<&str>,
        start: i64,
        end: i64,
        uid: u32,
    ) -> Result<Vec<UsageBucket>, QueryError> {
        (**self).query_usage(transport, subscriber_id, start, end, uid)
    }
}

impl<R: AppRegistry + ?Sized> AppRegistry for &R {
    fn installed_apps(&self) -> Vec<AppIdentity> {
        (**self).installed_apps()
    }

    fn app_by_package(&self, package: &str) -> Option<AppIdentity> {
        (**self).app_by_package(package)
    }
}

impl<T: TelephonyAccess + ?Sized> TelephonyAccess for &T {
    fn subscriber_id_readable(&self) -> bool {
        (**self).subscriber_id_readable()
    }

    fn subscriber_id(&self) -> Result<Option<String>, QueryError> {
        (**self).subscriber_id()
    }
}
