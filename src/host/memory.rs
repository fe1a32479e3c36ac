//! In-memory host used in tests and embedder smoke checks.
//!
//! `MemoryHost` implements all three collaborator traits over scripted
//! data: a fixed app list, per-(uid, transport) bucket sets, and
//! optional scripted failures. It is a stand-in for the real OS
//! facilities, not a binding to them.

use std::collections::HashMap;

use crate::core::transport::Transport;
use crate::core::usage::{AppIdentity, UsageBucket};
use crate::host::{AppRegistry, QueryError, TelephonyAccess, UsageStatsProvider};

/// Scripted implementation of the host collaborator traits.
#[derive(Debug, Default)]
pub struct MemoryHost {
    apps: Vec<AppIdentity>,
    usage: HashMap<(u32, Transport), Vec<UsageBucket>>,
    failures: HashMap<(u32, Transport), QueryError>,
    subscriber_id: Option<String>,
    subscriber_readable: bool,
    telephony_error: Option<QueryError>,
}

impl MemoryHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an installed application. Enumeration order is
    /// insertion order.
    pub fn with_app(mut self, package_name: impl Into<String>, uid: u32) -> Self {
        self.apps.push(AppIdentity::new(package_name, uid));
        self
    }

    /// Script the accounting intervals one `(uid, transport)` pair
    /// reports.
    pub fn with_usage(mut self, uid: u32, transport: Transport, buckets: Vec<UsageBucket>) -> Self {
        self.usage.insert((uid, transport), buckets);
        self
    }

    /// Script a raw-query failure for one `(uid, transport)` pair.
    pub fn with_failure(mut self, uid: u32, transport: Transport, err: QueryError) -> Self {
        self.failures.insert((uid, transport), err);
        self
    }

    /// Make the subscriber identity readable and set its value.
    pub fn with_subscriber_id(mut self, id: impl Into<String>) -> Self {
        self.subscriber_readable = true;
        self.subscriber_id = Some(id.into());
        self
    }

    /// Make the subscriber identity readable but absent.
    pub fn with_readable_telephony(mut self) -> Self {
        self.subscriber_readable = true;
        self
    }

    /// Script the telephony lookup itself to fail.
    pub fn with_telephony_error(mut self, err: QueryError) -> Self {
        self.subscriber_readable = true;
        self.telephony_error = Some(err);
        self
    }
}

impl UsageStatsProvider for MemoryHost {
    fn query_usage(
        &self,
        transport: Transport,
        _subscriber_id: Option<&str>,
        start: i64,
        end: i64,
        uid: u32,
    ) -> Result<Vec<UsageBucket>, QueryError> {
        if let Some(err) = self.failures.get(&(uid, transport)) {
            return Err(err.clone());
        }

        // Overlap filter; an inverted range matches nothing.
        let buckets = self
            .usage
            .get(&(uid, transport))
            .map(|all| {
                all.iter()
                    .filter(|b| b.start_timestamp < end && b.end_timestamp > start)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();
        Ok(buckets)
    }
}

impl AppRegistry for MemoryHost {
    fn installed_apps(&self) -> Vec<AppIdentity> {
        self.apps.clone()
    }

    fn app_by_package(&self, package: &str) -> Option<AppIdentity> {
        self.apps.iter().find(|a| a.package_name == package).cloned()
    }
}

impl TelephonyAccess for MemoryHost {
    fn subscriber_id_readable(&self) -> bool {
        self.subscriber_readable
    }

    fn subscriber_id(&self) -> Result<Option<String>, QueryError> {
        match &self.telephony_error {
            Some(err) => Err(err.clone()),
            None => Ok(self.subscriber_id.clone()),
        }
    }
}
