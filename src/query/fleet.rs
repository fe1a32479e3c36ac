//! Fleet-wide and by-package usage queries.
//!
//! [`StatsEngine`] bundles the injected host collaborators and walks
//! the installed-application fleet, applying the per-app aggregation
//! primitives to each. Output order is the registry's enumeration
//! order; no filtering or sorting is imposed.

use crate::core::transport::NetworkType;
use crate::core::usage::{
    collect_app_buckets, summarize_app, AppNetworkSummary, AppUsageBuckets,
};
use crate::error::StatsError;
use crate::host::{AppRegistry, TelephonyAccess, UsageStatsProvider};
use crate::query::subscriber::resolve_subscriber_id;

/// Usage query engine over the injected host collaborators.
///
/// Every method performs a bounded, synchronous sequence of host
/// calls — (installed-app count) × (selected transports) — and holds
/// no state between calls.
pub struct StatsEngine<R, U, T> {
    registry: R,
    usage: U,
    telephony: T,
}

impl<R, U, T> StatsEngine<R, U, T>
where
    R: AppRegistry,
    U: UsageStatsProvider,
    T: TelephonyAccess,
{
    pub fn new(registry: R, usage: U, telephony: T) -> Self {
        Self {
            registry,
            usage,
            telephony,
        }
    }

    /// One traffic summary per installed application.
    ///
    /// Apps whose accounting queries fail still get a row, with zero
    /// totals for the failed transports. An empty registry yields an
    /// empty report.
    pub fn usage_summaries(
        &self,
        start: i64,
        end: i64,
        network: NetworkType,
    ) -> Vec<AppNetworkSummary> {
        // One subscriber lookup per fleet walk, reused for every
        // cellular query below.
        let subscriber_id = resolve_subscriber_id(&self.telephony);

        self.registry
            .installed_apps()
            .iter()
            .map(|app| {
                summarize_app(
                    &self.usage,
                    app,
                    start,
                    end,
                    network,
                    subscriber_id.as_deref(),
                )
            })
            .collect()
    }

    /// Traffic summary for a single package.
    ///
    /// Unlike per-transport query failures, an unknown package is a
    /// caller input error and propagates as [`StatsError::AppNotFound`].
    pub fn usage_summary_for_package(
        &self,
        start: i64,
        end: i64,
        network: NetworkType,
        package: &str,
    ) -> Result<AppNetworkSummary, StatsError> {
        let app = self
            .registry
            .app_by_package(package)
            .ok_or_else(|| StatsError::AppNotFound(package.to_string()))?;
        let subscriber_id = resolve_subscriber_id(&self.telephony);

        Ok(summarize_app(
            &self.usage,
            &app,
            start,
            end,
            network,
            subscriber_id.as_deref(),
        ))
    }

    /// Raw accounting intervals per installed application.
    ///
    /// Each row carries the host's buckets in emission order; `All`
    /// rows are empty since bucket-level union across transports is
    /// not provided.
    pub fn usage_buckets(
        &self,
        start: i64,
        end: i64,
        network: NetworkType,
    ) -> Vec<AppUsageBuckets> {
        let subscriber_id = resolve_subscriber_id(&self.telephony);

        self.registry
            .installed_apps()
            .iter()
            .map(|app| AppUsageBuckets {
                package_name: app.package_name.clone(),
                buckets: collect_app_buckets(
                    &self.usage,
                    app,
                    start,
                    end,
                    network,
                    subscriber_id.as_deref(),
                ),
            })
            .collect()
    }
}
