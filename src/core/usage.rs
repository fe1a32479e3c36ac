//! Record types and per-app usage aggregation.
//!
//! `summarize_app` and `collect_app_buckets` issue the raw host queries
//! for one application and fold any per-transport failure into a zero
//! or empty contribution. A fleet-wide report must degrade per app, not
//! fail wholesale, so nothing here returns an error.

use serde::Serialize;

use crate::core::transport::{NetworkType, Transport};
use crate::host::UsageStatsProvider;

/// One installed application as known to the host registry.
///
/// Immutable for the duration of a query.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AppIdentity {
    pub package_name: String,
    /// Host-level numeric identity the accounting facility is keyed by.
    pub uid: u32,
}

impl AppIdentity {
    pub fn new(package_name: impl Into<String>, uid: u32) -> Self {
        Self {
            package_name: package_name.into(),
            uid,
        }
    }
}

/// Summed traffic for one application over one query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppNetworkSummary {
    pub package_name: String,
    /// Total bytes received across the selected transports.
    pub rx_total_bytes: u64,
    /// Total bytes transmitted across the selected transports.
    pub tx_total_bytes: u64,
}

/// One host-reported accounting interval for an app on one transport.
///
/// Intervals arrive in chronological emission order but are not
/// guaranteed non-overlapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UsageBucket {
    pub rx_bytes: u64,
    pub rx_packets: u64,
    pub tx_bytes: u64,
    pub tx_packets: u64,
    /// Interval start, epoch milliseconds.
    pub start_timestamp: i64,
    /// Interval end, epoch milliseconds.
    pub end_timestamp: i64,
}

/// Raw buckets for one application, one row of the fleet bucket report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppUsageBuckets {
    pub package_name: String,
    pub buckets: Vec<UsageBucket>,
}

/// The subscriber id only scopes cellular accounting queries.
fn scoped_subscriber(transport: Transport, subscriber_id: Option<&str>) -> Option<&str> {
    match transport {
        Transport::Cellular => subscriber_id,
        Transport::Wifi => None,
    }
}

/// Sum usage for one application over the selected transports.
///
/// Issues one raw query per transport and sums `rx`/`tx` bytes over all
/// returned buckets. A failed transport query contributes zero. An
/// inverted time range is passed through; the host returns no buckets
/// for it.
pub fn summarize_app(
    usage: &dyn UsageStatsProvider,
    app: &AppIdentity,
    start: i64,
    end: i64,
    network: NetworkType,
    subscriber_id: Option<&str>,
) -> AppNetworkSummary {
    let mut rx_total: u64 = 0;
    let mut tx_total: u64 = 0;

    for &transport in network.transports() {
        match usage.query_usage(
            transport,
            scoped_subscriber(transport, subscriber_id),
            start,
            end,
            app.uid,
        ) {
            Ok(buckets) => {
                for bucket in &buckets {
                    rx_total = rx_total.saturating_add(bucket.rx_bytes);
                    tx_total = tx_total.saturating_add(bucket.tx_bytes);
                }
            }
            Err(e) => {
                tracing::debug!(
                    package = %app.package_name,
                    uid = app.uid,
                    ?transport,
                    "usage query failed, counting zero: {e}"
                );
            }
        }
    }

    AppNetworkSummary {
        package_name: app.package_name.clone(),
        rx_total_bytes: rx_total,
        tx_total_bytes: tx_total,
    }
}

/// Collect the raw accounting intervals for one application.
///
/// `WiFi` and `Mobile` return the host's buckets in emission order.
/// `All` returns an empty vector: only summaries are merged across
/// transports, bucket-level union is not provided. A failed query also
/// returns an empty vector.
pub fn collect_app_buckets(
    usage: &dyn UsageStatsProvider,
    app: &AppIdentity,
    start: i64,
    end: i64,
    network: NetworkType,
    subscriber_id: Option<&str>,
) -> Vec<UsageBucket> {
    let transport = match network {
        NetworkType::WiFi => Transport::Wifi,
        NetworkType::Mobile => Transport::Cellular,
        NetworkType::All => return Vec::new(),
    };

    match usage.query_usage(
        transport,
        scoped_subscriber(transport, subscriber_id),
        start,
        end,
        app.uid,
    ) {
        Ok(buckets) => buckets,
        Err(e) => {
            tracing::debug!(
                package = %app.package_name,
                uid = app.uid,
                ?transport,
                "bucket query failed, returning empty: {e}"
            );
            Vec::new()
        }
    }
}
