//! Wire-record shaping for the embedding call bridge.
//!
//! The runtime hosting this crate ships query results across a
//! language boundary whose number model cannot be relied on for 64-bit
//! integers, so summary byte totals serialize as decimal strings.
//! Bucket counters stay plain integers. Keys are camelCase to match
//! the records the bridge exposes downstream.
//!
//! The `get_network_usage_*` functions are the integer-coded surface
//! the bridge invokes: `1 = All, 2 = WiFi, 3 = Mobile`, anything else
//! treated as `All`.

use serde::{Serialize, Serializer};

use crate::core::transport::NetworkType;
use crate::core::usage::{AppNetworkSummary, AppUsageBuckets, UsageBucket};
use crate::error::StatsError;
use crate::host::{AppRegistry, TelephonyAccess, UsageStatsProvider};
use crate::query::StatsEngine;

/// One summary row as shipped over the bridge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryRecord {
    pub package_name: String,
    #[serde(serialize_with = "u64_as_decimal_string")]
    pub rx_total_bytes: u64,
    #[serde(serialize_with = "u64_as_decimal_string")]
    pub tx_total_bytes: u64,
}

/// One accounting interval as shipped over the bridge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BucketRecord {
    pub rx_bytes: u64,
    pub rx_packets: u64,
    pub tx_bytes: u64,
    pub tx_packets: u64,
    pub start_timestamp: i64,
    pub end_timestamp: i64,
}

/// One bucket-report row: a package plus its raw intervals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppBucketsRecord {
    pub package_name: String,
    pub data: Vec<BucketRecord>,
}

fn u64_as_decimal_string<S: Serializer>(value: &u64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(value)
}

impl From<AppNetworkSummary> for SummaryRecord {
    fn from(summary: AppNetworkSummary) -> Self {
        Self {
            package_name: summary.package_name,
            rx_total_bytes: summary.rx_total_bytes,
            tx_total_bytes: summary.tx_total_bytes,
        }
    }
}

impl From<&UsageBucket> for BucketRecord {
    fn from(bucket: &UsageBucket) -> Self {
        Self {
            rx_bytes: bucket.rx_bytes,
            rx_packets: bucket.rx_packets,
            tx_bytes: bucket.tx_bytes,
            tx_packets: bucket.tx_packets,
            start_timestamp: bucket.start_timestamp,
            end_timestamp: bucket.end_timestamp,
        }
    }
}

impl From<AppUsageBuckets> for AppBucketsRecord {
    fn from(row: AppUsageBuckets) -> Self {
        Self {
            package_name: row.package_name,
            data: row.buckets.iter().map(BucketRecord::from).collect(),
        }
    }
}

/// Summaries for every installed application.
pub fn get_network_usage_summaries<R, U, T>(
    engine: &StatsEngine<R, U, T>,
    start: i64,
    end: i64,
    type_code: i32,
) -> Vec<SummaryRecord>
where
    R: AppRegistry,
    U: UsageStatsProvider,
    T: TelephonyAccess,
{
    engine
        .usage_summaries(start, end, NetworkType::from_code(type_code))
        .into_iter()
        .map(SummaryRecord::from)
        .collect()
}

/// Summary for a single package; fails if the package is unknown.
pub fn get_network_usage_summary_for_package<R, U, T>(
    engine: &StatsEngine<R, U, T>,
    start: i64,
    end: i64,
    type_code: i32,
    package: &str,
) -> Result<SummaryRecord, StatsError>
where
    R: AppRegistry,
    U: UsageStatsProvider,
    T: TelephonyAccess,
{
    engine
        .usage_summary_for_package(start, end, NetworkType::from_code(type_code), package)
        .map(SummaryRecord::from)
}

/// Raw accounting intervals for every installed application.
pub fn get_network_usage_buckets<R, U, T>(
    engine: &StatsEngine<R, U, T>,
    start: i64,
    end: i64,
    type_code: i32,
) -> Vec<AppBucketsRecord>
where
    R: AppRegistry,
    U: UsageStatsProvider,
    T: TelephonyAccess,
{
    engine
        .usage_buckets(start, end, NetworkType::from_code(type_code))
        .into_iter()
        .map(AppBucketsRecord::from)
        .collect()
}
