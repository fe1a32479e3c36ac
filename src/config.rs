//! Centralized constants for the query surface.
//!
//! The wire type codes are part of the contract with the embedding
//! runtime and must not change between releases.

/// Wire code selecting the union of all transports.
pub const TYPE_ALL: i32 = 1;

/// Wire code selecting Wi-Fi traffic only.
pub const TYPE_WIFI: i32 = 2;

/// Wire code selecting cellular traffic only.
pub const TYPE_MOBILE: i32 = 3;

/// Log filter used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "netmeter=info";
