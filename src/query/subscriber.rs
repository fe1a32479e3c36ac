//! Best-effort carrier subscriber-identity resolution.
//!
//! The subscriber id is an optional enrichment for cellular accounting
//! queries, never a required input, so every failure shape collapses to
//! `None` here and nothing propagates to the caller.

use crate::host::TelephonyAccess;

/// Resolve the carrier subscriber identity, if the host allows it.
///
/// Returns `None` when host policy forbids the read (no lookup is
/// attempted), when the telephony service is unavailable or fails, and
/// when the reported identity is absent or empty.
pub fn resolve_subscriber_id(telephony: &dyn TelephonyAccess) -> Option<String> {
    if !telephony.subscriber_id_readable() {
        return None;
    }

    match telephony.subscriber_id() {
        Ok(id) => id.filter(|s| !s.is_empty()),
        Err(e) => {
            tracing::debug!("subscriber id lookup failed, treating as unavailable: {e}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::host::QueryError;

    /// Telephony fake that counts raw lookup attempts.
    struct CountingTelephony {
        readable: bool,
        result: Result<Option<String>, QueryError>,
        lookups: Cell<u32>,
    }

    impl CountingTelephony {
        fn new(readable: bool, result: Result<Option<String>, QueryError>) -> Self {
            Self {
                readable,
                result,
                lookups: Cell::new(0),
            }
        }
    }

    impl TelephonyAccess for CountingTelephony {
        fn subscriber_id_readable(&self) -> bool {
            self.readable
        }

        fn subscriber_id(&self) -> Result<Option<String>, QueryError> {
            self.lookups.set(self.lookups.get() + 1);
            self.result.clone()
        }
    }

    #[test]
    fn test_forbidden_policy_returns_none_without_lookup() {
        let telephony = CountingTelephony::new(false, Ok(Some("should not be read".into())));
        assert_eq!(resolve_subscriber_id(&telephony), None);
        assert_eq!(telephony.lookups.get(), 0);
    }

    #[test]
    fn test_successful_lookup_returns_identity() {
        let telephony = CountingTelephony::new(true, Ok(Some("310260000000000".into())));
        assert_eq!(
            resolve_subscriber_id(&telephony),
            Some("310260000000000".to_string())
        );
        assert_eq!(telephony.lookups.get(), 1);
    }

    #[test]
    fn test_absent_identity_returns_none() {
        let telephony = CountingTelephony::new(true, Ok(None));
        assert_eq!(resolve_subscriber_id(&telephony), None);
    }

    #[test]
    fn test_empty_identity_normalized_to_none() {
        let telephony = CountingTelephony::new(true, Ok(Some(String::new())));
        assert_eq!(resolve_subscriber_id(&telephony), None);
    }

    #[test]
    fn test_lookup_failure_returns_none() {
        let telephony =
            CountingTelephony::new(true, Err(QueryError::Host("telephony service died".into())));
        assert_eq!(resolve_subscriber_id(&telephony), None);
    }
}
