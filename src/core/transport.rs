//! Network selectors and the transports they expand to.
//!
//! A query names an abstract [`NetworkType`]; the host accounts traffic
//! per concrete [`Transport`]. `All` is a union selector and never maps
//! to a single transport.

use crate::config;

/// Abstract network selector accepted by the query surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetworkType {
    /// Union of Wi-Fi and cellular traffic.
    All,
    /// Wi-Fi traffic only.
    WiFi,
    /// Cellular traffic only.
    Mobile,
}

/// One traffic accounting medium as tracked by the host OS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transport {
    Wifi,
    Cellular,
}

impl NetworkType {
    /// Decode the wire integer code. Unknown codes fall back to `All`.
    pub fn from_code(code: i32) -> Self {
        match code {
            config::TYPE_WIFI => NetworkType::WiFi,
            config::TYPE_MOBILE => NetworkType::Mobile,
            // TYPE_ALL and everything unrecognized.
            _ => NetworkType::All,
        }
    }

    /// The concrete transports this selector expands to.
    pub fn transports(self) -> &'static [Transport] {
        match self {
            NetworkType::All => &[Transport::Wifi, Transport::Cellular],
            NetworkType::WiFi => &[Transport::Wifi],
            NetworkType::Mobile => &[Transport::Cellular],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code_decodes_known_codes() {
        assert_eq!(NetworkType::from_code(1), NetworkType::All);
        assert_eq!(NetworkType::from_code(2), NetworkType::WiFi);
        assert_eq!(NetworkType::from_code(3), NetworkType::Mobile);
    }

    #[test]
    fn test_from_code_falls_back_to_all() {
        assert_eq!(NetworkType::from_code(0), NetworkType::All);
        assert_eq!(NetworkType::from_code(-1), NetworkType::All);
        assert_eq!(NetworkType::from_code(42), NetworkType::All);
        assert_eq!(NetworkType::from_code(i32::MAX), NetworkType::All);
    }

    #[test]
    fn test_single_selectors_expand_to_one_transport() {
        assert_eq!(NetworkType::WiFi.transports(), &[Transport::Wifi]);
        assert_eq!(NetworkType::Mobile.transports(), &[Transport::Cellular]);
    }

    #[test]
    fn test_all_expands_to_both_transports() {
        assert_eq!(
            NetworkType::All.transports(),
            &[Transport::Wifi, Transport::Cellular]
        );
    }
}
