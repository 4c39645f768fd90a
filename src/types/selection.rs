//! Port selection modes.
//!
//! Exactly one mode is active per run: a single port, an inclusive range,
//! or the built-in table of common service ports.

use super::port::{Port, PortError, PortRange};
use std::fmt;

/// Port probed when no selection is given.
pub const DEFAULT_PORT: Port = match Port::new(443) {
    Some(port) => port,
    None => unreachable!(),
};

/// Well-known service ports probed by the `common` mode, in probe order.
pub const COMMON_PORTS: [u16; 133] = [
    1, 7, 20, 21, 22, 23, 25, 42, 43, 53, 69, 79, 80, 88, 106, 110, 111, 113, 115, 119,
    123, 135, 137, 138, 139, 143, 161, 177, 194, 311, 379, 389, 427, 443, 445, 464, 465,
    497, 514, 515, 532, 548, 554, 587, 600, 625, 631, 636, 660, 687, 749, 985, 993, 995,
    1080, 1085, 1194, 1099, 1220, 1433, 1434, 1521, 1522, 1525, 1529, 1640, 1649, 1723,
    1990, 1998, 2049, 2195, 2196, 2336, 3004, 3031, 3128, 3283, 3306, 3389, 3689, 4111,
    4488, 5000, 5001, 5003, 5009, 5010, 5060, 5100, 5190, 5200, 5222, 5223, 5269, 5298,
    5432, 5500, 5632, 5800, 5900, 5988, 6000, 7070, 7777, 8005, 8008, 8043, 8080, 8085,
    8086, 8087, 8088, 8089, 8096, 8170, 8171, 8175, 8200, 8443, 8800, 8821, 8826, 8843,
    8880, 8891, 9006, 9100, 10000, 10001, 10002, 10010, 20005,
];

/// The set of ports to probe in one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortSelection {
    /// A single port.
    Single(Port),
    /// Every port in an inclusive range.
    Range(PortRange),
    /// The [`COMMON_PORTS`] table.
    Common,
}

impl Default for PortSelection {
    fn default() -> Self {
        Self::Single(DEFAULT_PORT)
    }
}

impl PortSelection {
    /// Resolve the selection from raw front-end parameters.
    ///
    /// At most one of `port`, `range` and `common` may be set; with none set
    /// the selection falls back to [`DEFAULT_PORT`].
    pub fn resolve(
        port: Option<u16>,
        range: Option<&str>,
        common: bool,
    ) -> Result<Self, PortError> {
        match (port, range, common) {
            (None, None, false) => Ok(Self::default()),
            (Some(port), None, false) => Ok(Self::Single(Port::try_from(port)?)),
            (None, Some(range), false) => Ok(Self::Range(range.parse()?)),
            (None, None, true) => Ok(Self::Common),
            _ => Err(PortError::InvalidFormat(
                "only one of --port, --range and --common may be given".to_string(),
            )),
        }
    }

    /// The exact ordered sequence of ports to probe.
    pub fn ports(&self) -> Vec<Port> {
        match self {
            Self::Single(port) => vec![*port],
            Self::Range(range) => range.iter().collect(),
            Self::Common => COMMON_PORTS.iter().copied().filter_map(Port::new).collect(),
        }
    }
}

impl fmt::Display for PortSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single(port) => write!(f, "port {}", port),
            Self::Range(range) => write!(f, "ports {}", range),
            Self::Common => write!(f, "{} common ports", COMMON_PORTS.len()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_default_is_443() {
        let selection = PortSelection::resolve(None, None, false).unwrap();
        assert_eq!(selection.ports(), vec![Port::new(443).unwrap()]);
    }

    #[test]
    fn test_single_port() {
        let selection = PortSelection::resolve(Some(22), None, false).unwrap();
        assert_eq!(selection, PortSelection::Single(Port::new(22).unwrap()));
        assert_eq!(selection.ports().len(), 1);
        assert!(PortSelection::resolve(Some(0), None, false).is_err());
    }

    #[test]
    fn test_range_selection() {
        let selection = PortSelection::resolve(None, Some("8000-8009"), false).unwrap();
        let ports = selection.ports();
        assert_eq!(ports.len(), 10);
        assert_eq!(ports[0].as_u16(), 8000);
        assert_eq!(ports[9].as_u16(), 8009);
    }

    #[test]
    fn test_malformed_range_yields_no_ports() {
        for bad in ["8000", "1-2-3", "x-10", "10-1"] {
            let result = PortSelection::resolve(None, Some(bad), false);
            assert!(matches!(result, Err(PortError::InvalidRange(_))), "{}", bad);
        }
    }

    #[test]
    fn test_conflicting_modes() {
        assert!(PortSelection::resolve(Some(80), Some("1-2"), false).is_err());
        assert!(PortSelection::resolve(Some(80), None, true).is_err());
        assert!(PortSelection::resolve(None, Some("1-2"), true).is_err());
    }

    #[test]
    fn test_common_ports_table() {
        let first = PortSelection::Common.ports();
        let second = PortSelection::Common.ports();
        assert_eq!(first.len(), 133);
        assert_eq!(first, second);
        assert_eq!(first.len(), COMMON_PORTS.len());

        let unique: HashSet<_> = first.iter().collect();
        assert_eq!(unique.len(), first.len());

        // table order is preserved, not sorted
        assert_eq!(first[0].as_u16(), 1);
        assert_eq!(first[56].as_u16(), 1194);
        assert_eq!(first[57].as_u16(), 1099);
        assert_eq!(first.last().unwrap().as_u16(), 20005);
    }
}
