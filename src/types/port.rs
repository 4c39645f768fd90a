//! Port types with validation and parsing.
//!
//! The `Port` newtype ensures values are always valid port numbers (1-65535).
//! `PortRange` handles inclusive `start-end` descriptors.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A validated network port number (1-65535).
///
/// Using a newtype prevents accidental misuse of raw u16 values
/// and ensures port numbers are always valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Port(u16);

impl Port {
    /// Minimum valid port number.
    pub const MIN: u16 = 1;
    /// Maximum valid port number.
    pub const MAX: u16 = 65535;

    /// Create a new Port from a u16, returning None if invalid.
    #[inline]
    pub const fn new(port: u16) -> Option<Self> {
        if port >= Self::MIN {
            Some(Self(port))
        } else {
            None
        }
    }

    /// Get the raw port number.
    #[inline]
    pub const fn as_u16(self) -> u16 {
        self.0
    }

    /// The port immediately after this one, if any.
    #[inline]
    pub const fn next(self) -> Option<Self> {
        match self.0.checked_add(1) {
            Some(n) => Some(Self(n)),
            None => None,
        }
    }
}

impl fmt::Display for Port {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u16> for Port {
    type Error = PortError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(PortError::OutOfRange(value))
    }
}

impl From<Port> for u16 {
    fn from(port: Port) -> Self {
        port.0
    }
}

impl FromStr for Port {
    type Err = PortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let value: u16 = s
            .parse()
            .map_err(|_| PortError::InvalidFormat(s.to_string()))?;
        Self::try_from(value)
    }
}

/// Error type for port parsing and validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PortError {
    #[error("port {0} is out of valid range (1-65535)")]
    OutOfRange(u16),
    #[error("invalid port number: {0}")]
    InvalidFormat(String),
    #[error("{0}")]
    InvalidRange(String),
}

/// A range of ports (inclusive).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PortRange {
    start: Port,
    end: Port,
}

impl PortRange {
    /// Create a new port range.
    pub fn new(start: Port, end: Port) -> Result<Self, PortError> {
        if start.0 > end.0 {
            Err(PortError::InvalidRange(format!(
                "start ({}) > end ({})",
                start, end
            )))
        } else {
            Ok(Self { start, end })
        }
    }

    /// Create a range containing a single port.
    pub const fn single(port: Port) -> Self {
        Self {
            start: port,
            end: port,
        }
    }

    /// Get the number of ports in this range.
    pub const fn len(&self) -> usize {
        (self.end.0 - self.start.0) as usize + 1
    }

    /// Always false; a valid range holds at least one port.
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Iterate over all ports in this range, ascending.
    pub fn iter(&self) -> impl Iterator<Item = Port> {
        (self.start.0..=self.end.0).map(Port)
    }
}

impl fmt::Display for PortRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start == self.end {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{}-{}", self.start, self.end)
        }
    }
}

/// Parses `START-END`. Any malformed descriptor is an `InvalidRange`.
impl FromStr for PortRange {
    type Err = PortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bounds: Vec<&str> = s.trim().split('-').collect();
        if bounds.len() != 2 {
            return Err(PortError::InvalidRange(format!(
                "separate the start port and the end port with a '-', e.g. 80-443 (got '{}')",
                s
            )));
        }

        let bound = |raw: &str| {
            raw.parse::<Port>().map_err(|e| {
                PortError::InvalidRange(format!("bound '{}' in '{}': {}", raw.trim(), s, e))
            })
        };
        let start = bound(bounds[0])?;
        let end = bound(bounds[1])?;

        Self::new(start, end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn port(n: u16) -> Port {
        Port::new(n).unwrap()
    }

    #[test]
    fn test_port_validation() {
        assert!(Port::new(0).is_none());
        assert!(Port::new(1).is_some());
        assert!(Port::new(80).is_some());
        assert!(Port::new(65535).is_some());
    }

    #[test]
    fn test_port_parse() {
        assert_eq!("443".parse::<Port>().unwrap(), port(443));
        assert_eq!("0".parse::<Port>(), Err(PortError::OutOfRange(0)));
        assert!(matches!(
            "70000".parse::<Port>(),
            Err(PortError::InvalidFormat(_))
        ));
        assert!(matches!("http".parse::<Port>(), Err(PortError::InvalidFormat(_))));
    }

    #[test]
    fn test_port_next() {
        assert_eq!(port(80).next(), Some(port(81)));
        assert_eq!(port(65535).next(), None);
    }

    #[test]
    fn test_port_range() {
        let range = PortRange::new(port(1), port(100)).unwrap();
        assert_eq!(range.len(), 100);
        assert!(PortRange::new(port(100), port(1)).is_err());
    }

    #[test]
    fn test_range_yields_every_port_once_ascending() {
        for (a, b) in [(1, 1), (20, 25), (65530, 65535), (1, 1024)] {
            let range: PortRange = format!("{}-{}", a, b).parse().unwrap();
            let ports: Vec<u16> = range.iter().map(Port::as_u16).collect();
            assert_eq!(ports.len(), (b - a + 1) as usize);
            assert_eq!(ports.len(), range.len());
            assert!(ports.windows(2).all(|w| w[0] + 1 == w[1]));
            assert_eq!(ports.first(), Some(&a));
            assert_eq!(ports.last(), Some(&b));
        }
    }

    #[test]
    fn test_malformed_ranges() {
        for bad in ["80", "80-90-100", "-80", "80-", "a-b", "0-10", "443-80", "1-70000", ""] {
            let result = bad.parse::<PortRange>();
            assert!(
                matches!(result, Err(PortError::InvalidRange(_))),
                "expected InvalidRange for {:?}, got {:?}",
                bad,
                result
            );
        }
    }

    #[test]
    fn test_range_display() {
        assert_eq!(PortRange::single(port(22)).to_string(), "22");
        assert_eq!("80-90".parse::<PortRange>().unwrap().to_string(), "80-90");
    }
}
