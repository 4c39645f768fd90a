//! Core type definitions using newtype patterns for type safety.
//!
//! These types prevent common logic errors by making invalid states unrepresentable
//! at compile time.

mod port;
mod selection;
mod target;

pub use port::{Port, PortError, PortRange};
pub use selection::{PortSelection, COMMON_PORTS, DEFAULT_PORT};
pub use target::{ScanTarget, TargetError, TargetSpec};
