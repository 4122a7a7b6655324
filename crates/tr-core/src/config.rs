//! Router configuration.

use crate::{CoreError, CoreResult};

/// Tunables shared by junction classification and rail search.
///
/// Typically loaded from a JSON file by the application crate (enable the
/// `serde` feature) and passed by reference to the routing components.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RouterConfig {
    /// First line of the topmost sign of a junction rule stack.
    pub junction_header: String,

    /// First line of a sign that sets a rider's destination.
    pub destination_header: String,

    /// Rail cells a search may walk in one scheduling slice before it
    /// suspends.
    pub cells_per_slice: usize,

    /// Host ticks between two slices of the same search.
    pub slice_delay_ticks: u64,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            junction_header:    "[junction]".to_owned(),
            destination_header: "[destination]".to_owned(),
            cells_per_slice:    100,
            slice_delay_ticks:  10,
        }
    }
}

impl RouterConfig {
    /// Reject configurations that would stall searches or match every sign.
    pub fn validate(&self) -> CoreResult<()> {
        if self.cells_per_slice == 0 {
            return Err(CoreError::Config("cells_per_slice must be at least 1".into()));
        }
        if self.junction_header.trim().is_empty() {
            return Err(CoreError::Config("junction_header must not be empty".into()));
        }
        if self.destination_header.trim().is_empty() {
            return Err(CoreError::Config("destination_header must not be empty".into()));
        }
        if self.junction_header.eq_ignore_ascii_case(&self.destination_header) {
            return Err(CoreError::Config(
                "junction_header and destination_header must differ".into(),
            ));
        }
        Ok(())
    }
}
