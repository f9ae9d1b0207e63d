//! Synthesis configuration.

use serde::{Deserialize, Serialize};

use crate::error::{BreakError, Result};
use crate::matrix::TravelTimeMatrix;

/// Minutes between break nodes.
pub const BREAK_INTERVAL: f64 = 60.0;

/// Minutes per segment for the coarse refinement and split passes.
pub const COARSE_INTERVAL: f64 = 600.0;

/// Default bound on nodes synthesized for a single edge.
pub const MAX_NODES_PER_EDGE: usize = 100;

/// Options shared by the node synthesizers.
///
/// Every field has a default, so a partial JSON document is enough.
///
/// # Examples
///
/// ```
/// use u_breaks::config::SynthesisConfig;
///
/// let cfg = SynthesisConfig::from_json(r#"{ "interval_length": 30 }"#).unwrap();
/// assert_eq!(cfg.interval_length, 30.0);
/// assert_eq!(cfg.max_nodes_per_edge, 100);
/// assert!(cfg.starting_node_offset.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SynthesisConfig {
    /// Minutes per synthetic node.
    pub interval_length: f64,
    /// First synthetic identifier; `None` means one past the current maximum.
    pub starting_node_offset: Option<usize>,
    /// Safety bound on nodes per edge.
    pub max_nodes_per_edge: usize,
}

impl Default for SynthesisConfig {
    fn default() -> Self {
        Self::breaks()
    }
}

impl SynthesisConfig {
    /// Hourly break insertion.
    pub fn breaks() -> Self {
        Self {
            interval_length: BREAK_INTERVAL,
            starting_node_offset: None,
            max_nodes_per_edge: MAX_NODES_PER_EDGE,
        }
    }

    /// Coarse ten-hour segments, used for refinement and splitting.
    pub fn coarse() -> Self {
        Self {
            interval_length: COARSE_INTERVAL,
            ..Self::breaks()
        }
    }

    /// Sets minutes per synthetic node.
    pub fn with_interval_length(mut self, minutes: f64) -> Self {
        self.interval_length = minutes;
        self
    }

    /// Sets the first synthetic identifier.
    pub fn with_starting_node(mut self, id: usize) -> Self {
        self.starting_node_offset = Some(id);
        self
    }

    /// Sets the bound on nodes per edge.
    pub fn with_max_nodes_per_edge(mut self, max: usize) -> Self {
        self.max_nodes_per_edge = max;
        self
    }

    /// Parses and validates a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self> {
        let cfg: Self = serde_json::from_str(json)
            .map_err(|e| BreakError::Configuration(format!("invalid config: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Checks that the interval is a positive finite number of minutes.
    pub fn validate(&self) -> Result<()> {
        check_interval(self.interval_length)
    }

    /// First synthetic identifier to use against `matrix`.
    pub fn starting_node(&self, matrix: &TravelTimeMatrix) -> usize {
        self.starting_node_offset.unwrap_or_else(|| matrix.next_id())
    }
}

/// Fails with [`BreakError::Configuration`] unless `minutes` is positive and finite.
pub(crate) fn check_interval(minutes: f64) -> Result<()> {
    if !minutes.is_finite() || minutes <= 0.0 {
        return Err(BreakError::Configuration(format!(
            "interval length must be positive, got {minutes}"
        )));
    }
    Ok(())
}
