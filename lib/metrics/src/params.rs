//! Metric parameters
//!
//! One flat parameter set shared by every metric. A metric reads the fields it
//! understands and ignores the others, so one configuration can drive a sweep
//! over several metrics.

use analogs_core::{Error, Result};
use serde::{Deserialize, Serialize};

/// Tunable parameters for the dissimilarity metrics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MetricParams {
    /// Neighbour rank used by `kldiv` (1 = nearest neighbour).
    #[serde(default = "default_k")]
    pub k: usize,

    /// Floor applied to distances before taking logarithms
    /// (`zech_aslan`, `kldiv`).
    #[serde(default = "default_dmin")]
    pub dmin: f64,

    /// Whether `szekely_rizzo` rescales features by the pooled standard
    /// deviation before measuring distances.
    #[serde(default = "default_standardize")]
    pub standardize: bool,
}

fn default_k() -> usize {
    1
}

fn default_dmin() -> f64 {
    1e-12
}

fn default_standardize() -> bool {
    true
}

impl Default for MetricParams {
    fn default() -> Self {
        Self {
            k: default_k(),
            dmin: default_dmin(),
            standardize: default_standardize(),
        }
    }
}

impl MetricParams {
    #[must_use]
    pub fn with_k(mut self, k: usize) -> Self {
        self.k = k;
        self
    }

    #[must_use]
    pub fn with_dmin(mut self, dmin: f64) -> Self {
        self.dmin = dmin;
        self
    }

    #[must_use]
    pub fn with_standardize(mut self, standardize: bool) -> Self {
        self.standardize = standardize;
        self
    }

    /// Reject values no metric can work with.
    pub fn validate(&self) -> Result<()> {
        if self.k == 0 {
            return Err(Error::InvalidConfig("k must be at least 1".to_string()));
        }
        if !(self.dmin.is_finite() && self.dmin > 0.0) {
            return Err(Error::InvalidConfig(format!(
                "dmin must be a positive finite number, got {}",
                self.dmin
            )));
        }
        Ok(())
    }
}
