//! Sensitivity of the stoichiometry to the carbon oxidation state of OM.
use crate::Utils::number_format::{float_repr, round_to};
use crate::errors::{StoichError, StoichResult};
use serde::{Deserialize, Serialize};

/// upper bound on the number of sweep points
pub const MAX_SWEEP_POINTS: usize = 10_000;

/// Carbon oxidation states from `start` to `stop` inclusive
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OxidationSweep {
    pub start: f64,
    pub stop: f64,
    pub step: f64,
}

impl Default for OxidationSweep {
    fn default() -> Self {
        Self {
            start: -4.0,
            stop: 4.0,
            step: 0.5,
        }
    }
}

impl OxidationSweep {
    pub fn new(start: f64, stop: f64, step: f64) -> Self {
        Self { start, stop, step }
    }

    /// Points are computed as start + i*step so that no rounding error accumulates.
    pub fn points(&self) -> StoichResult<Vec<f64>> {
        if !(self.step > 0.0) || !self.start.is_finite() || !self.stop.is_finite() {
            return Err(StoichError::InvalidSweep(format!(
                "step must be positive and bounds finite, got {:?}",
                self
            )));
        }
        if self.stop < self.start {
            return Err(StoichError::InvalidSweep(format!(
                "stop {} is below start {}",
                self.stop, self.start
            )));
        }
        // tolerance keeps `stop` in the sweep when (stop - start)/step is 16.999999...
        let intervals = ((self.stop - self.start) / self.step + 1e-9).floor();
        if !intervals.is_finite() || intervals >= MAX_SWEEP_POINTS as f64 {
            return Err(StoichError::InvalidSweep(format!(
                "{:?} gives more than {} points",
                self, MAX_SWEEP_POINTS
            )));
        }
        let n = (intervals as usize).checked_add(1).ok_or_else(|| {
            StoichError::InvalidSweep(format!("too many points in {:?}", self))
        })?;
        Ok((0..n).map(|i| self.start + i as f64 * self.step).collect())
    }
}

/// Output label of a sweep point: `{prefix}_neg4.0`, `{prefix}_zero`, `{prefix}_pos0.5`.
/// Negative states keep 2 decimals and positive ones 1 decimal.
pub fn sweep_label(prefix: &str, cox: f64) -> String {
    if cox < 0.0 {
        format!("{}_neg{}", prefix, float_repr(round_to(cox.abs(), 2)))
    } else if cox == 0.0 {
        format!("{}_zero", prefix)
    } else {
        format!("{}_pos{}", prefix, float_repr(round_to(cox, 1)))
    }
}
