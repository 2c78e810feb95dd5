//! # Settings Module
//!
//! ## Purpose
//! Describes a calculation task: where results go, which organic matter
//! composition the `experimental` method uses, the oxidation state range of the
//! sweeps and the options of the profile cleaning. A task can be read from a
//! JSON file; every field is optional and falls back to its default.
//!
//! ## Task file example
//! ```json
//! {
//!   "output_root": "output/OM_variations",
//!   "experimental": { "C": 113.1, "N": 11.23, "P": 1.0, "charge": 0.0, "Cox": 0.77 },
//!   "sweep": { "start": -4.0, "stop": 4.0, "step": 0.5 },
//!   "tracers": { "skip_rows": 71, "good_flags": [0], "nstar_phosphate_coeff": 16.0 }
//! }
//! ```
//!
//! ## Defaults
//! | Field | Default |
//! |-------|---------|
//! | output_root | output/OM_variations |
//! | experimental | C 113.1, N 11.23, P 1, charge 0, Cox 0.77 |
//! | sweep | -4.0 ..= 4.0, step 0.5 |
//! | tracers.skip_rows | 71 |
//! | tracers.good_flags | [0] |
//! | tracers.nstar_phosphate_coeff | 16 |

use crate::Stoichiometry::composition::Composition;
use crate::Stoichiometry::generator::DEFAULT_OUTPUT_ROOT;
use crate::Stoichiometry::sweep::OxidationSweep;
use crate::Tracers::profile_cleaning::CleaningOptions;
use crate::errors::StoichResult;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// User task for the stoichiometry generator and the profile cleaning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoichTask {
    /// root directory of the `<label>/reactions.txt` and `<label>/R.txt` files
    pub output_root: PathBuf,
    /// composition of the `experimental` method
    pub experimental: Composition,
    /// carbon oxidation states of the sweep methods
    pub sweep: OxidationSweep,
    pub tracers: CleaningOptions,
}

impl Default for StoichTask {
    fn default() -> Self {
        Self {
            output_root: PathBuf::from(DEFAULT_OUTPUT_ROOT),
            experimental: Composition::experimental(),
            sweep: OxidationSweep::default(),
            tracers: CleaningOptions::default(),
        }
    }
}

impl StoichTask {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json_str(json: &str) -> StoichResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json_string(&self) -> StoichResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Overrides the output root, e.g. from a command line argument.
    pub fn with_output_root(mut self, output_root: impl Into<PathBuf>) -> Self {
        self.output_root = output_root.into();
        self
    }
}
