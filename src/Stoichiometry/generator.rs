//! Generation of reactions.txt and R.txt for a composition method.
//!
//! Every method reduces to a list of (label, composition) pairs; each pair is
//! pushed through the same pipeline: coefficients -> R matrix -> equation text,
//! and written to `<output_root>/<label>/`.
use super::R_matrix::RMatrix;
use super::coefficients::ReactionCoefficients;
use super::composition::{Composition, Method, NstarConvention};
use super::reaction_format::{UNKNOWN, reaction_lines};
use super::sweep::{OxidationSweep, sweep_label};
use crate::Utils::save_to_file::{savetxt, write_text};
use crate::errors::{StoichError, StoichResult};
use crate::settings::StoichTask;
use log::{info, warn};
use prettytable::{Table, row};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

pub const REACTIONS_FILE: &str = "reactions.txt";
pub const R_FILE: &str = "R.txt";
pub const DEFAULT_OUTPUT_ROOT: &str = "output/OM_variations";

/// label prefixes of the sweep directories
pub const SWEEP_PREFIX: &str = "cox";
pub const REDFIELD_SWEEP_PREFIX: &str = "cox_redfield";

/// Everything derived for one composition
#[derive(Debug, Clone)]
#[allow(non_snake_case)]
pub struct StoichArtifacts {
    pub label: String,
    pub composition: Composition,
    pub nstar: NstarConvention,
    pub coefficients: ReactionCoefficients,
    pub reactions: Vec<String>,
    pub R: RMatrix,
}

/// Derives coefficients, equation text and R matrix of a single composition.
#[allow(non_snake_case)]
pub fn generate(label: &str, composition: &Composition, nstar: NstarConvention) -> StoichArtifacts {
    let coefficients = ReactionCoefficients::from_composition(composition);
    let reactions = reaction_lines(composition, &coefficients);
    let R = RMatrix::assemble(&coefficients, composition, nstar);
    StoichArtifacts {
        label: label.to_string(),
        composition: composition.clone(),
        nstar,
        coefficients,
        reactions,
        R,
    }
}

impl StoichArtifacts {
    pub fn reactions_text(&self) -> String {
        self.reactions.join("\n")
    }

    /// Writes reactions.txt and R.txt into `<output_root>/<label>`, returns that directory.
    pub fn write_to(&self, output_root: &Path) -> StoichResult<PathBuf> {
        let dir = output_root.join(&self.label);
        fs::create_dir_all(&dir)?;
        write_text(&dir.join(REACTIONS_FILE), &self.reactions_text())?;
        savetxt(&dir.join(R_FILE), &self.R.rows(), ",")?;
        info!("{} and {} written to {}", REACTIONS_FILE, R_FILE, dir.display());
        Ok(dir)
    }
}

/// Entry point of the stoichiometry calculations
#[derive(Debug, Clone)]
pub struct StoichGenerator {
    pub output_root: PathBuf,
    /// composition used by the `experimental` method
    pub experimental: Composition,
    pub sweep: OxidationSweep,
}

impl Default for StoichGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_OUTPUT_ROOT)
    }
}

impl StoichGenerator {
    pub fn new(output_root: impl Into<PathBuf>) -> Self {
        Self {
            output_root: output_root.into(),
            experimental: Composition::experimental(),
            sweep: OxidationSweep::default(),
        }
    }

    pub fn from_task(task: &StoichTask) -> Self {
        Self {
            output_root: task.output_root.clone(),
            experimental: task.experimental.clone(),
            sweep: task.sweep.clone(),
        }
    }

    /// Labelled compositions of a method, one for fixed methods and one per
    /// oxidation state for the sweeps. Labels are unique.
    pub fn compositions(&self, method: Method) -> StoichResult<Vec<(String, Composition)>> {
        let plan = match method {
            Method::Experimental => vec![(method.to_string(), self.experimental.clone())],
            Method::Anderson => vec![(method.to_string(), Composition::anderson())],
            Method::Redfield => vec![(method.to_string(), Composition::redfield())],
            Method::OxidationStates => {
                self.sweep_plan(SWEEP_PREFIX, &Composition::oxidation_sweep_base())?
            }
            Method::RedfieldOxidationStates => {
                self.sweep_plan(REDFIELD_SWEEP_PREFIX, &Composition::redfield_sweep_base())?
            }
        };
        let mut seen = HashSet::new();
        for (label, _) in &plan {
            if !seen.insert(label.as_str()) {
                return Err(StoichError::DuplicateLabel(label.clone()));
            }
        }
        Ok(plan)
    }

    fn sweep_plan(&self, prefix: &str, base: &Composition) -> StoichResult<Vec<(String, Composition)>> {
        Ok(self
            .sweep
            .points()?
            .into_iter()
            .map(|cox| (sweep_label(prefix, cox), base.with_cox(cox)))
            .collect())
    }

    /// Computes all artifacts of a method without touching the disk.
    pub fn artifacts(&self, method: Method) -> StoichResult<Vec<StoichArtifacts>> {
        let nstar = method.nstar_convention();
        Ok(self
            .compositions(method)?
            .iter()
            .map(|(label, composition)| generate(label, composition, nstar))
            .collect())
    }

    /// Computes and writes all artifacts of a method, returns the output directories.
    pub fn run(&self, method: Method) -> StoichResult<Vec<PathBuf>> {
        info!(
            "method {}: writing results to {}",
            method,
            self.output_root.display()
        );
        let artifacts = self.artifacts(method)?;
        let mut written = Vec::with_capacity(artifacts.len());
        for artifact in &artifacts {
            written.push(artifact.write_to(&self.output_root)?);
        }
        info!("method {}: {} output pairs written", method, written.len());
        Ok(written)
    }

    /// Same as [`run`](Self::run) with the method given by its label.
    pub fn run_str(&self, method: &str) -> StoichResult<Vec<PathBuf>> {
        let method = method.parse::<Method>().inspect_err(|e| warn!("{}", e))?;
        self.run(method)
    }
}

/// Table of the coefficients of all compositions of a method
pub fn pretty_print_artifacts(artifacts: &[StoichArtifacts]) {
    let opt = |x: Option<f64>| x.map(|v| v.to_string()).unwrap_or_else(|| UNKNOWN.to_string());
    let mut table = Table::new();
    table.add_row(row![
        "label", "C", "N", "P", "Cox", "DNRN NO3-", "DNRN H2O", "denit NO2-", "denit N2",
        "denit H2O"
    ]);
    for a in artifacts {
        let c = &a.coefficients;
        table.add_row(row![
            a.label,
            a.composition.C,
            a.composition.N,
            a.composition.P,
            a.composition.Cox,
            c.DNRN_NO3,
            opt(c.DNRN_water),
            c.denit_NO2,
            c.denit_N2,
            opt(c.denit_water)
        ]);
    }
    table.printstd();
}
