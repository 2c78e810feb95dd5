//! R matrix: theoretical change of each tracer per mole of DIC produced (or
//! consumed) by each reaction. Rows are tracers, columns are reactions.
use super::coefficients::ReactionCoefficients;
use super::composition::{Composition, NstarConvention};
use crate::errors::{StoichError, StoichResult};
use nalgebra::SMatrix;
use prettytable::{Cell, Row, Table};

pub const N_TRACERS: usize = 6;
pub const N_REACTIONS: usize = 5;

/// row labels, the last row is the DIC normalization
pub const TRACERS: [&str; N_TRACERS] = ["NO3", "NO2", "NH4", "Nstar", "TA", "DIC"];
/// column labels
pub const REACTIONS: [&str; N_REACTIONS] = [
    "DNRN",
    "denitrification",
    "anammox",
    "nitrite_oxidation",
    "carbonate_dissolution",
];

/// Anammox with chemoautotrophic carbon fixation, per mole of C fixed
pub const ANAMMOX: [f64; N_TRACERS] = [2.909, -12.0, -9.091, -18.182, 0.182, -1.0];
/// Nitrite oxidation with chemoautotrophic carbon fixation, per mole of C fixed
pub const NITRITE_OXIDATION: [f64; N_TRACERS] = [46.296, -46.296, 0.0, 0.0, 0.0, -1.0];
/// CaCO3 dissolution
pub const CARBONATE_DISSOLUTION: [f64; N_TRACERS] = [0.0, 0.0, 0.0, 0.0, 2.0, 1.0];

/// index of the first reference reaction column; columns from here on do not
/// depend on the organic matter composition
pub const FIRST_REFERENCE_COLUMN: usize = 2;

#[derive(Debug, Clone, PartialEq)]
pub struct RMatrix {
    /// tracers x reactions
    pub matrix: SMatrix<f64, N_TRACERS, N_REACTIONS>,
}

impl RMatrix {
    /// Normalizes the reaction coefficients to moles of carbon respired.
    #[allow(non_snake_case)]
    pub fn assemble(
        coefficients: &ReactionCoefficients,
        composition: &Composition,
        nstar: NstarConvention,
    ) -> Self {
        let (C, N, P) = (composition.C, composition.N, composition.P);
        let k = nstar.phosphate_multiplier(composition);
        let c = coefficients;

        let DNRN = [
            -c.DNRN_NO3 / C,
            c.DNRN_NO2 / C,
            N / C,
            (-c.DNRN_NO3 + c.DNRN_NO2 + N - k * P) / C,
            (N - P) / C,
            1.0,
        ];
        let denit = [
            0.0,
            -c.denit_NO2 / C,
            N / C,
            (-c.denit_NO2 + N - k * P) / C,
            (c.denit_NO2 + N - P) / C,
            1.0,
        ];

        // one row per reaction, then transposed so that reactions become columns
        let per_reaction = SMatrix::<f64, N_REACTIONS, N_TRACERS>::from_row_slice(
            &[DNRN, denit, ANAMMOX, NITRITE_OXIDATION, CARBONATE_DISSOLUTION].concat(),
        );
        Self {
            matrix: per_reaction.transpose(),
        }
    }

    /// Builds the matrix from rows as they are read from R.txt
    pub fn from_rows(rows: &[Vec<f64>]) -> StoichResult<Self> {
        let cols = rows.first().map(|row| row.len()).unwrap_or(0);
        if rows.len() != N_TRACERS || rows.iter().any(|row| row.len() != N_REACTIONS) {
            return Err(StoichError::MatrixShape {
                rows: rows.len(),
                cols,
            });
        }
        let flat: Vec<f64> = rows.iter().flatten().copied().collect();
        Ok(Self {
            matrix: SMatrix::<f64, N_TRACERS, N_REACTIONS>::from_row_slice(&flat),
        })
    }

    pub fn rows(&self) -> Vec<Vec<f64>> {
        self.matrix
            .row_iter()
            .map(|row| row.iter().copied().collect())
            .collect()
    }

    pub fn get(&self, tracer: usize, reaction: usize) -> f64 {
        self.matrix[(tracer, reaction)]
    }

    pub fn column(&self, reaction: usize) -> [f64; N_TRACERS] {
        let mut column = [0.0; N_TRACERS];
        for (i, value) in self.matrix.column(reaction).iter().enumerate() {
            column[i] = *value;
        }
        column
    }

    /// max absolute elementwise difference
    pub fn max_abs_diff(&self, other: &RMatrix) -> f64 {
        (self.matrix - other.matrix).amax()
    }

    pub fn pretty_print(&self) {
        let mut table = Table::new();
        let mut header = vec![Cell::new("tracer / reaction")];
        header.extend(REACTIONS.iter().map(|r| Cell::new(r)));
        table.add_row(Row::new(header));
        for (i, tracer) in TRACERS.iter().enumerate() {
            let mut row = vec![Cell::new(tracer)];
            for j in 0..N_REACTIONS {
                row.push(Cell::new(&format!("{:.4}", self.matrix[(i, j)])));
            }
            table.add_row(Row::new(row));
        }
        table.printstd();
    }
}
