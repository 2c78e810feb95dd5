//! Stoichiometric coefficients of DNRN and denitrification.
//!
//! DNRN:            OM + x NO3- + N H+ -> C CO2 + N NH4+ + P H3PO4 + x NO2- + y H2O
//! Denitrification: OM + x NO2- + (x + N) H+ -> C CO2 + N NH4+ + P H3PO4 + x/2 N2 + y H2O
//!
//! x follows from the oxygen balance of DNRN and from the hydrogen balance of
//! denitrification, y from the remaining element. When H and O of the organic
//! matter are not known separately only 2O-H enters the balances and the water
//! terms stay undetermined.
use super::composition::{Composition, FormulaFamily};
use crate::Utils::number_format::round_to;
use serde::{Deserialize, Serialize};

/// coefficients are reported with this many decimals
pub const COEFF_DECIMALS: usize = 2;

/// moles of each species per mole of organic matter consumed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[allow(non_snake_case)]
pub struct ReactionCoefficients {
    pub DNRN_NO3: f64,
    pub DNRN_NO2: f64,
    /// None when H and O are not resolvable
    pub DNRN_water: Option<f64>,
    pub denit_NO2: f64,
    pub denit_N2: f64,
    pub denit_water: Option<f64>,
    /// 2O-H used by the reduced family
    pub twoO_minus_H: Option<f64>,
}

impl ReactionCoefficients {
    pub fn from_composition(composition: &Composition) -> Self {
        match composition.family() {
            FormulaFamily::ClosedForm { H, O } => Self::closed_form(composition, H, O),
            FormulaFamily::Reduced => Self::reduced(composition),
        }
    }

    #[allow(non_snake_case)]
    fn closed_form(composition: &Composition, H: f64, O: f64) -> Self {
        let (C, N, P) = (composition.C, composition.N, composition.P);
        // oxygen balance of DNRN
        let DNRN_NO3 = round_to(2.0 * C + 0.5 * H - O - 1.5 * N + 2.5 * P, COEFF_DECIMALS);
        let DNRN_water = round_to(0.5 * H - 1.5 * N - 1.5 * P, COEFF_DECIMALS);
        // hydrogen balance of NO2- reduction
        let denit_NO2 = round_to(
            4.0 / 3.0 * C + 1.0 / 3.0 * H - 2.0 / 3.0 * O - N + 5.0 / 3.0 * P,
            COEFF_DECIMALS,
        );
        let denit_N2 = round_to(
            2.0 / 3.0 * C + 1.0 / 6.0 * H - 1.0 / 3.0 * O - 0.5 * N + 5.0 / 6.0 * P,
            COEFF_DECIMALS,
        );
        let denit_water = round_to(
            2.0 / 3.0 * C + 2.0 / 3.0 * H - 1.0 / 3.0 * O - 2.0 * N - 2.0 / 3.0 * P,
            COEFF_DECIMALS,
        );
        Self {
            DNRN_NO3,
            DNRN_NO2: DNRN_NO3,
            DNRN_water: Some(DNRN_water),
            denit_NO2,
            denit_N2,
            denit_water: Some(denit_water),
            twoO_minus_H: None,
        }
    }

    #[allow(non_snake_case)]
    fn reduced(composition: &Composition) -> Self {
        let (C, N, P) = (composition.C, composition.N, composition.P);
        let twoO_minus_H = composition.twoO_minus_H();
        let DNRN_NO3 = round_to(
            2.0 * C - 0.5 * twoO_minus_H - 1.5 * N + 2.5 * P,
            COEFF_DECIMALS,
        );
        let denit_NO2 = round_to(
            4.0 / 3.0 * C - 1.0 / 3.0 * twoO_minus_H - N + 5.0 / 3.0 * P,
            COEFF_DECIMALS,
        );
        let denit_N2 = round_to(
            2.0 / 3.0 * C - 1.0 / 6.0 * twoO_minus_H - 0.5 * N + 5.0 / 6.0 * P,
            COEFF_DECIMALS,
        );
        Self {
            DNRN_NO3,
            DNRN_NO2: DNRN_NO3,
            DNRN_water: None,
            denit_NO2,
            denit_N2,
            denit_water: None,
            twoO_minus_H: Some(twoO_minus_H),
        }
    }

    /// H+ consumed by denitrification: one per NO2- plus one per NH4+
    pub fn denit_protons(&self, composition: &Composition) -> f64 {
        self.denit_NO2 + composition.N
    }
}
