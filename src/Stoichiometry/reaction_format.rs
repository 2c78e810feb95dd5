use super::coefficients::{COEFF_DECIMALS, ReactionCoefficients};
use super::composition::{Composition, FormulaFamily};
use crate::Utils::number_format::{float_repr, ratio_repr, round_to};

/// placeholder for coefficients which cannot be resolved
pub const UNKNOWN: &str = "?";

fn optional_repr(value: Option<f64>) -> String {
    value.map(float_repr).unwrap_or_else(|| UNKNOWN.to_string())
}

/// Lines of reactions.txt: OM elemental ratio, 2O-H when only the combined term
/// is known, then the DNRN and denitrification equations.
#[allow(non_snake_case)]
pub fn reaction_lines(composition: &Composition, coefficients: &ReactionCoefficients) -> Vec<String> {
    let C = ratio_repr(composition.C);
    let N = ratio_repr(composition.N);
    let P = ratio_repr(composition.P);
    let mut lines = Vec::with_capacity(4);

    match composition.family() {
        FormulaFamily::ClosedForm { H, O } => {
            lines.push(format!(
                "OM C:H:O:N:P ratio is {}:{}:{}:{}:{}",
                C,
                ratio_repr(H),
                ratio_repr(O),
                N,
                P
            ));
        }
        FormulaFamily::Reduced => {
            lines.push(format!("OM C:H:O:N:P ratio is {}:a:b:{}:{}", C, N, P));
            let twoO_minus_H = coefficients
                .twoO_minus_H
                .unwrap_or_else(|| composition.twoO_minus_H());
            lines.push(format!(
                "2b-a = {}",
                float_repr(round_to(twoO_minus_H, COEFF_DECIMALS))
            ));
        }
    }

    lines.push(format!(
        "DNRN: OM + {} NO3- + {} H+ -> {} CO2 + {} NH4+ + {} H3PO4 + {} NO2- + {} H20",
        float_repr(coefficients.DNRN_NO3),
        N,
        C,
        N,
        P,
        float_repr(coefficients.DNRN_NO2),
        optional_repr(coefficients.DNRN_water)
    ));
    lines.push(format!(
        "Denitrification: OM + {} NO2- + {}  H+ -> {} CO2 + {} NH4+ + {} H3PO4 + {} N2 + {} H2O",
        float_repr(coefficients.denit_NO2),
        float_repr(coefficients.denit_protons(composition)),
        C,
        N,
        P,
        float_repr(coefficients.denit_N2),
        optional_repr(coefficients.denit_water)
    ));
    lines
}
