/// eng
/// Elemental composition of organic matter (C, H, O, N, P, charge, carbon oxidation state) and
/// the five named composition methods: "experimental", "anderson", "redfield", "oxidation_states",
/// "redfield_oxidation_states". The N* convention (16*P or N*P) is attached to the method.
pub mod composition;
/// Stoichiometric coefficients of DNRN (NO3- -> NO2-) and denitrification (NO2- -> N2) obtained from
/// the oxygen and hydrogen balances. Closed form when H and O are known, reduced form (2O-H only)
/// otherwise; in the reduced form the water terms are undetermined.
pub mod coefficients;
/// R matrix: change of NO3, NO2, NH4, N*, TA and DIC per mole of carbon for DNRN, denitrification and
/// three reference reactions (anammox, nitrite oxidation, carbonate dissolution)
/// # Examples
/// ```
/// use NitroStoich::Stoichiometry::composition::{Composition, NstarConvention};
/// use NitroStoich::Stoichiometry::coefficients::ReactionCoefficients;
/// use NitroStoich::Stoichiometry::R_matrix::RMatrix;
/// let om = Composition::redfield();
/// let coeffs = ReactionCoefficients::from_composition(&om);
/// let R = RMatrix::assemble(&coeffs, &om, NstarConvention::Redfield);
/// assert_eq!(R.get(0, 0), -2.0);
/// assert_eq!(R.get(5, 4), 1.0);
/// ```
#[allow(non_snake_case)]
pub mod R_matrix;
/// text of reactions.txt
pub mod reaction_format;
/// carbon oxidation state sweep and the labels of its output directories
pub mod sweep;
/// One pipeline for all methods: compositions -> coefficients -> R matrix -> reactions.txt and R.txt
/// # Examples
/// ```no_run
/// use NitroStoich::Stoichiometry::generator::StoichGenerator;
/// use NitroStoich::Stoichiometry::composition::Method;
/// let generator = StoichGenerator::new("output/OM_variations");
/// let dirs = generator.run(Method::OxidationStates).unwrap();
/// assert_eq!(dirs.len(), 17);
/// ```
pub mod generator;
mod stoichiometry_tests;
