/////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
// TESTS
//////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
#[allow(non_snake_case)]
mod tests {
    use crate::Stoichiometry::R_matrix::{
        ANAMMOX, CARBONATE_DISSOLUTION, FIRST_REFERENCE_COLUMN, N_REACTIONS, N_TRACERS,
        NITRITE_OXIDATION, RMatrix,
    };
    use crate::Stoichiometry::coefficients::ReactionCoefficients;
    use crate::Stoichiometry::composition::{Composition, FormulaFamily, Method, NstarConvention};
    use crate::Stoichiometry::generator::{StoichGenerator, generate};
    use crate::Stoichiometry::sweep::OxidationSweep;
    use crate::Utils::load_from_file::{load_R_matrix_from_file, load_reactions_from_file};
    use crate::errors::StoichError;
    use approx::assert_relative_eq;
    use std::collections::HashSet;
    use std::fs;
    use tempfile::tempdir;

    fn reactions_text(om: &Composition) -> String {
        generate("om", om, NstarConvention::Composition).reactions_text()
    }

    #[test]
    fn test_redfield_closed_form() {
        let om = Composition::redfield();
        assert!(matches!(om.family(), FormulaFamily::ClosedForm { .. }));
        let c = ReactionCoefficients::from_composition(&om);
        assert_eq!(c.DNRN_NO3, 212.0);
        assert_eq!(c.DNRN_NO2, 212.0);
        assert_eq!(c.DNRN_water, Some(106.0));
        assert_eq!(c.denit_NO2, 141.33);
        assert_eq!(c.denit_N2, 70.67);
        assert_eq!(c.denit_water, Some(176.67));
        assert_eq!(c.twoO_minus_H, None);
    }

    #[test]
    fn test_anderson_closed_form() {
        let c = ReactionCoefficients::from_composition(&Composition::anderson());
        assert_eq!(c.DNRN_NO3, 236.0);
        assert_eq!(c.DNRN_water, Some(62.0));
        assert_eq!(c.denit_NO2, 157.33);
        assert_eq!(c.denit_N2, 78.67);
        assert_eq!(c.denit_water, Some(140.67));
    }

    #[test]
    fn test_reduced_family_at_zero_oxidation_state() {
        let om = Composition::new(112.5, 11.4, 1.0, 0.0, 0.0);
        assert_eq!(om.family(), FormulaFamily::Reduced);
        assert_relative_eq!(om.twoO_minus_H(), -29.2, epsilon = 1e-9);
        let c = ReactionCoefficients::from_composition(&om);
        assert_eq!(c.DNRN_NO3, 225.0);
        assert_eq!(c.DNRN_NO2, 225.0);
        assert_eq!(c.denit_NO2, 150.0);
        assert_eq!(c.denit_N2, 75.0);
        assert_eq!(c.DNRN_water, None);
        assert_eq!(c.denit_water, None);
        assert_relative_eq!(c.twoO_minus_H.unwrap(), -29.2, epsilon = 1e-9);
    }

    #[test]
    fn test_experimental_composition() {
        let c = ReactionCoefficients::from_composition(&Composition::experimental());
        assert_eq!(c.DNRN_NO3, 182.66);
        assert_eq!(c.denit_NO2, 121.77);
        assert_eq!(c.denit_N2, 60.89);
    }

    #[test]
    fn test_only_one_of_H_and_O_is_reduced() {
        let mut om = Composition::redfield();
        om.O = None;
        assert_eq!(om.family(), FormulaFamily::Reduced);
    }

    #[test]
    fn test_DNRN_NO3_equals_DNRN_NO2_everywhere() {
        let generator = StoichGenerator::default();
        for method in Method::ALL {
            for a in generator.artifacts(method).unwrap() {
                assert_eq!(
                    a.coefficients.DNRN_NO3, a.coefficients.DNRN_NO2,
                    "{}",
                    a.label
                );
            }
        }
    }

    #[test]
    fn test_R_matrix_redfield() {
        let om = Composition::redfield();
        let c = ReactionCoefficients::from_composition(&om);
        let R = RMatrix::assemble(&c, &om, NstarConvention::Redfield);
        let dnrn = R.column(0);
        let expected_dnrn = [-2.0, 2.0, 16.0 / 106.0, 0.0, 15.0 / 106.0, 1.0];
        for i in 0..N_TRACERS {
            assert_relative_eq!(dnrn[i], expected_dnrn[i], epsilon = 1e-12);
        }
        let denit = R.column(1);
        assert_eq!(denit[0], 0.0);
        assert_relative_eq!(denit[1], -141.33 / 106.0, epsilon = 1e-12);
        assert_relative_eq!(denit[2], 16.0 / 106.0, epsilon = 1e-12);
        assert_relative_eq!(denit[3], (-141.33 + 16.0 - 16.0) / 106.0, epsilon = 1e-12);
        assert_relative_eq!(denit[4], (141.33 + 16.0 - 1.0) / 106.0, epsilon = 1e-12);
        assert_eq!(denit[5], 1.0);
    }

    #[test]
    fn test_nstar_convention_differs_per_method() {
        let om = Composition::new(112.5, 11.4, 1.0, 0.0, 0.0);
        let c = ReactionCoefficients::from_composition(&om);
        let own = RMatrix::assemble(&c, &om, NstarConvention::Composition);
        let redfield = RMatrix::assemble(&c, &om, NstarConvention::Redfield);
        // N* row of denitrification
        assert_relative_eq!(own.get(3, 1), (-150.0 + 11.4 - 11.4) / 112.5, epsilon = 1e-12);
        assert_relative_eq!(redfield.get(3, 1), (-150.0 + 11.4 - 16.0) / 112.5, epsilon = 1e-12);
        // other rows do not depend on the convention
        assert_eq!(own.get(4, 1), redfield.get(4, 1));
        assert_eq!(Method::Redfield.nstar_convention(), NstarConvention::Redfield);
        assert_eq!(Method::Anderson.nstar_convention(), NstarConvention::Redfield);
        assert_eq!(Method::Experimental.nstar_convention(), NstarConvention::Composition);
        assert_eq!(
            Method::RedfieldOxidationStates.nstar_convention(),
            NstarConvention::Composition
        );
    }

    #[test]
    fn test_reference_reactions_are_constant() {
        let generator = StoichGenerator::default();
        let references = [ANAMMOX, NITRITE_OXIDATION, CARBONATE_DISSOLUTION];
        let mut count = 0;
        for method in Method::ALL {
            for a in generator.artifacts(method).unwrap() {
                for (j, reference) in references.iter().enumerate() {
                    assert_eq!(&a.R.column(FIRST_REFERENCE_COLUMN + j), reference);
                }
                count += 1;
            }
        }
        // 3 fixed methods + 2 sweeps of 17 points
        assert_eq!(count, 3 + 2 * 17);
    }

    #[test]
    fn test_R_matrix_shape_and_normalization_row() {
        let a = generate("x", &Composition::anderson(), NstarConvention::Redfield);
        let rows = a.R.rows();
        assert_eq!(rows.len(), N_TRACERS);
        assert!(rows.iter().all(|row| row.len() == N_REACTIONS));
        assert_eq!(rows[5], vec![1.0, 1.0, -1.0, -1.0, 1.0]);
    }

    #[test]
    fn test_R_from_rows_wrong_shape() {
        let rows = vec![vec![0.0; 6]; 5];
        assert!(matches!(
            RMatrix::from_rows(&rows),
            Err(StoichError::MatrixShape { rows: 5, cols: 6 })
        ));
    }

    #[test]
    fn test_reactions_text_closed_form() {
        let om = Composition::redfield();
        assert_eq!(
            reactions_text(&om),
            "OM C:H:O:N:P ratio is 106:263:110:16:1\n\
DNRN: OM + 212.0 NO3- + 16 H+ -> 106 CO2 + 16 NH4+ + 1 H3PO4 + 212.0 NO2- + 106.0 H20\n\
Denitrification: OM + 141.33 NO2- + 157.33  H+ -> 106 CO2 + 16 NH4+ + 1 H3PO4 + 70.67 N2 + 176.67 H2O"
        );
    }

    #[test]
    fn test_reactions_text_reduced() {
        let om = Composition::experimental();
        assert_eq!(
            reactions_text(&om),
            "OM C:H:O:N:P ratio is 113.1:a:b:11.23:1\n\
2b-a = 58.4\n\
DNRN: OM + 182.66 NO3- + 11.23 H+ -> 113.1 CO2 + 11.23 NH4+ + 1 H3PO4 + 182.66 NO2- + ? H20\n\
Denitrification: OM + 121.77 NO2- + 133.0  H+ -> 113.1 CO2 + 11.23 NH4+ + 1 H3PO4 + 60.89 N2 + ? H2O"
        );
    }

    #[test]
    fn test_reactions_text_redfield_sweep_point() {
        let om = Composition::redfield_sweep_base().with_cox(-1.5);
        assert_eq!(
            reactions_text(&om),
            "OM C:H:O:N:P ratio is 106:a:b:16:1\n\
2b-a = -202.0\n\
DNRN: OM + 291.5 NO3- + 16 H+ -> 106 CO2 + 16 NH4+ + 1 H3PO4 + 291.5 NO2- + ? H20\n\
Denitrification: OM + 194.33 NO2- + 210.33  H+ -> 106 CO2 + 16 NH4+ + 1 H3PO4 + 97.17 N2 + ? H2O"
        );
    }

    #[test]
    fn test_fully_oxidized_carbon_needs_no_oxidant() {
        let om = Composition::oxidation_sweep_base().with_cox(4.0);
        let c = ReactionCoefficients::from_composition(&om);
        assert_eq!(c.DNRN_NO3, 0.0);
        assert_eq!(c.denit_NO2, 0.0);
        assert_eq!(c.denit_N2, 0.0);
    }

    #[test]
    fn test_sweep_labels_unique() {
        for method in [Method::OxidationStates, Method::RedfieldOxidationStates] {
            let plan = StoichGenerator::default().compositions(method).unwrap();
            assert_eq!(plan.len(), 17);
            let labels: HashSet<&String> = plan.iter().map(|(label, _)| label).collect();
            assert_eq!(labels.len(), 17);
        }
        let plan = StoichGenerator::default()
            .compositions(Method::RedfieldOxidationStates)
            .unwrap();
        assert_eq!(plan[0].0, "cox_redfield_neg4.0");
        assert_eq!(plan[8].0, "cox_redfield_zero");
        assert_eq!(plan[16].0, "cox_redfield_pos4.0");
        assert_eq!(plan[16].1.C, 106.0);
        assert_eq!(plan[16].1.Cox, 4.0);
    }

    #[test]
    fn test_colliding_sweep_labels_rejected() {
        let mut generator = StoichGenerator::default();
        // positive labels keep one decimal: 0.01 and 0.02 both print as pos0.0
        generator.sweep = OxidationSweep::new(0.01, 0.02, 0.01);
        assert!(matches!(
            generator.compositions(Method::OxidationStates),
            Err(StoichError::DuplicateLabel(_))
        ));
    }

    #[test]
    fn test_invalid_method() {
        assert!(matches!(
            "denitrification".parse::<Method>(),
            Err(StoichError::InvalidMethod(_))
        ));
        assert_eq!("redfield".parse::<Method>().unwrap(), Method::Redfield);
        // labels are compared exactly
        assert!(" redfield ".parse::<Method>().is_err());
        assert!("redfield\n".parse::<Method>().is_err());
        assert!(StoichGenerator::default().run_str("Redfield").is_err());
    }

    #[test]
    fn test_run_and_read_back() {
        let dir = tempdir().unwrap();
        let generator = StoichGenerator::new(dir.path());
        let dirs = generator.run(Method::Redfield).unwrap();
        assert_eq!(dirs, vec![dir.path().join("redfield")]);

        let R = load_R_matrix_from_file(&dirs[0].join("R.txt")).unwrap();
        let expected = generate("redfield", &Composition::redfield(), NstarConvention::Redfield);
        assert!(R.max_abs_diff(&expected.R) < 1e-3);

        let coefficients = load_reactions_from_file(&dirs[0].join("reactions.txt")).unwrap();
        assert_eq!(coefficients, expected.coefficients);

        let text = fs::read_to_string(dirs[0].join("R.txt")).unwrap();
        assert_eq!(text.lines().count(), 6);
        assert_eq!(
            text.lines().next().unwrap(),
            "-2.000000000000000000e+00,0.000000000000000000e+00,2.908999999999999808e+00,4.629599999999999937e+01,0.000000000000000000e+00"
        );
    }

    #[test]
    fn test_experimental_from_custom_composition() {
        let dir = tempdir().unwrap();
        let mut generator = StoichGenerator::new(dir.path());
        generator.experimental = Composition::new(112.5, 11.4, 1.0, 0.0, 0.0);
        generator.run(Method::Experimental).unwrap();
        let text = fs::read_to_string(dir.path().join("experimental").join("reactions.txt")).unwrap();
        assert!(text.contains("DNRN: OM + 225.0 NO3-"));
    }
}
