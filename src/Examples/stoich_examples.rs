pub fn stoich_examples(task: usize) {
    //
    match task {
        0 => {
            // COEFFICIENTS AND R MATRIX OF REDFIELD ORGANIC MATTER
            use crate::Stoichiometry::generator::generate;
            use crate::Stoichiometry::composition::{Composition, NstarConvention};
            let artifacts = generate("redfield", &Composition::redfield(), NstarConvention::Redfield);
            for line in &artifacts.reactions {
                println!("{}", line);
            }
            println!("NO3- consumed by DNRN: {}", artifacts.coefficients.DNRN_NO3);
            artifacts.R.pretty_print();
        }
        1 => {
            // How much NO3- does DNRN need when OM gets more oxidized?
            use crate::Stoichiometry::composition::Method;
            use crate::Stoichiometry::generator::{StoichGenerator, pretty_print_artifacts};
            let generator = StoichGenerator::default();
            match generator.artifacts(Method::OxidationStates) {
                Ok(artifacts) => pretty_print_artifacts(&artifacts),
                Err(e) => println!("{}", e),
            }
        }
        2 => {
            // experimental OM with unknown H and O: water terms are "?"
            use crate::Stoichiometry::composition::{Composition, NstarConvention};
            use crate::Stoichiometry::generator::generate;
            let om = Composition::experimental();
            println!("2O-H = {}", om.twoO_minus_H());
            let artifacts = generate("experimental", &om, NstarConvention::Composition);
            println!("{}", artifacts.reactions_text());
            artifacts.R.pretty_print();
        }
        3 => {
            // N* with the Redfield N:P and with the N:P of the local OM
            use crate::Tracers::profile_cleaning::nstar;
            let (no3, no2, po4) = (25.0, 1.5, 2.1);
            println!("N* (16):   {}", nstar(no3, no2, po4, 16.0));
            println!("N* (11.4): {}", nstar(no3, no2, po4, 11.4));
        }
        _ => println!("no example with number {}", task),
    }
}
