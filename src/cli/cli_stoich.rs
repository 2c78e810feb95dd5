use super::cli_args::DEFAULT_CLEAN_OUTPUT;
use super::cli_main::{get_user_input, prompt};
use crate::Stoichiometry::composition::Method;
use crate::Stoichiometry::generator::{StoichGenerator, pretty_print_artifacts};
use crate::Tracers::profile_cleaning::{CleaningOptions, ProfileCleaner};
use log::error;
use std::path::PathBuf;

pub fn stoichiometry_menu() {
    loop {
        println!("\n=== Reaction stoichiometry ===");
        for (i, method) in Method::ALL.iter().enumerate() {
            println!("\x1b[33m{}. {}\x1b[0m", i + 1, method);
        }
        println!("\x1b[33m0. Back to main menu\x1b[0m");
        prompt("Enter your choice: ");

        let choice = get_user_input();
        let method = match choice.trim() {
            "0" => break,
            // labels are accepted as well as numbers
            other => match other.parse::<usize>() {
                Ok(i) if (1..=Method::ALL.len()).contains(&i) => Method::ALL[i - 1],
                _ => match other.parse::<Method>() {
                    Ok(method) => method,
                    Err(e) => {
                        error!("{}", e);
                        println!("Wrong Method");
                        continue;
                    }
                },
            },
        };
        run_method_dialog(method);
    }
}

fn run_method_dialog(method: Method) {
    prompt("Output directory (empty for output/OM_variations): ");
    let out = get_user_input();
    let generator = if out.trim().is_empty() {
        StoichGenerator::default()
    } else {
        StoichGenerator::new(out.trim())
    };
    match generator.artifacts(method) {
        Ok(artifacts) => pretty_print_artifacts(&artifacts),
        Err(e) => {
            error!("{}", e);
            return;
        }
    }
    prompt("Write reactions.txt and R.txt? (y/n): ");
    let choice = get_user_input();
    if choice.trim().to_lowercase() == "y" || choice.trim().to_lowercase() == "yes" {
        match generator.run(method) {
            Ok(dirs) => println!("done, {} output pairs", dirs.len()),
            Err(e) => error!("{}", e),
        }
    } else {
        println!("Nothing written. Returning to menu.");
    }
}

pub fn tracers_menu() {
    prompt("Enter profile file path: ");
    let input = get_user_input();
    let input = PathBuf::from(input.trim());
    if !input.is_file() {
        println!("File not found: {}", input.display());
        return;
    }
    prompt("Output CSV (empty for data_clean.csv): ");
    let out = get_user_input();
    let output = if out.trim().is_empty() {
        PathBuf::from(DEFAULT_CLEAN_OUTPUT)
    } else {
        PathBuf::from(out.trim())
    };
    let cleaner = ProfileCleaner::new(CleaningOptions::default());
    match cleaner.run(&input, &output) {
        Ok(kept) => println!("{} samples written to {}", kept, output.display()),
        Err(e) => error!("{}", e),
    }
}
