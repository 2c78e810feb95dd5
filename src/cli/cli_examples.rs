use super::cli_main::{get_user_input, prompt};
use crate::Examples::stoich_examples::stoich_examples;

pub fn examples_menu() {
    loop {
        println!("\n=== Examples ===");
        println!("1. Redfield OM: coefficients and R matrix");
        println!("2. Carbon oxidation state sweep");
        println!("3. Experimental OM with unresolved H and O");
        println!("4. N* with different phosphate multipliers");
        println!("0. Back to main menu");
        prompt("Enter your choice: ");

        let choice = get_user_input();
        match choice.trim() {
            "1" => stoich_examples(0),
            "2" => stoich_examples(1),
            "3" => stoich_examples(2),
            "4" => stoich_examples(3),
            "0" => break,
            _ => println!("Invalid choice. Please try again."),
        }
    }
}
