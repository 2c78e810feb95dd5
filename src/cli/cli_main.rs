use super::cli_examples::examples_menu;
use super::cli_stoich::{stoichiometry_menu, tracers_menu};
use std::io::{self, Write};

pub fn run_interactive_menu() {
    loop {
        show_main_menu();
        let choice = get_user_input();

        match choice.trim() {
            "1" => stoichiometry_menu(),
            "2" => tracers_menu(),
            "3" => examples_menu(),
            "0" => {
                println!("Goodbye!");
                break;
            }
            _ => println!("Invalid choice. Please try again."),
        }
    }
}
/* colors
Blue (\x1b[34m) - Welcome header text

Yellow (\x1b[33m) - Menu options (1, 2, 0)

Cyan (\x1b[36m) - "Enter your choice:" prompt

Reset (\x1b[0m) - Returns to normal color after each colored section
*/
fn show_main_menu() {
    println!(
        "\x1b[34m\n Welcome to NitroStoich: stoichiometry of DNRN and denitrification\n
    for varying organic matter composition \n \x1b[0m"
    );
    println!("\x1b[33m1. Reaction stoichiometry and R matrix\x1b[0m");
    println!("\x1b[33m2. Clean hydrographic profile data\x1b[0m");
    println!("\x1b[33m3. Examples\x1b[0m");
    println!("\x1b[33m0. Exit\x1b[0m");
    prompt("Enter your choice: ");
}

pub(crate) fn prompt(text: &str) {
    print!("\x1b[36m{}\x1b[0m", text);
    let _ = io::stdout().flush();
}

/// empty string when stdin is closed
pub(crate) fn get_user_input() -> String {
    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        input.clear();
    }
    input
}
