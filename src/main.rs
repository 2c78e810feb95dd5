use NitroStoich::cli::cli_args::run_from_args;
use NitroStoich::cli::cli_main::run_interactive_menu;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

pub fn main() {
    if let Err(e) = TermLogger::init(
        LevelFilter::Info,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    ) {
        eprintln!("logger was not initialized: {}", e);
    }

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() {
        run_interactive_menu();
    } else if let Err(e) = run_from_args(&args) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
