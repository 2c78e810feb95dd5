/// non-interactive entry point: `nitro_stoich stoich <method>`, `nitro_stoich tracers <file>`
pub mod cli_args;
pub mod cli_examples;
pub mod cli_main;
/// menus of the stoichiometry generator and of the profile cleaning
pub mod cli_stoich;
