use crate::Stoichiometry::composition::Method;
use crate::Stoichiometry::generator::{StoichGenerator, pretty_print_artifacts};
use crate::Tracers::profile_cleaning::ProfileCleaner;
use crate::Utils::load_from_file::load_task_from_file;
use crate::errors::{StoichError, StoichResult};
use crate::settings::StoichTask;
use log::{error, info};
use std::path::PathBuf;

pub const DEFAULT_CLEAN_OUTPUT: &str = "data_clean.csv";

pub const USAGE: &str = "\
usage:
    nitro_stoich                                   interactive menu
    nitro_stoich stoich <method> [--out DIR] [--task FILE] [--table]
    nitro_stoich tracers <input> [--out FILE] [--task FILE]
    nitro_stoich help

methods: experimental, anderson, redfield, oxidation_states, redfield_oxidation_states
--out    output root of the stoichiometry (default output/OM_variations)
         or cleaned CSV file of the tracers (default data_clean.csv)
--task   JSON task file
--table  print the coefficients of every composition";

#[derive(Debug, Default, PartialEq)]
pub struct CliOptions {
    pub positional: Vec<String>,
    pub out: Option<PathBuf>,
    pub task: Option<PathBuf>,
    pub table: bool,
}

pub fn parse_options(args: &[String]) -> StoichResult<CliOptions> {
    let mut options = CliOptions::default();
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--out" | "-o" => {
                let value = iter
                    .next()
                    .ok_or_else(|| StoichError::InvalidArgument(format!("{} needs a value", arg)))?;
                options.out = Some(PathBuf::from(value));
            }
            "--task" | "-t" => {
                let value = iter
                    .next()
                    .ok_or_else(|| StoichError::InvalidArgument(format!("{} needs a value", arg)))?;
                options.task = Some(PathBuf::from(value));
            }
            "--table" => options.table = true,
            flag if flag.starts_with("--") => {
                return Err(StoichError::InvalidArgument(format!(
                    "unknown option {}",
                    flag
                )));
            }
            value => options.positional.push(value.to_string()),
        }
    }
    Ok(options)
}

fn load_task(options: &CliOptions) -> StoichResult<StoichTask> {
    match &options.task {
        Some(path) => load_task_from_file(path),
        None => Ok(StoichTask::default()),
    }
}

pub fn run_from_args(args: &[String]) -> StoichResult<()> {
    let (command, rest) = match args.split_first() {
        Some(split) => split,
        None => {
            println!("{}", USAGE);
            return Ok(());
        }
    };
    match command.as_str() {
        "stoich" => run_stoich(&parse_options(rest)?),
        "tracers" => run_tracers(&parse_options(rest)?),
        "help" | "-h" | "--help" => {
            println!("{}", USAGE);
            Ok(())
        }
        other => Err(StoichError::InvalidArgument(format!(
            "unknown command '{}'\n{}",
            other, USAGE
        ))),
    }
}

/// An unknown method is reported but is not an error of the run.
pub fn run_stoich(options: &CliOptions) -> StoichResult<()> {
    let label = options.positional.first().ok_or_else(|| {
        StoichError::InvalidArgument(format!("stoich needs a method\n{}", USAGE))
    })?;
    let method = match label.parse::<Method>() {
        Ok(method) => method,
        Err(e) => {
            error!("{}", e);
            println!("Wrong Method");
            return Ok(());
        }
    };
    let mut task = load_task(options)?;
    if let Some(out) = &options.out {
        task = task.with_output_root(out);
    }
    let generator = StoichGenerator::from_task(&task);
    let written = generator.run(method)?;
    if options.table {
        pretty_print_artifacts(&generator.artifacts(method)?);
    }
    info!("{} output pairs written", written.len());
    println!("done");
    Ok(())
}

pub fn run_tracers(options: &CliOptions) -> StoichResult<()> {
    let input = options.positional.first().ok_or_else(|| {
        StoichError::InvalidArgument(format!("tracers needs an input file\n{}", USAGE))
    })?;
    let task = load_task(options)?;
    let output = options
        .out
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CLEAN_OUTPUT));
    let cleaner = ProfileCleaner::new(task.tracers);
    let kept = cleaner.run(&PathBuf::from(input), &output)?;
    println!("{} samples written to {}", kept, output.display());
    Ok(())
}
