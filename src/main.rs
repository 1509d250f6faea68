use clap::Parser;
use color_eyre::Result;
use log::debug;
use std::path::PathBuf;
use std::process::ExitCode;
mod error;
mod scenario;
mod tasks;
use error::PatchError;
use scenario::Scenario;
use tasks::{parse_tasks, TaskList};

/// Patch the [config].tasks list of a scenario file for a one-off evaluation run
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Path to the scenario TOML file to rewrite
    #[clap(short, long)]
    scenario: PathBuf,

    /// Tasks to run: empty for the default set, 'all', a single task,
    /// a comma-separated list, or a JSON list of strings
    #[clap(short, long, default_value = "")]
    tasks: String,

    /// Do not actually write the file, print the patched document instead
    #[clap(short, long)]
    dry_run: bool,
}

fn patch(args: &Cli) -> Result<(Scenario, TaskList), PatchError> {
    let mut scenario = Scenario::load(&args.scenario)?;
    debug!("Previous [config].tasks: {:?}", scenario.tasks());
    let tasks = parse_tasks(Some(args.tasks.as_str()))?;
    debug!("Normalized tasks: {}", tasks);
    scenario.set_tasks(&tasks)?;
    Ok((scenario, tasks))
}

fn run(args: &Cli) -> Result<(), PatchError> {
    let (scenario, tasks) = patch(args)?;

    if args.dry_run {
        println!("Would update [config].tasks -> {}", tasks);
        print!("{}", scenario.render()?);
        return Ok(());
    }

    scenario.save()?;
    debug!("Patched {}", scenario.path().display());
    println!("Updated [config].tasks -> {}", tasks);
    Ok(())
}

fn main() -> Result<ExitCode> {
    color_eyre::install()?;
    env_logger::init();
    let args = Cli::parse();

    match run(&args) {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(err) => match err.exit_code() {
            Some(code) => {
                eprintln!("Error: {}", err);
                Ok(ExitCode::from(code))
            }
            None => Err(err.into()),
        },
    }
}
