use std::error::Error;

use clap::{ArgAction, Parser, Subcommand};
use commands::{
    config::{self, ConfigArgs},
    input::{self, InputArgs},
    methods::{self, MethodsArgs},
    run::{self, RunArgs},
    version::{self, VersionArgs},
};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser, Debug)]
#[command(name = "dakota-sim", about = "Generate and launch Dakota experiments")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug); RUST_LOG takes precedence.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the registered analysis methods.
    Methods(MethodsArgs),
    /// Write a YAML configuration file for an experiment.
    Config(ConfigArgs),
    /// Write the Dakota input file for an experiment.
    Input(InputArgs),
    /// Write the input file and run Dakota against it.
    Run(RunArgs),
    /// Print version information.
    Version(VersionArgs),
}

fn init_logging(verbose: u8) {
    let fallback = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    tracing::debug!(command = ?cli.command, "dispatching");
    match cli.command {
        Command::Methods(args) => methods::run(&args),
        Command::Config(args) => config::run(&args),
        Command::Input(args) => input::run(&args),
        Command::Run(args) => run::run(&args),
        Command::Version(args) => version::run(&args),
    }
}
