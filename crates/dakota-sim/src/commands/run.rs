use std::error::Error;
use std::path::PathBuf;

use clap::Args;
use dakota_core::DakotaError;
use dakota_exp::DEFAULT_EXECUTABLE;

use super::select::SelectArgs;

#[derive(Args, Debug)]
pub struct RunArgs {
    #[command(flatten)]
    pub select: SelectArgs,
    /// Dakota input file to generate and run.
    #[arg(long)]
    pub input: Option<PathBuf>,
    /// Dakota output file.
    #[arg(long)]
    pub output: Option<PathBuf>,
    /// Dakota binary to launch.
    #[arg(long, env = "DAKOTA_EXE", default_value = DEFAULT_EXECUTABLE)]
    pub dakota: PathBuf,
}

pub fn run(args: &RunArgs) -> Result<(), Box<dyn Error>> {
    let mut experiment = args.select.experiment()?.with_executable(&args.dakota);
    if let Some(output) = &args.output {
        experiment.output_file = output.clone();
    }
    experiment.write_input_file(args.input.as_deref())?;
    match experiment.run() {
        Ok(()) => {
            println!("{}", experiment.output_file.display());
            Ok(())
        }
        Err(err @ DakotaError::Process(_)) => {
            if let Some(output) = err.output() {
                eprint!("{output}");
            }
            Err(err.into())
        }
        Err(err) => Err(err.into()),
    }
}
