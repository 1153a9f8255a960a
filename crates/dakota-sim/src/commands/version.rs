use std::error::Error;
use std::path::PathBuf;
use std::process::Command;

use clap::Args;
use dakota_exp::{to_canonical_json_bytes, DEFAULT_EXECUTABLE};
use dakota_methods::method_names;
use serde::Serialize;

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Emit extended metadata including git, toolchain and Dakota information.
    #[arg(long)]
    pub long: bool,
    /// Dakota binary to probe for its version.
    #[arg(long, env = "DAKOTA_EXE", default_value = DEFAULT_EXECUTABLE)]
    pub dakota: PathBuf,
}

#[derive(Debug, Serialize)]
struct VersionInfo {
    version: String,
    git_commit: String,
    rustc: String,
    dakota: String,
    methods: Vec<String>,
}

pub fn run(args: &VersionArgs) -> Result<(), Box<dyn Error>> {
    if !args.long {
        println!("{}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }
    let info = gather_info(args);
    let json = to_canonical_json_bytes(&info)?;
    println!("{}", String::from_utf8(json)?);
    Ok(())
}

fn first_line(mut command: Command) -> Option<String> {
    let out = command.output().ok()?;
    if !out.status.success() {
        return None;
    }
    String::from_utf8_lossy(&out.stdout)
        .lines()
        .next()
        .map(|line| line.trim().to_string())
}

fn gather_info(args: &VersionArgs) -> VersionInfo {
    let mut git = Command::new("git");
    git.args(["rev-parse", "HEAD"]);
    let mut rustc = Command::new("rustc");
    rustc.arg("--version");
    let mut dakota = Command::new(&args.dakota);
    dakota.arg("-version");
    VersionInfo {
        version: env!("CARGO_PKG_VERSION").into(),
        git_commit: first_line(git).unwrap_or_else(|| "unknown".into()),
        rustc: first_line(rustc).unwrap_or_else(|| "rustc unavailable".into()),
        dakota: first_line(dakota).unwrap_or_else(|| "dakota unavailable".into()),
        methods: method_names().map(str::to_string).collect(),
    }
}
