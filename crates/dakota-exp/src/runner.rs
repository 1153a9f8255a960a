//! Synchronous launch of the external Dakota binary.

use std::io::{self, Read};
use std::path::Path;
use std::process::{Command, ExitStatus};

use dakota_core::errors::{DakotaError, ErrorInfo, EXIT_CODE_KEY, OUTPUT_KEY, SIGNAL_KEY};
use tracing::{debug, info, warn};

fn io_error(code: &str, err: io::Error) -> DakotaError {
    DakotaError::Io(ErrorInfo::new(code, err.to_string()))
}

/// Runs `<executable> -i <input_file> -o <output_file>` to completion.
///
/// Standard output and standard error share one pipe, so the captured text
/// keeps the interleaving the binary produced. Blocks until the child exits;
/// there is no timeout. A non-zero exit yields [`DakotaError::Process`]
/// carrying the exit code and the combined output.
pub fn run_dakota(
    executable: &Path,
    input_file: &Path,
    output_file: &Path,
) -> Result<(), DakotaError> {
    let (mut reader, writer) = io::pipe().map_err(|err| io_error("dakota_exp.pipe", err))?;
    let stderr_writer = writer
        .try_clone()
        .map_err(|err| io_error("dakota_exp.pipe", err))?;

    info!(
        executable = %executable.display(),
        input = %input_file.display(),
        output = %output_file.display(),
        "launching dakota"
    );
    // The command and its copies of the write end drop at the end of this
    // statement; otherwise the read below never sees EOF.
    let mut child = Command::new(executable)
        .arg("-i")
        .arg(input_file)
        .arg("-o")
        .arg(output_file)
        .stdout(writer)
        .stderr(stderr_writer)
        .spawn()
        .map_err(|err| {
            DakotaError::Io(
                ErrorInfo::new("dakota_exp.spawn", err.to_string())
                    .with_context("executable", executable.display().to_string())
                    .with_hint("check that the dakota binary is installed and on PATH"),
            )
        })?;

    let mut captured = Vec::new();
    let read = reader.read_to_end(&mut captured);
    let status = child
        .wait()
        .map_err(|err| io_error("dakota_exp.wait", err))?;
    read.map_err(|err| io_error("dakota_exp.capture", err))?;

    let output = String::from_utf8_lossy(&captured).into_owned();
    debug!(bytes = output.len(), %status, "dakota finished");
    if status.success() {
        return Ok(());
    }

    warn!(%status, "dakota exited abnormally");
    let (key, value) = termination(status);
    Err(DakotaError::Process(
        ErrorInfo::new("dakota_exp.process_failed", "dakota exited abnormally")
            .with_context("executable", executable.display().to_string())
            .with_context("input_file", input_file.display().to_string())
            .with_context(key, value)
            .with_context(OUTPUT_KEY, output),
    ))
}

fn termination(status: ExitStatus) -> (&'static str, String) {
    if let Some(code) = status.code() {
        return (EXIT_CODE_KEY, code.to_string());
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return (SIGNAL_KEY, signal.to_string());
        }
    }
    (SIGNAL_KEY, "unknown".to_string())
}
