//! Running external programs on behalf of the effect collaborators

use std::ffi::OsStr;

use tokio::{process::Command, runtime::Handle};
use tracing::{debug, info, warn};

/// Run `program` with `args` and wait for it to exit successfully
pub async fn run_program<I, S>(program: &str, args: I) -> Result<(), String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let output = Command::new(program)
        .args(args)
        .output()
        .await
        .map_err(|e| format!("Failed to execute {}: {}", program, e))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(format!("{} failed: {}", program, stderr.trim()));
    }

    Ok(())
}

/// Run `program` in the background; failures are logged, never returned.
///
/// Errors only when there is no tokio runtime to run the program on.
pub fn spawn_program(program: String, args: Vec<String>) -> Result<(), String> {
    let runtime = Handle::try_current().map_err(|e| format!("No async runtime: {}", e))?;

    runtime.spawn(async move {
        match run_program(&program, &args).await {
            Ok(()) => debug!("{} completed", program),
            Err(e) => warn!("{}", e),
        }
    });
    Ok(())
}

/// Check that `program` can be executed on this system
pub async fn check_program_available(program: &str) -> Result<(), String> {
    Command::new(program)
        .arg("--version")
        .output()
        .await
        .map_err(|_| format!("{} is not available on this system", program))?;

    info!("{} is available", program);
    Ok(())
}
