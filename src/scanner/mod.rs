use std::io::Read;
use std::path::Path;
use std::process::{Command, Stdio};
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use wait_timeout::ChildExt;

mod bandit;

pub use bandit::BanditScanner;

#[derive(Debug, Clone)]
pub struct CommandOutput {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

/// The external scanner behind a narrow seam, so tests can substitute a fake
/// instead of spawning a real subprocess.
pub trait Scanner {
    /// Cheap invocability probe, run before any scan work.
    fn version_check(&self) -> Result<CommandOutput>;

    /// Run the scanner against `target`, requesting machine-readable output.
    ///
    /// A non-zero exit status is not an error here; scanners conventionally
    /// signal "issues found" through it. Only a failure to launch or to
    /// communicate with the subprocess is an `Err`.
    fn run(&self, target: &Path) -> Result<CommandOutput>;
}

pub fn run_command(cmd: &str, args: &[&str], timeout: Duration) -> Result<CommandOutput> {
    let mut child = spawn(cmd, args)?;

    let status = match child
        .wait_timeout(timeout)
        .with_context(|| format!("failed to wait for process: {cmd}"))?
    {
        Some(status) => status,
        None => {
            let _ = child.kill();
            let _ = child.wait();
            return Err(anyhow!("process timed out after {timeout:?}: {cmd}"));
        }
    };

    Ok(collect_output(child, status.code().unwrap_or(-1)))
}

/// Like `run_command` but blocks until the process exits, with no deadline.
/// The scan call is deliberately unbounded; a hung scanner hangs the tool.
/// Output is drained while waiting so a large payload cannot fill the pipe.
pub fn run_command_blocking(cmd: &str, args: &[&str]) -> Result<CommandOutput> {
    let child = spawn(cmd, args)?;

    let output = child
        .wait_with_output()
        .with_context(|| format!("failed to wait for process: {cmd}"))?;

    Ok(CommandOutput {
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    })
}

fn spawn(cmd: &str, args: &[&str]) -> Result<std::process::Child> {
    Command::new(cmd)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .with_context(|| format!("failed to launch process: {cmd}"))
}

fn collect_output(mut child: std::process::Child, exit_code: i32) -> CommandOutput {
    let mut stdout = String::new();
    if let Some(mut out) = child.stdout.take() {
        let _ = out.read_to_string(&mut stdout);
    }
    let mut stderr = String::new();
    if let Some(mut err) = child.stderr.take() {
        let _ = err.read_to_string(&mut stderr);
    }

    CommandOutput {
        exit_code,
        stdout,
        stderr,
    }
}
