use std::path::Path;
use std::time::Duration;

use anyhow::Result;

use crate::scanner::{CommandOutput, Scanner, run_command, run_command_blocking};

/// Invoker for the bandit static-analysis scanner.
///
/// `program` defaults to `bandit` and can be overridden via config or the
/// `SECO_SCANNER_PROGRAM` environment variable.
#[derive(Debug, Clone)]
pub struct BanditScanner {
    program: String,
    version_timeout: Duration,
}

impl BanditScanner {
    pub fn new(program: impl Into<String>, version_timeout: Duration) -> Self {
        Self {
            program: program.into(),
            version_timeout,
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl Scanner for BanditScanner {
    fn version_check(&self) -> Result<CommandOutput> {
        run_command(&self.program, &["--version"], self.version_timeout)
    }

    fn run(&self, target: &Path) -> Result<CommandOutput> {
        let target_s = target.display().to_string();
        run_command_blocking(&self.program, &["-r", target_s.as_str(), "-f", "json"])
    }
}
