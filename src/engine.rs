use std::path::Path;
use std::time::Duration;

use anyhow::Result;

use crate::core::Finding;
use crate::scanner::Scanner;

#[derive(Debug, Clone)]
pub struct EngineOptions {
    pub show_progress: bool,
}

/// Orchestrates one scan run: preflight checks, the blocking scanner call
/// with its progress indicator, and normalization of the captured output.
pub struct Engine {
    opts: EngineOptions,
    scanner: Box<dyn Scanner>,
}

impl Engine {
    pub fn new(opts: EngineOptions, scanner: Box<dyn Scanner>) -> Self {
        Self { opts, scanner }
    }

    /// Fatal-tier preconditions, checked before any scan work: the target
    /// must exist and the scanner must answer a version probe.
    pub fn preflight(&self, target: &Path) -> Result<()> {
        if !target.exists() {
            return Err(crate::exit::invalid_args(format!(
                "path '{}' does not exist",
                target.display()
            )));
        }

        match self.scanner.version_check() {
            Ok(out) if out.exit_code == 0 => Ok(()),
            Ok(out) => Err(crate::exit::external_cmd(format!(
                "scanner version check failed (exit_code={}); install bandit with: pip install bandit",
                out.exit_code
            ))),
            Err(err) => Err(crate::exit::external_cmd_err(err.context(
                "scanner is not installed or not runnable; install bandit with: pip install bandit",
            ))),
        }
    }

    /// Run the scanner and normalize its output.
    ///
    /// Both failure modes past preflight are recoverable: a subprocess
    /// communication failure or unparseable output is reported to stderr and
    /// yields an empty finding sequence, never an `Err`.
    pub fn scan(&self, target: &Path) -> Vec<Finding> {
        use std::io::IsTerminal;
        let progress_enabled = self.opts.show_progress && std::io::stderr().is_terminal();
        let pb = if progress_enabled {
            let pb = indicatif::ProgressBar::new(100);
            pb.set_draw_target(indicatif::ProgressDrawTarget::stderr());
            pb.set_message("Running security scan...");
            pb.enable_steady_tick(Duration::from_millis(120));
            Some(pb)
        } else {
            None
        };

        let output = self.scanner.run(target);

        // Cosmetic: the indicator always completes once the call returns.
        if let Some(pb) = pb {
            pb.set_position(100);
            pb.finish_and_clear();
        }

        let output = match output {
            Ok(output) => output,
            Err(err) => {
                crate::ui::eprintln_warning(&format!("Error running scanner: {err:#}"));
                return Vec::new();
            }
        };

        match crate::normalize::parse_findings(&output.stdout) {
            Ok(findings) => findings,
            Err(err) => {
                crate::ui::eprintln_warning(&format!(
                    "Failed to parse scanner output: {err}"
                ));
                crate::ui::eprintln_raw_output(&output.stdout, &output.stderr);
                Vec::new()
            }
        }
    }

    /// Convenience for tests and callers that want preflight + scan as one
    /// fatal-or-findings step.
    pub fn run(&self, target: &Path) -> Result<Vec<Finding>> {
        self.preflight(target)?;
        Ok(self.scan(target))
    }
}
