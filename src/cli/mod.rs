use std::io;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Result;
use clap::Parser;

use crate::engine::{Engine, EngineOptions};
use crate::export::ExportFormat;
use crate::scanner::BanditScanner;
use crate::ui::UiConfig;

#[derive(Debug, Parser)]
#[command(
    name = "seco",
    version,
    about = "Code security scanner: runs bandit against a directory and reports the findings"
)]
pub struct Cli {
    /// Path to the directory to scan
    pub path: PathBuf,

    /// Output format for the report (json or html)
    #[arg(long, short = 'o', value_name = "FORMAT")]
    pub output: Option<ExportFormat>,

    /// Output file path for the report
    #[arg(long, short = 'f', value_name = "PATH")]
    pub file: Option<PathBuf>,

    #[arg(long = "no-color")]
    pub no_color: bool,
    #[arg(long)]
    pub quiet: bool,
    #[arg(long)]
    pub verbose: bool,
    #[arg(long)]
    pub config: Option<PathBuf>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let stdout_is_tty = io::stdout().is_terminal();
    let stderr_is_tty = io::stderr().is_terminal();

    let env_config_path = std::env::var_os("SECO_CONFIG").map(PathBuf::from);
    let cfg = crate::config::load(cli.config.as_deref().or(env_config_path.as_deref()))
        .map_err(crate::exit::invalid_args_err)?;

    // Fatal usage tier: a bad format/file combination stops the run before
    // any scan work is attempted.
    let export_target = resolve_export_target(cli.output, cli.file)?;

    let target = std::fs::canonicalize(&cli.path).map_err(|_| {
        crate::exit::invalid_args(format!("path '{}' does not exist", cli.path.display()))
    })?;

    let color = stdout_is_tty && cfg.ui.color && !cli.no_color;
    let ui_cfg = UiConfig {
        color,
        quiet: cli.quiet,
        verbose: cli.verbose,
    };

    let scanner = BanditScanner::new(
        cfg.scanner.program.clone(),
        Duration::from_secs(cfg.scanner.version_timeout_secs),
    );
    let engine = Engine::new(
        EngineOptions {
            show_progress: stderr_is_tty && !cli.quiet,
        },
        Box::new(scanner),
    );

    engine.preflight(&target)?;

    crate::ui::print_scan_header(&ui_cfg, &target);
    let findings = engine.scan(&target);

    if !ui_cfg.quiet {
        let mut out = io::stdout().lock();
        crate::ui::print_findings(&mut out, &findings, ui_cfg.color);
    }

    if let Some((format, path)) = export_target {
        if findings.is_empty() {
            crate::ui::println_info(&ui_cfg, "No results to export.");
        } else {
            match crate::export::export(&findings, &target, format, &path) {
                Ok(()) => crate::ui::println_info(
                    &ui_cfg,
                    &format!("Results exported to: {}", path.display()),
                ),
                Err(err) => {
                    crate::ui::eprintln_warning(&format!("Error exporting results: {err:#}"));
                }
            }
        }
    }

    Ok(())
}

/// Resolve the `--output`/`--file` pair into an export destination.
///
/// `--file` without `--output` infers the format from a json/html extension
/// and is otherwise a usage error; `--output` without `--file` synthesizes a
/// timestamped default filename.
fn resolve_export_target(
    output: Option<ExportFormat>,
    file: Option<PathBuf>,
) -> Result<Option<(ExportFormat, PathBuf)>> {
    match (output, file) {
        (Some(format), Some(file)) => Ok(Some((format, file))),
        (Some(format), None) => Ok(Some((
            format,
            PathBuf::from(crate::export::default_file_name(format)),
        ))),
        (None, Some(file)) => {
            let format = infer_format(&file).ok_or_else(|| {
                crate::exit::invalid_args(
                    "output format must be specified with --output when using --file",
                )
            })?;
            Ok(Some((format, file)))
        }
        (None, None) => Ok(None),
    }
}

fn infer_format(path: &Path) -> Option<ExportFormat> {
    let ext = path.extension()?.to_str()?;
    ext.parse::<ExportFormat>().ok()
}
