use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
pub struct EffectiveConfig {
    pub ui: UiConfig,
    pub scanner: ScannerConfig,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_path: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct UiConfig {
    pub color: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScannerConfig {
    /// Program invoked for both the version probe and the scan itself.
    pub program: String,
    /// Deadline for the version probe only; the scan call is unbounded.
    pub version_timeout_secs: u64,
}

impl Default for EffectiveConfig {
    fn default() -> Self {
        Self {
            ui: UiConfig { color: true },
            scanner: ScannerConfig {
                program: "bandit".to_string(),
                version_timeout_secs: 10,
            },
            config_path: None,
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawConfig {
    ui: Option<RawUiConfig>,
    scanner: Option<RawScannerConfig>,
}

#[derive(Debug, Deserialize)]
struct RawUiConfig {
    color: Option<bool>,
}

#[derive(Debug, Deserialize)]
struct RawScannerConfig {
    program: Option<String>,
    version_timeout_secs: Option<u64>,
}

pub fn default_config_path(home_dir: &Path) -> PathBuf {
    home_dir.join(".config/seco/config.toml")
}

pub fn load(config_path: Option<&Path>) -> Result<EffectiveConfig> {
    let mut cfg = EffectiveConfig::default();

    let path = config_path.map(ToOwned::to_owned).or_else(|| {
        std::env::var_os("HOME").map(|home| default_config_path(Path::new(&home)))
    });

    if let Some(path) = path {
        if path.exists() {
            let s = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config file: {}", path.display()))?;
            let raw: RawConfig =
                toml::from_str(&s).context("failed to parse config file (TOML)")?;
            apply_raw_config(&mut cfg, raw);
            cfg.config_path = Some(path.display().to_string());
        }
    }

    apply_env_overrides(&mut cfg)?;

    Ok(cfg)
}

fn apply_raw_config(cfg: &mut EffectiveConfig, raw: RawConfig) {
    if let Some(ui) = raw.ui {
        if let Some(color) = ui.color {
            cfg.ui.color = color;
        }
    }

    if let Some(scanner) = raw.scanner {
        if let Some(program) = scanner.program {
            cfg.scanner.program = program;
        }
        if let Some(secs) = scanner.version_timeout_secs {
            cfg.scanner.version_timeout_secs = secs;
        }
    }
}

fn apply_env_overrides(cfg: &mut EffectiveConfig) -> Result<()> {
    if let Ok(v) = std::env::var("SECO_UI_COLOR") {
        cfg.ui.color = parse_bool(&v).with_context(|| "SECO_UI_COLOR")?;
    }
    if let Ok(v) = std::env::var("SECO_SCANNER_PROGRAM") {
        let v = v.trim();
        if !v.is_empty() {
            cfg.scanner.program = v.to_string();
        }
    }
    if let Ok(v) = std::env::var("SECO_SCANNER_VERSION_TIMEOUT_SECS") {
        cfg.scanner.version_timeout_secs = v
            .trim()
            .parse::<u64>()
            .with_context(|| "SECO_SCANNER_VERSION_TIMEOUT_SECS")?;
    }

    Ok(())
}

fn parse_bool(s: &str) -> Result<bool> {
    let s = s.trim().to_ascii_lowercase();
    match s.as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(anyhow::anyhow!(
            "invalid boolean: {s} (expected true|false|1|0|yes|no|on|off)"
        )),
    }
}
