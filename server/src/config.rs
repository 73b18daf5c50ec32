//! Server Settings
//!
//! Defaults, overridden by an optional `server.toml`, then by `TODO_ENV_*`
//! environment variables.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use serde::Deserialize;

pub const CONFIG_FILE: &str = "server.toml";

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub bind: String,
    /// Built frontend (Trunk `dist/`)
    pub dist_dir: PathBuf,
    pub log_dir: PathBuf,
    /// Variables whose names start with one of these are served by `/api/env`
    pub expose_prefixes: Vec<String>,
    /// Serve every variable, ignoring the prefixes
    pub expose_all: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:3000".into(),
            dist_dir: PathBuf::from("dist"),
            log_dir: PathBuf::from("logs"),
            expose_prefixes: vec!["TODO_PUBLIC_".into(), "APP_".into()],
            expose_all: false,
        }
    }
}

impl Settings {
    pub fn exposes(&self, name: &str) -> bool {
        self.expose_all || self.expose_prefixes.iter().any(|p| name.starts_with(p.as_str()))
    }
}

/// Keys accepted in `server.toml`; all optional
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileSettings {
    bind: Option<String>,
    dist_dir: Option<PathBuf>,
    log_dir: Option<PathBuf>,
    expose_prefixes: Option<Vec<String>>,
    expose_all: Option<bool>,
}

pub fn load_settings() -> anyhow::Result<Settings> {
    load_settings_from(Path::new(CONFIG_FILE), |key| std::env::var(key).ok())
}

pub fn load_settings_from(
    config_path: &Path,
    lookup: impl Fn(&str) -> Option<String>,
) -> anyhow::Result<Settings> {
    let mut settings = Settings::default();

    if config_path.exists() {
        let raw = fs::read_to_string(config_path)
            .with_context(|| format!("failed to read {}", config_path.display()))?;
        let file_cfg: FileSettings = toml::from_str(&raw)
            .with_context(|| format!("failed to parse {}", config_path.display()))?;

        if let Some(v) = file_cfg.bind {
            settings.bind = v;
        }
        if let Some(v) = file_cfg.dist_dir {
            settings.dist_dir = v;
        }
        if let Some(v) = file_cfg.log_dir {
            settings.log_dir = v;
        }
        if let Some(v) = file_cfg.expose_prefixes {
            settings.expose_prefixes = v;
        }
        if let Some(v) = file_cfg.expose_all {
            settings.expose_all = v;
        }
    }

    if let Some(v) = lookup("TODO_ENV_BIND") {
        settings.bind = v;
    }
    if let Some(v) = lookup("TODO_ENV_DIST_DIR") {
        settings.dist_dir = PathBuf::from(v);
    }
    if let Some(v) = lookup("TODO_ENV_LOG_DIR") {
        settings.log_dir = PathBuf::from(v);
    }
    if let Some(v) = lookup("TODO_ENV_EXPOSE_PREFIXES") {
        settings.expose_prefixes = v
            .split(',')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(String::from)
            .collect();
    }
    if let Some(v) = lookup("TODO_ENV_EXPOSE_ALL") {
        settings.expose_all = parse_flag(&v).context("invalid TODO_ENV_EXPOSE_ALL")?;
    }

    Ok(settings)
}

fn parse_flag(raw: &str) -> anyhow::Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => bail!("expected a boolean, got {:?}", other),
    }
}
