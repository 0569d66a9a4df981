use std::{fs, io, path::Path, path::PathBuf};

use anyhow::{bail, Context};
use clap::Parser;
use serde::Deserialize;
use shared::protocol::DEFAULT_API_BASE_URL;
use url::Url;

pub const DEFAULT_CONFIG_PATH: &str = "cookie_admin.toml";
pub const API_BASE_URL_ENV: &str = "COOKIE_ADMIN__API_BASE_URL";
pub const LOG_FILTER_ENV: &str = "COOKIE_ADMIN__LOG_FILTER";

#[derive(Parser, Debug)]
#[command(name = "cookie_admin", about = "Cookie Store Management desktop client")]
pub struct Args {
    /// Base address of the cookie service, e.g. http://localhost:8080/api/cookies
    #[arg(long)]
    pub api_base_url: Option<String>,
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub api_base_url: String,
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.into(),
            log_filter: "info".into(),
        }
    }
}

/// Defaults, then the config file, then environment, then command-line flags.
pub fn load_settings(args: &Args) -> anyhow::Result<Settings> {
    let mut settings = read_settings_file(&args.config)?;
    apply_env_overrides(&mut settings, |name| std::env::var(name).ok());
    if let Some(v) = &args.api_base_url {
        settings.api_base_url = v.clone();
    }
    validate_api_base_url(&settings.api_base_url)?;
    Ok(settings)
}

fn read_settings_file(path: &Path) -> anyhow::Result<Settings> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Settings::default()),
        Err(err) => {
            return Err(err)
                .with_context(|| format!("failed to read config file '{}'", path.display()))
        }
    };
    toml::from_str(&raw).with_context(|| format!("invalid config file '{}'", path.display()))
}

fn apply_env_overrides(settings: &mut Settings, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(v) = lookup(API_BASE_URL_ENV).filter(|v| !v.trim().is_empty()) {
        settings.api_base_url = v;
    }
    if let Some(v) = lookup(LOG_FILTER_ENV).filter(|v| !v.trim().is_empty()) {
        settings.log_filter = v;
    }
}

fn validate_api_base_url(raw: &str) -> anyhow::Result<()> {
    let url = Url::parse(raw.trim())
        .with_context(|| format!("api base url '{raw}' is not a valid URL"))?;
    if !matches!(url.scheme(), "http" | "https") {
        bail!("api base url '{raw}' must use http or https");
    }
    Ok(())
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
