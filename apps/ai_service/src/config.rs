use std::path::PathBuf;

use anyhow::{Context, Result};

pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_UPLOAD_FOLDER: &str = "uploads";
/// 16 MiB
pub const DEFAULT_MAX_CONTENT_LENGTH: usize = 16 * 1024 * 1024;

/// Application configuration loaded from environment variables.
/// Built once at startup and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub debug: bool,
    pub upload_folder: PathBuf,
    pub max_content_length: usize,
    pub rust_log: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: DEFAULT_PORT,
            debug: false,
            upload_folder: PathBuf::from(DEFAULT_UPLOAD_FOLDER),
            max_content_length: DEFAULT_MAX_CONTENT_LENGTH,
            rust_log: "info".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        // FLASK_DEBUG is the documented name; DEBUG is accepted when it is unset.
        let debug = lookup("FLASK_DEBUG")
            .or_else(|| lookup("DEBUG"))
            .map(|raw| raw.trim().eq_ignore_ascii_case("true"))
            .unwrap_or(defaults.debug);

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .with_context(|| format!("PORT must be a valid port number, got '{raw}'"))?,
            None => defaults.port,
        };

        let max_content_length = match lookup("MAX_CONTENT_LENGTH") {
            Some(raw) => raw.trim().parse::<usize>().with_context(|| {
                format!("MAX_CONTENT_LENGTH must be a size in bytes, got '{raw}'")
            })?,
            None => defaults.max_content_length,
        };

        let upload_folder = lookup("UPLOAD_FOLDER")
            .filter(|raw| !raw.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.upload_folder);

        // Debug mode raises the default log level; an explicit RUST_LOG still wins.
        let rust_log = lookup("RUST_LOG").unwrap_or_else(|| {
            if debug { "debug" } else { "info" }.to_string()
        });

        Ok(Config {
            port,
            debug,
            upload_folder,
            max_content_length,
            rust_log,
        })
    }
}
