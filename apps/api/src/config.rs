use std::str::FromStr;

use anyhow::{Context, Result};

use crate::layout::{default_layout_params, LayoutParams};

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub rust_log: String,
    /// Page size and margins used for every packing run.
    pub layout: LayoutParams,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = default_layout_params();
        let layout = LayoutParams {
            page_height: optional_env("PAGE_HEIGHT", defaults.page_height)?,
            margin_page: optional_env("PAGE_MARGIN", defaults.margin_page)?,
            margin_section: optional_env("SECTION_MARGIN", defaults.margin_section)?,
            margin_bullet: optional_env("BULLET_MARGIN", defaults.margin_bullet)?,
            max_pages: optional_env("MAX_PAGES", defaults.max_pages)?,
        };
        layout
            .validate()
            .context("Layout environment variables describe an unusable page")?;

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            port: optional_env("PORT", 8080u16)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            layout,
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn optional_env<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => parse_value(key, &raw),
        Err(_) => Ok(default),
    }
}

fn parse_value<T>(key: &str, raw: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    raw.trim()
        .parse::<T>()
        .with_context(|| format!("{key} must be a valid number, got '{raw}'"))
}
