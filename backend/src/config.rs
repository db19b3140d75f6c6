use anyhow::{Context, Result};
use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("PORT must be a valid number")?,
        })
    }
}

/// Supabase connection settings. Read fresh on every request; both values
/// are required, and an empty string counts as missing.
#[derive(Debug, Clone)]
pub struct SupabaseConfig {
    pub url: String,
    pub publishable_key: String,
}

impl SupabaseConfig {
    pub fn from_env() -> Option<Self> {
        let url = env::var("SUPABASE_URL").ok().filter(|v| !v.is_empty())?;
        let publishable_key = env::var("SUPABASE_PUBLISHABLE_KEY")
            .ok()
            .filter(|v| !v.is_empty())?;

        Some(Self {
            url,
            publishable_key,
        })
    }
}
