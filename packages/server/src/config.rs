use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;

use crate::common::email::parse_email;

const DEFAULT_MODERATOR_EMAIL: &str = "rivbilbo12@gmail.com";

const DEFAULT_ALLOWED_ORIGINS: &[&str] = &[
    "http://localhost:8000",
    "http://localhost:3000",
    "https://cpz-atlas.fly.dev",
];

/// Every hour, on the hour (seconds-resolution cron).
const DEFAULT_GRANT_PRUNE_SCHEDULE: &str = "0 0 * * * *";

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// Normalized moderator identity (lower-cased)
    pub moderator_email: String,
    pub allowed_origins: Vec<String>,
    pub grant_prune_schedule: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        let moderator_email = env::var("MODERATOR_EMAIL")
            .unwrap_or_else(|_| DEFAULT_MODERATOR_EMAIL.to_string());
        let moderator_email = parse_email(&moderator_email)
            .context("MODERATOR_EMAIL must be a valid email address")?;

        let mut allowed_origins = match env::var("ALLOWED_ORIGINS") {
            Ok(raw) => split_origins(&raw),
            Err(_) => DEFAULT_ALLOWED_ORIGINS
                .iter()
                .map(|origin| origin.to_string())
                .collect(),
        };
        if let Ok(frontend_url) = env::var("FRONTEND_URL") {
            allowed_origins.extend(split_origins(&frontend_url));
        }

        Ok(Self {
            port: env::var("PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            moderator_email,
            allowed_origins,
            grant_prune_schedule: env::var("GRANT_PRUNE_SCHEDULE")
                .unwrap_or_else(|_| DEFAULT_GRANT_PRUNE_SCHEDULE.to_string()),
        })
    }
}

fn split_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_origins_trims_and_skips_empty() {
        let origins = split_origins(" http://a.test , ,https://b.test,");
        assert_eq!(origins, vec!["http://a.test", "https://b.test"]);
    }

    #[test]
    fn test_default_moderator_is_valid() {
        assert_eq!(
            parse_email(DEFAULT_MODERATOR_EMAIL).unwrap(),
            "rivbilbo12@gmail.com"
        );
    }
}
