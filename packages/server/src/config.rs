use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub jwt_secret: String,
    pub jwt_issuer: String,
    /// Accounts whose email is listed here sign up with the admin role.
    pub admin_emails: Vec<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            database_url: env::var("DATABASE_URL")
                .context("DATABASE_URL must be set")?,
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            jwt_secret: env::var("JWT_SECRET")
                .context("JWT_SECRET must be set")?,
            jwt_issuer: env::var("JWT_ISSUER")
                .unwrap_or_else(|_| "membermap".to_string()),
            admin_emails: env::var("ADMIN_EMAILS")
                .map(|s| parse_email_list(&s))
                .unwrap_or_default(),
        })
    }
}

/// Split a comma-separated email list, trimming whitespace and lowercasing.
fn parse_email_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_email_list() {
        let emails = parse_email_list("Admin@Example.com, ops@example.com ,");
        assert_eq!(emails, vec!["admin@example.com", "ops@example.com"]);
    }

    #[test]
    fn test_parse_email_list_empty() {
        assert!(parse_email_list("").is_empty());
        assert!(parse_email_list(" , ").is_empty());
    }
}
