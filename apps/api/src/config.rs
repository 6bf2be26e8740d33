use std::str::FromStr;

use anyhow::{Context, Result};

use crate::screening::candidate::ValidationRules;

const BYTES_PER_MB: u64 = 1024 * 1024;

/// Application configuration loaded from environment variables.
/// Every value has a default; malformed numbers fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub positions_file: String,
    pub max_file_size_mb: u64,
    pub min_name_length: usize,
    pub max_experience: u32,
    pub interview_question_count: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: env_or("PORT", 8080)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            positions_file: std::env::var("POSITIONS_FILE")
                .unwrap_or_else(|_| "data/positions/positions.json".to_string()),
            max_file_size_mb: env_or("MAX_FILE_SIZE_MB", 5)?,
            min_name_length: env_or("MIN_NAME_LENGTH", 3)?,
            max_experience: env_or("MAX_EXPERIENCE", 20)?,
            interview_question_count: env_or("INTERVIEW_QUESTION_COUNT", 5)?,
        })
    }

    /// Upload size limit in bytes, as handed to the extractor.
    pub fn max_file_size_bytes(&self) -> u64 {
        self.max_file_size_mb.saturating_mul(BYTES_PER_MB)
    }

    pub fn validation_rules(&self) -> ValidationRules {
        ValidationRules {
            min_name_length: self.min_name_length,
            max_experience: self.max_experience,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            rust_log: "info".to_string(),
            positions_file: "data/positions/positions.json".to_string(),
            max_file_size_mb: 5,
            min_name_length: 3,
            max_experience: 20,
            interview_question_count: 5,
        }
    }
}

fn env_or<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has invalid value '{raw}'")),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_file_size_converted_to_bytes() {
        let config = Config::default();
        assert_eq!(config.max_file_size_bytes(), 5 * 1024 * 1024);
    }

    #[test]
    fn test_huge_file_size_saturates() {
        let config = Config {
            max_file_size_mb: u64::MAX / 2,
            ..Default::default()
        };
        assert_eq!(config.max_file_size_bytes(), u64::MAX);
    }

    #[test]
    fn test_validation_rules_follow_config() {
        let config = Config {
            min_name_length: 5,
            max_experience: 40,
            ..Default::default()
        };
        let rules = config.validation_rules();
        assert_eq!(rules.min_name_length, 5);
        assert_eq!(rules.max_experience, 40);
    }

    #[test]
    fn test_env_or_parses_and_rejects() {
        std::env::set_var("SCREENER_TEST_NUMBER", " 12 ");
        assert_eq!(env_or::<u64>("SCREENER_TEST_NUMBER", 1).unwrap(), 12);

        std::env::set_var("SCREENER_TEST_NUMBER", "twelve");
        assert!(env_or::<u64>("SCREENER_TEST_NUMBER", 1).is_err());

        std::env::remove_var("SCREENER_TEST_NUMBER");
        assert_eq!(env_or::<u64>("SCREENER_TEST_NUMBER", 1).unwrap(), 1);
    }
}
