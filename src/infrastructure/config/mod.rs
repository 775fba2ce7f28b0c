use serde::Deserialize;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub environment: Environment,
    pub log_format: LogFormat,
    /// Server-level OpenAI credential; requests may override it per call.
    pub openai_api_key: Option<String>,
    /// Default API base for self-hosted OpenAI-compatible backends.
    pub openai_api_base: Option<String>,
    /// Directory rendered audio artifacts are written to.
    pub artifact_dir: String,
    /// Idle minutes before a session's cached dialogue is dropped.
    pub session_ttl_minutes: u64,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Production,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

impl Config {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();

        let config = Config {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()?,
            environment: env::var("ENVIRONMENT")
                .unwrap_or_else(|_| "development".to_string())
                .parse::<String>()
                .map(|s| match s.as_str() {
                    "production" => Environment::Production,
                    _ => Environment::Development,
                })?,
            log_format: env::var("LOG_FORMAT")
                .unwrap_or_else(|_| "pretty".to_string())
                .parse::<String>()
                .map(|s| match s.as_str() {
                    "json" => LogFormat::Json,
                    _ => LogFormat::Pretty,
                })?,
            openai_api_key: env::var("OPENAI_API_KEY").ok(),
            openai_api_base: env::var("OPENAI_API_BASE").ok(),
            artifact_dir: env::var("ARTIFACT_DIR")
                .unwrap_or_else(|_| "./tmp/artifacts".to_string()),
            session_ttl_minutes: env::var("SESSION_TTL_MINUTES")
                .unwrap_or_else(|_| "30".to_string())
                .parse()?,
        };

        Ok(config)
    }

    pub fn is_development(&self) -> bool {
        self.environment == Environment::Development
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(environment: Environment) -> Config {
        Config {
            host: "127.0.0.1".to_string(),
            port: 8080,
            environment,
            log_format: LogFormat::Pretty,
            openai_api_key: None,
            openai_api_base: None,
            artifact_dir: "./tmp/artifacts".to_string(),
            session_ttl_minutes: 30,
        }
    }

    #[test]
    fn development_environment_is_development() {
        assert!(config(Environment::Development).is_development());
    }

    #[test]
    fn production_environment_is_not_development() {
        assert!(!config(Environment::Production).is_development());
    }
}
