use std::env;

/// Environment variable names - single source of truth
pub mod env_vars {
    /// Telegram bot token (teloxide's conventional name)
    pub const TELOXIDE_TOKEN: &str = "TELOXIDE_TOKEN";
    /// Fallback token variable name
    pub const TOKEN: &str = "TOKEN";
    pub const DATABASE_URL: &str = "DATABASE_URL";
    pub const HOST: &str = "HOST";
    pub const PORT: &str = "PORT";
    /// Cap on results returned by inline and HTTP search
    pub const SEARCH_RESULT_LIMIT: &str = "SEARCH_RESULT_LIMIT";
}

/// Default values
pub mod defaults {
    pub const DATABASE_URL: &str = "./.db/bot_data.db";
    pub const HOST: &str = "127.0.0.1";
    pub const PORT: u16 = 8080;
    pub const SEARCH_RESULT_LIMIT: usize = 50;
    /// Telegram answers at most 50 results per inline query
    pub const MAX_SEARCH_RESULT_LIMIT: usize = 50;
}

#[derive(Clone)]
pub struct Config {
    pub bot_token: Option<String>,
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub search_result_limit: usize,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from an arbitrary key lookup (the process environment in production)
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let bot_token = non_empty(env_vars::TELOXIDE_TOKEN).or_else(|| non_empty(env_vars::TOKEN));

        let port = match non_empty(env_vars::PORT) {
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                log::warn!(
                    "{} must be a valid port, got {:?}; using {}",
                    env_vars::PORT,
                    raw,
                    defaults::PORT
                );
                defaults::PORT
            }),
            None => defaults::PORT,
        };

        let search_result_limit = match non_empty(env_vars::SEARCH_RESULT_LIMIT) {
            Some(raw) => match raw.parse::<usize>() {
                Ok(0) | Err(_) => {
                    log::warn!(
                        "{} must be a positive number, got {:?}; using {}",
                        env_vars::SEARCH_RESULT_LIMIT,
                        raw,
                        defaults::SEARCH_RESULT_LIMIT
                    );
                    defaults::SEARCH_RESULT_LIMIT
                }
                Ok(n) => n.min(defaults::MAX_SEARCH_RESULT_LIMIT),
            },
            None => defaults::SEARCH_RESULT_LIMIT,
        };

        Self {
            bot_token,
            database_url: non_empty(env_vars::DATABASE_URL)
                .unwrap_or_else(|| defaults::DATABASE_URL.to_string()),
            host: non_empty(env_vars::HOST).unwrap_or_else(|| defaults::HOST.to_string()),
            port,
            search_result_limit,
        }
    }
}
