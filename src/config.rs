use std::time::Duration;

const DEFAULT_BASE_URL: &str = "https://api.github.com";
const DEFAULT_USER_AGENT: &str = "top-repos";
const DEFAULT_FETCH_DELAY_MS: u64 = 1000;

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("'{key}' must be a whole number of milliseconds, got '{value}'")]
    InvalidNumber { key: &'static str, value: String },
}

/// Runtime settings, read once at startup from the environment (and `.env`).
/// - **GH_API_KEY**, bearer token. Blank or missing means unauthenticated requests.
/// - **GH_API_USER_AGENT**, user-agent header, github refuses requests without one.
/// - **GH_API_BASE_URL**, api root.
/// - **FETCH_DELAY_MS**, delay before the scheduled fetch fires.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub api_token: Option<String>,
    pub user_agent: String,
    pub base_url: String,
    pub fetch_delay: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_token: None,
            user_agent: DEFAULT_USER_AGENT.to_owned(),
            base_url: DEFAULT_BASE_URL.to_owned(),
            fetch_delay: Duration::from_millis(DEFAULT_FETCH_DELAY_MS),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_owned())
                .filter(|value| !value.is_empty())
        };

        let fetch_delay = match non_blank("FETCH_DELAY_MS") {
            Some(value) => match value.parse::<u64>() {
                Ok(ms) => Duration::from_millis(ms),
                Err(_) => {
                    return Err(ConfigError::InvalidNumber {
                        key: "FETCH_DELAY_MS",
                        value,
                    })
                }
            },
            None => Duration::from_millis(DEFAULT_FETCH_DELAY_MS),
        };

        let base_url = non_blank("GH_API_BASE_URL")
            .map(|url| url.trim_end_matches('/').to_owned())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_owned());

        Ok(Config {
            api_token: non_blank("GH_API_KEY"),
            user_agent: non_blank("GH_API_USER_AGENT")
                .unwrap_or_else(|| DEFAULT_USER_AGENT.to_owned()),
            base_url,
            fetch_delay,
        })
    }
}
