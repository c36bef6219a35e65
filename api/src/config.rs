use std::{env, fmt};

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
}

#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    InvalidPort(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort(value) => {
                write!(f, "PORT must be an integer between 0 and 65535, got {:?}", value)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl Config {
    /// Reads `PORT` from the process environment (after `.env` has been loaded).
    pub fn from_env() -> Result<Self, ConfigError> {
        let raw = env::var("PORT").ok();
        let port = parse_port(raw.as_deref())?;

        Ok(Self { port })
    }
}

/// Resolve the listening port from the raw `PORT` value.
///
/// Unset and empty both fall back to [`DEFAULT_PORT`].
pub fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_PORT),
        Some(value) => value
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort(value.to_string())),
    }
}
