use std::env;

use thiserror::Error;

use crate::number::DEFAULT_FRAC_BITS;

pub const FRAC_BITS_VAR: &str = "BINCALC_FRAC_BITS";
pub const PROMPT_VAR: &str = "BINCALC_PROMPT";

const MAX_FRAC_BITS: usize = 64;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Environment variable `{0}` has invalid value `{1}`")]
    InvalidValue(&'static str, String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Fractional bits printed for arithmetic results.
    pub frac_bits: usize,
    pub prompt: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            frac_bits: DEFAULT_FRAC_BITS,
            prompt: "> ".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(raw) = lookup(FRAC_BITS_VAR) {
            config.frac_bits = match raw.trim().parse::<usize>() {
                Ok(bits) if bits <= MAX_FRAC_BITS => bits,
                _ => return Err(ConfigError::InvalidValue(FRAC_BITS_VAR, raw)),
            };
        }
        if let Some(prompt) = lookup(PROMPT_VAR) {
            config.prompt = prompt;
        }

        Ok(config)
    }
}
