use std::env;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::warn;

pub const DEFAULT_MAX_RECORDS: usize = shared_models::DEFAULT_CAPACITY;

/// How the console prints record listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingFormat {
    Text,
    Json,
}

impl FromStr for ListingFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(ListingFormat::Text),
            "json" => Ok(ListingFormat::Json),
            other => Err(format!("unknown listing format '{}'", other)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub max_records: usize,
    pub validate_input: bool,
    pub listing_format: ListingFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            max_records: DEFAULT_MAX_RECORDS,
            validate_input: true,
            listing_format: ListingFormat::Text,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup. Missing or unparsable
    /// values fall back to the defaults with a warning.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let max_records = match lookup("CLINIC_MAX_RECORDS") {
            Some(raw) => match raw.trim().parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => {
                    warn!("CLINIC_MAX_RECORDS '{}' is not a positive integer, using {}", raw, defaults.max_records);
                    defaults.max_records
                }
            },
            None => defaults.max_records,
        };

        let validate_input = match lookup("CLINIC_VALIDATE_INPUT") {
            Some(raw) => match raw.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => true,
                "0" | "false" | "no" | "off" => false,
                _ => {
                    warn!("CLINIC_VALIDATE_INPUT '{}' not recognised, using default", raw);
                    defaults.validate_input
                }
            },
            None => defaults.validate_input,
        };

        let listing_format = match lookup("CLINIC_LISTING_FORMAT") {
            Some(raw) => raw.parse().unwrap_or_else(|e| {
                warn!("{}, using text", e);
                defaults.listing_format
            }),
            None => defaults.listing_format,
        };

        Self {
            max_records,
            validate_input,
            listing_format,
        }
    }
}
