// =====================================================================================
// INPUT VALIDATION - FIELD FORMAT CHECKS FOR CONSOLE INPUT
// =====================================================================================

use regex::Regex;
use thiserror::Error;
use tracing::debug;

pub const MAX_AGE: i32 = 150;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationIssue {
    #[error("{field} must be a whole number")]
    NotANumber { field: String },

    #[error("{field} must be a positive whole number")]
    NotPositive { field: String },

    #[error("{field} must not be empty")]
    Empty { field: String },

    #[error("Name may only contain letters, spaces, periods, apostrophes and hyphens")]
    InvalidName,

    #[error("Age must be between 0 and {max}")]
    AgeOutOfRange { max: i32 },

    #[error("Date must be in DD-MM-YYYY format")]
    InvalidDate,

    #[error("Time must be in HH:MM format (00:00 to 23:59)")]
    InvalidTime,
}

/// Format checks applied to shell input before it reaches the stores.
///
/// Dates are checked for shape only (`DD-MM-YYYY`, all digits), never for
/// calendar validity.
pub struct InputValidator {
    id_pattern: Regex,
    name_pattern: Regex,
    date_pattern: Regex,
    time_pattern: Regex,
}

impl InputValidator {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            id_pattern: Regex::new(r"^\d+$")?,
            name_pattern: Regex::new(r"^[A-Za-z][A-Za-z .'\-]*$")?,
            date_pattern: Regex::new(r"^\d{2}-\d{2}-\d{4}$")?,
            time_pattern: Regex::new(r"^([01]\d|2[0-3]):[0-5]\d$")?,
        })
    }

    /// Any integer, sign allowed. Used for numeric fields when strict
    /// validation is off.
    pub fn parse_integer(&self, input: &str, field: &str) -> Result<i32, ValidationIssue> {
        input.trim().parse::<i32>().map_err(|_| ValidationIssue::NotANumber {
            field: field.to_string(),
        })
    }

    pub fn validate_id(&self, input: &str, field: &str) -> Result<i32, ValidationIssue> {
        let input = input.trim();
        debug!("Validating {} '{}'", field, input);

        if !self.id_pattern.is_match(input) {
            return Err(ValidationIssue::NotPositive {
                field: field.to_string(),
            });
        }

        match input.parse::<i32>() {
            Ok(id) if id > 0 => Ok(id),
            Ok(_) => Err(ValidationIssue::NotPositive {
                field: field.to_string(),
            }),
            Err(_) => Err(ValidationIssue::NotANumber {
                field: field.to_string(),
            }),
        }
    }

    pub fn validate_name(&self, input: &str) -> Result<String, ValidationIssue> {
        let name = input.trim();
        if name.is_empty() {
            return Err(ValidationIssue::Empty {
                field: "Name".to_string(),
            });
        }
        if !self.name_pattern.is_match(name) {
            return Err(ValidationIssue::InvalidName);
        }
        Ok(name.to_string())
    }

    pub fn validate_age(&self, input: &str) -> Result<i32, ValidationIssue> {
        let age = self.parse_integer(input, "Age")?;
        if !(0..=MAX_AGE).contains(&age) {
            return Err(ValidationIssue::AgeOutOfRange { max: MAX_AGE });
        }
        Ok(age)
    }

    pub fn validate_date(&self, input: &str) -> Result<String, ValidationIssue> {
        let date = input.trim();
        if !self.date_pattern.is_match(date) {
            return Err(ValidationIssue::InvalidDate);
        }
        Ok(date.to_string())
    }

    pub fn validate_time(&self, input: &str) -> Result<String, ValidationIssue> {
        let time = input.trim();
        if !self.time_pattern.is_match(time) {
            return Err(ValidationIssue::InvalidTime);
        }
        Ok(time.to_string())
    }
}
