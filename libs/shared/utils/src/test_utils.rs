use std::io::Cursor;

use shared_config::{AppConfig, ListingFormat};

pub struct TestConfig {
    pub max_records: usize,
    pub validate_input: bool,
    pub listing_format: ListingFormat,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            max_records: 15,
            validate_input: true,
            listing_format: ListingFormat::Text,
        }
    }
}

impl TestConfig {
    pub fn with_max_records(mut self, max_records: usize) -> Self {
        self.max_records = max_records;
        self
    }

    pub fn lenient(mut self) -> Self {
        self.validate_input = false;
        self
    }

    pub fn json(mut self) -> Self {
        self.listing_format = ListingFormat::Json;
        self
    }

    pub fn to_app_config(&self) -> AppConfig {
        AppConfig {
            max_records: self.max_records,
            validate_input: self.validate_input,
            listing_format: self.listing_format,
        }
    }
}

/// Joins lines into a newline-terminated input stream for scripted sessions.
pub fn scripted_input(lines: &[&str]) -> Cursor<Vec<u8>> {
    let mut buf = String::new();
    for line in lines {
        buf.push_str(line);
        buf.push('\n');
    }
    Cursor::new(buf.into_bytes())
}
