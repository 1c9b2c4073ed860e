pub mod test_utils;
pub mod validation;

pub use validation::{InputValidator, ValidationIssue};
