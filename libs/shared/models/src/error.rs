use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The kind of record a store holds. Used to label errors and log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecordKind {
    Patient,
    Doctor,
    Appointment,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordKind::Patient => write!(f, "Patient"),
            RecordKind::Doctor => write!(f, "Doctor"),
            RecordKind::Appointment => write!(f, "Appointment"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("{kind} limit reached ({capacity}). Cannot add more records")]
    CapacityExceeded { kind: RecordKind, capacity: usize },

    #[error("{kind} with ID {id} not found")]
    NotFound { kind: RecordKind, id: i32 },
}
