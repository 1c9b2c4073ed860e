use std::fmt;

use serde::{Deserialize, Serialize};

use shared_models::{Record, RecordKind};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    pub id: i32,
    pub name: String,
    pub age: i32,
    pub illness: String,
}

impl Patient {
    pub fn new(id: i32, name: impl Into<String>, age: i32, illness: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            age,
            illness: illness.into(),
        }
    }
}

impl Record for Patient {
    const KIND: RecordKind = RecordKind::Patient;

    fn id(&self) -> i32 {
        self.id
    }
}

impl fmt::Display for Patient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Patient ID: {}", self.id)?;
        writeln!(f, "Name: {}", self.name)?;
        writeln!(f, "Age: {}", self.age)?;
        write!(f, "Illness: {}", self.illness)
    }
}
