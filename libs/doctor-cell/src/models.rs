use std::fmt;

use serde::{Deserialize, Serialize};

use shared_models::{Record, RecordKind};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Doctor {
    pub id: i32,
    pub name: String,
    /// Usually a [`Specialty`] label, but any text is accepted.
    pub specialty: String,
}

impl Doctor {
    pub fn new(id: i32, name: impl Into<String>, specialty: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            specialty: specialty.into(),
        }
    }

    /// Exact, case-sensitive comparison against the category label.
    pub fn practices(&self, specialty: Specialty) -> bool {
        self.specialty == specialty.label()
    }
}

impl Record for Doctor {
    const KIND: RecordKind = RecordKind::Doctor;

    fn id(&self) -> i32 {
        self.id
    }
}

impl fmt::Display for Doctor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Doctor ID: {}", self.id)?;
        writeln!(f, "Name: {}", self.name)?;
        write!(f, "Specialty: {}", self.specialty)
    }
}

/// Practice categories appointments are routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Specialty {
    #[serde(rename = "General Medicine")]
    GeneralMedicine,
    #[serde(rename = "Cardiology")]
    Cardiology,
    #[serde(rename = "Dermatology")]
    Dermatology,
    #[serde(rename = "Psychiatry")]
    Psychiatry,
    #[serde(rename = "Dental")]
    Dental,
}

impl Specialty {
    pub const ALL: [Specialty; 5] = [
        Specialty::GeneralMedicine,
        Specialty::Cardiology,
        Specialty::Dermatology,
        Specialty::Psychiatry,
        Specialty::Dental,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Specialty::GeneralMedicine => "General Medicine",
            Specialty::Cardiology => "Cardiology",
            Specialty::Dermatology => "Dermatology",
            Specialty::Psychiatry => "Psychiatry",
            Specialty::Dental => "Dental",
        }
    }
}

impl fmt::Display for Specialty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
