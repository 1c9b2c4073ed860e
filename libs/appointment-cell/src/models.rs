// libs/appointment-cell/src/models.rs
use serde::{Deserialize, Serialize};
use std::fmt;

use doctor_cell::Specialty;
use shared_models::{Record, RecordKind, StoreError};

// ==============================================================================
// CORE APPOINTMENT MODELS
// ==============================================================================

/// A booked visit. Patient and doctor are referenced by id only; neither is
/// checked for existence and deleting either leaves the appointment in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: i32,
    pub patient_id: i32,
    pub doctor_id: i32,
    /// `DD-MM-YYYY`
    pub date: String,
    /// `HH:MM`, 24-hour
    pub time: String,
}

impl Record for Appointment {
    const KIND: RecordKind = RecordKind::Appointment;

    fn id(&self) -> i32 {
        self.id
    }
}

impl fmt::Display for Appointment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Appointment ID: {}", self.id)?;
        writeln!(f, "Patient ID: {}", self.patient_id)?;
        writeln!(f, "Doctor ID: {}", self.doctor_id)?;
        writeln!(f, "Date: {}", self.date)?;
        write!(f, "Time: {}", self.time)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleAppointmentRequest {
    pub appointment_id: i32,
    pub patient_id: i32,
    pub symptom: String,
    pub date: String,
    pub time: String,
}

/// Outcome of routing a symptom to a doctor, before anything is booked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoctorAssignment {
    pub specialty: Specialty,
    pub doctor_id: i32,
}

// ==============================================================================
// ERROR TYPES
// ==============================================================================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AppointmentError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("No {specialty} doctors available at this time")]
    NoDoctorAvailable { specialty: Specialty },
}
