use std::fmt::Display;
use std::io::{BufRead, Write};

use anyhow::Result;
use serde::Serialize;
use tracing::{debug, info};

use appointment_cell::{AppointmentError, ScheduleAppointmentRequest};
use doctor_cell::Doctor;
use patient_cell::Patient;
use shared_config::{AppConfig, ListingFormat};
use shared_utils::{InputValidator, ValidationIssue};

use crate::clinic::Clinic;

const MENU: &str = "\
Hospital Management System - Menu:
1. Add Patient
2. Add Doctor
3. Schedule Appointment
4. Display Patients
5. Display Doctors
6. Display Appointments
7. Delete Patient
8. Delete Doctor
9. Cancel Appointment
0. Exit";

/// Whether the menu loop keeps going after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Menu-driven console over a [`Clinic`].
///
/// Generic over its streams so sessions can be scripted. End of input at any
/// prompt ends the session the same way as choosing `0`.
pub struct Shell<R, W> {
    input: R,
    output: W,
    clinic: Clinic,
    validator: InputValidator,
    validate_input: bool,
    listing_format: ListingFormat,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W, config: &AppConfig) -> Result<Self> {
        Ok(Self {
            input,
            output,
            clinic: Clinic::new(config),
            validator: InputValidator::new()?,
            validate_input: config.validate_input,
            listing_format: config.listing_format,
        })
    }

    pub fn into_parts(self) -> (Clinic, W) {
        (self.clinic, self.output)
    }

    pub fn run(&mut self) -> Result<()> {
        info!("Interactive session started");

        loop {
            writeln!(self.output, "\n{}", MENU)?;
            let Some(choice) = self.prompt("Enter your choice")? else {
                break;
            };
            debug!("Menu choice '{}'", choice);

            let flow = match choice.trim() {
                "1" => self.add_patient()?,
                "2" => self.add_doctor()?,
                "3" => self.schedule_appointment()?,
                "4" => {
                    let patients = self.clinic.patients.list_patients();
                    self.write_listing("Patient", "patients", &patients)?
                }
                "5" => {
                    let doctors = self.clinic.doctors.list_doctors();
                    self.write_listing("Doctor", "doctors", &doctors)?
                }
                "6" => {
                    let appointments = self.clinic.appointments.list_appointments();
                    self.write_listing("Appointment", "appointments", &appointments)?
                }
                "7" => self.delete_patient()?,
                "8" => self.delete_doctor()?,
                "9" => self.cancel_appointment()?,
                "0" => Flow::Exit,
                _ => {
                    writeln!(self.output, "\nInvalid choice. Please try again.")?;
                    Flow::Continue
                }
            };

            if flow == Flow::Exit {
                break;
            }
        }

        writeln!(self.output, "\nExiting the system. Goodbye!")?;
        self.output.flush()?;
        info!("Interactive session ended");
        Ok(())
    }

    // ==============================================================================
    // ACTIONS
    // ==============================================================================

    fn add_patient(&mut self) -> Result<Flow> {
        if self.clinic.patients.is_full() {
            writeln!(self.output, "\nPatient limit reached. Cannot add more patients.")?;
            return Ok(Flow::Continue);
        }

        let Some(id) = self.read_id("Enter Patient ID", "Patient ID")? else {
            return Ok(Flow::Exit);
        };
        let Some(name) = self.read_name("Enter Name")? else {
            return Ok(Flow::Exit);
        };
        let Some(age) = self.read_age("Enter Age")? else {
            return Ok(Flow::Exit);
        };
        let Some(illness) = self.read_text("Enter Illness or Symptom")? else {
            return Ok(Flow::Exit);
        };

        match self.clinic.patients.add_patient(Patient::new(id, name, age, illness)) {
            Ok(()) => writeln!(self.output, "\nPatient added successfully.")?,
            Err(e) => writeln!(self.output, "\n{}.", e)?,
        }
        Ok(Flow::Continue)
    }

    fn add_doctor(&mut self) -> Result<Flow> {
        if self.clinic.doctors.is_full() {
            writeln!(self.output, "\nDoctor limit reached. Cannot add more doctors.")?;
            return Ok(Flow::Continue);
        }

        let Some(id) = self.read_id("Enter Doctor ID", "Doctor ID")? else {
            return Ok(Flow::Exit);
        };
        let Some(name) = self.read_name("Enter Name")? else {
            return Ok(Flow::Exit);
        };
        let Some(specialty) = self.read_text("Enter Specialty")? else {
            return Ok(Flow::Exit);
        };

        match self.clinic.doctors.add_doctor(Doctor::new(id, name, specialty)) {
            Ok(()) => writeln!(self.output, "\nDoctor added successfully.")?,
            Err(e) => writeln!(self.output, "\n{}.", e)?,
        }
        Ok(Flow::Continue)
    }

    fn schedule_appointment(&mut self) -> Result<Flow> {
        if self.clinic.appointments.is_full() {
            writeln!(self.output, "\nAppointment limit reached. Cannot schedule more appointments.")?;
            return Ok(Flow::Continue);
        }

        let Some(appointment_id) = self.read_id("Enter Appointment ID", "Appointment ID")? else {
            return Ok(Flow::Exit);
        };
        let Some(patient_id) = self.read_id("Enter Patient ID", "Patient ID")? else {
            return Ok(Flow::Exit);
        };
        let Some(symptom) = self.read_text("Enter Patient Symptom")? else {
            return Ok(Flow::Exit);
        };

        // Resolve the doctor before asking for a slot
        if let Err(e) = self.clinic.assign_doctor(&symptom) {
            self.report_scheduling_error(&e)?;
            return Ok(Flow::Continue);
        }

        let Some(date) = self.read_date("Enter Date (DD-MM-YYYY)")? else {
            return Ok(Flow::Exit);
        };
        let Some(time) = self.read_time("Enter Time (HH:MM)")? else {
            return Ok(Flow::Exit);
        };

        let request = ScheduleAppointmentRequest {
            appointment_id,
            patient_id,
            symptom,
            date,
            time,
        };

        match self.clinic.schedule(request) {
            Ok(appointment) => writeln!(
                self.output,
                "\nAppointment scheduled successfully with Doctor ID {}.",
                appointment.doctor_id
            )?,
            Err(e) => self.report_scheduling_error(&e)?,
        }
        Ok(Flow::Continue)
    }

    fn delete_patient(&mut self) -> Result<Flow> {
        let Some(id) = self.read_id("Enter Patient ID to delete", "Patient ID")? else {
            return Ok(Flow::Exit);
        };

        match self.clinic.patients.delete_patient(id) {
            Ok(patient) => writeln!(self.output, "\nPatient {} ({}) deleted successfully.", patient.id, patient.name)?,
            Err(e) => writeln!(self.output, "\n{}.", e)?,
        }
        Ok(Flow::Continue)
    }

    fn delete_doctor(&mut self) -> Result<Flow> {
        let Some(id) = self.read_id("Enter Doctor ID to delete", "Doctor ID")? else {
            return Ok(Flow::Exit);
        };

        match self.clinic.doctors.delete_doctor(id) {
            Ok(doctor) => writeln!(self.output, "\nDoctor {} ({}) deleted successfully.", doctor.id, doctor.name)?,
            Err(e) => writeln!(self.output, "\n{}.", e)?,
        }
        Ok(Flow::Continue)
    }

    fn cancel_appointment(&mut self) -> Result<Flow> {
        let Some(id) = self.read_id("Enter Appointment ID to cancel", "Appointment ID")? else {
            return Ok(Flow::Exit);
        };

        match self.clinic.appointments.cancel_appointment(id) {
            Ok(appointment) => writeln!(self.output, "\nAppointment {} cancelled successfully.", appointment.id)?,
            Err(e) => writeln!(self.output, "\n{}.", e)?,
        }
        Ok(Flow::Continue)
    }

    fn report_scheduling_error(&mut self, error: &AppointmentError) -> Result<()> {
        match error {
            AppointmentError::NoDoctorAvailable { specialty } => {
                writeln!(self.output, "\nNo available doctor with specialty in {}.", specialty)?
            }
            AppointmentError::Store(e) => writeln!(self.output, "\n{}.", e)?,
        }
        Ok(())
    }

    fn write_listing<T: Display + Serialize>(&mut self, label: &str, plural: &str, records: &[T]) -> Result<Flow> {
        match self.listing_format {
            ListingFormat::Json => {
                writeln!(self.output, "{}", serde_json::to_string_pretty(records)?)?;
            }
            ListingFormat::Text if records.is_empty() => {
                writeln!(self.output, "\nNo {} available.", plural)?;
            }
            ListingFormat::Text => {
                for (i, record) in records.iter().enumerate() {
                    writeln!(self.output, "\n{} {}:\n{}", label, i + 1, record)?;
                }
            }
        }
        Ok(Flow::Continue)
    }

    // ==============================================================================
    // FIELD INPUT
    // ==============================================================================

    /// Write a prompt and read one line. `None` at end of input.
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{}: ", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(&['\r', '\n'][..]).to_string()))
    }

    /// Prompt until `check` accepts the line.
    fn prompt_until<T>(
        &mut self,
        label: &str,
        check: impl Fn(&InputValidator, &str) -> Result<T, ValidationIssue>,
    ) -> Result<Option<T>> {
        loop {
            let Some(line) = self.prompt(label)? else {
                return Ok(None);
            };
            match check(&self.validator, &line) {
                Ok(value) => return Ok(Some(value)),
                Err(issue) => {
                    debug!("Rejected input for '{}': {}", label, issue);
                    writeln!(self.output, "Invalid input: {}. Please try again.", issue)?;
                }
            }
        }
    }

    fn read_id(&mut self, label: &str, field: &str) -> Result<Option<i32>> {
        if self.validate_input {
            self.prompt_until(label, |v, s| v.validate_id(s, field))
        } else {
            self.prompt_until(label, |v, s| v.parse_integer(s, field))
        }
    }

    fn read_name(&mut self, label: &str) -> Result<Option<String>> {
        if self.validate_input {
            self.prompt_until(label, |v, s| v.validate_name(s))
        } else {
            self.read_text(label)
        }
    }

    fn read_age(&mut self, label: &str) -> Result<Option<i32>> {
        if self.validate_input {
            self.prompt_until(label, |v, s| v.validate_age(s))
        } else {
            self.prompt_until(label, |v, s| v.parse_integer(s, "Age"))
        }
    }

    fn read_date(&mut self, label: &str) -> Result<Option<String>> {
        if self.validate_input {
            self.prompt_until(label, |v, s| v.validate_date(s))
        } else {
            self.read_text(label)
        }
    }

    fn read_time(&mut self, label: &str) -> Result<Option<String>> {
        if self.validate_input {
            self.prompt_until(label, |v, s| v.validate_time(s))
        } else {
            self.read_text(label)
        }
    }

    /// Free text, taken as entered.
    fn read_text(&mut self, label: &str) -> Result<Option<String>> {
        self.prompt(label)
    }
}
