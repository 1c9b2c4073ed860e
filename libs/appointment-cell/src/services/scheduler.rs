// libs/appointment-cell/src/services/scheduler.rs
use tracing::{debug, info, warn};

use doctor_cell::{DoctorMatchingService, DoctorService};
use shared_models::{RecordKind, StoreError};

use crate::models::{Appointment, AppointmentError, DoctorAssignment, ScheduleAppointmentRequest};
use crate::services::appointment::AppointmentService;

pub struct AppointmentSchedulerService {
    doctor_matching_service: DoctorMatchingService,
}

impl AppointmentSchedulerService {
    pub fn new() -> Self {
        Self {
            doctor_matching_service: DoctorMatchingService::new(),
        }
    }

    /// Route a symptom to a specialty and pick the doctor for it.
    pub fn assign_doctor(
        &self,
        doctors: &DoctorService,
        symptom: &str,
    ) -> Result<DoctorAssignment, AppointmentError> {
        let specialty = self.doctor_matching_service.match_specialty(symptom);

        match self.doctor_matching_service.find_doctor_by_specialty(doctors, specialty) {
            Some(doctor_id) => Ok(DoctorAssignment { specialty, doctor_id }),
            None => {
                warn!("No {} doctor available for symptom '{}'", specialty, symptom);
                Err(AppointmentError::NoDoctorAvailable { specialty })
            }
        }
    }

    /// Book an appointment with the doctor the symptom routes to.
    ///
    /// Nothing is stored unless every step succeeds. Date and time are taken
    /// as given; the patient id is not checked against the patient store.
    pub fn schedule(
        &self,
        appointments: &mut AppointmentService,
        doctors: &DoctorService,
        request: ScheduleAppointmentRequest,
    ) -> Result<Appointment, AppointmentError> {
        debug!(
            "Scheduling appointment {} for patient {}",
            request.appointment_id, request.patient_id
        );

        if appointments.is_full() {
            warn!("Appointment limit reached, rejecting {}", request.appointment_id);
            return Err(StoreError::CapacityExceeded {
                kind: RecordKind::Appointment,
                capacity: appointments.capacity(),
            }
            .into());
        }

        let assignment = self.assign_doctor(doctors, &request.symptom)?;

        let appointment = Appointment {
            id: request.appointment_id,
            patient_id: request.patient_id,
            doctor_id: assignment.doctor_id,
            date: request.date,
            time: request.time,
        };

        appointments.insert(appointment.clone())?;

        info!(
            "Appointment {} scheduled with {} doctor {} on {} at {}",
            appointment.id, assignment.specialty, appointment.doctor_id, appointment.date, appointment.time
        );

        Ok(appointment)
    }
}

impl Default for AppointmentSchedulerService {
    fn default() -> Self {
        Self::new()
    }
}
