use appointment_cell::{
    Appointment, AppointmentError, AppointmentSchedulerService, AppointmentService, DoctorAssignment,
    ScheduleAppointmentRequest,
};
use doctor_cell::DoctorService;
use patient_cell::PatientService;
use shared_config::AppConfig;

/// All in-memory state for one console session.
pub struct Clinic {
    pub patients: PatientService,
    pub doctors: DoctorService,
    pub appointments: AppointmentService,
    scheduler: AppointmentSchedulerService,
}

impl Clinic {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            patients: PatientService::new(config),
            doctors: DoctorService::new(config),
            appointments: AppointmentService::new(config),
            scheduler: AppointmentSchedulerService::new(),
        }
    }

    pub fn assign_doctor(&self, symptom: &str) -> Result<DoctorAssignment, AppointmentError> {
        self.scheduler.assign_doctor(&self.doctors, symptom)
    }

    pub fn schedule(&mut self, request: ScheduleAppointmentRequest) -> Result<Appointment, AppointmentError> {
        self.scheduler.schedule(&mut self.appointments, &self.doctors, request)
    }
}
