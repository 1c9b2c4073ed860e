// libs/appointment-cell/tests/scheduler_test.rs

use assert_matches::assert_matches;

use appointment_cell::models::{Appointment, AppointmentError, ScheduleAppointmentRequest};
use appointment_cell::services::{AppointmentSchedulerService, AppointmentService};
use doctor_cell::{Doctor, DoctorService, Specialty};
use patient_cell::{Patient, PatientService};
use shared_models::{RecordKind, StoreError};

// ==============================================================================
// TEST FIXTURES AND UTILITIES
// ==============================================================================

struct TestSetup {
    scheduler: AppointmentSchedulerService,
    appointments: AppointmentService,
    doctors: DoctorService,
}

impl TestSetup {
    fn new() -> Self {
        Self {
            scheduler: AppointmentSchedulerService::new(),
            appointments: AppointmentService::default(),
            doctors: DoctorService::default(),
        }
    }

    fn with_doctor(mut self, id: i32, specialty: &str) -> Self {
        self.doctors
            .add_doctor(Doctor::new(id, format!("Dr. {}", id), specialty))
            .unwrap();
        self
    }

    fn schedule(&mut self, id: i32, patient_id: i32, symptom: &str) -> Result<Appointment, AppointmentError> {
        self.scheduler.schedule(
            &mut self.appointments,
            &self.doctors,
            request(id, patient_id, symptom, "01-01-2030", "09:30"),
        )
    }
}

fn request(id: i32, patient_id: i32, symptom: &str, date: &str, time: &str) -> ScheduleAppointmentRequest {
    ScheduleAppointmentRequest {
        appointment_id: id,
        patient_id,
        symptom: symptom.to_string(),
        date: date.to_string(),
        time: time.to_string(),
    }
}

// ==============================================================================
// SCHEDULING
// ==============================================================================

#[test]
fn test_schedule_assigns_cardiologist() {
    let mut setup = TestSetup::new().with_doctor(5, "Cardiology");

    let appointment = setup.schedule(1, 100, "chest pain").unwrap();

    assert_eq!(
        appointment,
        Appointment {
            id: 1,
            patient_id: 100,
            doctor_id: 5,
            date: "01-01-2030".to_string(),
            time: "09:30".to_string(),
        }
    );
    assert_eq!(setup.appointments.list_appointments(), vec![appointment]);
}

#[test]
fn test_schedule_without_specialist_creates_nothing() {
    let mut setup = TestSetup::new().with_doctor(7, "General Medicine");

    let result = setup.schedule(2, 101, "chest pain");

    assert_matches!(
        result,
        Err(AppointmentError::NoDoctorAvailable { specialty: Specialty::Cardiology })
    );
    assert_eq!(setup.appointments.len(), 0);
}

#[test]
fn test_no_doctor_error_message_names_category() {
    let err = AppointmentError::NoDoctorAvailable { specialty: Specialty::Cardiology };
    assert_eq!(err.to_string(), "No Cardiology doctors available at this time");
}

#[test]
fn test_unmatched_symptom_goes_to_general_medicine() {
    let mut setup = TestSetup::new()
        .with_doctor(1, "Dermatology")
        .with_doctor(2, "General Medicine");

    let appointment = setup.schedule(3, 50, "sprained ankle").unwrap();
    assert_eq!(appointment.doctor_id, 2);
}

#[test]
fn test_same_specialty_always_picks_earliest_doctor() {
    let mut setup = TestSetup::new()
        .with_doctor(20, "Dental")
        .with_doctor(21, "Dental");

    let first = setup.schedule(1, 1, "aching teeth").unwrap();
    let second = setup.schedule(2, 2, "swollen gums").unwrap();

    assert_eq!(first.doctor_id, 20);
    assert_eq!(second.doctor_id, 20);
}

#[test]
fn test_schedule_rejected_when_full() {
    let mut setup = TestSetup {
        appointments: AppointmentService::with_capacity(2),
        ..TestSetup::new()
    }
    .with_doctor(1, "General Medicine");

    setup.schedule(1, 1, "fever").unwrap();
    setup.schedule(2, 2, "cough").unwrap();
    let result = setup.schedule(3, 3, "fever");

    assert_matches!(
        result,
        Err(AppointmentError::Store(StoreError::CapacityExceeded {
            kind: RecordKind::Appointment,
            capacity: 2
        }))
    );
    assert_eq!(setup.appointments.len(), 2);
}

#[test]
fn test_full_store_reported_before_doctor_lookup() {
    let mut setup = TestSetup {
        appointments: AppointmentService::with_capacity(0),
        ..TestSetup::new()
    };

    assert_matches!(
        setup.schedule(1, 1, "chest pain"),
        Err(AppointmentError::Store(StoreError::CapacityExceeded { .. }))
    );
}

#[test]
fn test_date_and_time_are_stored_verbatim() {
    let mut setup = TestSetup::new().with_doctor(1, "Psychiatry");

    let appointment = setup
        .scheduler
        .schedule(
            &mut setup.appointments,
            &setup.doctors,
            request(9, 9, "mental fatigue", "tomorrow", "noon"),
        )
        .unwrap();

    assert_eq!(appointment.date, "tomorrow");
    assert_eq!(appointment.time, "noon");
}

// ==============================================================================
// REFERENCES ARE NOT ENFORCED
// ==============================================================================

#[test]
fn test_unknown_patient_id_is_accepted() {
    let patients = PatientService::default();
    let mut setup = TestSetup::new().with_doctor(1, "General Medicine");

    let appointment = setup.schedule(1, 404, "fever").unwrap();

    assert!(patients.get_patient(404).is_none());
    assert_eq!(appointment.patient_id, 404);
}

#[test]
fn test_deleting_people_keeps_appointments() {
    let mut patients = PatientService::default();
    patients.add_patient(Patient::new(100, "Alice", 30, "chest pain")).unwrap();
    let mut setup = TestSetup::new().with_doctor(5, "Cardiology");
    setup.schedule(1, 100, "chest pain").unwrap();

    patients.delete_patient(100).unwrap();
    setup.doctors.delete_doctor(5).unwrap();

    let remaining = setup.appointments.get_appointment(1).unwrap();
    assert_eq!(remaining.patient_id, 100);
    assert_eq!(remaining.doctor_id, 5);
}

#[test]
fn test_duplicate_appointment_ids_allowed() {
    let mut setup = TestSetup::new().with_doctor(1, "General Medicine");

    setup.schedule(1, 10, "fever").unwrap();
    setup.schedule(1, 11, "cough").unwrap();

    assert_eq!(setup.appointments.len(), 2);
    assert_eq!(setup.appointments.get_appointment(1).map(|a| a.patient_id), Some(10));
}

// ==============================================================================
// CANCELLATION
// ==============================================================================

#[test]
fn test_cancel_appointment() {
    let mut setup = TestSetup::new().with_doctor(1, "General Medicine");
    for id in 1..=3 {
        setup.schedule(id, id * 10, "fever").unwrap();
    }

    let cancelled = setup.appointments.cancel_appointment(2).unwrap();
    assert_eq!(cancelled.patient_id, 20);

    let ids: Vec<i32> = setup.appointments.list_appointments().iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![1, 3]);

    assert_matches!(
        setup.appointments.cancel_appointment(2),
        Err(StoreError::NotFound { kind: RecordKind::Appointment, id: 2 })
    );
    assert_eq!(setup.appointments.len(), 2);
}

#[test]
fn test_appointment_display_and_json() {
    let appointment = Appointment {
        id: 1,
        patient_id: 100,
        doctor_id: 5,
        date: "01-01-2030".to_string(),
        time: "09:30".to_string(),
    };

    assert_eq!(
        appointment.to_string(),
        "Appointment ID: 1\nPatient ID: 100\nDoctor ID: 5\nDate: 01-01-2030\nTime: 09:30"
    );
    let json = serde_json::to_value(&appointment).unwrap();
    assert_eq!(json["doctor_id"], 5);
    assert_eq!(json["date"], "01-01-2030");
}
