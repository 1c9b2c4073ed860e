use tracing::{debug, info};

use shared_config::AppConfig;
use shared_models::{RecordStore, StoreError};

use crate::models::Appointment;

/// Appointment collection. Records enter only through
/// [`AppointmentSchedulerService::schedule`](crate::services::AppointmentSchedulerService::schedule).
pub struct AppointmentService {
    store: RecordStore<Appointment>,
}

impl AppointmentService {
    pub fn new(config: &AppConfig) -> Self {
        Self::with_capacity(config.max_records)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            store: RecordStore::with_capacity(capacity),
        }
    }

    pub(crate) fn insert(&mut self, appointment: Appointment) -> Result<(), StoreError> {
        self.store.add(appointment)
    }

    pub fn get_appointment(&self, appointment_id: i32) -> Option<&Appointment> {
        debug!("Fetching appointment: {}", appointment_id);
        self.store.find_by_id(appointment_id)
    }

    pub fn cancel_appointment(&mut self, appointment_id: i32) -> Result<Appointment, StoreError> {
        let cancelled = self.store.remove_by_id(appointment_id)?;
        info!(
            "Appointment {} cancelled (patient {}, doctor {})",
            cancelled.id, cancelled.patient_id, cancelled.doctor_id
        );
        Ok(cancelled)
    }

    pub fn list_appointments(&self) -> Vec<Appointment> {
        self.store.list_all()
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.store.capacity()
    }

    pub fn is_full(&self) -> bool {
        self.store.is_full()
    }
}

impl Default for AppointmentService {
    fn default() -> Self {
        Self::new(&AppConfig::default())
    }
}
