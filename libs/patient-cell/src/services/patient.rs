use tracing::{debug, info};

use shared_config::AppConfig;
use shared_models::{RecordStore, StoreError};

use crate::models::Patient;

pub struct PatientService {
    store: RecordStore<Patient>,
}

impl PatientService {
    pub fn new(config: &AppConfig) -> Self {
        Self::with_capacity(config.max_records)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            store: RecordStore::with_capacity(capacity),
        }
    }

    pub fn add_patient(&mut self, patient: Patient) -> Result<(), StoreError> {
        debug!("Adding patient {} ({})", patient.id, patient.name);
        let id = patient.id;
        self.store.add(patient)?;
        info!("Patient {} added, {} of {} slots used", id, self.store.len(), self.store.capacity());
        Ok(())
    }

    pub fn get_patient(&self, patient_id: i32) -> Option<&Patient> {
        debug!("Fetching patient: {}", patient_id);
        self.store.find_by_id(patient_id)
    }

    pub fn delete_patient(&mut self, patient_id: i32) -> Result<Patient, StoreError> {
        let removed = self.store.remove_by_id(patient_id)?;
        info!("Patient {} removed", patient_id);
        Ok(removed)
    }

    pub fn list_patients(&self) -> Vec<Patient> {
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

impl Default for PatientService {
    fn default() -> Self {
        Self::new(&AppConfig::default())
    }
}
