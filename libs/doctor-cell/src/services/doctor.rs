use tracing::{debug, info};

use shared_config::AppConfig;
use shared_models::{RecordStore, StoreError};

use crate::models::Doctor;

pub struct DoctorService {
    store: RecordStore<Doctor>,
}

impl DoctorService {
    pub fn new(config: &AppConfig) -> Self {
        Self::with_capacity(config.max_records)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            store: RecordStore::with_capacity(capacity),
        }
    }

    /// Register a doctor. The specialty text is stored as given.
    pub fn add_doctor(&mut self, doctor: Doctor) -> Result<(), StoreError> {
        debug!("Adding doctor {} ({}, {})", doctor.id, doctor.name, doctor.specialty);
        let id = doctor.id;
        self.store.add(doctor)?;
        info!("Doctor {} added, {} of {} slots used", id, self.store.len(), self.store.capacity());
        Ok(())
    }

    pub fn get_doctor(&self, doctor_id: i32) -> Option<&Doctor> {
        debug!("Fetching doctor: {}", doctor_id);
        self.store.find_by_id(doctor_id)
    }

    /// Existing appointments that reference the doctor are left untouched.
    pub fn delete_doctor(&mut self, doctor_id: i32) -> Result<Doctor, StoreError> {
        let removed = self.store.remove_by_id(doctor_id)?;
        info!("Doctor {} removed", doctor_id);
        Ok(removed)
    }

    pub fn list_doctors(&self) -> Vec<Doctor> {
        self.store.list_all()
    }

    pub fn doctors(&self) -> impl Iterator<Item = &Doctor> {
        self.store.iter()
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

impl Default for DoctorService {
    fn default() -> Self {
        Self::new(&AppConfig::default())
    }
}
