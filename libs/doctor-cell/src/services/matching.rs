// libs/doctor-cell/src/services/matching.rs
use tracing::debug;

use crate::models::Specialty;
use crate::services::doctor::DoctorService;

/// Keyword rules in priority order. The first rule with any keyword contained
/// in the symptom text wins.
const SPECIALTY_RULES: &[(Specialty, &[&str])] = &[
    (Specialty::GeneralMedicine, &["cough", "fever"]),
    (Specialty::Cardiology, &["heart", "chest pain"]),
    (Specialty::Dermatology, &["skin", "rash"]),
    (Specialty::Psychiatry, &["mental", "depression"]),
    (Specialty::Dental, &["teeth", "gums"]),
];

const FALLBACK_SPECIALTY: Specialty = Specialty::GeneralMedicine;

pub struct DoctorMatchingService;

impl DoctorMatchingService {
    pub fn new() -> Self {
        Self
    }

    /// Map free-text symptoms to a practice category.
    ///
    /// Matching is a case-sensitive substring search with no normalization.
    /// Text that hits no rule routes to General Medicine.
    pub fn match_specialty(&self, symptom: &str) -> Specialty {
        let specialty = SPECIALTY_RULES
            .iter()
            .find(|(_, keywords)| keywords.iter().any(|k| symptom.contains(k)))
            .map(|(specialty, _)| *specialty)
            .unwrap_or(FALLBACK_SPECIALTY);

        debug!("Symptom '{}' matched to {}", symptom, specialty);
        specialty
    }

    /// Id of the earliest-registered doctor whose specialty equals the
    /// category label exactly.
    pub fn find_doctor_by_specialty(&self, doctors: &DoctorService, specialty: Specialty) -> Option<i32> {
        let found = doctors.doctors().find(|d| d.practices(specialty)).map(|d| d.id);

        match found {
            Some(id) => debug!("Doctor {} selected for {}", id, specialty),
            None => debug!("No doctor registered for {}", specialty),
        }
        found
    }
}

impl Default for DoctorMatchingService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Doctor;

    #[test]
    fn reference_symptoms_route_as_expected() {
        let matcher = DoctorMatchingService::new();
        assert_eq!(matcher.match_specialty("persistent cough and fever"), Specialty::GeneralMedicine);
        assert_eq!(matcher.match_specialty("severe chest pain"), Specialty::Cardiology);
        assert_eq!(matcher.match_specialty("itchy rash"), Specialty::Dermatology);
        assert_eq!(matcher.match_specialty("unrelated symptom"), Specialty::GeneralMedicine);
    }

    #[test]
    fn each_keyword_reaches_its_category() {
        let matcher = DoctorMatchingService::new();
        for (specialty, keywords) in SPECIALTY_RULES {
            for keyword in keywords.iter() {
                let text = format!("patient reports {} since monday", keyword);
                assert_eq!(matcher.match_specialty(&text), *specialty, "keyword {}", keyword);
            }
        }
    }

    #[test]
    fn earlier_rule_wins_over_later_ones() {
        let matcher = DoctorMatchingService::new();
        assert_eq!(matcher.match_specialty("rash with a fever"), Specialty::GeneralMedicine);
        assert_eq!(matcher.match_specialty("heart racing, skin flushed"), Specialty::Cardiology);
        assert_eq!(matcher.match_specialty("depression and sore gums"), Specialty::Psychiatry);
    }

    #[test]
    fn matching_is_case_sensitive() {
        let matcher = DoctorMatchingService::new();
        assert_eq!(matcher.match_specialty("Chest Pain"), Specialty::GeneralMedicine);
        assert_eq!(matcher.match_specialty("chest painful"), Specialty::Cardiology);
        assert_eq!(matcher.match_specialty("TEETH"), Specialty::GeneralMedicine);
        assert_eq!(matcher.match_specialty(""), Specialty::GeneralMedicine);
    }

    #[test]
    fn lookup_picks_earliest_exact_match() {
        let matcher = DoctorMatchingService::new();
        let mut doctors = DoctorService::default();
        doctors.add_doctor(Doctor::new(3, "Dr Lower", "cardiology")).unwrap();
        doctors.add_doctor(Doctor::new(4, "Dr Prefix", "Cardiology Fellow")).unwrap();
        doctors.add_doctor(Doctor::new(5, "Dr Heart", "Cardiology")).unwrap();
        doctors.add_doctor(Doctor::new(6, "Dr Beat", "Cardiology")).unwrap();

        assert_eq!(matcher.find_doctor_by_specialty(&doctors, Specialty::Cardiology), Some(5));
        assert_eq!(matcher.find_doctor_by_specialty(&doctors, Specialty::Dental), None);

        doctors.delete_doctor(5).unwrap();
        assert_eq!(matcher.find_doctor_by_specialty(&doctors, Specialty::Cardiology), Some(6));
    }
}
