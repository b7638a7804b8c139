use serde::{Deserialize, Serialize};

/// Reference data for a bookable doctor. Identity is `id`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Doctor {
    pub id: String,
    pub name: String,
    pub specialty: String,
}

impl Doctor {
    pub fn new(id: &str, name: &str, specialty: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            specialty: specialty.to_string(),
        }
    }

    pub fn display_label(&self) -> String {
        format!("{} ({})", self.name, self.specialty)
    }
}

/// The fixed roster served by the mock directory.
pub fn default_roster() -> Vec<Doctor> {
    vec![
        Doctor::new("doc1", "Dr. Alice Smith", "Cardiology"),
        Doctor::new("doc2", "Dr. Bob Johnson", "Dermatology"),
        Doctor::new("doc3", "Dr. Carol White", "Pediatrics"),
    ]
}

/// Look a doctor up by id in an ordered roster.
pub fn find_doctor<'a>(doctors: &'a [Doctor], doctor_id: &str) -> Option<&'a Doctor> {
    doctors.iter().find(|d| d.id == doctor_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_roster_order() {
        let roster = default_roster();
        let ids: Vec<&str> = roster.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["doc1", "doc2", "doc3"]);
    }

    #[test]
    fn test_display_label() {
        let doctor = Doctor::new("doc1", "Dr. Alice Smith", "Cardiology");
        assert_eq!(doctor.display_label(), "Dr. Alice Smith (Cardiology)");
    }

    #[test]
    fn test_find_doctor() {
        let roster = default_roster();
        assert_eq!(find_doctor(&roster, "doc2").map(|d| d.name.as_str()), Some("Dr. Bob Johnson"));
        assert!(find_doctor(&roster, "doc9").is_none());
        assert!(find_doctor(&roster, "").is_none());
    }
}
