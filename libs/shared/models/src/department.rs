use serde::{Deserialize, Serialize};

/// The closed set of departments a triage conclusion can point at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Department {
    #[serde(rename = "General Medicine")]
    GeneralMedicine,
    Orthopedics,
    Cardiology,
    Neurology,
    Dermatology,
    Gastroenterology,
    Pulmonology,
    #[serde(rename = "Emergency Medicine")]
    EmergencyMedicine,
}

impl Department {
    pub const ALL: [Department; 8] = [
        Department::GeneralMedicine,
        Department::Orthopedics,
        Department::Cardiology,
        Department::Neurology,
        Department::Dermatology,
        Department::Gastroenterology,
        Department::Pulmonology,
        Department::EmergencyMedicine,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Department::GeneralMedicine => "General Medicine",
            Department::Orthopedics => "Orthopedics",
            Department::Cardiology => "Cardiology",
            Department::Neurology => "Neurology",
            Department::Dermatology => "Dermatology",
            Department::Gastroenterology => "Gastroenterology",
            Department::Pulmonology => "Pulmonology",
            Department::EmergencyMedicine => "Emergency Medicine",
        }
    }

    /// Case-insensitive lookup by display name.
    pub fn from_name(name: &str) -> Option<Department> {
        Department::ALL
            .iter()
            .find(|dept| dept.as_str().eq_ignore_ascii_case(name.trim()))
            .copied()
    }
}

impl std::fmt::Display for Department {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
