use shared::domain::{Appointment, Doctor, DoctorId};

/// The slot labels offered for every doctor. Static for the prototype.
pub const TIME_SLOTS: [&str; 4] = ["10:00 AM", "11:00 AM", "02:00 PM", "04:00 PM"];

/// Static reference table of doctors. Loaded once, never mutated at runtime.
pub struct DoctorDirectory {
    doctors: Vec<Doctor>,
}

impl DoctorDirectory {
    pub fn new(doctors: Vec<Doctor>) -> Self {
        Self { doctors }
    }

    /// The fixed sample table backing the prototype.
    pub fn with_sample_data() -> Self {
        Self::new(vec![
            doctor(
                1,
                "Dr. Nethmi Dissanayake",
                "Dermatologist",
                "City Health Clinic",
                "10+ Years",
                "LKR 3,000",
            ),
            doctor(
                2,
                "Dr. Mohamed Fazir",
                "Physiotherapist",
                "Colombo Care Center",
                "8+ Years",
                "LKR 2,500",
            ),
            doctor(
                3,
                "Dr. Nimal Perera",
                "Cardiologist",
                "Heart Clinic",
                "15+ Years",
                "LKR 4,000",
            ),
        ])
    }

    pub fn doctors(&self) -> &[Doctor] {
        &self.doctors
    }

    pub fn find_by_id(&self, id: DoctorId) -> Option<&Doctor> {
        self.doctors.iter().find(|d| d.id == id)
    }

    pub fn find_by_name(&self, name: &str) -> Option<&Doctor> {
        self.doctors.iter().find(|d| d.name == name)
    }

    pub fn time_slots(&self) -> &'static [&'static str] {
        &TIME_SLOTS
    }
}

/// The fixed appointment seed shown on first launch: one upcoming visit.
pub fn sample_appointments() -> Vec<Appointment> {
    vec![Appointment::new(
        "1".into(),
        "May 25, 2026",
        "10:00 AM",
        "Dr. Nethmi Dissanayake",
        "Dermatologist",
        "City Health Clinic",
    )]
}

fn doctor(
    id: i64,
    name: &str,
    specialty: &str,
    clinic: &str,
    experience: &str,
    consultation_fee: &str,
) -> Doctor {
    Doctor {
        id: DoctorId(id),
        name: name.into(),
        specialty: specialty.into(),
        clinic: clinic.into(),
        experience: experience.into(),
        consultation_fee: consultation_fee.into(),
    }
}
