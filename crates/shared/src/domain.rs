use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DoctorId(pub i64);

/// Opaque appointment identifier, unique within a store for the process
/// lifetime. Freshly booked appointments get a random UUID; seed data uses
/// short fixed strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AppointmentId(pub String);

impl AppointmentId {
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}

impl From<&str> for AppointmentId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for AppointmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentStatus {
    #[default]
    Upcoming,
    /// Declared for history filtering; no operation produces it yet.
    Completed,
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: AppointmentId,
    /// Display date string, e.g. "May 25, 2026".
    pub date: String,
    /// Display time string, e.g. "10:00 AM".
    pub time: String,
    pub doctor_name: String,
    pub doctor_specialty: String,
    pub clinic: String,
    pub status: AppointmentStatus,
    pub booked_at: DateTime<Utc>,
}

impl Appointment {
    /// New appointment in the default Upcoming state.
    pub fn new(
        id: AppointmentId,
        date: impl Into<String>,
        time: impl Into<String>,
        doctor_name: impl Into<String>,
        doctor_specialty: impl Into<String>,
        clinic: impl Into<String>,
    ) -> Self {
        Self {
            id,
            date: date.into(),
            time: time.into(),
            doctor_name: doctor_name.into(),
            doctor_specialty: doctor_specialty.into(),
            clinic: clinic.into(),
            status: AppointmentStatus::Upcoming,
            booked_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Doctor {
    pub id: DoctorId,
    pub name: String,
    pub specialty: String,
    pub clinic: String,
    /// Display string, e.g. "10+ Years".
    pub experience: String,
    /// Display string, e.g. "LKR 3,000".
    pub consultation_fee: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientProfile {
    pub name: String,
    pub email: String,
}

impl Default for PatientProfile {
    fn default() -> Self {
        Self {
            name: "Minna".into(),
            email: "minna@example.com".into(),
        }
    }
}
