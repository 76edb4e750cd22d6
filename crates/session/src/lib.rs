use directory::DoctorDirectory;
use shared::{
    domain::{Appointment, AppointmentId, Doctor, DoctorId, PatientProfile},
    handoff::SlotSelection,
};
use store::{AppointmentStore, StoreEvent};
use tokio::sync::broadcast;
use tracing::info;

/// Date stamped onto confirmed bookings. The prototype has no calendar; every
/// new booking lands on the same display date.
const DEFAULT_BOOKING_DATE: &str = "May 30, 2026";

/// Facade over the doctor directory and the appointment store for one user
/// session. Owns both; constructed fresh per session (and per test).
pub struct BookingSession {
    directory: DoctorDirectory,
    store: AppointmentStore,
    patient: PatientProfile,
    booking_date: String,
}

impl BookingSession {
    pub fn new(directory: DoctorDirectory, store: AppointmentStore) -> Self {
        Self {
            directory,
            store,
            patient: PatientProfile::default(),
            booking_date: DEFAULT_BOOKING_DATE.into(),
        }
    }

    /// Session backed by the fixed sample tables: three doctors, one seeded
    /// upcoming appointment.
    pub fn with_sample_data() -> Self {
        Self::new(
            DoctorDirectory::with_sample_data(),
            AppointmentStore::with_seed(directory::sample_appointments()),
        )
    }

    pub fn patient(&self) -> &PatientProfile {
        &self.patient
    }

    pub fn set_patient(&mut self, patient: PatientProfile) {
        self.patient = patient;
    }

    pub fn booking_date(&self) -> &str {
        &self.booking_date
    }

    pub fn set_booking_date(&mut self, date: impl Into<String>) {
        self.booking_date = date.into();
    }

    pub fn doctors(&self) -> &[Doctor] {
        self.directory.doctors()
    }

    pub fn doctor(&self, id: DoctorId) -> Option<&Doctor> {
        self.directory.find_by_id(id)
    }

    pub fn time_slots(&self) -> &'static [&'static str] {
        self.directory.time_slots()
    }

    pub fn appointments(&self) -> &[Appointment] {
        self.store.appointments()
    }

    /// Appointments still upcoming, for the home listing.
    pub fn upcoming(&self) -> Vec<&Appointment> {
        self.store.upcoming().collect()
    }

    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.store.subscribe()
    }

    /// Builds the handoff carried from the doctor-detail surface to the
    /// booking confirmation.
    pub fn select_slot(&self, doctor: &Doctor, time: &str) -> SlotSelection {
        SlotSelection::new(doctor.name.clone(), time)
    }

    /// Confirms a slot selection: creates the appointment with a fresh
    /// random id and appends it to the store.
    ///
    /// Specialty and clinic come from the directory when the doctor is
    /// known; an unknown doctor books with those fields empty rather than
    /// failing, matching the fail-silent prototype behavior.
    pub fn confirm_booking(&mut self, selection: &SlotSelection) -> Appointment {
        let matched = self.directory.find_by_name(&selection.doctor_name);
        let specialty = matched.map(|d| d.specialty.clone()).unwrap_or_default();
        let clinic = matched.map(|d| d.clinic.clone()).unwrap_or_default();

        let appointment = Appointment::new(
            AppointmentId::random(),
            self.booking_date.clone(),
            selection.time.clone(),
            selection.doctor_name.clone(),
            specialty,
            clinic,
        );

        info!(
            id = %appointment.id,
            doctor = %appointment.doctor_name,
            time = %appointment.time,
            "booking confirmed"
        );
        self.store.add(appointment.clone());
        appointment
    }

    /// Cancels by status transition. The appointment stays in the list so
    /// history filtering keeps working.
    pub fn cancel_appointment(&mut self, id: &AppointmentId) -> bool {
        let cancelled = self.store.cancel(id);
        if cancelled {
            info!(%id, "appointment cancelled");
        }
        cancelled
    }

    /// Removes the appointment from the list entirely. Distinct from
    /// cancellation on purpose; nothing in the booking flow calls this.
    pub fn remove_appointment(&mut self, id: &AppointmentId) -> Option<Appointment> {
        self.store.remove(id)
    }
}

impl Default for BookingSession {
    fn default() -> Self {
        Self::with_sample_data()
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
