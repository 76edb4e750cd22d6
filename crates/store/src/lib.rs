use shared::domain::{Appointment, AppointmentId, AppointmentStatus};
use tokio::sync::broadcast;
use tracing::debug;

/// Notification published on every store mutation. Presentation layers
/// subscribe and re-render whatever they are currently displaying.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    Added(AppointmentId),
    Cancelled(AppointmentId),
    Removed(AppointmentId),
}

/// Session-scoped holder of the appointment sequence. Owned by its session
/// and injected, never global.
///
/// Appointments keep insertion order. Cancellation is a status flip, never a
/// removal; removal exists as its own deliberately named operation.
pub struct AppointmentStore {
    appointments: Vec<Appointment>,
    events: broadcast::Sender<StoreEvent>,
}

impl AppointmentStore {
    pub fn new() -> Self {
        let (events, _) = broadcast::channel(64);
        Self {
            appointments: Vec::new(),
            events,
        }
    }

    /// Store pre-populated with a fixed seed list.
    pub fn with_seed(seed: Vec<Appointment>) -> Self {
        let mut store = Self::new();
        store.appointments = seed;
        store
    }

    /// Current sequence, insertion order.
    pub fn appointments(&self) -> &[Appointment] {
        &self.appointments
    }

    pub fn len(&self) -> usize {
        self.appointments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.appointments.is_empty()
    }

    pub fn find(&self, id: &AppointmentId) -> Option<&Appointment> {
        self.appointments.iter().find(|a| &a.id == id)
    }

    /// Appointments still in the Upcoming state, insertion order.
    pub fn upcoming(&self) -> impl Iterator<Item = &Appointment> {
        self.appointments
            .iter()
            .filter(|a| a.status == AppointmentStatus::Upcoming)
    }

    /// Appends to the end of the sequence. Duplicate identifiers are not
    /// rejected; callers that need uniqueness generate random ids.
    pub fn add(&mut self, appointment: Appointment) {
        debug!(id = %appointment.id, doctor = %appointment.doctor_name, "appointment added");
        let id = appointment.id.clone();
        self.appointments.push(appointment);
        self.publish(StoreEvent::Added(id));
    }

    /// Flips the matching appointment to Cancelled, preserving its position
    /// and every other field. Absent id is a silent no-op; returns whether
    /// anything changed.
    pub fn cancel(&mut self, id: &AppointmentId) -> bool {
        let Some(appointment) = self.appointments.iter_mut().find(|a| &a.id == id) else {
            debug!(%id, "cancel ignored, appointment not found");
            return false;
        };
        appointment.status = AppointmentStatus::Cancelled;
        debug!(%id, "appointment cancelled");
        self.publish(StoreEvent::Cancelled(id.clone()));
        true
    }

    /// Drops the matching appointment from the sequence entirely. This is
    /// not cancellation: cancelled appointments stay listed. Absent id is a
    /// silent no-op.
    pub fn remove(&mut self, id: &AppointmentId) -> Option<Appointment> {
        let index = self.appointments.iter().position(|a| &a.id == id)?;
        let removed = self.appointments.remove(index);
        debug!(%id, "appointment removed");
        self.publish(StoreEvent::Removed(removed.id.clone()));
        Some(removed)
    }

    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.events.subscribe()
    }

    fn publish(&self, event: StoreEvent) {
        // No subscribers is fine; the store does not require observers.
        let _ = self.events.send(event);
    }
}

impl Default for AppointmentStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
