use super::*;
use shared::domain::AppointmentStatus;

#[test]
fn sample_session_starts_with_one_seeded_upcoming_appointment() {
    let session = BookingSession::with_sample_data();
    assert_eq!(session.appointments().len(), 1);

    let seeded = &session.appointments()[0];
    assert_eq!(seeded.id, "1".into());
    assert_eq!(seeded.status, AppointmentStatus::Upcoming);
}

#[test]
fn booking_a_slot_appends_an_upcoming_appointment() {
    let mut session = BookingSession::with_sample_data();
    let doctor = session.doctor(DoctorId(3)).expect("doctor 3").clone();
    let selection = session.select_slot(&doctor, "11:00 AM");

    let booked = session.confirm_booking(&selection);

    assert_eq!(session.appointments().len(), 2);
    let second = &session.appointments()[1];
    assert_eq!(second.id, booked.id);
    assert_eq!(second.status, AppointmentStatus::Upcoming);
    assert_eq!(second.doctor_name, "Dr. Nimal Perera");
    assert_eq!(second.doctor_specialty, "Cardiologist");
    assert_eq!(second.clinic, "Heart Clinic");
    assert_eq!(second.time, "11:00 AM");
    assert_eq!(second.date, session.booking_date());
}

#[test]
fn booked_appointments_get_distinct_random_ids() {
    let mut session = BookingSession::with_sample_data();
    let doctor = session.doctor(DoctorId(1)).expect("doctor 1").clone();
    let selection = session.select_slot(&doctor, "10:00 AM");

    let first = session.confirm_booking(&selection);
    let second = session.confirm_booking(&selection);

    assert_ne!(first.id, second.id);
    assert_ne!(first.id, "1".into());
}

#[test]
fn unknown_doctor_books_with_empty_specialty_and_clinic() {
    let mut session = BookingSession::with_sample_data();
    let selection = SlotSelection::new("Dr. Nobody", "04:00 PM");

    let booked = session.confirm_booking(&selection);

    assert_eq!(booked.doctor_name, "Dr. Nobody");
    assert_eq!(booked.doctor_specialty, "");
    assert_eq!(booked.clinic, "");
    assert_eq!(session.appointments().len(), 2);
}

#[test]
fn cancelling_keeps_the_appointment_listed() {
    let mut session = BookingSession::with_sample_data();
    let doctor = session.doctor(DoctorId(2)).expect("doctor 2").clone();
    let selection = session.select_slot(&doctor, "02:00 PM");
    session.confirm_booking(&selection);

    assert!(session.cancel_appointment(&"1".into()));

    assert_eq!(session.appointments().len(), 2);
    assert_eq!(
        session.appointments()[0].status,
        AppointmentStatus::Cancelled
    );
    let upcoming = session.upcoming();
    assert_eq!(upcoming.len(), 1);
    assert_eq!(upcoming[0].doctor_name, "Dr. Mohamed Fazir");
}

#[test]
fn cancelling_an_absent_id_changes_nothing() {
    let mut session = BookingSession::with_sample_data();
    assert!(!session.cancel_appointment(&"missing".into()));
    assert_eq!(session.appointments().len(), 1);
    assert_eq!(session.appointments()[0].status, AppointmentStatus::Upcoming);
}

#[test]
fn removal_shrinks_the_list() {
    let mut session = BookingSession::with_sample_data();
    let removed = session.remove_appointment(&"1".into()).expect("seeded id");
    assert_eq!(removed.id, "1".into());
    assert!(session.appointments().is_empty());
}

#[test]
fn slot_selection_round_trips_through_the_route_codec() {
    let session = BookingSession::with_sample_data();
    let doctor = session.doctor(DoctorId(1)).expect("doctor 1");
    let selection = session.select_slot(doctor, "10:00 AM");

    let parsed = SlotSelection::parse_route(&selection.to_route()).expect("route parses");
    assert_eq!(parsed, selection);
}

#[test]
fn booking_date_is_configurable() {
    let mut session = BookingSession::with_sample_data();
    session.set_booking_date("June 1, 2026");
    let selection = SlotSelection::new("Dr. Nimal Perera", "10:00 AM");

    let booked = session.confirm_booking(&selection);
    assert_eq!(booked.date, "June 1, 2026");
}

#[test]
fn default_patient_profile_is_minna() {
    let session = BookingSession::default();
    assert_eq!(session.patient().name, "Minna");
    assert_eq!(session.patient().email, "minna@example.com");
}
