use anyhow::{bail, Result};
use clap::Parser;
use directory::DoctorDirectory;
use session::BookingSession;
use shared::{
    domain::{DoctorId, PatientProfile},
    handoff::SlotSelection,
};
use store::AppointmentStore;
use tracing::info;

mod config;

use config::load_settings;

/// Walks the booking flow end to end: list upcoming appointments, pick a
/// doctor and a slot, confirm, then cancel the seeded appointment.
#[derive(Parser, Debug)]
struct Args {
    /// Doctor to book with (see the printed directory listing).
    #[arg(long, default_value_t = 1)]
    doctor_id: i64,
    /// Slot label, e.g. "11:00 AM". Defaults to the first available slot.
    #[arg(long)]
    slot: Option<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt().init();
    let args = Args::parse();
    let settings = load_settings();

    let mut session = if settings.seed_sample_data {
        BookingSession::with_sample_data()
    } else {
        BookingSession::new(DoctorDirectory::with_sample_data(), AppointmentStore::new())
    };
    session.set_patient(PatientProfile {
        name: settings.patient_name,
        email: settings.patient_email,
    });
    session.set_booking_date(settings.booking_date);

    println!("Welcome back, {}", session.patient().name);
    println!("Upcoming appointments:");
    for appointment in session.upcoming() {
        println!(
            "  {} with {} ({}) at {} on {}",
            appointment.id,
            appointment.doctor_name,
            appointment.doctor_specialty,
            appointment.time,
            appointment.date
        );
    }

    println!("Doctors:");
    for doctor in session.doctors() {
        println!(
            "  [{}] {} - {}, {} ({}, {})",
            doctor.id.0,
            doctor.name,
            doctor.specialty,
            doctor.clinic,
            doctor.experience,
            doctor.consultation_fee
        );
    }

    let Some(doctor) = session.doctor(DoctorId(args.doctor_id)).cloned() else {
        bail!("no doctor with id {}", args.doctor_id);
    };
    let slot = match args.slot {
        Some(slot) => slot,
        None => session.time_slots()[0].to_string(),
    };

    // Hand off through the route codec the same way the detail surface would.
    let route = session.select_slot(&doctor, &slot).to_route();
    info!(%route, "slot selected");
    let selection = SlotSelection::parse_route(&route)?;

    let booked = session.confirm_booking(&selection);
    println!("Booked: {}", serde_json::to_string_pretty(&booked)?);

    if session.cancel_appointment(&"1".into()) {
        println!("Cancelled seeded appointment 1");
    }

    println!("Final appointment list:");
    for appointment in session.appointments() {
        println!(
            "  {} {:?} {} at {}",
            appointment.id, appointment.status, appointment.doctor_name, appointment.time
        );
    }

    Ok(())
}
