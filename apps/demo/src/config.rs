use std::{collections::HashMap, fs};

#[derive(Debug)]
pub struct Settings {
    pub patient_name: String,
    pub patient_email: String,
    pub booking_date: String,
    pub seed_sample_data: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            patient_name: "Minna".into(),
            patient_email: "minna@example.com".into(),
            booking_date: "May 30, 2026".into(),
            seed_sample_data: true,
        }
    }
}

pub fn load_settings() -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string("medislot.toml") {
        if let Ok(file_cfg) = toml::from_str::<HashMap<String, String>>(&raw) {
            if let Some(v) = file_cfg.get("patient_name") {
                settings.patient_name = v.clone();
            }
            if let Some(v) = file_cfg.get("patient_email") {
                settings.patient_email = v.clone();
            }
            if let Some(v) = file_cfg.get("booking_date") {
                settings.booking_date = v.clone();
            }
            if let Some(v) = file_cfg.get("seed_sample_data") {
                if let Ok(parsed) = v.parse::<bool>() {
                    settings.seed_sample_data = parsed;
                }
            }
        }
    }

    if let Ok(v) = std::env::var("MEDISLOT_PATIENT_NAME") {
        settings.patient_name = v;
    }
    if let Ok(v) = std::env::var("MEDISLOT_PATIENT_EMAIL") {
        settings.patient_email = v;
    }
    if let Ok(v) = std::env::var("MEDISLOT_BOOKING_DATE") {
        settings.booking_date = v;
    }
    if let Ok(v) = std::env::var("MEDISLOT_SEED_SAMPLE_DATA") {
        if let Ok(parsed) = v.parse::<bool>() {
            settings.seed_sample_data = parsed;
        }
    }

    settings
}
