use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS};
use serde::{Deserialize, Serialize};

use crate::error::HandoffError;

/// The two-argument handoff passed from the doctor-detail surface to the
/// booking-confirmation surface: which doctor, which slot label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotSelection {
    pub doctor_name: String,
    pub time: String,
}

const ROUTE_PREFIX: &str = "booking/";

/// Characters that must be escaped inside a route segment. Doctor names carry
/// spaces and slot labels carry spaces and colons.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'/')
    .add(b'%')
    .add(b'?')
    .add(b'#');

impl SlotSelection {
    pub fn new(doctor_name: impl Into<String>, time: impl Into<String>) -> Self {
        Self {
            doctor_name: doctor_name.into(),
            time: time.into(),
        }
    }

    /// Encodes the selection as a `booking/{doctor}/{time}` route string.
    pub fn to_route(&self) -> String {
        format!(
            "{ROUTE_PREFIX}{}/{}",
            utf8_percent_encode(&self.doctor_name, SEGMENT),
            utf8_percent_encode(&self.time, SEGMENT)
        )
    }

    /// Parses a route string produced by [`SlotSelection::to_route`].
    pub fn parse_route(route: &str) -> Result<Self, HandoffError> {
        let rest = route
            .strip_prefix(ROUTE_PREFIX)
            .ok_or(HandoffError::MissingPrefix {
                expected: ROUTE_PREFIX,
            })?;

        let mut segments = rest.splitn(2, '/');
        let doctor_raw = match segments.next() {
            Some(segment) if !segment.is_empty() => segment,
            _ => return Err(HandoffError::MissingSegment("doctor name")),
        };
        let time_raw = match segments.next() {
            Some(segment) if !segment.is_empty() => segment,
            _ => return Err(HandoffError::MissingSegment("time slot")),
        };

        Ok(Self {
            doctor_name: decode_segment(doctor_raw)?,
            time: decode_segment(time_raw)?,
        })
    }
}

fn decode_segment(raw: &str) -> Result<String, HandoffError> {
    percent_decode_str(raw)
        .decode_utf8()
        .map(|decoded| decoded.into_owned())
        .map_err(|_| HandoffError::InvalidEncoding(raw.to_string()))
}
