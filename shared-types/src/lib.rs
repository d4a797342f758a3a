use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Identifier assigned by the booking API. The API may send it as a JSON
/// number or a string; it is always carried as text on our side.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct BookingId(String);

impl BookingId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BookingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawBookingId {
    Signed(i64),
    Unsigned(u64),
    Text(String),
}

impl<'de> Deserialize<'de> for BookingId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match RawBookingId::deserialize(deserializer)? {
            RawBookingId::Signed(n) => BookingId(n.to_string()),
            RawBookingId::Unsigned(n) => BookingId(n.to_string()),
            RawBookingId::Text(s) => BookingId(s),
        })
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Booking {
    pub id: BookingId,
    pub service: String,
    pub doctor_name: String,
    pub start_time: String,
    pub end_time: String,
    pub date: String,
}

/// Payload for `POST /api/bookings`. Field values are sent exactly as typed.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
pub struct NewBooking {
    pub service: String,
    pub doctor_name: String,
    pub start_time: String,
    pub end_time: String,
    pub date: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn booking_accepts_numeric_and_text_ids() {
        let numeric: Booking = serde_json::from_value(json!({
            "id": 1,
            "service": "Cleaning",
            "doctor_name": "Dr. A",
            "start_time": "09:00",
            "end_time": "09:30",
            "date": "2024-01-01"
        }))
        .expect("numeric id should decode");
        assert_eq!(numeric.id.as_str(), "1");

        let text: Booking = serde_json::from_value(json!({
            "id": "65f1c0ffee",
            "service": "Checkup",
            "doctor_name": "Dr. B",
            "start_time": "10:00",
            "end_time": "10:15",
            "date": "2024-02-02",
            "created_at": "2024-01-15T08:00:00Z"
        }))
        .expect("text id and unknown fields should decode");
        assert_eq!(text.id.to_string(), "65f1c0ffee");
    }

    #[test]
    fn new_booking_serializes_exactly_five_fields() {
        let payload = NewBooking {
            service: "Cleaning".to_string(),
            doctor_name: "Dr. A".to_string(),
            start_time: "09:00".to_string(),
            end_time: "09:30".to_string(),
            date: "2024-01-01".to_string(),
        };

        let value = serde_json::to_value(&payload).expect("payload should serialize");
        assert_eq!(
            value,
            json!({
                "service": "Cleaning",
                "doctor_name": "Dr. A",
                "start_time": "09:00",
                "end_time": "09:30",
                "date": "2024-01-01"
            })
        );
    }
}
