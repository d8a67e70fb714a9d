use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::ValidationErrors;

use super::{schema::FieldReader, Dated};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Event {
    pub title: String,
    pub description: String,
    pub location: String,
    pub start_date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
    pub department: Option<String>,
}

impl Event {
    pub fn from_payload(payload: &Value) -> Result<Self, ValidationErrors> {
        let mut reader = FieldReader::new(payload);
        let event = Event {
            title: reader.required_str("title"),
            description: reader.required_str("description"),
            location: reader.required_str("location"),
            start_date: reader.required_datetime("start_date"),
            end_date: reader.optional_datetime("end_date"),
            department: reader.optional_str("department"),
        };
        reader.finish(event)
    }
}

impl Dated for Event {
    fn sort_date(&self) -> Option<DateTime<Utc>> {
        Some(self.start_date)
    }
}
