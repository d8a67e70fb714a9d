use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::ValidationErrors;

use super::{schema::FieldReader, Dated};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Vacancy {
    pub title: String,
    pub department: String,
    pub description: String,
    pub location: String,
    pub closing_date: DateTime<Utc>,
}

impl Vacancy {
    pub fn from_payload(payload: &Value) -> Result<Self, ValidationErrors> {
        let mut reader = FieldReader::new(payload);
        let vacancy = Vacancy {
            title: reader.required_str("title"),
            department: reader.required_str("department"),
            description: reader.required_str("description"),
            location: reader.required_str("location"),
            closing_date: reader.required_datetime("closing_date"),
        };
        reader.finish(vacancy)
    }
}

impl Dated for Vacancy {
    fn sort_date(&self) -> Option<DateTime<Utc>> {
        Some(self.closing_date)
    }
}
