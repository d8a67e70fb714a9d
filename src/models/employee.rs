use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::ValidationErrors;

use super::schema::FieldReader;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Employee {
    pub name: String,
    pub department: String,
    pub position: String,
    pub email: Option<String>,
}

impl Employee {
    pub fn from_payload(payload: &Value) -> Result<Self, ValidationErrors> {
        let mut reader = FieldReader::new(payload);
        let employee = Employee {
            name: reader.required_str("name"),
            department: reader.required_str("department"),
            position: reader.required_str("position"),
            email: reader.optional_str("email"),
        };
        reader.finish(employee)
    }
}
