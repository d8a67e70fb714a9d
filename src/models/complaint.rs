use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::ValidationErrors;

use super::schema::FieldReader;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Complaint {
    pub name: String,
    pub email: Option<String>,
    pub subject: String,
    pub message: String,
    pub department: Option<String>,
}

impl Complaint {
    pub fn from_payload(payload: &Value) -> Result<Self, ValidationErrors> {
        let mut reader = FieldReader::new(payload);
        let complaint = Complaint {
            name: reader.required_str("name"),
            email: reader.optional_str("email"),
            subject: reader.required_str("subject"),
            message: reader.required_str("message"),
            department: reader.optional_str("department"),
        };
        reader.finish(complaint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn department_reference_is_free_text() {
        let complaint = Complaint::from_payload(&json!({
            "name": "A",
            "subject": "Roads",
            "message": "Pothole",
            "department": "No Such Department",
        }))
        .unwrap();

        assert_eq!(complaint.department.as_deref(), Some("No Such Department"));
    }
}
