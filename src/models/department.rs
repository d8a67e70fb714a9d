use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::ValidationErrors;

use super::schema::FieldReader;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Department {
    pub name: String,
    pub description: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    #[serde(default)]
    pub services: Vec<String>,
}

impl Department {
    pub fn from_payload(payload: &Value) -> Result<Self, ValidationErrors> {
        let mut reader = FieldReader::new(payload);
        let department = Department {
            name: reader.required_str("name"),
            description: reader.required_str("description"),
            email: reader.optional_str("email"),
            phone: reader.optional_str("phone"),
            address: reader.optional_str("address"),
            services: reader.str_list("services"),
        };
        reader.finish(department)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn services_default_to_empty() {
        let department = Department::from_payload(&json!({
            "name": "Department of Health",
            "description": "Hospitals and clinics",
        }))
        .unwrap();

        assert!(department.services.is_empty());
        assert_eq!(department.email, None);
    }

    #[test]
    fn reports_all_missing_fields() {
        let errors = Department::from_payload(&json!({ "phone": 12 })).unwrap_err();
        let fields = errors.field_errors();

        assert!(fields.contains_key("name"));
        assert!(fields.contains_key("description"));
        assert!(fields.contains_key("phone"));
    }
}
