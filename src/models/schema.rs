use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde_json::{Map, Value};
use validator::{ValidationError, ValidationErrors};

pub struct FieldReader<'a> {
    fields: Option<&'a Map<String, Value>>,
    errors: ValidationErrors,
}

fn field_error(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(message.into());
    error
}

// naive values are taken as UTC
pub fn parse_datetime(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

impl<'a> FieldReader<'a> {
    pub fn new(payload: &'a Value) -> Self {
        let mut errors = ValidationErrors::new();
        let fields = payload.as_object();
        if fields.is_none() {
            errors.add("__all__", field_error("type", "payload must be a JSON object"));
        }

        Self { fields, errors }
    }

    fn value(&self, field: &str) -> Option<&'a Value> {
        self.fields
            .and_then(|fields| fields.get(field))
            .filter(|value| !value.is_null())
    }

    fn missing(&mut self, field: &'static str) {
        if self.fields.is_some() {
            self.errors.add(field, field_error("required", "field is required"));
        }
    }

    pub fn optional_str(&mut self, field: &'static str) -> Option<String> {
        match self.value(field)? {
            Value::String(s) => Some(s.clone()),
            _ => {
                self.errors.add(field, field_error("type", "expected a string"));
                None
            }
        }
    }

    pub fn required_str(&mut self, field: &'static str) -> String {
        if self.value(field).is_none() {
            self.missing(field);
            return String::new();
        }
        self.optional_str(field).unwrap_or_default()
    }

    pub fn optional_datetime(&mut self, field: &'static str) -> Option<DateTime<Utc>> {
        match self.value(field)? {
            Value::String(raw) => match parse_datetime(raw) {
                Some(parsed) => Some(parsed),
                None => {
                    self.errors.add(field, field_error("datetime", "malformed date or date-time"));
                    None
                }
            },
            _ => {
                self.errors.add(field, field_error("type", "expected a date string"));
                None
            }
        }
    }

    pub fn required_datetime(&mut self, field: &'static str) -> DateTime<Utc> {
        if self.value(field).is_none() {
            self.missing(field);
            return DateTime::<Utc>::default();
        }
        self.optional_datetime(field).unwrap_or_default()
    }

    /// Absent or null reads as an empty list.
    pub fn str_list(&mut self, field: &'static str) -> Vec<String> {
        let Some(value) = self.value(field) else {
            return Vec::new();
        };

        match value.as_array() {
            Some(items) if items.iter().all(Value::is_string) => items
                .iter()
                .filter_map(|item| item.as_str().map(str::to_string))
                .collect(),
            _ => {
                self.errors.add(field, field_error("type", "expected a list of strings"));
                Vec::new()
            }
        }
    }

    pub fn finish<T>(self, record: T) -> Result<T, ValidationErrors> {
        if self.errors.is_empty() {
            Ok(record)
        } else {
            Err(self.errors)
        }
    }
}
