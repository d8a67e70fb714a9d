use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::ValidationErrors;

use super::{schema::FieldReader, Dated};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct News {
    pub title: String,
    pub body: String,
    pub department: Option<String>,
    /// Filled with the submission time by the admin handler when absent.
    pub published_at: Option<DateTime<Utc>>,
}

impl News {
    pub fn from_payload(payload: &Value) -> Result<Self, ValidationErrors> {
        let mut reader = FieldReader::new(payload);
        let news = News {
            title: reader.required_str("title"),
            body: reader.required_str("body"),
            department: reader.optional_str("department"),
            published_at: reader.optional_datetime("published_at"),
        };
        reader.finish(news)
    }
}

impl Dated for News {
    fn sort_date(&self) -> Option<DateTime<Utc>> {
        self.published_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn published_at_is_left_unset() {
        let news = News::from_payload(&json!({ "title": "Budget", "body": "Passed" })).unwrap();
        assert_eq!(news.published_at, None);
    }

    #[test]
    fn rejects_malformed_published_at() {
        let errors = News::from_payload(&json!({
            "title": "Budget",
            "body": "Passed",
            "published_at": "last tuesday",
        }))
        .unwrap_err();

        assert_eq!(errors.field_errors()["published_at"][0].code, "datetime");
    }
}
