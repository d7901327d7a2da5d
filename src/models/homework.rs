//! Homework payload structures.

use serde::{Deserialize, Serialize};

/// A single homework entry from the review API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HomeworkRecord {
    /// Homework display name
    pub homework_name: String,

    /// Review status code (validated against the catalog later)
    pub status: String,
}

/// Response body of the status endpoint.
///
/// The upstream orders `homeworks` newest-first and echoes the server
/// time in `current_date`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StatusResponse {
    /// Homework entries updated since the requested window
    #[serde(default)]
    pub homeworks: Vec<HomeworkRecord>,

    /// Server-side timestamp of the response
    #[serde(default)]
    pub current_date: Option<i64>,
}

impl StatusResponse {
    /// The most recent homework entry, if any.
    pub fn latest(&self) -> Option<&HomeworkRecord> {
        self.homeworks.first()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_full_payload() {
        let json = r#"{
            "homeworks": [
                {"status": "approved", "homework_name": "HW1", "id": 12, "lesson_name": "x"},
                {"status": "reviewing", "homework_name": "HW0"}
            ],
            "current_date": 1700000000
        }"#;

        let response: StatusResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.homeworks.len(), 2);
        assert_eq!(response.current_date, Some(1700000000));

        let latest = response.latest().unwrap();
        assert_eq!(latest.homework_name, "HW1");
        assert_eq!(latest.status, "approved");
    }

    #[test]
    fn deserialize_empty_payload() {
        let response: StatusResponse = serde_json::from_str(r#"{"homeworks": []}"#).unwrap();
        assert!(response.latest().is_none());
    }

    #[test]
    fn deserialize_missing_homeworks_key() {
        let response: StatusResponse = serde_json::from_str("{}").unwrap();
        assert!(response.homeworks.is_empty());
    }
}
