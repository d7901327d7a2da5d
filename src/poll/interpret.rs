// src/poll/interpret.rs

//! Poll response interpretation.
//!
//! Extracts the most recent homework record, validates its status against
//! the catalog, and renders the user-visible notification.

use crate::error::Result;
use crate::models::{HomeworkRecord, ReviewStatus, StatusResponse};

/// The most recent homework record in a poll response.
///
/// The upstream orders `homeworks` newest-first; `None` means nothing
/// changed inside the requested window.
pub fn extract(response: &StatusResponse) -> Option<&HomeworkRecord> {
    response.latest()
}

/// Validate a record's status against the catalog.
///
/// Returns the verdict text. An undocumented status is an upstream
/// contract change and fails the cycle.
pub fn validate(record: &HomeworkRecord) -> Result<&'static str> {
    match ReviewStatus::parse(&record.status) {
        Ok(status) => Ok(status.verdict()),
        Err(error) => {
            log::error!(
                "Undocumented homework status for \"{}\": {}",
                record.homework_name,
                record.status
            );
            Err(error)
        }
    }
}

/// Render the notification message for a record and its verdict.
pub fn render(record: &HomeworkRecord, verdict: &str) -> String {
    format!(
        "Изменился статус проверки работы \"{}\". {}",
        record.homework_name, verdict
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, status: &str) -> HomeworkRecord {
        HomeworkRecord {
            homework_name: name.to_string(),
            status: status.to_string(),
        }
    }

    #[test]
    fn extract_returns_first_record() {
        let response = StatusResponse {
            homeworks: vec![record("new", "approved"), record("old", "rejected")],
            current_date: None,
        };
        assert_eq!(extract(&response).unwrap().homework_name, "new");
    }

    #[test]
    fn extract_returns_none_for_empty() {
        assert!(extract(&StatusResponse::default()).is_none());
    }

    #[test]
    fn validate_returns_verdict_for_documented_status() {
        let verdict = validate(&record("HW1", "reviewing")).unwrap();
        assert_eq!(verdict, "Работа взята на проверку ревьюером.");
    }

    #[test]
    fn validate_fails_on_undocumented_status() {
        let err = validate(&record("HW1", "done")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Undocumented homework status: done"
        );
    }

    #[test]
    fn render_approved_matches_template_exactly() {
        let record = record("HW1", "approved");
        let verdict = validate(&record).unwrap();
        assert_eq!(
            render(&record, verdict),
            "Изменился статус проверки работы \"HW1\". \
             Работа проверена: ревьюеру всё понравилось. Ура!"
        );
    }

    #[test]
    fn render_rejected_matches_template_exactly() {
        let record = record("Project X", "rejected");
        let verdict = validate(&record).unwrap();
        assert_eq!(
            render(&record, verdict),
            "Изменился статус проверки работы \"Project X\". \
             Работа проверена, в ней нашлись ошибки."
        );
    }
}
