//! Catalog of documented review statuses.

use crate::error::{AppError, Result};

/// A documented homework review status.
///
/// The upstream API documents exactly these three codes; anything else
/// means the contract drifted and must surface as an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewStatus {
    Approved,
    Reviewing,
    Rejected,
}

impl ReviewStatus {
    /// All documented status codes.
    pub const CODES: [&'static str; 3] = ["approved", "reviewing", "rejected"];

    /// Parse an upstream status code.
    pub fn parse(code: &str) -> Result<Self> {
        match code {
            "approved" => Ok(Self::Approved),
            "reviewing" => Ok(Self::Reviewing),
            "rejected" => Ok(Self::Rejected),
            other => Err(AppError::UndocumentedStatus(other.to_string())),
        }
    }

    /// The upstream code for this status.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Approved => "approved",
            Self::Reviewing => "reviewing",
            Self::Rejected => "rejected",
        }
    }

    /// Human-readable verdict text shown to the user.
    pub fn verdict(&self) -> &'static str {
        match self {
            Self::Approved => "Работа проверена: ревьюеру всё понравилось. Ура!",
            Self::Reviewing => "Работа взята на проверку ревьюером.",
            Self::Rejected => "Работа проверена, в ней нашлись ошибки.",
        }
    }
}
