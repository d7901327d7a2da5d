// src/utils/mod.rs

//! Utility functions and helpers.

pub mod http;

use chrono::Utc;

/// Current Unix timestamp in seconds.
pub fn now_ts() -> i64 {
    Utc::now().timestamp()
}
