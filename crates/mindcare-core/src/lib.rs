//! mindcare-core
//!
//! Pure domain types shared by every MindCare crate: subscales, severity
//! levels, assessment results, recommendations, session signals, and the
//! user and transcript records carried by reports. No I/O.

pub mod error;
pub mod models;
