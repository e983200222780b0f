//! mindcare-triage
//!
//! Session-level decisions derived from an assessment and the user's latest
//! message: crisis detection, session termination, and which
//! recommendations to surface. Pure functions over in-memory values; the
//! only shared state is the read-only recommendation catalog.

pub mod analytics;
pub mod catalog;
pub mod crisis;
pub mod error;
pub mod recommend;
