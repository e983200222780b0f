//! mindcare-export
//!
//! Session reports: Tera rendering of the report and email templates, and
//! DOCX generation from the rendered report.

pub mod docx;
pub mod error;
pub mod render;
pub mod report;
pub mod styles;
