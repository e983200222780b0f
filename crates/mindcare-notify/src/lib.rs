//! mindcare-notify
//!
//! Email delivery of severe-case alerts and session reports to the HR or
//! manager address chosen by the user.

pub mod error;
pub mod mailer;
pub mod notifications;
pub mod recipients;
