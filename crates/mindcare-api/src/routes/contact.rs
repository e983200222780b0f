use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::audit::AuditEvent;
use crate::error::ApiError;
use crate::routes::timestamp;

#[derive(Deserialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Serialize)]
pub struct ContactResponse {
    success: bool,
    message: &'static str,
    timestamp: String,
}

pub async fn contact(Json(req): Json<ContactRequest>) -> Result<Json<ContactResponse>, ApiError> {
    if req.name.trim().is_empty() || req.message.trim().is_empty() {
        return Err(ApiError::BadRequest("name and message are required".to_string()));
    }
    if !is_plausible_email(&req.email) {
        return Err(ApiError::BadRequest(format!("invalid email address: {}", req.email)));
    }

    info!(message_chars = req.message.chars().count(), "contact form submission");
    AuditEvent::new("contact_submitted", "contact", req.email.trim()).emit();

    Ok(Json(ContactResponse {
        success: true,
        message: "Thank you for your message. We'll get back to you soon!",
        timestamp: timestamp(),
    }))
}

fn is_plausible_email(email: &str) -> bool {
    let email = email.trim();
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !email.contains(' ')
        }
        None => false,
    }
}
