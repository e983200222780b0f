use std::sync::Arc;

use mindcare_llm::chat::ChatProvider;
use mindcare_llm::groq::GroqClient;
use mindcare_notify::error::NotifyError;
use mindcare_notify::mailer::SmtpMailer;
use mindcare_notify::notifications::Notifier;
use mindcare_notify::recipients::RecipientDirectory;
use tracing::{info, warn};

use crate::config::AppConfig;

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub llm: Option<Arc<dyn ChatProvider>>,
    pub notifier: Option<Arc<Notifier>>,
    pub static_files: bool,
}

impl AppState {
    /// Wire the Groq client and SMTP mailer described by `config`.
    ///
    /// Must be called from within a tokio runtime.
    pub fn from_config(config: &AppConfig) -> Result<Self, NotifyError> {
        let llm = config.groq.as_ref().map(|groq| {
            Arc::new(GroqClient::new(
                groq.api_key.clone(),
                groq.model.clone(),
                groq.base_url.clone(),
            )) as Arc<dyn ChatProvider>
        });
        if llm.is_none() {
            warn!("GROQ_API_KEY not set; chat replies will use the fallback message");
        }

        let notifier = match &config.smtp {
            Some(smtp) => {
                let mailer = SmtpMailer::new(smtp)?;
                let directory = match &config.recipients_path {
                    Some(path) => RecipientDirectory::from_path(path)?,
                    None => {
                        let fallback = smtp
                            .sender
                            .clone()
                            .or_else(|| smtp.username.clone())
                            .unwrap_or_default();
                        info!("no recipient directory configured; reports go to the sender address");
                        RecipientDirectory::single(fallback)
                    }
                };
                Some(Arc::new(Notifier::new(Arc::new(mailer), directory)))
            }
            None => {
                warn!("SMTP not configured; alerts and session reports will not be sent");
                None
            }
        };

        Ok(Self {
            llm,
            notifier,
            static_files: config.static_dir.is_some(),
        })
    }
}
