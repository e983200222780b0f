use std::collections::HashMap;
use std::path::PathBuf;

use mindcare_api::config::{AllowedOrigins, AppConfig, LogFormat};
use mindcare_api::error::ConfigError;

fn config_from(pairs: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    AppConfig::from_lookup(|key| vars.get(key).cloned())
}

#[test]
fn defaults_without_environment() {
    let config = config_from(&[]).unwrap();
    assert_eq!(config.host, "0.0.0.0");
    assert_eq!(config.port, 8000);
    assert_eq!(config.allowed_origins, AllowedOrigins::Any);
    assert_eq!(config.log_format, LogFormat::Json);
    assert!(config.groq.is_none());
    assert!(config.smtp.is_none());
    assert!(config.static_dir.is_none());
}

#[test]
fn reads_collaborator_settings() {
    let config = config_from(&[
        ("PORT", "9090"),
        ("GROQ_API_KEY", "gsk_test"),
        ("GROQ_MODEL", "llama-3.1-8b-instant"),
        ("SMTP_USERNAME", "bot@example.com"),
        ("SMTP_PASSWORD", "secret"),
        ("MINDCARE_RECIPIENTS", "/etc/mindcare/recipients.json"),
        ("MINDCARE_STATIC_DIR", "./public"),
        ("MINDCARE_LOG_FORMAT", "Pretty"),
    ])
    .unwrap();

    assert_eq!(config.port, 9090);
    let groq = config.groq.unwrap();
    assert_eq!(groq.api_key, "gsk_test");
    assert_eq!(groq.model.as_deref(), Some("llama-3.1-8b-instant"));
    assert_eq!(groq.base_url, None);

    let smtp = config.smtp.unwrap();
    assert_eq!(smtp.server, "smtp.gmail.com");
    assert_eq!(smtp.port, 587);
    assert_eq!(smtp.username.as_deref(), Some("bot@example.com"));

    assert_eq!(
        config.recipients_path,
        Some(PathBuf::from("/etc/mindcare/recipients.json"))
    );
    assert_eq!(config.static_dir, Some(PathBuf::from("./public")));
    assert_eq!(config.log_format, LogFormat::Pretty);
}

#[test]
fn empty_values_count_as_unset() {
    let config = config_from(&[("GROQ_API_KEY", "  "), ("PORT", "")]).unwrap();
    assert!(config.groq.is_none());
    assert_eq!(config.port, 8000);
}

#[test]
fn origin_list_is_parsed() {
    let config = config_from(&[(
        "ALLOWED_ORIGINS",
        "https://care.example.com, http://localhost:3000",
    )])
    .unwrap();
    match config.allowed_origins {
        AllowedOrigins::List(list) => {
            assert_eq!(list.len(), 2);
            assert_eq!(list[1], "http://localhost:3000");
        }
        AllowedOrigins::Any => panic!("expected an explicit origin list"),
    }
}

#[test]
fn invalid_numbers_are_errors() {
    let err = config_from(&[("PORT", "eighty")]).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { key: "PORT", .. }));

    let err = config_from(&[("SMTP_USERNAME", "a@b.c"), ("SMTP_PORT", "70000")]).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { key: "SMTP_PORT", .. }));
}

#[test]
fn unknown_log_format_is_an_error() {
    let err = config_from(&[("MINDCARE_LOG_FORMAT", "xml")]).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { key: "MINDCARE_LOG_FORMAT", .. }));
}
