//! Where reports go: one address map for HR and one for managers, keyed by
//! department, each with an optional `default` entry.

use std::collections::HashMap;
use std::path::Path;

use mindcare_core::models::user::ReportRecipient;
use serde::Deserialize;

use crate::error::NotifyError;

const DEFAULT_KEY: &str = "default";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipientDirectory {
    hr: HashMap<String, String>,
    manager: HashMap<String, String>,
}

#[derive(Deserialize)]
struct DirectoryFile {
    #[serde(default)]
    hr: HashMap<String, String>,
    #[serde(default)]
    manager: HashMap<String, String>,
}

fn normalize(map: HashMap<String, String>) -> HashMap<String, String> {
    map.into_iter()
        .map(|(department, address)| (department.trim().to_lowercase(), address))
        .collect()
}

impl RecipientDirectory {
    pub fn new(hr: HashMap<String, String>, manager: HashMap<String, String>) -> Self {
        Self {
            hr: normalize(hr),
            manager: normalize(manager),
        }
    }

    /// Every report, HR or manager, goes to one address.
    pub fn single(address: impl Into<String>) -> Self {
        let address = address.into();
        Self::new(
            HashMap::from([(DEFAULT_KEY.to_string(), address.clone())]),
            HashMap::from([(DEFAULT_KEY.to_string(), address)]),
        )
    }

    /// Parse `{"hr": {...}, "manager": {...}}`.
    pub fn from_json(json: &str) -> Result<Self, NotifyError> {
        let file: DirectoryFile =
            serde_json::from_str(json).map_err(|e| NotifyError::Directory(e.to_string()))?;
        Ok(Self::new(file.hr, file.manager))
    }

    pub fn from_path(path: &Path) -> Result<Self, NotifyError> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| NotifyError::Directory(format!("{}: {e}", path.display())))?;
        Self::from_json(&json)
    }

    pub fn is_empty(&self) -> bool {
        self.hr.is_empty() && self.manager.is_empty()
    }

    /// Department match is case-insensitive; unknown departments use `default`.
    pub fn recipient_for(
        &self,
        report_to: ReportRecipient,
        department: &str,
    ) -> Result<&str, NotifyError> {
        let map = match report_to {
            ReportRecipient::Hr => &self.hr,
            ReportRecipient::Manager => &self.manager,
        };

        map.get(&department.trim().to_lowercase())
            .or_else(|| map.get(DEFAULT_KEY))
            .map(String::as_str)
            .ok_or_else(|| NotifyError::NoRecipient {
                report_to: report_to.label(),
                department: department.to_string(),
            })
    }
}
