use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Who receives the reports generated for a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum ReportRecipient {
    #[serde(alias = "HR")]
    Hr,
    Manager,
}

impl ReportRecipient {
    pub fn label(self) -> &'static str {
        match self {
            ReportRecipient::Hr => "HR Department",
            ReportRecipient::Manager => "Department Manager",
        }
    }
}

/// Identifying details submitted alongside an assessment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct UserInfo {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub age: u32,
    pub gender: String,
    pub department: String,
    pub report_to: ReportRecipient,
}

impl UserInfo {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
