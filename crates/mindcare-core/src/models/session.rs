use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::recommendation::Recommendation;

/// Flags derived from one chat turn and the optional assessment behind it.
///
/// The default value is the conservative outcome: keep the session open and
/// surface nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SessionSignal {
    /// Any subscale at Severe or above. The caller owes the reporting
    /// recipient a notification when this is set.
    pub is_severe_case: bool,
    pub should_end_session: bool,
    /// A self-harm phrase was found in the message.
    pub crisis_detected: bool,
    pub recommendations: Vec<Recommendation>,
}
