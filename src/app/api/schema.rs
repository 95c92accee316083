use serde::Serialize;

use crate::app::delivery::Receipt;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionResponse {
    pub success: bool,
    pub message: String,
    pub test_mode: bool,
    pub recipient_email: String,
}

impl SubmissionResponse {
    pub fn delivered(message: &str, receipt: Receipt) -> Self {
        Self {
            success: true,
            message: message.to_owned(),
            test_mode: receipt.test_mode,
            recipient_email: receipt.recipient.to_string(),
        }
    }
}
