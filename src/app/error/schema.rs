use serde::Serialize;

use crate::domain::validation::FieldError;

#[derive(Serialize)]
pub struct Error {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<ErrorDetails>>,
    #[serde(rename = "testMode", skip_serializing_if = "Option::is_none")]
    pub test_mode: Option<bool>,
}

#[derive(Serialize)]
pub struct ErrorDetails {
    pub field: String,
    pub message: String,
}

impl From<&FieldError> for ErrorDetails {
    fn from(value: &FieldError) -> Self {
        Self {
            field: value.field.to_owned(),
            message: value.message.clone(),
        }
    }
}
