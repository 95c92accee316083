use unicode_segmentation::UnicodeSegmentation;

/// A single failed field of a form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// Every field-level failure found while parsing one form.
#[derive(Debug, Default, thiserror::Error)]
#[error("{} field(s) failed validation", .0.len())]
pub struct FieldErrors(Vec<FieldError>);

impl FieldErrors {
    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.push(FieldError {
            field,
            message: message.into(),
        });
    }

    /// Records the error of `result` under `field` and hands back the parsed value, if any.
    pub fn check<T>(&mut self, field: &'static str, result: Result<T, String>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(message) => {
                self.push(field, message);
                None
            }
        }
    }

    /// Like [`FieldErrors::check`] for fields that may be left out.
    pub fn check_optional<T>(
        &mut self,
        field: &'static str,
        result: Option<Result<T, String>>,
    ) -> Option<T> {
        result.and_then(|r| self.check(field, r))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.iter().any(|e| e.field == field)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    /// `Ok(value)` when nothing was recorded.
    pub fn into_result<T>(self, value: Option<T>) -> Result<T, Self> {
        match value {
            Some(value) if self.is_empty() => Ok(value),
            _ => Err(self),
        }
    }
}

/// Trims a present value, rejecting absent or blank ones.
pub fn required(value: Option<String>) -> Result<String, String> {
    match value.map(|v| v.trim().to_owned()) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err("is required".into()),
    }
}

/// Trims a present value, turning blank ones into `None`.
pub fn optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}

pub fn min_length(value: String, min: usize) -> Result<String, String> {
    if value.graphemes(true).count() < min {
        Err(format!("must be at least {} characters", min))
    } else {
        Ok(value)
    }
}

/// `required` followed by `min_length`.
pub fn required_text(value: Option<String>, min: usize) -> Result<String, String> {
    required(value).and_then(|v| min_length(v, min))
}
