use thiserror::Error;

/// A mandatory text field was empty or whitespace only
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("must not be blank")]
pub struct BlankFieldError;

impl BlankFieldError {
    /// Trim `value`, rejecting it when nothing is left.
    pub fn check(value: String) -> Result<String, Self> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            Err(BlankFieldError)
        } else if trimmed.len() == value.len() {
            Ok(value)
        } else {
            Ok(trimmed.to_string())
        }
    }
}
