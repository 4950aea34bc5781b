//! Form field validation errors.

use thiserror::Error;

/// Field-local validation failure. Rendered inline under the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[allow(missing_docs)]
pub enum ValidationError {
    #[error("field is required")]
    Required,

    #[error("field has an invalid format")]
    Format,

    #[error("field must be at least {min} characters long")]
    TooShort { min: usize },
}
