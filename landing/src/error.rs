//! Error types for configuration and form handling.

use thiserror::Error;

/// Why a form submission was not accepted.
///
/// Display strings are shown to the visitor under the form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Please fill in the {0} field.")]
    MissingField(&'static str),

    #[error("\"{0}\" is not a valid email address.")]
    InvalidEmail(String),

    #[error("Please agree to receive email communications first.")]
    ConsentRequired,

    #[error("Submission failed: {0}")]
    Rejected(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse site config: {0}")]
    Parse(#[from] toml::de::Error),
}
