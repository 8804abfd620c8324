use std::fmt;

/// Error returned when a raw API document cannot be turned into an [`ApiDocument`].
///
/// The route extraction itself never fails; these errors only surface from the
/// decoding entry points that accept untyped JSON/YAML input.
///
/// [`ApiDocument`]: crate::spec::ApiDocument
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractError {
    /// The document does not have the shape route extraction requires
    ///
    /// Raised when the document root is not a mapping, or when `paths` is
    /// missing or is not a mapping.
    InvalidInput {
        /// What was wrong with the input
        reason: String,
    },
    /// The document text could not be decoded
    Parse {
        /// Source format (`json`, `yaml` or `value`)
        format: &'static str,
        /// Decoder message
        message: String,
    },
}

impl ExtractError {
    pub(crate) fn invalid_input(reason: impl Into<String>) -> Self {
        ExtractError::InvalidInput {
            reason: reason.into(),
        }
    }

    pub(crate) fn parse(format: &'static str, err: impl fmt::Display) -> Self {
        ExtractError::Parse {
            format,
            message: err.to_string(),
        }
    }
}

impl fmt::Display for ExtractError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractError::InvalidInput { reason } => {
                write!(f, "Invalid API document: {}", reason)
            }
            ExtractError::Parse { format, message } => {
                write!(f, "Failed to decode API document ({}): {}", format, message)
            }
        }
    }
}

impl std::error::Error for ExtractError {}
