/// Result type for URL building operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Type of errors raised while substituting path template placeholders.
///
/// Query parameters never error: any shape not consumed by a placeholder is
/// handed to the query string layer, which encodes it by its own rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A template placeholder had no matching key in the parameter bag.
    MissingParam(String),
    /// A path parameter was not a boolean, string or number.
    InvalidParamType {
        key: String,
        actual: &'static str,
    },
    /// A path parameter was an empty (or all-whitespace) string. Empty
    /// segments are disallowed, they would silently collapse the path shape.
    EmptyStringParam(String),
}

impl std::error::Error for Error {}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingParam(key) => {
                write!(f, "missing value for path parameter {key}")
            }
            Self::InvalidParamType { key, actual } => write!(
                f,
                "path parameter {key} cannot be of type {actual}; \
                 allowed types are: boolean, string, number"
            ),
            Self::EmptyStringParam(key) => {
                write!(f, "path parameter {key} cannot be an empty string")
            }
        }
    }
}
