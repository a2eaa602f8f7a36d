/// Errors from the value layer.
use thiserror::Error;

/// Raw text could not be coerced to a value's target type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("`{input}` cannot be interpreted as {kind}")]
pub struct FormatError {
    /// The offending input, verbatim.
    pub input: String,
    /// Target type name (`bool`, `i64`, `f64`).
    pub kind: &'static str,
}

impl FormatError {
    #[must_use]
    pub fn new(input: &str, kind: &'static str) -> Self {
        Self {
            input: input.to_owned(),
            kind,
        }
    }
}

/// Typed errors from `Value::set`.
#[derive(Debug, Error)]
pub enum ValueError {
    /// Type coercion failed.
    #[error(transparent)]
    Format(#[from] FormatError),

    /// A file-backed value could not open or create its file.
    /// The platform message is passed through unchanged.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
