/// Typed argument values: the parse/format contract and its concrete kinds.
pub mod errors;
pub mod file;
pub mod list;
pub mod scalar;

pub use errors::{FormatError, ValueError};
pub use file::{CreateValue, OpenListValue, OpenValue, OpenedFile};
pub use list::StringListValue;
pub use scalar::{BoolValue, FloatValue, IntValue, StringValue};

/// A mutable cell holding one typed datum.
///
/// `set` is called once per matched token. Single-valued kinds replace
/// their datum; accumulating kinds append to it.
pub trait Value {
    /// Coerce `raw` into the cell.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::Format` when `raw` is not valid for the kind, or
    /// `ValueError::Io` when a file-backed kind cannot open its file. The cell
    /// is left untouched on failure.
    fn set(&mut self, raw: &str) -> Result<(), ValueError>;

    /// Display form of the current datum. Never fails.
    fn format(&self) -> String;

    /// Whether a flag bound to this value takes no argument token.
    fn is_switch(&self) -> bool {
        false
    }

    /// Whether `set` appends instead of replacing.
    fn accumulates(&self) -> bool {
        false
    }
}

/// Render items as `[a, b, c]`.
pub(crate) fn bracketed<I, S>(items: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let joined: Vec<String> = items.into_iter().map(|s| s.as_ref().to_owned()).collect();
    format!("[{}]", joined.join(", "))
}
