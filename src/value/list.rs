/// Repeated text argument value.
use tracing::trace;

use super::{Value, ValueError, bracketed};

/// Append-only list of raw tokens, one per `set`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StringListValue(Vec<String>);

impl StringListValue {
    #[must_use]
    pub fn new(init: Vec<String>) -> Self {
        Self(init)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    #[must_use]
    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}

impl Value for StringListValue {
    fn set(&mut self, raw: &str) -> Result<(), ValueError> {
        trace!(raw, count = self.0.len() + 1, "appended string");
        self.0.push(raw.to_owned());
        Ok(())
    }

    fn format(&self) -> String {
        bracketed(&self.0)
    }

    fn accumulates(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_len_tracks_set_calls() {
        let mut v = StringListValue::default();
        for (i, raw) in ["x", "", "y z"].iter().enumerate() {
            v.set(raw).unwrap();
            assert_eq!(v.len(), i + 1);
        }
        assert_eq!(v.format(), "[x, , y z]");
    }

    #[test]
    fn test_appends_after_initial_items() {
        let mut v = StringListValue::new(vec!["seed".to_owned()]);
        v.set("next").unwrap();
        assert_eq!(v.into_inner(), ["seed", "next"]);
    }
}
