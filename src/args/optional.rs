/// Flag-style arguments: `-s VALUE`, `--long VALUE`, `--long=VALUE`.
use tracing::trace;

use crate::command::{CommandError, is_help_token};
use crate::value::Value;

/// A single registered option.
pub struct Flag<'a> {
    pub short: Option<char>,
    pub long: String,
    pub desc: String,
    pub(crate) value: &'a mut dyn Value,
}

impl Flag<'_> {
    fn matches(&self, key: &str) -> bool {
        if let Some(long) = key.strip_prefix("--") {
            return long == self.long;
        }
        let mut chars = key.chars();
        chars.next() == Some('-')
            && matches!((chars.next(), chars.next()), (Some(c), None) if Some(c) == self.short)
    }

    /// `-s, --long` as shown in usage text.
    #[must_use]
    pub fn spelling(&self) -> String {
        match self.short {
            Some(c) => format!("-{c}, --{}", self.long),
            None => format!("    --{}", self.long),
        }
    }

    #[must_use]
    pub fn current(&self) -> String {
        self.value.format()
    }

    #[must_use]
    pub fn is_switch(&self) -> bool {
        self.value.is_switch()
    }
}

/// Registered options, bound to caller-owned values.
#[derive(Default)]
pub struct Optional<'a> {
    flags: Vec<Flag<'a>>,
}

/// `-5`, `-0.25` and friends are values, not options.
fn looks_negative_number(token: &str) -> bool {
    token
        .strip_prefix('-')
        .and_then(|rest| rest.chars().next())
        .is_some_and(|c| c.is_ascii_digit() || c == '.')
}

impl<'a> Optional<'a> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `value` to `--long` (and `-short` when given).
    pub fn add(
        &mut self,
        short: Option<char>,
        long: &str,
        desc: &str,
        value: &'a mut dyn Value,
    ) -> &mut Self {
        self.flags.push(Flag {
            short,
            long: long.to_owned(),
            desc: desc.to_owned(),
            value,
        });
        self
    }

    pub fn flags(&self) -> impl Iterator<Item = &Flag<'a>> {
        self.flags.iter()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    /// Whether a help token appears before `--`.
    ///
    /// A token consumed as the value of a non-switch option (`-g -hola`) is a
    /// value, not a help request.
    #[must_use]
    pub fn requests_help(&self, tokens: &[String]) -> bool {
        let mut iter = tokens.iter();
        while let Some(token) = iter.next() {
            if token == "--" {
                return false;
            }
            if is_help_token(token) {
                return true;
            }
            if !token.contains('=')
                && self
                    .flags
                    .iter()
                    .any(|f| !f.value.is_switch() && f.matches(token))
            {
                iter.next();
            }
        }
        false
    }

    fn find(&mut self, key: &str) -> Option<&mut Flag<'a>> {
        self.flags.iter_mut().find(|f| f.matches(key))
    }

    /// Consume every option token, setting bound values in order.
    ///
    /// Returns the tokens left for positional arguments. `--` stops option
    /// parsing; everything after it is passed through untouched.
    ///
    /// # Errors
    ///
    /// Returns `CommandError::Usage` for unknown options or a missing option
    /// value, and `CommandError::Value` when a value rejects its token.
    pub fn parse(&mut self, tokens: &[String]) -> Result<Vec<String>, CommandError> {
        let mut rest = Vec::new();
        let mut iter = tokens.iter();
        while let Some(token) = iter.next() {
            if token == "--" {
                rest.extend(iter.cloned());
                break;
            }
            if token == "-" || !token.starts_with('-') {
                rest.push(token.clone());
                continue;
            }

            let (key, inline) = match token.split_once('=') {
                Some((key, raw)) => (key, Some(raw)),
                None => (token.as_str(), None),
            };
            let Some(flag) = self.find(key) else {
                if looks_negative_number(token) {
                    rest.push(token.clone());
                    continue;
                }
                return Err(CommandError::usage(format!("unknown option `{key}`")));
            };

            let raw = match inline {
                Some(raw) => raw.to_owned(),
                None if flag.value.is_switch() => "true".to_owned(),
                None => iter
                    .next()
                    .cloned()
                    .ok_or_else(|| CommandError::usage(format!("option `{key}` expects a value")))?,
            };
            trace!(option = %flag.long, raw = %raw, "option matched");
            flag.value.set(&raw)?;
        }
        Ok(rest)
    }
}
