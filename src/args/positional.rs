/// Position-ordered arguments.
use tracing::trace;

use crate::command::CommandError;
use crate::value::Value;

/// A single registered positional slot.
pub struct Slot<'a> {
    pub name: String,
    pub desc: String,
    pub(crate) value: &'a mut dyn Value,
}

impl Slot<'_> {
    /// `NAME`, or `NAME...` for accumulating slots.
    #[must_use]
    pub fn spelling(&self) -> String {
        if self.value.accumulates() {
            format!("{}...", self.name)
        } else {
            self.name.clone()
        }
    }

    #[must_use]
    pub fn current(&self) -> String {
        self.value.format()
    }
}

/// Registered positional slots, filled in registration order.
#[derive(Default)]
pub struct Positional<'a> {
    slots: Vec<Slot<'a>>,
}

impl<'a> Positional<'a> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, name: &str, desc: &str, value: &'a mut dyn Value) -> &mut Self {
        self.slots.push(Slot {
            name: name.to_owned(),
            desc: desc.to_owned(),
            value,
        });
        self
    }

    pub fn slots(&self) -> impl Iterator<Item = &Slot<'a>> {
        self.slots.iter()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Fill every slot from `tokens`.
    ///
    /// Single-valued slots take one token each. An accumulating slot takes
    /// every token not needed by the slots registered after it, possibly none.
    ///
    /// # Errors
    ///
    /// Returns `CommandError::Usage` when a single-valued slot has no token
    /// or tokens are left over, and `CommandError::Value` when a value
    /// rejects its token.
    pub fn parse(&mut self, tokens: &[String]) -> Result<(), CommandError> {
        let total = self.slots.len();
        let mut idx = 0;
        for (i, slot) in self.slots.iter_mut().enumerate() {
            if slot.value.accumulates() {
                let reserved = total - i - 1;
                let take = tokens.len().saturating_sub(idx + reserved);
                for token in &tokens[idx..idx + take] {
                    slot.value.set(token)?;
                }
                trace!(argument = %slot.name, count = take, "argument filled");
                idx += take;
            } else {
                let token = tokens.get(idx).ok_or_else(|| {
                    CommandError::usage(format!("missing argument `{}`", slot.name))
                })?;
                slot.value.set(token)?;
                trace!(argument = %slot.name, raw = %token, "argument filled");
                idx += 1;
            }
        }
        match tokens.get(idx) {
            Some(extra) => Err(CommandError::usage(format!("unexpected argument `{extra}`"))),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::{IntValue, StringListValue, StringValue};

    fn tokens(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| (*s).to_owned()).collect()
    }

    #[test]
    fn test_fills_in_order() {
        let mut a = StringValue::new("");
        let mut b = IntValue::new(0);
        {
            let mut pos = Positional::new();
            pos.add("A", "first", &mut a).add("B", "second", &mut b);
            pos.parse(&tokens(&["x", "12"])).unwrap();
        }
        assert_eq!(a.get(), "x");
        assert_eq!(b.get(), 12);
    }

    #[test]
    fn test_accumulating_slot_leaves_room_for_trailing() {
        let mut inputs = StringListValue::default();
        let mut output = StringValue::new("");
        {
            let mut pos = Positional::new();
            pos.add("IN", "inputs", &mut inputs)
                .add("OUT", "output", &mut output);
            pos.parse(&tokens(&["a", "b", "c", "dest"])).unwrap();
        }
        assert_eq!(inputs.as_slice(), ["a", "b", "c"]);
        assert_eq!(output.get(), "dest");
    }

    #[test]
    fn test_accumulating_slot_may_be_empty() {
        let mut inputs = StringListValue::default();
        {
            let mut pos = Positional::new();
            pos.add("IN", "inputs", &mut inputs);
            pos.parse(&[]).unwrap();
        }
        assert!(inputs.is_empty());
    }

    #[test]
    fn test_missing_and_surplus() {
        let mut a = StringValue::new("");
        let mut pos = Positional::new();
        pos.add("A", "first", &mut a);
        let err = pos.parse(&[]).unwrap_err();
        assert_eq!(err.to_string(), "missing argument `A`");
        let err = pos.parse(&tokens(&["x", "y"])).unwrap_err();
        assert_eq!(err.to_string(), "unexpected argument `y`");
    }
}
