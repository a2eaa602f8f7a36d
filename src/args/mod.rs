/// Argument-definition containers that bind tokens to caller-owned values.
pub mod optional;
pub mod positional;
pub mod usage;

pub use optional::Optional;
pub use positional::Positional;
pub use usage::usage;

use crate::command::{CommandError, Context, Outcome};

/// Create an empty positional/optional pair for one invocation.
#[must_use]
pub fn args<'a>() -> (Positional<'a>, Optional<'a>) {
    (Positional::new(), Optional::new())
}

/// Bind `ctx.args` to the declared arguments.
///
/// A help token before any `--` short-circuits to `Outcome::Help` without
/// setting any value. Tokens taken as an option's value never count as help. Otherwise options are consumed first and the remaining
/// tokens fill the positional slots.
///
/// # Errors
///
/// Returns `CommandError::Usage` when tokens do not fit the declarations and
/// `CommandError::Value` when a value rejects its token. Values set before the
/// failure keep their new contents, including any opened file.
pub fn parse(
    ctx: &Context,
    pos: &mut Positional<'_>,
    opt: &mut Optional<'_>,
) -> Result<Outcome, CommandError> {
    if opt.requests_help(&ctx.args) {
        return Ok(Outcome::Help(usage(ctx, pos, opt)));
    }

    let rest = opt.parse(&ctx.args)?;
    pos.parse(&rest)?;
    Ok(Outcome::Completed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::{BoolValue, IntValue, StringValue};

    #[test]
    fn test_parse_options_then_positionals() {
        let mut loud = BoolValue::new(false);
        let mut times = IntValue::new(1);
        let mut name = StringValue::new("");
        let ctx = Context::new("tool greet", "Say hi", ["--loud", "ann", "-n", "2"]);
        let outcome = {
            let (mut pos, mut opt) = args();
            opt.add(Some('l'), "loud", "Shout", &mut loud)
                .add(Some('n'), "times", "Repeat", &mut times);
            pos.add("NAME", "Who", &mut name);
            parse(&ctx, &mut pos, &mut opt).unwrap()
        };
        assert_eq!(outcome, Outcome::Completed);
        assert!(loud.get());
        assert_eq!(times.get(), 2);
        assert_eq!(name.get(), "ann");
    }

    #[test]
    fn test_help_leaves_values_untouched() {
        let mut times = IntValue::new(1);
        let ctx = Context::new("tool greet", "Say hi", ["-n", "5", "--help"]);
        let outcome = {
            let (mut pos, mut opt) = args();
            opt.add(Some('n'), "times", "Repeat", &mut times);
            parse(&ctx, &mut pos, &mut opt).unwrap()
        };
        let Outcome::Help(text) = outcome else {
            panic!("expected help");
        };
        assert!(text.starts_with("tool greet: Say hi"));
        assert_eq!(times.get(), 1);
    }

    #[test]
    fn test_help_like_option_value_is_bound() {
        let mut greeting = StringValue::new("Hello");
        let ctx = Context::new("tool greet", "Say hi", ["-g", "-hola"]);
        {
            let (mut pos, mut opt) = args();
            opt.add(Some('g'), "greeting", "Greeting word", &mut greeting);
            assert_eq!(parse(&ctx, &mut pos, &mut opt).unwrap(), Outcome::Completed);
        }
        assert_eq!(greeting.get(), "-hola");
    }

    #[test]
    fn test_help_after_double_dash_is_positional() {
        let mut name = StringValue::new("");
        let ctx = Context::new("tool greet", "Say hi", ["--", "-h"]);
        {
            let (mut pos, mut opt) = args();
            pos.add("NAME", "Who", &mut name);
            assert_eq!(parse(&ctx, &mut pos, &mut opt).unwrap(), Outcome::Completed);
        }
        assert_eq!(name.get(), "-h");
    }
}
