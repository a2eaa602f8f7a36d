/// Usage text for a leaf command's declared arguments.
use comfy_table::{Table, presets::NOTHING};

use super::{Optional, Positional};
use crate::command::Context;
use crate::command::listing::indent_table;

/// Build `<name>: <desc>` followed by a usage line and option/argument tables.
///
/// Options show their current value as the default when it is non-empty.
#[must_use]
pub fn usage(ctx: &Context, pos: &Positional<'_>, opt: &Optional<'_>) -> String {
    let mut line = format!("usage: {} [options]", ctx.name);
    for slot in pos.slots() {
        line.push(' ');
        line.push_str(&slot.spelling());
    }

    let mut options = Table::new();
    options.load_preset(NOTHING);
    options.add_row(["-h, --help", "Show this help", ""]);
    for flag in opt.flags() {
        let spelling = if flag.is_switch() {
            flag.spelling()
        } else {
            format!("{} VALUE", flag.spelling())
        };
        let current = flag.current();
        let default = if current.is_empty() {
            String::new()
        } else {
            format!("(default: {current})")
        };
        options.add_row([spelling, flag.desc.clone(), default]);
    }

    let mut out = format!(
        "{}: {}\n\n{line}\n\noptions:\n{}",
        ctx.name,
        ctx.desc,
        indent_table(&options)
    );

    if !pos.is_empty() {
        let mut arguments = Table::new();
        arguments.load_preset(NOTHING);
        for slot in pos.slots() {
            arguments.add_row([slot.spelling(), slot.desc.clone()]);
        }
        out.push_str("\n\narguments:\n");
        out.push_str(&indent_table(&arguments));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::args;
    use crate::value::{BoolValue, IntValue, StringListValue};

    #[test]
    fn test_usage_lists_everything() {
        let mut count = IntValue::new(3);
        let mut quiet = BoolValue::new(false);
        let mut files = StringListValue::default();
        let ctx = Context::new("tool cat", "Concatenate files", Vec::<String>::new());

        let (mut pos, mut opt) = args();
        opt.add(Some('n'), "count", "Repeat count", &mut count)
            .add(Some('q'), "quiet", "No output", &mut quiet);
        pos.add("FILE", "Files to read", &mut files);
        let text = usage(&ctx, &pos, &opt);

        assert!(text.starts_with("tool cat: Concatenate files\n\n"));
        assert!(text.contains("usage: tool cat [options] FILE..."));
        assert!(text.contains("-n, --count VALUE"));
        assert!(text.contains("(default: 3)"));
        assert!(text.contains("-q, --quiet"));
        assert!(!text.contains("--quiet VALUE"));
        assert!(text.contains("arguments:"));
        assert!(text.contains("Files to read"));
    }
}
