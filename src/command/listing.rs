/// Subcommand listing shown in help and "expected a command" messages.
use comfy_table::{Table, presets::NOTHING};

use super::Program;

/// Render `prog`'s subcommands as an indented two-column name/description table.
#[must_use]
pub fn list_commands(prog: &Program) -> String {
    if prog.is_empty() {
        return "  (no commands)".to_owned();
    }
    let mut table = Table::new();
    table.load_preset(NOTHING);
    for (name, desc) in prog.descriptions() {
        table.add_row([name, desc]);
    }
    indent_table(&table)
}

/// Borderless tables keep one space of cell padding on the left; replace it
/// with a two-space indent and drop trailing padding.
pub(crate) fn indent_table(table: &Table) -> String {
    table
        .lines()
        .map(|line| {
            let body = line.strip_prefix(' ').unwrap_or(&line);
            format!("  {}", body.trim_end())
        })
        .collect::<Vec<_>>()
        .join("\n")
}
