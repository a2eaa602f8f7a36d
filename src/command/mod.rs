/// Command dispatch tree: contexts, commands and subcommand programs.
pub mod context;
pub mod errors;
pub mod listing;
pub mod program;

pub use context::Context;
pub use errors::CommandError;
pub use listing::list_commands;
pub use program::{Compiled, Dispatch, Program, is_help_token};

/// What a successful command run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The command did its work.
    Completed,
    /// The command explained itself instead; the text goes to stderr.
    Help(String),
}

/// A unit of execution at any node of the dispatch tree.
///
/// Leaf handlers and compiled programs are both `Command`s, so trees nest
/// without special cases.
pub trait Command {
    /// Run against `ctx`.
    ///
    /// # Errors
    ///
    /// Returns `CommandError` on routing, argument or handler failure.
    fn run(&self, ctx: &Context) -> Result<Outcome, CommandError>;
}

impl<F> Command for F
where
    F: Fn(&Context) -> Result<Outcome, CommandError>,
{
    fn run(&self, ctx: &Context) -> Result<Outcome, CommandError> {
        self(ctx)
    }
}
