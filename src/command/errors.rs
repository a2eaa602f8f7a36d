/// Errors from the dispatch layer and the handlers below it.
use thiserror::Error;

use crate::value::ValueError;

/// Everything a `Command` can fail with.
#[derive(Debug, Error)]
pub enum CommandError {
    /// No tokens left where a subcommand name was expected.
    #[error("{name} expected a command.\n\n{listing}")]
    MissingCommand {
        /// Invocation name at the failing level.
        name: String,
        /// Subcommand listing for that level.
        listing: String,
    },

    /// The head token is not a registered subcommand.
    #[error("unknown command name `{0}`")]
    UnknownCommand(String),

    /// Tokens did not fit the declared positional/optional arguments.
    #[error("{0}")]
    Usage(String),

    /// A value rejected its token.
    #[error(transparent)]
    Value(#[from] ValueError),

    /// Any failure a leaf handler chooses to report.
    #[error(transparent)]
    Handler(#[from] anyhow::Error),
}

impl CommandError {
    pub(crate) fn usage(msg: impl Into<String>) -> Self {
        Self::Usage(msg.into())
    }
}
