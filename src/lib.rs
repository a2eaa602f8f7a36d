#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! cmdflags — typed command-line values and nested subcommand dispatch.
//!
//! Declare [`value`] cells, bind them with [`args`], and route tokens through a
//! tree of [`command::Program`]s. [`runner::run`] ties it to the process.

pub mod args;
pub mod command;
pub mod runner;
pub mod value;

pub use args::{Optional, Positional, args, parse, usage};
pub use command::{Command, CommandError, Compiled, Context, Dispatch, Outcome, Program};
pub use runner::{run, run_with};
pub use value::{
    BoolValue, CreateValue, FloatValue, FormatError, IntValue, OpenListValue, OpenValue, OpenedFile,
    StringListValue, StringValue, Value, ValueError,
};
