/// Process entry: build the root context, run once, map the outcome to an exit status.
use std::ffi::OsString;
use std::io::Write;

use tracing::debug;

use crate::command::{Command, Context, Outcome};

/// Exit status for a completed run.
pub const EXIT_SUCCESS: i32 = 0;
/// Exit status for help output and every failure.
pub const EXIT_FAILURE: i32 = 1;

/// Run `cmd` against the process arguments (everything after argv\[0\]).
///
/// Help text and error messages go to stderr. Returns the exit status for
/// `std::process::exit`.
#[must_use]
pub fn run(name: &str, desc: &str, cmd: &dyn Command) -> i32 {
    let stderr = std::io::stderr();
    let mut out = stderr.lock();
    let args = match utf8_args(std::env::args_os().skip(1)) {
        Ok(args) => args,
        Err(msg) => {
            let _ = writeln!(out, "{msg}");
            return EXIT_FAILURE;
        }
    };
    run_with(&Context::new(name, desc, args), cmd, &mut out)
}

/// Convert raw OS arguments, rejecting the first one that is not valid UTF-8.
fn utf8_args<I>(raw: I) -> Result<Vec<String>, String>
where
    I: IntoIterator<Item = OsString>,
{
    raw.into_iter()
        .map(|arg| {
            arg.into_string().map_err(|bad| {
                format!("argument `{}` is not valid UTF-8", bad.to_string_lossy())
            })
        })
        .collect()
}

/// Run `cmd` once against `ctx`, writing help or failure text to `err_out`.
pub fn run_with(ctx: &Context, cmd: &dyn Command, err_out: &mut dyn Write) -> i32 {
    debug!(name = %ctx.name, args = ctx.args.len(), "run");
    match cmd.run(ctx) {
        Ok(Outcome::Completed) => EXIT_SUCCESS,
        Ok(Outcome::Help(text)) => {
            let _ = writeln!(err_out, "{text}");
            EXIT_FAILURE
        }
        Err(err) => {
            debug!(error = ?err, "run failed");
            let _ = writeln!(err_out, "{err}");
            EXIT_FAILURE
        }
    }
}
