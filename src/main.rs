#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! cmdflags-demo — a small nested program exercising every value kind.

mod commands;

use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let program = commands::program().compile();
    let code = cmdflags::run(
        "cmdflags-demo",
        "Demonstrate typed flags and nested subcommands",
        &program,
    );
    std::process::exit(code);
}
