/// Demo subcommand tree: builds the root `Program` from each handler module.
pub mod file;
pub mod greet;
pub mod math;

use cmdflags::Program;

/// Root program with every demo subcommand registered.
#[must_use]
pub fn program() -> Program {
    Program::new()
        .with("greet", "Print a greeting", greet::run)
        .with("math", "Arithmetic on numbers", math::program().compile())
        .with("file", "Read and copy files", file::program().compile())
}
