/// Named subcommand tables and token routing.
use std::collections::BTreeMap;

use tracing::debug;

use super::listing::list_commands;
use super::{Command, CommandError, Context, Outcome};

/// Whether `token` asks for help: any `-h` prefix or exactly `--help`.
#[must_use]
pub fn is_help_token(token: &str) -> bool {
    token.starts_with("-h") || token == "--help"
}

/// A registered subcommand and its description.
pub struct Entry {
    pub desc: String,
    pub cmd: Box<dyn Command>,
}

/// A mapping from subcommand name to `(description, command)`.
///
/// Names iterate in sorted order, which is the order listings use.
#[derive(Default)]
pub struct Program {
    entries: BTreeMap<String, Entry>,
}

/// Result of one routing step.
pub enum Dispatch<'a> {
    /// The head token named a subcommand; run it with `context`.
    Routed {
        command: &'a dyn Command,
        context: Context,
    },
    /// Help was requested; the text is ready to display.
    HelpRequested(String),
    /// Routing failed at this level.
    Failed(CommandError),
}

impl Program {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `cmd` under `name`. A second registration replaces the first.
    pub fn add(&mut self, name: &str, desc: &str, cmd: impl Command + 'static) -> &mut Self {
        self.entries.insert(
            name.to_owned(),
            Entry {
                desc: desc.to_owned(),
                cmd: Box::new(cmd),
            },
        );
        self
    }

    /// Owned builder form of [`Program::add`].
    #[must_use]
    pub fn with(mut self, name: &str, desc: &str, cmd: impl Command + 'static) -> Self {
        self.add(name, desc, cmd);
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Entry> {
        self.entries.get(name)
    }

    /// `(name, description)` pairs in sorted order.
    pub fn descriptions(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, entry)| (name.as_str(), entry.desc.as_str()))
    }

    /// Route `ctx` one level down.
    ///
    /// Help detection runs before lookup, so `-h…` never reaches a subcommand
    /// even if one shares the prefix. Lookup is exact string equality.
    #[must_use]
    pub fn dispatch(&self, ctx: &Context) -> Dispatch<'_> {
        let Some(head) = ctx.head() else {
            debug!(name = %ctx.name, "no command given");
            return Dispatch::Failed(CommandError::MissingCommand {
                name: ctx.name.clone(),
                listing: list_commands(self),
            });
        };

        if is_help_token(head) {
            debug!(name = %ctx.name, token = head, "help requested");
            return Dispatch::HelpRequested(format!(
                "{}: {}\n\n{}",
                ctx.name,
                ctx.desc,
                list_commands(self)
            ));
        }

        match self.entries.get(head) {
            Some(entry) => {
                let context = ctx.child(head, &entry.desc);
                debug!(name = %context.name, remaining = context.args.len(), "routed");
                Dispatch::Routed {
                    command: entry.cmd.as_ref(),
                    context,
                }
            }
            None => {
                debug!(name = %ctx.name, token = head, "unknown command");
                Dispatch::Failed(CommandError::UnknownCommand(head.to_owned()))
            }
        }
    }

    /// Turn the table into a single routing `Command`.
    ///
    /// Consuming `self` freezes the table: nothing can be registered once it
    /// is compiled.
    #[must_use]
    pub fn compile(self) -> Compiled {
        Compiled(self)
    }
}

/// A compiled [`Program`]. Can be registered inside another program.
pub struct Compiled(Program);

impl Compiled {
    #[must_use]
    pub fn program(&self) -> &Program {
        &self.0
    }
}

impl Command for Compiled {
    fn run(&self, ctx: &Context) -> Result<Outcome, CommandError> {
        match self.0.dispatch(ctx) {
            Dispatch::Routed { command, context } => command.run(&context),
            Dispatch::HelpRequested(text) => Ok(Outcome::Help(text)),
            Dispatch::Failed(err) => Err(err),
        }
    }
}
