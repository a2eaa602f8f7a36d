/// Invocation name, description and the tokens not yet consumed.
///
/// Each dispatch level builds a fresh child context; none is shared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Context {
    /// Space-joined path of command names, starting with the program name.
    pub name: String,
    /// Description of the command this context was built for.
    pub desc: String,
    /// Remaining raw tokens.
    pub args: Vec<String>,
}

impl Context {
    #[must_use]
    pub fn new<I, S>(name: impl Into<String>, desc: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            desc: desc.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// First remaining token, if any.
    #[must_use]
    pub fn head(&self) -> Option<&str> {
        self.args.first().map(String::as_str)
    }

    /// Context for subcommand `key`: head token shifted off, name extended.
    #[must_use]
    pub fn child(&self, key: &str, desc: &str) -> Self {
        Self {
            name: format!("{} {key}", self.name),
            desc: desc.to_owned(),
            args: self.args.iter().skip(1).cloned().collect(),
        }
    }
}
