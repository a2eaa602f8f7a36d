/// `file` subcommands: file-backed values.
use std::io::{Read, Write};

use cmdflags::{
    CommandError, Context, CreateValue, OpenListValue, OpenValue, Outcome, Program, args, parse,
};

/// `file cat` and `file copy`.
#[must_use]
pub fn program() -> Program {
    Program::new()
        .with("cat", "Print files to stdout", cat)
        .with("copy", "Copy one file to another", copy)
}

/// Run `cmdflags-demo file cat FILE...`.
///
/// # Errors
///
/// Returns `CommandError` when a file cannot be opened or read.
pub fn cat(ctx: &Context) -> Result<Outcome, CommandError> {
    let mut files = OpenListValue::default();
    {
        let (mut pos, mut opt) = args();
        pos.add("FILE", "Files to print", &mut files);
        if let Outcome::Help(text) = parse(ctx, &mut pos, &mut opt)? {
            return Ok(Outcome::Help(text));
        }
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for opened in files.iter_mut() {
        let mut body = Vec::new();
        opened
            .file
            .read_to_end(&mut body)
            .map_err(|e| anyhow::anyhow!("{}: {e}", opened.path.display()))?;
        out.write_all(&body).map_err(anyhow::Error::from)?;
    }
    Ok(Outcome::Completed)
}

/// Run `cmdflags-demo file copy SRC DST`.
///
/// # Errors
///
/// Returns `CommandError` when either file cannot be opened or the copy fails.
pub fn copy(ctx: &Context) -> Result<Outcome, CommandError> {
    let mut src = OpenValue::default();
    let mut dst = CreateValue::default();
    {
        let (mut pos, mut opt) = args();
        pos.add("SRC", "File to read", &mut src)
            .add("DST", "File to create or truncate", &mut dst);
        if let Outcome::Help(text) = parse(ctx, &mut pos, &mut opt)? {
            return Ok(Outcome::Help(text));
        }
    }

    let (Some(mut from), Some(mut to)) = (src.take(), dst.take()) else {
        return Err(anyhow::anyhow!("copy needs both SRC and DST").into());
    };
    let bytes = std::io::copy(&mut from.file, &mut to.file).map_err(anyhow::Error::from)?;
    println!(
        "copied {bytes} bytes from {} to {}",
        from.path.display(),
        to.path.display()
    );
    Ok(Outcome::Completed)
}
