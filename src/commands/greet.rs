/// `greet` command: text, boolean, integer and repeated text values.
use cmdflags::{
    BoolValue, CommandError, Context, IntValue, Outcome, StringListValue, StringValue, args, parse,
};

/// Run `cmdflags-demo greet [-l] [-n N] [-g WORD] [NAME...]`.
///
/// # Errors
///
/// Returns `CommandError` when the arguments do not parse.
pub fn run(ctx: &Context) -> Result<Outcome, CommandError> {
    let mut names = StringListValue::default();
    let mut loud = BoolValue::new(false);
    let mut times = IntValue::new(1);
    let mut greeting = StringValue::new("Hello");
    {
        let (mut pos, mut opt) = args();
        opt.add(Some('l'), "loud", "Shout the greeting", &mut loud)
            .add(Some('n'), "times", "How many times to greet", &mut times)
            .add(Some('g'), "greeting", "Greeting word", &mut greeting);
        pos.add("NAME", "Who to greet (default: world)", &mut names);
        if let Outcome::Help(text) = parse(ctx, &mut pos, &mut opt)? {
            return Ok(Outcome::Help(text));
        }
    }

    let names = if names.is_empty() {
        vec!["world".to_owned()]
    } else {
        names.into_inner()
    };
    for _ in 0..times.get().max(0) {
        for name in &names {
            let line = format!("{}, {name}!", greeting.get());
            if loud.get() {
                println!("{}", line.to_uppercase());
            } else {
                println!("{line}");
            }
        }
    }
    Ok(Outcome::Completed)
}
