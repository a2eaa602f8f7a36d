/// `math` subcommands: integer and float values.
use cmdflags::{
    BoolValue, CommandError, Context, FloatValue, IntValue, Outcome, Program, StringListValue,
    Value, args, parse,
};

/// `math add` and `math mul`.
#[must_use]
pub fn program() -> Program {
    Program::new()
        .with("add", "Sum integers", add)
        .with("mul", "Multiply floats", mul)
}

/// Run `cmdflags-demo math add [--start N] INT...`.
///
/// # Errors
///
/// Returns `CommandError` when an argument is not an integer or the sum overflows.
pub fn add(ctx: &Context) -> Result<Outcome, CommandError> {
    let mut start = IntValue::new(0);
    let mut numbers = StringListValue::default();
    {
        let (mut pos, mut opt) = args();
        opt.add(Some('s'), "start", "Initial value", &mut start);
        pos.add("INT", "Integers to add", &mut numbers);
        if let Outcome::Help(text) = parse(ctx, &mut pos, &mut opt)? {
            return Ok(Outcome::Help(text));
        }
    }

    let mut total = start.get();
    for raw in numbers.iter() {
        let mut n = IntValue::default();
        n.set(raw)?;
        total = total
            .checked_add(n.get())
            .ok_or_else(|| anyhow::anyhow!("sum overflows at `{raw}`"))?;
    }
    println!("{total}");
    Ok(Outcome::Completed)
}

/// Run `cmdflags-demo math mul [--verbose] A B`.
///
/// # Errors
///
/// Returns `CommandError` when an argument is not a float.
pub fn mul(ctx: &Context) -> Result<Outcome, CommandError> {
    let mut a = FloatValue::new(1.0);
    let mut b = FloatValue::new(1.0);
    let mut verbose = BoolValue::new(false);
    {
        let (mut pos, mut opt) = args();
        opt.add(Some('v'), "verbose", "Show the operands", &mut verbose);
        pos.add("A", "Left operand", &mut a)
            .add("B", "Right operand", &mut b);
        if let Outcome::Help(text) = parse(ctx, &mut pos, &mut opt)? {
            return Ok(Outcome::Help(text));
        }
    }

    let product = FloatValue::new(a.get() * b.get());
    if verbose.get() {
        println!("{} * {} = {}", a.format(), b.format(), product.format());
    } else {
        println!("{}", product.format());
    }
    Ok(Outcome::Completed)
}
