use std::io::{self, Write};
use std::mem;

use log::debug;

mod arithmetic;
mod binary;

use arithmetic::bitwise_add;
use binary::format_binary;

// The demo output assumes a 32-bit word stored in 4 bytes.
const _: () = assert!(mem::size_of::<u32>() == 4);

/// Adds `a` and `b` and prints both operands, the sum and its decimal value.
fn show_sum<W: Write>(
    out: &mut W,
    (a_label, a): (&str, u32),
    (b_label, b): (&str, u32),
) -> io::Result<u32> {
    let result = bitwise_add(a, b);
    debug!("{} + {} = {}", a, b, result);

    writeln!(out, "{:<7}= {}", a_label, format_binary(a))?;
    writeln!(out, "{:<7}= {}", b_label, format_binary(b))?;
    writeln!(out, "{:<7}= {}", "result", format_binary(result))?;
    writeln!(out, "Decimal result: {}", result)?;
    Ok(result)
}

/// Writes the fixed demonstration: the word size, one plain sum and one that overflows.
fn run_demo<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Size of u32: {} bytes", mem::size_of::<u32>())?;

    show_sum(out, ("a", 25), ("b", 17))?;

    writeln!(out)?;
    writeln!(out, "Overflow test:")?;
    show_sum(out, ("x", u32::MAX), ("y", 1))?;
    Ok(())
}

fn main() -> io::Result<()> {
    env_logger::init();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_demo(&mut out)?;
    out.flush()
}
