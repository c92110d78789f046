use std::io::Write;

use crate::error::Result;

/// Prints the arguments joined by a single space. Empty words are kept, so `echo a  b`
/// prints `a  b`.
pub fn echo(args: &[String], out: &mut dyn Write) -> Result<()> {
    writeln!(out, "{}", args.join(" "))?;
    Ok(())
}
