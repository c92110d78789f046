use std::io::Write;

use crate::error::Result;

/// Cursor home + erase display.
pub const CLEAR_SEQUENCE: &str = "\x1b[1;1H\x1b[2J";

pub fn clear(out: &mut dyn Write) -> Result<()> {
    out.write_all(CLEAR_SEQUENCE.as_bytes())?;
    out.flush()?;
    Ok(())
}
