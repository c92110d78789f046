use crate::{
    error::{Result, ShellError},
    state::ShellState,
};
use std::io::Write;

pub const CLEAR_FLAG: &str = "-c";

/// With no flag, prints every recorded line in order, including the `lastcommands` line
/// itself since the input loop records it before dispatch.
/// With `-c`, drops the whole history.
pub fn lastcommands(flag: Option<&str>, state: &mut ShellState, out: &mut dyn Write) -> Result<()> {
    match flag {
        None => {
            for line in state.history() {
                writeln!(out, "{}", line)?;
            }
        }
        Some(CLEAR_FLAG) => state.clear_history(),
        Some(other) => return Err(ShellError::UnrecognizedFlag(other.to_owned())),
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use std::path::PathBuf;

    fn state_with(lines: &[&str]) -> ShellState {
        let mut state = ShellState::with_directory(PathBuf::from("/"));
        for l in lines {
            state.push_history(l);
        }
        state
    }

    #[test]
    fn lists_in_order() {
        let mut state = state_with(&["echo a", "echo b", "lastcommands"]);
        let mut out = vec![];
        lastcommands(None, &mut state, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "echo a\necho b\nlastcommands\n");
        assert_eq!(state.history().len(), 3);
    }

    #[test]
    fn clear_flag_drops_everything() {
        let mut state = state_with(&["echo a", "lastcommands -c"]);
        let mut out = vec![];
        lastcommands(Some("-c"), &mut state, &mut out).unwrap();
        assert!(state.history().is_empty());
        assert!(out.is_empty());
    }

    #[test]
    fn unknown_flag() {
        let mut state = state_with(&["lastcommands -x"]);
        let mut out = vec![];
        let r = lastcommands(Some("-x"), &mut state, &mut out);
        assert!(matches!(r, Err(ShellError::UnrecognizedFlag(f)) if f == "-x"));
        assert_eq!(state.history().len(), 1);
    }
}
