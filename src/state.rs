use std::{env, io, path::PathBuf};

/// Session-wide state, owned by the input loop and lent to one handler at a time.
#[derive(Debug, Clone, PartialEq)]
pub struct ShellState {
    current_directory: PathBuf,
    history: Vec<String>,
}

impl ShellState {
    /// Starts in the process' working directory with an empty history.
    pub fn new() -> io::Result<ShellState> {
        Ok(ShellState::with_directory(env::current_dir()?))
    }

    pub fn with_directory(current_directory: PathBuf) -> ShellState {
        ShellState {
            current_directory,
            history: vec![],
        }
    }

    pub fn current_directory(&self) -> &PathBuf {
        &self.current_directory
    }

    /// Callers validate `dir` first, see `builtins::cd`.
    pub(crate) fn set_current_directory(&mut self, dir: PathBuf) {
        self.current_directory = dir;
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Records a line verbatim, recognized or not.
    pub fn push_history(&mut self, raw_line: &str) {
        self.history.push(raw_line.to_owned());
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }
}
