use std::{io, path::PathBuf};

use nix::errno::Errno;
use rustyline::error::ReadlineError;
use thiserror::Error;

use crate::command::CommandKind;

/// Everything a dispatch cycle can report. None of these end the session.
#[derive(Debug, Error)]
pub enum ShellError {
    #[error("Error 1: Command not recognized.")]
    UnrecognizedCommand,
    #[error("Error 2: Invalid number of arguments passed.")]
    ArgumentCount { command: CommandKind, given: usize },
    #[error("Error 3: Directory unknown.")]
    DirectoryUnknown(PathBuf),
    #[error("Error 4: Unrecognized flag.")]
    UnrecognizedFlag(String),
    #[error("Error 5: Cannot find program.")]
    ProgramNotFound(PathBuf),
    #[error("Error 6: Fork could not be made.")]
    ForkFailed(#[source] io::Error),
    #[error("Error 7: Program was unable to start.")]
    ProgramStartFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Error 8: Invalid process id {0:?}.")]
    InvalidPid(String),
    #[error("Error 9: Could not signal process {pid}: {source}")]
    SignalDeliveryFailed {
        pid: i32,
        #[source]
        source: Errno,
    },
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("input error: {0}")]
    Input(#[from] ReadlineError),
}

pub type Result<T> = std::result::Result<T, ShellError>;
