use crate::{
    error::{Result, ShellError},
    state::ShellState,
};
use log::debug;
use std::{fs, io::Write, path::PathBuf};

pub fn whereami(state: &ShellState, out: &mut dyn Write) -> Result<()> {
    writeln!(out, "{}", state.current_directory().display())?;
    Ok(())
}

/// Relative targets are taken from the shell's current directory, not the process'.
/// The state is left untouched unless `target` is a non-empty path to an existing directory.
pub fn changedir(target: &str, state: &mut ShellState) -> Result<()> {
    // join("") would name the current directory itself
    if target.is_empty() {
        return Err(ShellError::DirectoryUnknown(PathBuf::from(target)));
    }

    let path = state.current_directory().join(target);
    if !path.is_dir() {
        return Err(ShellError::DirectoryUnknown(PathBuf::from(target)));
    }

    // Collapses `..` and symlinks so whereami stays readable
    let path =
        fs::canonicalize(&path).map_err(|_| ShellError::DirectoryUnknown(PathBuf::from(target)))?;

    debug!("changedir {:?} -> {:?}", state.current_directory(), path);
    state.set_current_directory(path);
    Ok(())
}
