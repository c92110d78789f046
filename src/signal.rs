use std::io::Write;

use log::debug;
use nix::{
    sys::signal::{self, Signal},
    unistd::Pid,
};

use crate::error::{Result, ShellError};

/// Only plain positive decimal PIDs are accepted. `0` and negatives would signal whole process
/// groups (including the shell), so they are refused along with anything non-numeric.
pub fn parse_pid(raw: &str) -> Result<Pid> {
    match raw.parse::<i32>() {
        Ok(pid) if pid > 0 => Ok(Pid::from_raw(pid)),
        _ => Err(ShellError::InvalidPid(raw.to_owned())),
    }
}

/// Sends SIGKILL to the process named by `raw_pid`.
pub fn exterminate(raw_pid: &str, out: &mut dyn Write) -> Result<()> {
    let pid = parse_pid(raw_pid)?;

    signal::kill(pid, Signal::SIGKILL).map_err(|source| ShellError::SignalDeliveryFailed {
        pid: pid.as_raw(),
        source,
    })?;
    debug!("SIGKILL delivered to {}", pid);

    writeln!(out, "Process has been killed.")?;
    Ok(())
}
