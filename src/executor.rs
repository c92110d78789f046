use std::{
    io::{self, Write},
    path::PathBuf,
    process::Command,
    thread,
    time::Duration,
};

use log::debug;
use nix::errno::Errno;

use crate::{
    error::{Result, ShellError},
    state::ShellState,
};

/// Whether the shell waits for the spawned program.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Mode {
    Foreground,
    Background,
}

/// An external program ready to be spawned: a resolved, existing, non-directory path plus
/// the arguments that follow it on the line.
#[derive(Debug)]
pub struct Program {
    path: PathBuf,
    args: Vec<String>,
}

impl Program {
    /// `words[0]` is the program, the rest are its arguments.
    /// Paths starting with `/` are absolute, everything else is relative to the shell's current
    /// directory. There is no `PATH` search.
    pub fn resolve(words: &[String], state: &ShellState) -> Result<Program> {
        let (program, args) = match words.split_first() {
            Some(split) => split,
            None => return Err(ShellError::ProgramNotFound(PathBuf::new())),
        };

        let path = if program.starts_with('/') {
            PathBuf::from(program)
        } else {
            state.current_directory().join(program)
        };

        if !path.exists() || path.is_dir() {
            return Err(ShellError::ProgramNotFound(path));
        }

        Ok(Program {
            path,
            args: args.to_vec(),
        })
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// argv[0] is the resolved path; stdio is inherited from the shell.
    fn command(&self, state: &ShellState) -> Command {
        let mut command = Command::new(&self.path);
        command.args(&self.args).current_dir(state.current_directory());
        command
    }
}

/// Spawn failures that mean no child could be created at all are `ForkFailed`, anything else
/// (permissions, bad format, ...) happened while loading the program image.
fn classify_spawn_error(path: &PathBuf, e: io::Error) -> ShellError {
    match e.raw_os_error().map(Errno::from_i32) {
        Some(Errno::EAGAIN) | Some(Errno::ENOMEM) => ShellError::ForkFailed(e),
        _ => ShellError::ProgramStartFailed {
            path: path.clone(),
            source: e,
        },
    }
}

/// Runs `program` and blocks until it exits. There is no timeout.
pub fn run_foreground(program: &Program, state: &ShellState, out: &mut dyn Write) -> Result<()> {
    //Anything buffered must reach the terminal before the child writes to it
    out.flush()?;

    let mut child = program
        .command(state)
        .spawn()
        .map_err(|e| classify_spawn_error(&program.path, e))?;
    debug!("spawned {:?} pid {}", program.path, child.id());

    let status = child.wait()?;
    debug!("pid {} exited with {}", child.id(), status);
    Ok(())
}

/// Spawns `program`, prints its PID and holds the prompt for `grace` so the child's startup
/// output comes first. The child is not tracked afterwards: it is never waited on, so once it
/// exits it stays a zombie until the shell itself exits.
pub fn run_background(
    program: &Program,
    state: &ShellState,
    grace: Duration,
    out: &mut dyn Write,
) -> Result<u32> {
    out.flush()?;

    let child = program
        .command(state)
        .spawn()
        .map_err(|e| classify_spawn_error(&program.path, e))?;
    let pid = child.id();
    debug!("background {:?} pid {}", program.path, pid);

    writeln!(out, "child PID: {}", pid)?;
    out.flush()?;

    thread::sleep(grace);

    // Dropping a Child neither kills nor reaps it
    drop(child);
    Ok(pid)
}

/// Resolves and spawns `words` in the given mode.
pub fn execute(
    words: &[String],
    mode: Mode,
    state: &ShellState,
    grace: Duration,
    out: &mut dyn Write,
) -> Result<()> {
    let program = Program::resolve(words, state)?;
    match mode {
        Mode::Foreground => run_foreground(&program, state, out),
        Mode::Background => run_background(&program, state, grace, out).map(|_| ()),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::{fs, os::unix::fs::PermissionsExt};

    fn words(w: &[&str]) -> Vec<String> {
        w.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn resolve_absolute() {
        let state = ShellState::with_directory(PathBuf::from("/nonexistent"));
        let p = Program::resolve(&words(&["/bin/sh", "-c", "true"]), &state).unwrap();
        assert_eq!(p.path(), &PathBuf::from("/bin/sh"));
        assert_eq!(p.args(), &["-c", "true"]);
    }

    #[test]
    fn resolve_relative_to_shell_directory() {
        let state = ShellState::with_directory(PathBuf::from("/bin"));
        let p = Program::resolve(&words(&["sh"]), &state).unwrap();
        assert_eq!(p.path(), &PathBuf::from("/bin/sh"));
        assert!(p.args().is_empty());
    }

    #[test]
    fn resolve_does_not_search_path() {
        let dir = tempfile::tempdir().unwrap();
        let state = ShellState::with_directory(dir.path().to_path_buf());
        let r = Program::resolve(&words(&["sh"]), &state);
        assert!(matches!(r, Err(ShellError::ProgramNotFound(_))));
    }

    #[test]
    fn resolve_rejects_directories() {
        let state = ShellState::with_directory(PathBuf::from("/"));
        let r = Program::resolve(&words(&["/tmp"]), &state);
        assert!(matches!(r, Err(ShellError::ProgramNotFound(_))));
        let r = Program::resolve(&words(&[""]), &state);
        assert!(matches!(r, Err(ShellError::ProgramNotFound(_))));
    }

    #[test]
    fn foreground_runs_to_completion() {
        let state = ShellState::with_directory(PathBuf::from("/"));
        let mut out = vec![];
        execute(&words(&["/bin/true"]), Mode::Foreground, &state, Duration::from_millis(0), &mut out)
            .unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn foreground_passes_args_and_directory() {
        let dir = tempfile::tempdir().unwrap();
        let script = dir.path().join("record.sh");
        let record = dir.path().join("record.txt");
        fs::write(&script, "out=$1\nshift\npwd -P > \"$out\"\necho \"$@\" >> \"$out\"\n").unwrap();

        // `sh` is resolved against the shell's directory
        let state = ShellState::with_directory(PathBuf::from("/bin"));
        let mut out = vec![];
        let line = words(&[
            "sh",
            script.to_str().unwrap(),
            record.to_str().unwrap(),
            "one",
            "two",
        ]);
        execute(&line, Mode::Foreground, &state, Duration::from_millis(0), &mut out).unwrap();

        let recorded = fs::read_to_string(&record).unwrap();
        let expected_cwd = fs::canonicalize("/bin").unwrap();
        assert_eq!(
            recorded,
            format!("{}\none two\n", expected_cwd.display())
        );
    }

    #[test]
    fn non_executable_fails_to_start() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("data.txt");
        fs::write(&file, "not a program").unwrap();
        fs::set_permissions(&file, fs::Permissions::from_mode(0o644)).unwrap();

        let state = ShellState::with_directory(dir.path().to_path_buf());
        let mut out = vec![];
        let r = execute(&words(&["data.txt"]), Mode::Foreground, &state, Duration::from_millis(0), &mut out);
        assert!(matches!(r, Err(ShellError::ProgramStartFailed { .. })));
    }

    #[test]
    fn background_reports_pid_and_returns() {
        let state = ShellState::with_directory(PathBuf::from("/"));
        let program = Program::resolve(&words(&["/bin/sleep", "5"]), &state).unwrap();
        let mut out = vec![];

        let start = std::time::Instant::now();
        let pid = run_background(&program, &state, Duration::from_millis(10), &mut out).unwrap();
        assert!(start.elapsed() < Duration::from_secs(5));
        assert_eq!(String::from_utf8(out).unwrap(), format!("child PID: {}\n", pid));

        let _ = nix::sys::signal::kill(
            nix::unistd::Pid::from_raw(pid as i32),
            nix::sys::signal::Signal::SIGKILL,
        );
        let _ = nix::sys::wait::waitpid(nix::unistd::Pid::from_raw(pid as i32), None);
    }

    #[test]
    fn spawn_error_classification() {
        let path = PathBuf::from("/x");
        assert!(matches!(
            classify_spawn_error(&path, io::Error::from_raw_os_error(Errno::EAGAIN as i32)),
            ShellError::ForkFailed(_)
        ));
        assert!(matches!(
            classify_spawn_error(&path, io::Error::from_raw_os_error(Errno::ENOEXEC as i32)),
            ShellError::ProgramStartFailed { .. }
        ));
    }
}
