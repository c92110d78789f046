use std::io::Write;

use log::debug;

use crate::{
    builtins::{cd, echo, history, screen},
    command::CommandKind,
    config::Config,
    error::{Result, ShellError},
    executor::{self, Mode},
    signal,
    state::ShellState,
};

/// What the input loop does after a command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Accepted argument counts per command.
enum Arity {
    Exactly(usize),
    AtMost(usize),
    AtLeast(usize),
    Any,
}

impl Arity {
    fn of(command: CommandKind) -> Arity {
        match command {
            CommandKind::Clear | CommandKind::Quit | CommandKind::WhereAmI => Arity::Exactly(0),
            CommandKind::ChangeDir | CommandKind::Exterminate => Arity::Exactly(1),
            CommandKind::LastCommands => Arity::AtMost(1),
            CommandKind::Run | CommandKind::Background => Arity::AtLeast(1),
            CommandKind::Echo | CommandKind::Unknown => Arity::Any,
        }
    }

    fn accepts(&self, given: usize) -> bool {
        match *self {
            Arity::Exactly(n) => given == n,
            Arity::AtMost(n) => given <= n,
            Arity::AtLeast(n) => given >= n,
            Arity::Any => true,
        }
    }
}

/// Runs exactly one handler for `command`. `args` excludes the command word.
///
/// The argument count is checked first, so a mismatch never touches `state` or spawns anything.
/// Recording the raw line in the history is the caller's job.
pub fn dispatch(
    command: CommandKind,
    args: &[String],
    state: &mut ShellState,
    config: &Config,
    out: &mut dyn Write,
) -> Result<Flow> {
    if !Arity::of(command).accepts(args.len()) {
        return Err(ShellError::ArgumentCount {
            command,
            given: args.len(),
        });
    }
    debug!("dispatch {} {:?}", command, args);

    match command {
        CommandKind::Unknown => return Err(ShellError::UnrecognizedCommand),
        CommandKind::Quit => return Ok(Flow::Quit),
        CommandKind::Clear => screen::clear(out)?,
        CommandKind::Echo => echo::echo(args, out)?,
        CommandKind::WhereAmI => cd::whereami(state, out)?,
        CommandKind::ChangeDir => cd::changedir(&args[0], state)?,
        CommandKind::LastCommands => {
            history::lastcommands(args.first().map(String::as_str), state, out)?
        }
        CommandKind::Run => {
            executor::execute(args, Mode::Foreground, state, config.background_grace(), out)?
        }
        CommandKind::Background => {
            executor::execute(args, Mode::Background, state, config.background_grace(), out)?
        }
        CommandKind::Exterminate => signal::exterminate(&args[0], out)?,
    }
    Ok(Flow::Continue)
}
