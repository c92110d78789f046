use std::io::Write;

use log::{debug, error, warn};

use crate::{
    command::CommandKind,
    config::Config,
    dispatcher::{dispatch, Flow},
    error::Result,
    input_handler::LineSource,
    state::ShellState,
    tokenizer::tokenize,
};

/// Owns the session state and drives dispatch cycles.
pub struct Shell {
    state: ShellState,
    config: Config,
}

impl Shell {
    pub fn new(state: ShellState, config: Config) -> Shell {
        Shell { state, config }
    }

    pub fn state(&self) -> &ShellState {
        &self.state
    }

    /// One dispatch cycle. The line goes into the history before anything else, whatever it
    /// turns out to be. Errors are written to `out` as a single line and never stop the loop.
    pub fn execute_line(&mut self, raw_line: &str, out: &mut dyn Write) -> Flow {
        self.state.push_history(raw_line);

        let mut words = tokenize(raw_line);
        // tokenize never returns an empty Vec
        let command_word = words.remove(0);
        let command = CommandKind::classify(&command_word);
        if command == CommandKind::Unknown {
            debug!("unrecognized command {:?}", command_word);
        }

        match dispatch(command, &words, &mut self.state, &self.config, out) {
            Ok(flow) => flow,
            Err(e) => {
                warn!("{} failed: {:?}", command, e);
                if let Err(io_err) = writeln!(out, "{}", e).and_then(|_| out.flush()) {
                    error!("could not report error: {}", io_err);
                }
                Flow::Continue
            }
        }
    }

    /// Reads and executes lines until `quit` or the end of input.
    pub fn run(&mut self, source: &mut dyn LineSource, out: &mut dyn Write) -> Result<()> {
        loop {
            let line = match source.read_line(self.config.prompt())? {
                Some(line) => line,
                None => {
                    debug!("end of input");
                    break;
                }
            };

            if self.execute_line(&line, out) == Flow::Quit {
                break;
            }
        }
        Ok(())
    }
}
