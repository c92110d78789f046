use std::io::BufRead;

use log::debug;
use rustyline::{error::ReadlineError, Editor};

use crate::{config::Config, error::Result};

/// Produces one raw line per call, `None` once input is exhausted.
pub trait LineSource {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>>;
}

/// Interactive terminal input backed by a line editor.
pub struct Interactive {
    editor: Editor<()>,
}

impl Interactive {
    pub fn new(config: &Config) -> Interactive {
        Interactive {
            editor: Editor::<()>::with_config(config.line_editor_config().clone()),
        }
    }
}

impl LineSource for Interactive {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        loop {
            match self.editor.readline(prompt) {
                Ok(line) => return Ok(Some(line)),
                //Ctrl-C drops the partial line, nothing reaches the history
                Err(ReadlineError::Interrupted) => {
                    debug!("line interrupted");
                    continue;
                }
                Err(ReadlineError::Eof) => return Ok(None),
                Err(e) => return Err(e.into()),
            }
        }
    }
}

/// Lines from any reader, e.g. a redirected stdin. No prompt is shown.
pub struct ScriptSource<R: BufRead> {
    reader: R,
}

impl<R: BufRead> ScriptSource<R> {
    pub fn new(reader: R) -> ScriptSource<R> {
        ScriptSource { reader }
    }
}

impl<R: BufRead> LineSource for ScriptSource<R> {
    fn read_line(&mut self, _prompt: &str) -> Result<Option<String>> {
        let mut buf = String::new();
        if self.reader.read_line(&mut buf)? == 0 {
            return Ok(None);
        }

        //Strip the line terminator only, other whitespace is significant
        if buf.ends_with('\n') {
            buf.pop();
            if buf.ends_with('\r') {
                buf.pop();
            }
        }
        Ok(Some(buf))
    }
}
