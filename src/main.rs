use std::io::{self, IsTerminal};

use env_logger::Env;
use log::error;

use mysh::{
    input_handler::{Interactive, LineSource, ScriptSource},
    Config, Shell, ShellState,
};

fn main() {
    env_logger::Builder::from_env(Env::new().filter_or("MYSH_LOG", "off")).init();

    let config = Config::new();
    let state = match ShellState::new() {
        Ok(state) => state,
        Err(e) => {
            eprintln!("mysh: cannot determine working directory: {}", e);
            std::process::exit(1);
        }
    };

    let mut source: Box<dyn LineSource> = if io::stdin().is_terminal() {
        Box::new(Interactive::new(&config))
    } else {
        Box::new(ScriptSource::new(io::stdin().lock()))
    };

    let mut shell = Shell::new(state, config);
    let mut stdout = io::stdout();

    if let Err(e) = shell.run(source.as_mut(), &mut stdout) {
        error!("input loop stopped: {:?}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
