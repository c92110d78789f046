pub mod builtins;
pub mod command;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod executor;
pub mod input_handler;
pub mod shell;
pub mod signal;
pub mod state;
pub mod tokenizer;

pub use command::CommandKind;
pub use config::Config;
pub use dispatcher::{dispatch, Flow};
pub use error::{Result, ShellError};
pub use shell::Shell;
pub use state::ShellState;
pub use tokenizer::tokenize;
