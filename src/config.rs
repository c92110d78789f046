use std::time::Duration;

pub const DEFAULT_PROMPT: &str = "# ";
/// How long `background` holds the prompt back so the child's startup output lands first.
pub const DEFAULT_BACKGROUND_GRACE: Duration = Duration::from_secs(1);

pub struct Config {
    line_editor_config: rustyline::Config,
    prompt: String,
    background_grace: Duration,
}

impl Config {
    pub fn new() -> Config {
        Config::from_default()
    }

    pub fn from_default() -> Config {
        // Editor recall only; the `lastcommands` history lives in ShellState
        let line_editor_config = rustyline::config::Builder::new()
            .auto_add_history(true)
            .indent_size(4)
            .completion_type(rustyline::CompletionType::List)
            .max_history_size(2048)
            .build();

        Config {
            line_editor_config,
            prompt: String::from(DEFAULT_PROMPT),
            background_grace: DEFAULT_BACKGROUND_GRACE,
        }
    }

    pub fn with_prompt(mut self, prompt: &str) -> Config {
        self.prompt = String::from(prompt);
        self
    }

    pub fn with_background_grace(mut self, grace: Duration) -> Config {
        self.background_grace = grace;
        self
    }

    pub fn line_editor_config(&self) -> &rustyline::Config {
        &self.line_editor_config
    }
    pub fn prompt(&self) -> &str {
        &self.prompt
    }
    pub fn background_grace(&self) -> Duration {
        self.background_grace
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::from_default()
    }
}
