use std::fmt;

/// The closed set of commands the shell understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Unknown,
    Clear,
    Quit,
    Echo,
    WhereAmI,
    ChangeDir,
    LastCommands,
    Run,
    Background,
    Exterminate,
}

/// Name -> command lookup table. Matching is exact and case sensitive.
const COMMAND_TABLE: &[(&str, CommandKind)] = &[
    ("clear", CommandKind::Clear),
    ("quit", CommandKind::Quit),
    ("echo", CommandKind::Echo),
    ("whereami", CommandKind::WhereAmI),
    ("changedir", CommandKind::ChangeDir),
    ("lastcommands", CommandKind::LastCommands),
    ("run", CommandKind::Run),
    ("background", CommandKind::Background),
    ("exterminate", CommandKind::Exterminate),
];

impl CommandKind {
    /// Classifies the first word of a line. Never fails: unmatched words are `Unknown`.
    pub fn classify(word: &str) -> CommandKind {
        COMMAND_TABLE
            .iter()
            .find(|(name, _)| *name == word)
            .map(|(_, kind)| *kind)
            .unwrap_or(CommandKind::Unknown)
    }

    pub fn name(&self) -> &'static str {
        COMMAND_TABLE
            .iter()
            .find(|(_, kind)| kind == self)
            .map(|(name, _)| *name)
            .unwrap_or("<unknown>")
    }
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
