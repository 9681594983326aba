use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while reading atom definitions.
pub enum DefinitionError {
    /// The line is not of the form `name = value`, or `name` is not a single
    /// atom name.
    Malformed {
        /// The offending line.
        line: String,
    },
    /// The value is neither `1` nor `0`.
    InvalidTruthValue {
        /// The atom being defined.
        name:  String,
        /// The rejected value.
        value: String,
    },
    /// The definitions file could not be read.
    UnreadableFile {
        /// The file that was asked for.
        path: PathBuf,
    },
}

impl std::fmt::Display for DefinitionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Malformed { line } => write!(f,
                                               "Error: Malformed definition '{line}'. Example: rain = 1"),
            Self::InvalidTruthValue { name, value } => write!(f,
                                                              "Error: Invalid truth value '{value}' for '{name}'. Expected 1 or 0."),
            Self::UnreadableFile { path } => write!(f,
                                                    "Error: Failed to read the definitions file '{}'. Perhaps this file does not exist?",
                                                    path.display()),
        }
    }
}

impl std::error::Error for DefinitionError {}
