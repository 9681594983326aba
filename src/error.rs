use std::fmt;

/// Definition errors.
///
/// Raised while reading `name = 1` / `name = 0` atom definitions.
pub mod definition_error;
/// Parsing errors.
///
/// Defines all error types that can occur while building a syntax tree from
/// tokens: unexpected tokens, premature end of input, tokens left over after
/// a complete formula, and nesting too deep to parse.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation.
pub mod runtime_error;
/// Tokenization errors.
///
/// Raised by the lexer at the first character no token matches.
pub mod tokenize_error;

pub use definition_error::DefinitionError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
pub use tokenize_error::TokenizeError;

/// Any error the crate can report, tagged with the phase that raised it.
///
/// Each phase keeps its own error type; this enum lets callers that run
/// several phases in a row propagate with `?` and still match on the cause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The lexer met input it does not recognize.
    Tokenize(TokenizeError),
    /// The token sequence is not a well-formed formula.
    Parse(ParseError),
    /// Evaluation failed.
    Runtime(RuntimeError),
    /// An atom definition is malformed.
    Definition(DefinitionError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tokenize(e) => e.fmt(f),
            Self::Parse(e) => e.fmt(f),
            Self::Runtime(e) => e.fmt(f),
            Self::Definition(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Tokenize(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
            Self::Definition(e) => Some(e),
        }
    }
}

impl From<TokenizeError> for Error {
    fn from(value: TokenizeError) -> Self {
        Self::Tokenize(value)
    }
}

impl From<ParseError> for Error {
    fn from(value: ParseError) -> Self {
        Self::Parse(value)
    }
}

impl From<RuntimeError> for Error {
    fn from(value: RuntimeError) -> Self {
        Self::Runtime(value)
    }
}

impl From<DefinitionError> for Error {
    fn from(value: DefinitionError) -> Self {
        Self::Definition(value)
    }
}
