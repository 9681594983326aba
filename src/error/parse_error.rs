use crate::interpreter::lexer::{Token, TokenKind};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during parsing.
pub enum ParseError {
    /// Found a token that none of the expected alternatives accepts.
    UnexpectedToken {
        /// The token kinds that would have been accepted.
        expected: &'static [TokenKind],
        /// The token encountered.
        found:    Token,
    },
    /// Reached the end of input while a token was still required.
    UnexpectedEndOfInput {
        /// The token kinds that would have been accepted.
        expected: &'static [TokenKind],
    },
    /// Found extra tokens after a complete formula.
    UnexpectedTrailingTokens {
        /// The first token left over.
        token: Token,
    },
    /// Negations, groups or chains nest deeper than the parser accepts.
    TooDeeplyNested {
        /// The deepest nesting accepted.
        max: usize,
    },
}

impl ParseError {
    /// The token kinds the parser would have accepted, if any.
    #[must_use]
    pub const fn expected(&self) -> &'static [TokenKind] {
        match self {
            Self::UnexpectedToken { expected, .. } | Self::UnexpectedEndOfInput { expected } => {
                *expected
            },
            Self::UnexpectedTrailingTokens { .. } | Self::TooDeeplyNested { .. } => &[],
        }
    }
}

/// Writes `a`, `a or b`, `a, b or c`.
fn write_alternatives(f: &mut std::fmt::Formatter<'_>,
                      kinds: &[TokenKind])
                      -> std::fmt::Result {
    for (i, kind) in kinds.iter().enumerate() {
        if i > 0 {
            let separator = if i + 1 == kinds.len() { " or " } else { ", " };
            f.write_str(separator)?;
        }
        write!(f, "{kind}")?;
    }
    Ok(())
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { expected, found } => {
                f.write_str("Error: Expected ")?;
                write_alternatives(f, expected)?;
                write!(f, " but found '{found}'.")
            },
            Self::UnexpectedEndOfInput { expected } => {
                f.write_str("Error: Expected ")?;
                write_alternatives(f, expected)?;
                f.write_str(" but found end of input.")
            },
            Self::UnexpectedTrailingTokens { token } => write!(f,
                                                               "Error: Extra tokens after formula, starting at '{token}'. Group mixed '&' and '|' with parentheses."),
            Self::TooDeeplyNested { max } => {
                write!(f, "Error: Formula nests more than {max} levels deep.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
