use std::{fmt, iter::FusedIterator};

use logos::Logos;

use crate::{error::TokenizeError, util::targets};

/// Represents a lexical token in a formula.
///
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// The operator variants double as the symbol table: their [`Display`]
/// output is the exact surface symbol, which the printer reuses.
///
/// [`Display`]: std::fmt::Display
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(skip r"\s+")]
pub enum Token {
    /// Atom names, a maximal run of word characters such as `p`, `rain` or
    /// `x_1`.
    #[regex(r"\w+", |lex| lex.slice().to_owned())]
    Atom(String),
    /// `!`
    #[token("!")]
    Negation,
    /// `&`
    #[token("&")]
    Conjunction,
    /// `|`
    #[token("|")]
    Disjunction,
    /// `(`
    #[token("(")]
    GroupOpen,
    /// `)`
    #[token(")")]
    GroupClose,
}

impl Token {
    /// Returns the payload-free kind of this token.
    #[must_use]
    pub const fn kind(&self) -> TokenKind {
        match self {
            Self::Atom(_) => TokenKind::Atom,
            Self::Negation => TokenKind::Negation,
            Self::Conjunction => TokenKind::Conjunction,
            Self::Disjunction => TokenKind::Disjunction,
            Self::GroupOpen => TokenKind::GroupOpen,
            Self::GroupClose => TokenKind::GroupClose,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Self::Atom(name) => name.as_str(),
            Self::Negation => "!",
            Self::Conjunction => "&",
            Self::Disjunction => "|",
            Self::GroupOpen => "(",
            Self::GroupClose => ")",
        };
        f.write_str(symbol)
    }
}

/// The kind of a [`Token`], without its payload.
///
/// Parse errors list the kinds that would have been accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Any atom name.
    Atom,
    /// `!`
    Negation,
    /// `&`
    Conjunction,
    /// `|`
    Disjunction,
    /// `(`
    GroupOpen,
    /// `)`
    GroupClose,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Atom => f.write_str("atom"),
            Self::Negation => f.write_str("'!'"),
            Self::Conjunction => f.write_str("'&'"),
            Self::Disjunction => f.write_str("'|'"),
            Self::GroupOpen => f.write_str("'('"),
            Self::GroupClose => f.write_str("')'"),
        }
    }
}

/// Lazily tokenizes a formula.
///
/// Whitespace between tokens is skipped. The first unrecognized input ends
/// the sequence with a [`TokenizeError`]; nothing is produced after it.
///
/// # Example
/// ```
/// use proplog::interpreter::lexer::{Lexer, Token};
///
/// let mut lexer = Lexer::new("!rain");
/// assert_eq!(lexer.next(), Some(Ok(Token::Negation)));
/// assert_eq!(lexer.next(), Some(Ok(Token::Atom("rain".to_owned()))));
/// assert_eq!(lexer.next(), None);
/// ```
pub struct Lexer<'src> {
    inner:  logos::Lexer<'src, Token>,
    failed: bool,
}

impl<'src> Lexer<'src> {
    /// Creates a lexer positioned at the start of `source`.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { inner:  Token::lexer(source),
               failed: false, }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Token, TokenizeError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        match self.inner.next()? {
            Ok(token) => {
                log::trace!(target: targets::LEXER, "{token:?} at {:?}", self.inner.span());
                Some(Ok(token))
            },
            Err(()) => {
                self.failed = true;
                let position = self.inner.span().start;
                let remaining = self.inner.source()[position..].to_owned();
                log::debug!(target: targets::LEXER, "Unrecognized input at {position}: {remaining:?}");
                Some(Err(TokenizeError { remaining, position }))
            },
        }
    }
}

impl FusedIterator for Lexer<'_> {}

/// Tokenizes a whole formula.
///
/// Empty or all-whitespace input yields an empty vector.
///
/// # Errors
/// Returns a [`TokenizeError`] carrying the unrecognized remainder of the
/// input, starting at the first character no token matches.
///
/// # Example
/// ```
/// use proplog::tokenize;
///
/// let error = tokenize("a $ b").unwrap_err();
/// assert_eq!(error.remaining, "$ b");
/// assert_eq!(error.position, 2);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Token>, TokenizeError> {
    Lexer::new(source).collect()
}
