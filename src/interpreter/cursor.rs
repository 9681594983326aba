use std::{fmt, iter::Peekable};

use crate::interpreter::lexer::Token;

/// Signals that a [`TokenStream`] has no tokens left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EndOfInput;

impl fmt::Display for EndOfInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("end of input")
    }
}

/// One-token lookahead over a sequence of tokens.
///
/// The parser consumes tokens through this cursor, strictly in order. Once
/// parsing stops, whatever the cursor still holds is the unconsumed rest of
/// the formula; the cursor iterates over it.
///
/// The cursor also counts how deeply the parser is nested in negations,
/// groups and chains, so that the parser can refuse formulas whose syntax
/// tree would be too deep to walk.
///
/// # Example
/// ```
/// use proplog::interpreter::{
///     cursor::{EndOfInput, TokenStream},
///     lexer::Token,
/// };
///
/// let mut tokens = TokenStream::new([Token::Negation]);
/// assert_eq!(tokens.peek(), Ok(&Token::Negation));
/// assert!(tokens.has_next());
/// assert_eq!(tokens.advance(), Ok(Token::Negation));
/// assert_eq!(tokens.advance(), Err(EndOfInput));
/// assert!(!tokens.has_next());
/// ```
#[derive(Debug, Clone)]
pub struct TokenStream<I>
    where I: Iterator<Item = Token>
{
    tokens: Peekable<I>,
    depth:  usize,
}

impl<I> TokenStream<I> where I: Iterator<Item = Token>
{
    /// Wraps a token sequence.
    pub fn new<T>(tokens: T) -> Self
        where T: IntoIterator<Item = Token, IntoIter = I>
    {
        Self { tokens: tokens.into_iter().peekable(),
               depth:  0, }
    }

    /// Returns the next token without consuming it.
    ///
    /// # Errors
    /// Returns [`EndOfInput`] if the stream is exhausted.
    pub fn peek(&mut self) -> Result<&Token, EndOfInput> {
        self.tokens.peek().ok_or(EndOfInput)
    }

    /// Consumes and returns the next token.
    ///
    /// # Errors
    /// Returns [`EndOfInput`] if the stream is exhausted.
    pub fn advance(&mut self) -> Result<Token, EndOfInput> {
        self.tokens.next().ok_or(EndOfInput)
    }

    /// Consumes the next token only if it equals `expected`.
    pub fn advance_if(&mut self, expected: &Token) -> bool {
        self.tokens.next_if_eq(expected).is_some()
    }

    /// Whether a following [`peek`](Self::peek) or
    /// [`advance`](Self::advance) would succeed.
    pub fn has_next(&mut self) -> bool {
        self.tokens.peek().is_some()
    }

    /// How many nested operands the parser is currently inside.
    #[must_use]
    pub const fn depth(&self) -> usize {
        self.depth
    }

    /// Enters one nesting level and returns the new depth.
    pub(crate) const fn descend(&mut self) -> usize {
        self.depth += 1;
        self.depth
    }

    /// Leaves the innermost nesting level.
    pub(crate) const fn ascend(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }
}

impl<I> Iterator for TokenStream<I> where I: Iterator<Item = Token>
{
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.tokens.next()
    }
}
