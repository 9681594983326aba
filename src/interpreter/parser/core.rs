use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        cursor::{EndOfInput, TokenStream},
        lexer::{Token, TokenKind},
        parser::{binary::parse_suffix, unary::parse_primary},
    },
    util::targets,
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Token kinds that can start an operand: `atom`, `!` or `(`.
pub const OPERAND: &[TokenKind] = &[TokenKind::Atom, TokenKind::Negation, TokenKind::GroupOpen];
/// The only token that can close a group.
pub const GROUP_CLOSE: &[TokenKind] = &[TokenKind::GroupClose];
/// The deepest nesting of negations, groups and chain operands accepted.
///
/// Every level is a recursive call in the parser and a level of the syntax
/// tree that evaluation and rendering walk recursively.
pub const MAX_DEPTH: usize = 256;

/// Parses a formula from a token sequence.
///
/// Returns the syntax tree together with the cursor positioned after the
/// last token the grammar consumed. The parser stops after one homogeneous
/// chain of `&` or `|`, so `a & b | c` yields `a & b` and leaves `| c` in the
/// cursor. Deciding whether leftover tokens are an error is up to the
/// caller; [`Formula::parse`](crate::Formula::parse) treats them as one.
///
/// # Errors
/// Returns a [`ParseError`] naming the expected token kinds and what was
/// found instead, either a token or the end of input, or
/// [`ParseError::TooDeeplyNested`] past [`MAX_DEPTH`] levels of nesting.
///
/// # Example
/// ```
/// use proplog::{ast::Expr, interpreter::lexer::Token, parse, tokenize};
///
/// let (expr, mut rest) = parse(tokenize("a & b | c").unwrap()).unwrap();
/// assert_eq!(expr, Expr::conjunction(Expr::atom("a"), Expr::atom("b")));
/// assert_eq!(rest.next(), Some(Token::Disjunction));
/// ```
pub fn parse<T>(tokens: T) -> ParseResult<(Expr, TokenStream<T::IntoIter>)>
    where T: IntoIterator<Item = Token>
{
    let mut tokens = TokenStream::new(tokens);
    let expr = parse_expression(&mut tokens)?;
    log::debug!(target: targets::PARSER, "Parsed {expr:?}");
    Ok((expr, tokens))
}

/// Parses one expression.
///
/// Grammar: `expression := primary suffix`
///
/// # Parameters
/// - `tokens`: Cursor positioned at the start of an operand.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<I>(tokens: &mut TokenStream<I>) -> ParseResult<Expr>
    where I: Iterator<Item = Token>
{
    let primary = parse_primary(tokens)?;
    parse_suffix(tokens, primary)
}

/// Consumes the next token, turning the end of input into a parse error that
/// lists `expected`.
pub(in crate::interpreter::parser) fn next_token<I>(tokens: &mut TokenStream<I>,
                                                    expected: &'static [TokenKind])
                                                    -> ParseResult<Token>
    where I: Iterator<Item = Token>
{
    tokens.advance()
          .map_err(|EndOfInput| ParseError::UnexpectedEndOfInput { expected })
}

/// Runs `parse` one nesting level deeper.
///
/// # Errors
/// Returns [`ParseError::TooDeeplyNested`] without calling `parse` if the
/// new level would exceed [`MAX_DEPTH`].
pub(in crate::interpreter::parser) fn nested<I, T, F>(tokens: &mut TokenStream<I>,
                                                      parse: F)
                                                      -> ParseResult<T>
    where I: Iterator<Item = Token>,
          F: FnOnce(&mut TokenStream<I>) -> ParseResult<T>
{
    if tokens.descend() > MAX_DEPTH {
        log::debug!(target: targets::PARSER, "Nesting exceeds {MAX_DEPTH} levels");
        return Err(ParseError::TooDeeplyNested { max: MAX_DEPTH });
    }
    let result = parse(tokens);
    tokens.ascend();
    result
}
