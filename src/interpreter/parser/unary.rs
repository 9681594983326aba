use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        cursor::TokenStream,
        lexer::Token,
        parser::core::{GROUP_CLOSE, OPERAND, ParseResult, nested, next_token, parse_expression},
    },
    util::targets,
};

/// Parses a primary expression.
///
/// Primary expressions are the operands of every operator:
/// - atoms
/// - negations
/// - parenthesized groups
///
/// Grammar:
/// ```text
///     primary := atom
///              | "!" primary
///              | "(" expression ")"
/// ```
/// # Parameters
/// - `tokens`: Cursor positioned at the start of an operand.
///
/// # Returns
/// The parsed operand, or a `ParseError` if the next token cannot start one.
pub(crate) fn parse_primary<I>(tokens: &mut TokenStream<I>) -> ParseResult<Expr>
    where I: Iterator<Item = Token>
{
    match next_token(tokens, OPERAND)? {
        Token::Atom(name) => Ok(Expr::Atom(name)),
        Token::Negation => nested(tokens, parse_negation),
        Token::GroupOpen => nested(tokens, parse_group),
        found => {
            log::trace!(target: targets::PARSER, "No operand starts with {found:?}");
            Err(ParseError::UnexpectedToken { expected: OPERAND,
                                              found })
        },
    }
}

/// Parses the operand of a prefix negation.
///
/// The `!` has already been consumed. Negation binds tighter than both binary
/// operators, so only a single primary follows: `!a & b` negates `a` alone.
fn parse_negation<I>(tokens: &mut TokenStream<I>) -> ParseResult<Expr>
    where I: Iterator<Item = Token>
{
    let operand = parse_primary(tokens)?;
    Ok(Expr::negation(operand))
}

/// Parses a parenthesized group.
///
/// The `(` has already been consumed. The enclosed expression is parsed with
/// the full expression grammar and must be followed by `)`. Since a chain
/// never switches operator, `(a & b | c)` fails here: the group expects `)`
/// and finds `|`.
///
/// Grammar: `group := "(" expression ")"`
///
/// # Returns
/// The inner expression as-is (no wrapper node).
fn parse_group<I>(tokens: &mut TokenStream<I>) -> ParseResult<Expr>
    where I: Iterator<Item = Token>
{
    let expr = parse_expression(tokens)?;
    match next_token(tokens, GROUP_CLOSE)? {
        Token::GroupClose => Ok(expr),
        found => Err(ParseError::UnexpectedToken { expected: GROUP_CLOSE,
                                                   found }),
    }
}
