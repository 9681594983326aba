use crate::{
    ast::Expr,
    interpreter::{
        cursor::TokenStream,
        lexer::Token,
        parser::{
            core::{ParseResult, nested},
            unary::parse_primary,
        },
    },
};

/// Parses whatever binary chain follows an operand.
///
/// The first binary operator decides the chain: after `&` only further `&`
/// are accepted, after `|` only further `|`. Any other token ends the
/// expression without being consumed.
///
/// Grammar:
/// ```text
///     suffix := ("&" primary)*
///             | ("|" primary)*
/// ```
/// # Parameters
/// - `tokens`: Cursor positioned right after `lhs`.
/// - `lhs`: The operand already parsed.
///
/// # Returns
/// `lhs` itself, or a right-nested `Expr::Conjunction` or
/// `Expr::Disjunction` chain starting with it.
pub fn parse_suffix<I>(tokens: &mut TokenStream<I>, lhs: Expr) -> ParseResult<Expr>
    where I: Iterator<Item = Token>
{
    let (operator, join): (Token, fn(Expr, Expr) -> Expr) = match tokens.peek() {
        Ok(Token::Conjunction) => (Token::Conjunction, Expr::conjunction),
        Ok(Token::Disjunction) => (Token::Disjunction, Expr::disjunction),
        _ => return Ok(lhs),
    };
    parse_chain(tokens, lhs, &operator, join)
}

/// Parses a right-associative chain of a single binary operator.
///
/// `a & b & c` parses as `a & (b & c)`. Each operand after the first is
/// one nesting level deeper than the one before it.
fn parse_chain<I>(tokens: &mut TokenStream<I>,
                  lhs: Expr,
                  operator: &Token,
                  join: fn(Expr, Expr) -> Expr)
                  -> ParseResult<Expr>
    where I: Iterator<Item = Token>
{
    if !tokens.advance_if(operator) {
        return Ok(lhs);
    }
    let rhs = nested(tokens, |tokens| {
                  let rhs = parse_primary(tokens)?;
                  parse_chain(tokens, rhs, operator, join)
              })?;
    Ok(join(lhs, rhs))
}
