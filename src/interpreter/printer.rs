use std::fmt;

use crate::{ast::Expr, interpreter::lexer::Token};

/// Renders an expression in its canonical, minimally parenthesized form.
///
/// Operands are left unparenthesized ("naked") when they are atoms,
/// negations, or the same binary operator as their parent. Wherever `&` and
/// `|` meet, the inner one is grouped, so the output always parses back into
/// an equivalent tree.
///
/// # Example
/// ```
/// use proplog::{ast::Expr, render};
///
/// let expr = Expr::conjunction(Expr::atom("a"),
///                              Expr::disjunction(Expr::atom("b"), Expr::atom("c")));
/// assert_eq!(render(&expr), "a & (b | c)");
/// assert_eq!(render(&Expr::negation(expr)), "!(a & (b | c))");
/// ```
#[must_use]
pub fn render(expr: &Expr) -> String {
    expr.to_string()
}

/// Whether `operand` can be written without parentheses under `parent`.
const fn is_naked_in(operand: &Expr, parent: &Expr) -> bool {
    matches!((parent, operand),
             (_, Expr::Atom(_) | Expr::Negation(_))
             | (Expr::Conjunction(..), Expr::Conjunction(..))
             | (Expr::Disjunction(..), Expr::Disjunction(..)))
}

fn write_operand(f: &mut fmt::Formatter<'_>, operand: &Expr, parent: &Expr) -> fmt::Result {
    if is_naked_in(operand, parent) {
        write!(f, "{operand}")
    } else {
        write!(f, "{}{operand}{}", Token::GroupOpen, Token::GroupClose)
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (left, operator, right) = match self {
            Self::Atom(name) => return f.write_str(name),
            Self::Negation(operand) => {
                write!(f, "{}", Token::Negation)?;
                return write_operand(f, operand, self);
            },
            Self::Conjunction(left, right) => (left, Token::Conjunction, right),
            Self::Disjunction(left, right) => (left, Token::Disjunction, right),
        };
        write_operand(f, left, self)?;
        write!(f, " {operator} ")?;
        write_operand(f, right, self)
    }
}
