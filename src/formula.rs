use std::{collections::BTreeSet, fmt, str::FromStr};

use crate::{
    ast::Expr,
    error::{Error, ParseError},
    interpreter::{
        evaluator::{core::EvalResult, environment::Environment},
        lexer::tokenize,
        parser::core::parse,
    },
    util::targets,
};

/// A formula parsed from a complete line of text.
///
/// Unlike [`parse`], which stops after one homogeneous operator chain and
/// hands back the rest, building a `Formula` requires every token to be
/// consumed.
///
/// # Example
/// ```
/// use std::collections::BTreeMap;
///
/// use proplog::Formula;
///
/// let formula: Formula = "!a & (b | c)".parse().unwrap();
/// let env = BTreeMap::from([("a".to_owned(), false),
///                           ("b".to_owned(), false),
///                           ("c".to_owned(), true)]);
/// assert_eq!(formula.evaluate(&env), Ok(true));
/// assert_eq!(formula.to_string(), "!a & (b | c)");
///
/// assert!("a & b | c".parse::<Formula>().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formula {
    expr: Expr,
}

impl Formula {
    /// Tokenizes and parses `source`, rejecting leftover tokens.
    ///
    /// # Errors
    /// - [`Error::Tokenize`] if the text contains an unrecognized character.
    /// - [`Error::Parse`] if the tokens do not form a formula, or if tokens
    ///   remain after it ([`ParseError::UnexpectedTrailingTokens`]).
    pub fn parse(source: &str) -> Result<Self, Error> {
        let tokens = tokenize(source)?;
        let (expr, mut rest) = parse(tokens)?;
        if let Ok(token) = rest.advance() {
            log::debug!(target: targets::PARSER, "Trailing tokens after {expr:?}, starting at {token:?}");
            return Err(ParseError::UnexpectedTrailingTokens { token }.into());
        }
        Ok(Self { expr })
    }

    /// The syntax tree of this formula.
    #[must_use]
    pub const fn expr(&self) -> &Expr {
        &self.expr
    }

    /// Consumes the formula, returning its syntax tree.
    #[must_use]
    pub fn into_expr(self) -> Expr {
        self.expr
    }

    /// The distinct atom names of this formula, in sorted order.
    #[must_use]
    pub fn atoms(&self) -> BTreeSet<&str> {
        self.expr.atoms()
    }

    /// Evaluates this formula against `env`.
    ///
    /// # Errors
    /// Returns [`RuntimeError::UndefinedAtom`](crate::error::RuntimeError)
    /// if `env` lacks one of the formula's atoms.
    pub fn evaluate<E>(&self, env: &E) -> EvalResult<bool>
        where E: Environment + ?Sized
    {
        self.expr.evaluate(env)
    }
}

impl FromStr for Formula {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<Expr> for Formula {
    fn from(expr: Expr) -> Self {
        Self { expr }
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.expr.fmt(f)
    }
}

/// Parses `source` as a complete formula and evaluates it against `env`.
///
/// # Errors
/// Returns the first error of whichever phase fails: tokenizing, parsing
/// (including leftover tokens) or evaluating.
///
/// # Example
/// ```
/// use std::collections::HashMap;
///
/// use proplog::{error::Error, evaluate_formula};
///
/// let env = HashMap::from([("rain".to_owned(), true), ("sun".to_owned(), false)]);
/// assert_eq!(evaluate_formula("rain & !sun", &env), Ok(true));
/// assert!(matches!(evaluate_formula("rain & snow", &env), Err(Error::Runtime(_))));
/// ```
pub fn evaluate_formula<E>(source: &str, env: &E) -> Result<bool, Error>
    where E: Environment + ?Sized
{
    Ok(Formula::parse(source)?.evaluate(env)?)
}
