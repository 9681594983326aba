use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::evaluator::environment::Environment,
    util::targets,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Evaluates an expression against an environment.
///
/// Both operands of a binary operator are always evaluated, left first, so
/// an undefined atom is reported wherever it occurs in the tree, even when
/// the other operand already decides the result.
///
/// # Errors
/// Returns [`RuntimeError::UndefinedAtom`] for the first atom, in evaluation
/// order, that `env` does not define.
///
/// # Example
/// ```
/// use std::collections::HashMap;
///
/// use proplog::{ast::Expr, error::RuntimeError, evaluate};
///
/// let expr = Expr::conjunction(Expr::atom("a"), Expr::atom("b"));
/// let env = HashMap::from([("a".to_owned(), true), ("b".to_owned(), false)]);
/// assert_eq!(evaluate(&expr, &env), Ok(false));
///
/// let env = HashMap::from([("a".to_owned(), false)]);
/// assert_eq!(evaluate(&expr, &env),
///            Err(RuntimeError::UndefinedAtom { name: "b".to_owned() }));
/// ```
pub fn evaluate<E>(expr: &Expr, env: &E) -> EvalResult<bool>
    where E: Environment + ?Sized
{
    match expr {
        Expr::Atom(name) => match env.lookup(name) {
            Some(value) => Ok(value),
            None => {
                log::debug!(target: targets::EVALUATOR, "Atom '{name}' is undefined");
                Err(RuntimeError::UndefinedAtom { name: name.clone() })
            },
        },
        Expr::Negation(operand) => Ok(!evaluate(operand, env)?),
        Expr::Conjunction(left, right) => {
            let left = evaluate(left, env)?;
            let right = evaluate(right, env)?;
            Ok(left && right)
        },
        Expr::Disjunction(left, right) => {
            let left = evaluate(left, env)?;
            let right = evaluate(right, env)?;
            Ok(left || right)
        },
    }
}

impl Expr {
    /// Evaluates this expression against `env`.
    ///
    /// # Errors
    /// See [`evaluate`].
    pub fn evaluate<E>(&self, env: &E) -> EvalResult<bool>
        where E: Environment + ?Sized
    {
        evaluate(self, env)
    }
}
