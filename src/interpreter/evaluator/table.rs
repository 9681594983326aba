use std::collections::BTreeMap;

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::evaluator::core::EvalResult,
};

/// The largest number of atoms a truth table enumerates (`2^16` rows).
pub const MAX_TABLE_ATOMS: usize = 16;

/// A formula's value under every assignment of its atoms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TruthTable {
    /// The formula's atoms, in sorted order. Column order of every row.
    pub atoms: Vec<String>,
    /// One row per assignment.
    pub rows:  Vec<TruthRow>,
}

/// One assignment and the formula's value under it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TruthRow {
    /// The value of each atom, in the order of [`TruthTable::atoms`].
    pub values: Vec<bool>,
    /// The formula's value.
    pub result: bool,
}

impl TruthTable {
    /// Whether the formula is true under every assignment.
    #[must_use]
    pub fn is_tautology(&self) -> bool {
        self.rows.iter().all(|row| row.result)
    }

    /// Whether the formula is true under at least one assignment.
    #[must_use]
    pub fn is_satisfiable(&self) -> bool {
        self.rows.iter().any(|row| row.result)
    }
}

/// Evaluates `expr` under every assignment of its atoms.
///
/// Rows count upwards in binary: the first row sets every atom to false and
/// the last atom toggles fastest.
///
/// # Errors
/// Returns [`RuntimeError::TooManyAtoms`] when `expr` has more than
/// [`MAX_TABLE_ATOMS`] distinct atoms.
///
/// # Example
/// ```
/// use proplog::{Formula, interpreter::evaluator::table::truth_table};
///
/// let formula: Formula = "a | !a".parse().unwrap();
/// let table = truth_table(formula.expr()).unwrap();
/// assert_eq!(table.rows.len(), 2);
/// assert!(table.is_tautology());
/// ```
pub fn truth_table(expr: &Expr) -> EvalResult<TruthTable> {
    let atoms: Vec<String> = expr.atoms().into_iter().map(str::to_owned).collect();
    if atoms.len() > MAX_TABLE_ATOMS {
        return Err(RuntimeError::TooManyAtoms { count: atoms.len(),
                                                max:   MAX_TABLE_ATOMS, });
    }

    let mut rows = Vec::with_capacity(1 << atoms.len());
    for assignment in 0..1_usize << atoms.len() {
        let values: Vec<bool> = (0..atoms.len()).rev()
                                                .map(|bit| (assignment >> bit) & 1 == 1)
                                                .collect();
        let env: BTreeMap<String, bool> =
            atoms.iter().cloned().zip(values.iter().copied()).collect();
        let result = expr.evaluate(&env)?;
        rows.push(TruthRow { values, result });
    }

    Ok(TruthTable { atoms, rows })
}
