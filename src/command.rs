use std::{collections::BTreeMap, io::Write};

use prettytable::{Cell, Row, Table, format::Alignment};

use crate::{Formula, error::Error, interpreter::evaluator::table::truth_table, util::targets};

/// What a one-shot run prints for its formula.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// The formula's value under these definitions, as `1` or `0`.
    Evaluate(BTreeMap<String, bool>),
    /// The canonical rendering.
    Render,
    /// The truth table, followed by a note if the formula is a tautology or a
    /// contradiction.
    Table,
}

/// Parses `source` and writes the result of `action` to `output`.
///
/// # Errors
/// Returns an [`Error`] naming the phase that failed, or the I/O error of
/// writing to `output`.
///
/// # Example
/// ```
/// use proplog::command::{Action, run_formula};
///
/// let mut output = Vec::new();
/// run_formula("((a)) & (b & c)", &Action::Render, &mut output).unwrap();
/// assert_eq!(output, b"a & b & c\n");
/// ```
pub fn run_formula<W>(source: &str,
                      action: &Action,
                      mut output: W)
                      -> Result<(), Box<dyn std::error::Error>>
    where W: Write
{
    let formula = Formula::parse(source)?;
    log::debug!(target: targets::SESSION, "Running {action:?} on {formula}");

    match action {
        Action::Evaluate(env) => {
            let value = formula.evaluate(env).map_err(Error::from)?;
            writeln!(output, "{}", u8::from(value))?;
        },
        Action::Render => writeln!(output, "{formula}")?,
        Action::Table => write_truth_table(&formula, &mut output)?,
    }
    Ok(())
}

fn write_truth_table<W>(formula: &Formula,
                        output: &mut W)
                        -> Result<(), Box<dyn std::error::Error>>
    where W: Write
{
    let table_data = truth_table(formula.expr()).map_err(Error::from)?;

    let mut table = Table::new();
    let mut titles = Row::new(table_data.atoms.iter().map(|atom| Cell::new(atom)).collect());
    titles.add_cell(Cell::new(&formula.to_string()));
    table.set_titles(titles);

    for row in &table_data.rows {
        let mut cells = Row::new(row.values.iter().map(|&value| truth_cell(value)).collect());
        cells.add_cell(truth_cell(row.result));
        table.add_row(cells);
    }
    table.print(output)?;

    if table_data.is_tautology() {
        writeln!(output, "This is a tautology.")?;
    } else if !table_data.is_satisfiable() {
        writeln!(output, "This is a contradiction.")?;
    }
    Ok(())
}

fn truth_cell(value: bool) -> Cell {
    let mut cell = Cell::new(if value { "1" } else { "0" });
    cell.align(Alignment::CENTER);
    cell
}
