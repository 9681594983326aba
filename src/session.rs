use std::{
    collections::BTreeMap,
    io::{self, BufRead, Write},
};

use crate::{definitions::parse_definition, formula::evaluate_formula, util::targets};

/// Runs a line-oriented session.
///
/// The input starts with atom definitions (`name = 1` or `name = 0`), one per
/// line, ended by a blank line. Every following non-blank line is a formula;
/// for each one the session writes `1`, `0` or the error message. A bad line,
/// definition or formula, is reported and skipped; it never ends the session.
///
/// # Errors
/// Returns an I/O error if reading `input` or writing `output` fails.
///
/// # Example
/// ```
/// use proplog::session::run_session;
///
/// let input = "a = 1\nb = 0\n\na & b\na | b\na & c\n";
/// let mut output = Vec::new();
/// run_session(input.as_bytes(), &mut output).unwrap();
/// assert_eq!(String::from_utf8(output).unwrap(),
///            "0\n1\nError: Undefined atom 'c'.\n");
/// ```
pub fn run_session<R, W>(input: R, mut output: W) -> io::Result<()>
    where R: BufRead,
          W: Write
{
    let mut lines = input.lines();
    let mut env = BTreeMap::new();

    for line in lines.by_ref() {
        let line = line?;
        if line.trim().is_empty() {
            break;
        }
        match parse_definition(&line) {
            Ok((name, value)) => {
                log::debug!(target: targets::SESSION, "Defined {name} = {value}");
                env.insert(name, value);
            },
            Err(e) => writeln!(output, "{e}")?,
        }
    }

    for line in lines {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match evaluate_formula(&line, &env) {
            Ok(value) => writeln!(output, "{}", u8::from(value))?,
            Err(e) => writeln!(output, "{e}")?,
        }
    }

    Ok(())
}
