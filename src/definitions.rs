use std::{collections::BTreeMap, fs, path::Path};

use crate::{
    error::DefinitionError,
    interpreter::lexer::{Token, tokenize},
    util::targets,
};

/// Parses one atom definition of the form `name = 1` or `name = 0`.
///
/// Whitespace around the name, the `=` and the value is ignored. The name
/// must be exactly one atom as the lexer sees it.
///
/// # Errors
/// - [`DefinitionError::Malformed`] if there is no `=` or the left side is
///   not a single atom name.
/// - [`DefinitionError::InvalidTruthValue`] if the value is not `1` or `0`.
///
/// # Example
/// ```
/// use proplog::definitions::parse_definition;
///
/// assert_eq!(parse_definition("rain = 1"), Ok(("rain".to_owned(), true)));
/// assert_eq!(parse_definition("sun=0"), Ok(("sun".to_owned(), false)));
/// assert!(parse_definition("sun = yes").is_err());
/// ```
pub fn parse_definition(line: &str) -> Result<(String, bool), DefinitionError> {
    let malformed = || DefinitionError::Malformed { line: line.to_owned() };

    let (name, value) = line.split_once('=').ok_or_else(malformed)?;
    let name = match tokenize(name).as_deref() {
        Ok([Token::Atom(name)]) => name.clone(),
        _ => return Err(malformed()),
    };

    match value.trim() {
        "1" => Ok((name, true)),
        "0" => Ok((name, false)),
        other => Err(DefinitionError::InvalidTruthValue { name,
                                                          value: other.to_owned() }),
    }
}

/// Reads atom definitions, one per line, up to the first blank line.
///
/// Lines after the blank line are left in `lines`, so a caller passing
/// `lines.by_ref()` can continue reading formulas. A name defined twice takes
/// its last value.
///
/// # Errors
/// Returns the first [`DefinitionError`] encountered.
///
/// # Example
/// ```
/// use proplog::definitions::read_definitions;
///
/// let mut lines = ["a = 1", "b = 0", "", "a & b"].into_iter();
/// let env = read_definitions(lines.by_ref()).unwrap();
/// assert_eq!(env.get("a"), Some(&true));
/// assert_eq!(env.get("b"), Some(&false));
/// assert_eq!(lines.next(), Some("a & b"));
/// ```
pub fn read_definitions<I, S>(lines: I) -> Result<BTreeMap<String, bool>, DefinitionError>
    where I: IntoIterator<Item = S>,
          S: AsRef<str>
{
    let mut env = BTreeMap::new();
    for line in lines {
        let line = line.as_ref();
        if line.trim().is_empty() {
            break;
        }
        let (name, value) = parse_definition(line)?;
        env.insert(name, value);
    }
    Ok(env)
}

/// Builds an environment from an optional definitions file and a list of
/// definitions given directly.
///
/// The file is read like [`read_definitions`] reads a session, up to its first
/// blank line. Direct definitions are applied afterwards and override the
/// file's.
///
/// # Errors
/// - [`DefinitionError::UnreadableFile`] if `file` cannot be read.
/// - The first [`DefinitionError`] in the file.
///
/// # Example
/// ```
/// use proplog::definitions::build_environment;
///
/// let env = build_environment(None, &[("rain".to_owned(), true)]).unwrap();
/// assert_eq!(env.get("rain"), Some(&true));
/// ```
pub fn build_environment(file: Option<&Path>,
                         defines: &[(String, bool)])
                         -> Result<BTreeMap<String, bool>, DefinitionError> {
    let mut env = match file {
        Some(path) => {
            let contents =
                fs::read_to_string(path).map_err(|_| DefinitionError::UnreadableFile { path: path.to_owned() })?;
            let env = read_definitions(contents.lines())?;
            log::debug!(target: targets::SESSION,
                        "Read {} definitions from {}",
                        env.len(),
                        path.display());
            env
        },
        None => BTreeMap::new(),
    };
    env.extend(defines.iter().cloned());
    Ok(env)
}
