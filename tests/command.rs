use std::{collections::BTreeMap, path::Path};

use proplog::{
    command::{Action, run_formula},
    definitions::build_environment,
    error::{DefinitionError, Error, ParseError, RuntimeError},
    interpreter::parser::core::MAX_DEPTH,
};

const WEATHER: &str = "tests/definitions/weather.txt";

fn define(pairs: &[(&str, bool)]) -> Vec<(String, bool)> {
    pairs.iter().map(|&(name, value)| (name.to_owned(), value)).collect()
}

fn run(source: &str, action: &Action) -> Result<String, String> {
    let mut output = Vec::new();
    match run_formula(source, action, &mut output) {
        Ok(()) => Ok(String::from_utf8(output).unwrap()),
        Err(e) => Err(e.to_string()),
    }
}

/// Runs a formula that must fail and returns the phase error it failed with.
fn run_failure(source: &str, action: &Action) -> Error {
    let mut output = Vec::new();
    let Err(error) = run_formula(source, action, &mut output) else {
        panic!("Formula {source:?} was expected to fail");
    };
    assert!(output.is_empty(), "Failed run wrote {output:?}");
    match error.downcast::<Error>() {
        Ok(error) => *error,
        Err(e) => panic!("Formula {source:?} failed outside the formula phases: {e}"),
    }
}

#[test]
fn environment_reads_the_definitions_file() {
    let env = build_environment(Some(Path::new(WEATHER)), &[]).unwrap();
    assert_eq!(env,
               BTreeMap::from([("rain".to_owned(), true),
                               ("sun".to_owned(), false),
                               ("wind".to_owned(), true)]));
}

#[test]
fn defines_override_the_definitions_file() {
    let env = build_environment(Some(Path::new(WEATHER)),
                                &define(&[("rain", false), ("snow", true)])).unwrap();
    assert_eq!(env.get("rain"), Some(&false));
    assert_eq!(env.get("sun"), Some(&false));
    assert_eq!(env.get("snow"), Some(&true));

    let env = build_environment(None, &define(&[("a", true), ("a", false)])).unwrap();
    assert_eq!(env, BTreeMap::from([("a".to_owned(), false)]));
}

#[test]
fn environment_reports_unusable_files() {
    let missing = Path::new("tests/definitions/missing.txt");
    let error = build_environment(Some(missing), &define(&[("a", true)])).unwrap_err();
    assert_eq!(error,
               DefinitionError::UnreadableFile { path: missing.to_owned() });
    assert!(error.to_string().contains("missing.txt"), "{error}");

    let error = build_environment(Some(Path::new("tests/definitions/malformed.txt")), &[]);
    assert_eq!(error,
               Err(DefinitionError::InvalidTruthValue { name:  "sun".to_owned(),
                                                        value: "maybe".to_owned(), }));
}

#[test]
fn evaluate_prints_one_or_zero() {
    let env = build_environment(Some(Path::new(WEATHER)), &[]).unwrap();
    let action = Action::Evaluate(env);
    assert_eq!(run("rain & !sun", &action).as_deref(), Ok("1\n"));
    assert_eq!(run("sun | !wind", &action).as_deref(), Ok("0\n"));
}

#[test]
fn render_prints_the_canonical_form() {
    assert_eq!(run("!(a) & ((b | c))", &Action::Render).as_deref(),
               Ok("!a & (b | c)\n"));
}

#[test]
fn render_does_not_need_definitions() {
    assert_eq!(run("undefined_atom", &Action::Render).as_deref(),
               Ok("undefined_atom\n"));
}

#[test]
fn table_prints_every_assignment() {
    let output = run("a & !b", &Action::Table).unwrap();
    assert!(output.contains("a & !b"), "{output}");
    let results: Vec<char> = output.lines()
                                   .filter(|line| line.starts_with('|'))
                                   .skip(1)
                                   .filter_map(|line| {
                                       line.trim_end_matches('|')
                                           .trim_end()
                                           .chars()
                                           .last()
                                   })
                                   .collect();
    assert_eq!(results, ['0', '0', '1', '0']);
    assert!(!output.contains("tautology"), "{output}");
    assert!(!output.contains("contradiction"), "{output}");
}

#[test]
fn table_names_tautologies_and_contradictions() {
    let output = run("a | !a", &Action::Table).unwrap();
    assert!(output.ends_with("This is a tautology.\n"), "{output}");

    let output = run("a & !a", &Action::Table).unwrap();
    assert!(output.ends_with("This is a contradiction.\n"), "{output}");
}

#[test]
fn failures_are_reported_instead_of_printed() {
    let env = Action::Evaluate(BTreeMap::from([("a".to_owned(), true)]));

    assert!(matches!(run_failure("a $ b", &env), Error::Tokenize(_)));
    assert_eq!(run_failure("a & b", &env),
               Error::Runtime(RuntimeError::UndefinedAtom { name: "b".to_owned() }));
    assert!(matches!(run_failure("a & a | a", &Action::Render),
                     Error::Parse(ParseError::UnexpectedTrailingTokens { .. })));

    let wide = (0..20).map(|i| format!("x{i}")).collect::<Vec<_>>().join(" | ");
    assert!(matches!(run_failure(&wide, &Action::Table),
                     Error::Runtime(RuntimeError::TooManyAtoms { count: 20, .. })));
}

#[test]
fn deep_formulas_fail_like_any_other_parse_error() {
    let deep = format!("{}a", "!".repeat(100_000));
    assert_eq!(run_failure(&deep, &Action::Render),
               Error::Parse(ParseError::TooDeeplyNested { max: MAX_DEPTH }));
}
