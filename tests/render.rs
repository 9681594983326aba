use std::collections::BTreeMap;

use proplog::{
    Formula,
    ast::Expr,
    definitions::{parse_definition, read_definitions},
    error::{DefinitionError, RuntimeError},
    evaluate,
    interpreter::evaluator::table::{MAX_TABLE_ATOMS, truth_table},
    parse, render, tokenize,
};

const ATOMS: [&str; 3] = ["a", "b", "c"];

/// Every tree over `ATOMS` up to the given depth.
fn trees(depth: usize) -> Vec<Expr> {
    let mut all: Vec<Expr> = ATOMS.iter().map(|&name| Expr::atom(name)).collect();
    for _ in 0..depth {
        let mut next = all.clone();
        for operand in &all {
            next.push(Expr::negation(operand.clone()));
        }
        for left in &all {
            for right in &all {
                next.push(Expr::conjunction(left.clone(), right.clone()));
                next.push(Expr::disjunction(left.clone(), right.clone()));
            }
        }
        all = next;
    }
    all
}

fn environments() -> Vec<BTreeMap<String, bool>> {
    (0..1_u8 << ATOMS.len()).map(|bits| {
                                ATOMS.iter()
                                     .enumerate()
                                     .map(|(i, &name)| (name.to_owned(), (bits >> i) & 1 == 1))
                                     .collect()
                            })
                            .collect()
}

fn reparse(src: &str) -> Expr {
    let tokens = tokenize(src).unwrap_or_else(|e| panic!("Failed to tokenize {src:?}: {e}"));
    let (expr, mut rest) = parse(tokens).unwrap_or_else(|e| panic!("Failed to parse {src:?}: {e}"));
    assert!(!rest.has_next(), "Rendering {src:?} was not fully consumed");
    expr
}

#[test]
fn renders_atoms_and_negations_naked() {
    assert_eq!(render(&Expr::atom("rain")), "rain");
    assert_eq!(render(&Expr::negation(Expr::atom("a"))), "!a");
    assert_eq!(render(&Expr::negation(Expr::negation(Expr::atom("a")))), "!!a");
}

#[test]
fn renders_mixed_operators_with_groups() {
    let a = || Expr::atom("a");
    let b = || Expr::atom("b");
    let c = || Expr::atom("c");

    assert_eq!(render(&Expr::conjunction(a(), Expr::disjunction(b(), c()))),
               "a & (b | c)");
    assert_eq!(render(&Expr::disjunction(Expr::conjunction(a(), b()), c())),
               "(a & b) | c");
    assert_eq!(render(&Expr::conjunction(Expr::conjunction(a(), b()), c())),
               "a & b & c");
    assert_eq!(render(&Expr::disjunction(a(), Expr::disjunction(b(), c()))),
               "a | b | c");
    assert_eq!(render(&Expr::negation(Expr::conjunction(a(), b()))), "!(a & b)");
    assert_eq!(render(&Expr::conjunction(Expr::negation(a()), Expr::negation(b()))),
               "!a & !b");
    assert_eq!(render(&Expr::disjunction(Expr::negation(Expr::disjunction(a(), b())), c())),
               "!(a | b) | c");
}

#[test]
fn display_matches_render() {
    let expr = Expr::disjunction(Expr::atom("x"), Expr::negation(Expr::atom("y")));
    assert_eq!(expr.to_string(), render(&expr));
    assert_eq!(Formula::from(expr.clone()).to_string(), render(&expr));
}

#[test]
fn canonical_form_drops_redundant_parentheses() {
    let formula: Formula = "((a) & ((b & c)))".parse().unwrap();
    assert_eq!(formula.to_string(), "a & b & c");

    let formula: Formula = "!(!(a)) | (b)".parse().unwrap();
    assert_eq!(formula.to_string(), "!!a | b");
}

#[test]
fn rendered_trees_evaluate_identically_after_reparsing() {
    let environments = environments();
    for expr in trees(2) {
        let rendered = render(&expr);
        let reparsed = reparse(&rendered);
        for env in &environments {
            assert_eq!(evaluate(&reparsed, env),
                       evaluate(&expr, env),
                       "{rendered:?} under {env:?}");
        }
    }
}

#[test]
fn rendering_is_idempotent() {
    for expr in trees(2) {
        let rendered = render(&expr);
        assert_eq!(render(&reparse(&rendered)), rendered);
    }
}

#[test]
fn negation_inverts_every_tree() {
    let environments = environments();
    for expr in trees(2) {
        let negated = Expr::negation(expr.clone());
        for env in &environments {
            assert_eq!(evaluate(&negated, env), evaluate(&expr, env).map(|value| !value));
        }
    }
}

#[test]
fn atoms_are_collected_once_in_order() {
    let formula: Formula = "c & (a | !c) & b & a".parse().unwrap();
    assert_eq!(formula.atoms().into_iter().collect::<Vec<_>>(), ["a", "b", "c"]);
}

#[test]
fn truth_table_enumerates_every_assignment() {
    let formula: Formula = "a & !b".parse().unwrap();
    let table = truth_table(formula.expr()).unwrap();

    assert_eq!(table.atoms, ["a", "b"]);
    let rows: Vec<(Vec<bool>, bool)> =
        table.rows.iter().map(|row| (row.values.clone(), row.result)).collect();
    assert_eq!(rows,
               [(vec![false, false], false),
                (vec![false, true], false),
                (vec![true, false], true),
                (vec![true, true], false)]);
    assert!(table.is_satisfiable());
    assert!(!table.is_tautology());
}

#[test]
fn truth_table_classifies_formulas() {
    let tautology: Formula = "a | !a".parse().unwrap();
    assert!(truth_table(tautology.expr()).unwrap().is_tautology());

    let contradiction: Formula = "a & !a".parse().unwrap();
    assert!(!truth_table(contradiction.expr()).unwrap().is_satisfiable());
}

#[test]
fn truth_table_refuses_too_many_atoms() {
    let names: Vec<String> = (0..=MAX_TABLE_ATOMS).map(|i| format!("x{i}")).collect();
    let formula: Formula = names.join(" & ").parse().unwrap();
    assert_eq!(truth_table(formula.expr()),
               Err(RuntimeError::TooManyAtoms { count: MAX_TABLE_ATOMS + 1,
                                                max:   MAX_TABLE_ATOMS, }));
}

#[test]
fn definitions_accept_both_truth_values() {
    assert_eq!(parse_definition("rain = 1"), Ok(("rain".to_owned(), true)));
    assert_eq!(parse_definition("  x_1=0  "), Ok(("x_1".to_owned(), false)));
}

#[test]
fn definitions_reject_malformed_lines() {
    for line in ["rain", "= 1", "a b = 1", "!a = 1", "a $ = 0"] {
        assert_eq!(parse_definition(line),
                   Err(DefinitionError::Malformed { line: line.to_owned() }),
                   "{line:?}");
    }
    assert_eq!(parse_definition("rain = true"),
               Err(DefinitionError::InvalidTruthValue { name:  "rain".to_owned(),
                                                        value: "true".to_owned(), }));
    assert_eq!(parse_definition("rain = "),
               Err(DefinitionError::InvalidTruthValue { name:  "rain".to_owned(),
                                                        value: String::new(), }));
}

#[test]
fn definitions_stop_at_the_first_blank_line() {
    let env = read_definitions(["a = 1", "a = 0", "b = 1", "   ", "c = 1"]).unwrap();
    assert_eq!(env,
               BTreeMap::from([("a".to_owned(), false), ("b".to_owned(), true)]));

    let error = read_definitions(["a = 1", "b = 2"]).unwrap_err();
    assert!(matches!(error, DefinitionError::InvalidTruthValue { .. }));
}
