//! # proplog
//!
//! proplog reads propositional logic formulas over named atoms, evaluates
//! them against an assignment of truth values, and prints them back in a
//! canonical, minimally parenthesized form.
//!
//! Formulas use `!` (negation), `&` (conjunction), `|` (disjunction) and
//! parentheses. Negation binds tightest. A chain of binary operators must use
//! a single operator; `&` and `|` are mixed only through parentheses.
//!
//! ```
//! use std::collections::HashMap;
//!
//! use proplog::{evaluate, parse, render, tokenize};
//!
//! let (expr, mut rest) = parse(tokenize("!a & (b | c)").unwrap()).unwrap();
//! assert!(rest.next().is_none());
//!
//! let env = HashMap::from([("a".to_owned(), false),
//!                          ("b".to_owned(), false),
//!                          ("c".to_owned(), true)]);
//! assert_eq!(evaluate(&expr, &env), Ok(true));
//! assert_eq!(render(&expr), "!a & (b | c)");
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Defines the structure of parsed formulas.
///
/// This module declares the `Expr` enum, the tree the parser builds and the
/// evaluator and printer traverse.
pub mod ast;
/// Runs one formula the way the command line does.
///
/// Evaluates, renders or tabulates a formula and writes the result, so the
/// binary only maps failures to its exit code.
pub mod command;
/// Reads atom definitions.
///
/// Parses the `name = 1` / `name = 0` lines that supply an environment, from a
/// session, a file or the command line.
pub mod definitions;
/// Provides unified error types for every phase.
///
/// This module defines the errors raised while tokenizing, parsing,
/// evaluating and reading definitions, plus an umbrella [`Error`] that
/// records which phase failed.
///
/// # Responsibilities
/// - Defines one error type per phase.
/// - Names the offending input: remaining text, expected and found tokens,
///   undefined atoms.
/// - Supports integration with standard error handling traits.
///
/// [`Error`]: error::Error
pub mod error;
/// Parses complete formulas.
///
/// Ties tokenizing and parsing together and rejects tokens left over after
/// the formula.
pub mod formula;
/// Orchestrates the phases of formula processing.
///
/// This module ties together lexing, parsing, evaluation and printing.
///
/// # Responsibilities
/// - Coordinates the lexer, cursor, parser, evaluator and printer.
/// - Provides entry points for each phase.
pub mod interpreter;
/// Runs line-oriented sessions of definitions followed by formulas.
pub mod session;
/// General utilities shared across phases.
pub mod util;

pub use crate::{
    formula::{Formula, evaluate_formula},
    interpreter::{
        evaluator::{core::evaluate, environment::Environment},
        lexer::tokenize,
        parser::core::parse,
        printer::render,
    },
};
