/// Core evaluation logic.
///
/// Walks a syntax tree and computes its truth value against an environment.
pub mod core;

/// Atom environments.
///
/// Declares the [`Environment`](environment::Environment) lookup trait and
/// its implementations for the standard maps.
pub mod environment;

/// Truth tables.
///
/// Evaluates a formula under every assignment of its atoms.
pub mod table;
