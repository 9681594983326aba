/// Core parsing logic.
///
/// Contains the parser entry points, the shared result type and the token
/// kinds each grammar rule accepts.
pub mod core;

/// Operand parsing.
///
/// Handles atoms, prefix negation and parenthesized groups, the forms that
/// bind tighter than any binary operator.
pub mod unary;

/// Binary operator parsing.
///
/// Parses the homogeneous `&` and `|` chains that may follow an operand.
pub mod binary;
