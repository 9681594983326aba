/// The cursor module gives the parser one token of lookahead.
///
/// It wraps any token sequence in a peekable stream and reports the end of
/// input as a value rather than a panic.
pub mod cursor;
/// The evaluator module computes truth values of syntax trees.
///
/// # Responsibilities
/// - Evaluates AST nodes against an atom environment.
/// - Reports atoms the environment does not define.
/// - Enumerates truth tables.
pub mod evaluator;
/// The lexer module tokenizes formulas for further parsing.
///
/// The lexer reads the raw formula text and produces a lazy stream of tokens:
/// atom names, the three operators and the two parentheses. Whitespace only
/// separates tokens. This is the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input text into tokens.
/// - Reports the unrecognized rest of the input on failure.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// # Responsibilities
/// - Converts tokens into AST nodes by recursive descent.
/// - Reports which token kinds were expected and what was found instead.
/// - Leaves unconsumed tokens to the caller.
pub mod parser;
/// The printer module renders syntax trees back to text.
///
/// The rendering uses the fewest parentheses that still parse back into an
/// equivalent tree.
pub mod printer;
