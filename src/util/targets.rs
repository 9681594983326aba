pub const LEXER: &str = "lexer";
pub const PARSER: &str = "parser";
pub const EVALUATOR: &str = "evaluator";
pub const SESSION: &str = "session";
