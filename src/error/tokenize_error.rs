/// The lexer found input that matches no token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenizeError {
    /// The unrecognized input, from the offending character to the end.
    pub remaining: String,
    /// Byte offset of `remaining` within the original input.
    pub position:  usize,
}

impl std::fmt::Display for TokenizeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f,
               "Error at position {}: Unrecognized input: '{}'.",
               self.position, self.remaining)
    }
}

impl std::error::Error for TokenizeError {}
