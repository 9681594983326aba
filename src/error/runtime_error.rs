#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// The environment has no value for an atom the formula uses.
    UndefinedAtom {
        /// The name of the atom.
        name: String,
    },
    /// A truth table was requested for a formula with too many atoms.
    TooManyAtoms {
        /// The number of distinct atoms in the formula.
        count: usize,
        /// The largest number of atoms a table may enumerate.
        max:   usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UndefinedAtom { name } => write!(f, "Error: Undefined atom '{name}'."),
            Self::TooManyAtoms { count, max } => write!(f,
                                                        "Error: {count} atoms is too many for a truth table. Maximum is {max}."),
        }
    }
}

impl std::error::Error for RuntimeError {}
