use std::collections::BTreeSet;

/// An abstract syntax tree (AST) node representing a propositional formula.
///
/// Every node exclusively owns its operands, so a tree is always finite and
/// acyclic. Trees are built once by the parser (or by hand through the
/// constructors below) and are only read afterwards.
///
/// The [`Display`](std::fmt::Display) impl lives in the printer and produces
/// the canonical, minimally parenthesized form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expr {
    /// Reference to an atom by name. Its value comes from the environment.
    Atom(String),
    /// Logical negation of the operand.
    Negation(Box<Self>),
    /// Logical conjunction of the left and right operands.
    Conjunction(Box<Self>, Box<Self>),
    /// Logical disjunction of the left and right operands.
    Disjunction(Box<Self>, Box<Self>),
}

impl Expr {
    /// Builds an atom node.
    pub fn atom(name: impl Into<String>) -> Self {
        Self::Atom(name.into())
    }

    /// Builds a negation node.
    #[must_use]
    pub fn negation(operand: Self) -> Self {
        Self::Negation(Box::new(operand))
    }

    /// Builds a conjunction node.
    #[must_use]
    pub fn conjunction(left: Self, right: Self) -> Self {
        Self::Conjunction(Box::new(left), Box::new(right))
    }

    /// Builds a disjunction node.
    #[must_use]
    pub fn disjunction(left: Self, right: Self) -> Self {
        Self::Disjunction(Box::new(left), Box::new(right))
    }

    /// Returns the distinct atom names used in this expression, in sorted
    /// order.
    ///
    /// # Example
    /// ```
    /// use proplog::ast::Expr;
    ///
    /// let expr = Expr::conjunction(Expr::atom("b"),
    ///                              Expr::disjunction(Expr::atom("a"), Expr::atom("b")));
    /// assert_eq!(expr.atoms().into_iter().collect::<Vec<_>>(), ["a", "b"]);
    /// ```
    #[must_use]
    pub fn atoms(&self) -> BTreeSet<&str> {
        let mut atoms = BTreeSet::new();
        self.collect_atoms(&mut atoms);
        atoms
    }

    fn collect_atoms<'a>(&'a self, atoms: &mut BTreeSet<&'a str>) {
        match self {
            Self::Atom(name) => {
                atoms.insert(name.as_str());
            },
            Self::Negation(operand) => operand.collect_atoms(atoms),
            Self::Conjunction(left, right) | Self::Disjunction(left, right) => {
                left.collect_atoms(atoms);
                right.collect_atoms(atoms);
            },
        }
    }
}
