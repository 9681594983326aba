use std::{
    collections::{BTreeMap, HashMap},
    hash::BuildHasher,
};

/// A source of truth values for atoms.
///
/// The evaluator only ever reads from an environment; it never inserts or
/// changes values.
pub trait Environment {
    /// Returns the value assigned to `atom`, or `None` if it is undefined.
    fn lookup(&self, atom: &str) -> Option<bool>;
}

impl<S: BuildHasher> Environment for HashMap<String, bool, S> {
    fn lookup(&self, atom: &str) -> Option<bool> {
        self.get(atom).copied()
    }
}

impl Environment for BTreeMap<String, bool> {
    fn lookup(&self, atom: &str) -> Option<bool> {
        self.get(atom).copied()
    }
}

impl<E: Environment + ?Sized> Environment for &E {
    fn lookup(&self, atom: &str) -> Option<bool> {
        (**self).lookup(atom)
    }
}
