//! Terms, the arguments of predicates.
//!
//! Only constants appear in the fragment of ACrQ supported by the library.
//! The enum is open to extension with variables (and, later, function terms) should restricted
//! quantification be added, and for this reason a [Variable](Term::Variable) variant is declared,
//! though no rule of the engine produces one.

/// A term, as may appear in the argument list of a predicate.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Term {
    /// A named individual constant.
    Constant(String),

    /// A named variable.
    ///
    /// Unused by the propositional fragment, declared for extension.
    Variable(String),
}

impl Term {
    /// The name of the term, without any indication of its kind.
    pub fn name(&self) -> &str {
        match self {
            Self::Constant(name) => name,
            Self::Variable(name) => name,
        }
    }
}

impl std::fmt::Display for Term {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
