//! Signed formulas, the entries of a branch.
//!
//! A signed formula pairs a [Sign] with a [Formula], and asserts that the formula takes the value
//! of the sign.
//! Two signed formulas are the same entry exactly when both the sign and the formula are
//! structurally equal.
//!
//! ```rust
//! # use acrq_tableau::structures::formula::Formula;
//! # use acrq_tableau::structures::sign::Sign;
//! # use acrq_tableau::structures::signed::SignedFormula;
//! let entry = SignedFormula::new(Sign::T, Formula::predicate("P", vec![]));
//!
//! assert_eq!(entry.to_string(), "t P");
//! ```

use crate::structures::{formula::Formula, sign::Sign};

/// A formula paired with the truth value asserted for it.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SignedFormula {
    /// The asserted truth value.
    pub sign: Sign,

    /// The formula.
    pub formula: Formula,
}

impl SignedFormula {
    /// A fresh signed formula, specified by pairing a sign with a formula.
    pub fn new(sign: Sign, formula: Formula) -> Self {
        Self { sign, formula }
    }

    /// Whether the entry is a leaf for expansion purposes.
    pub fn is_atomic(&self) -> bool {
        self.formula.is_atomic()
    }
}

impl std::fmt::Display for SignedFormula {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.sign, self.formula)
    }
}
