//! The branch closure condition.
//!
//! A branch of an ACrQ tableau closes when it contains two entries whose signs are provably
//! incompatible over bilaterally equivalent formulas.
//! Precisely, `s1 φ1` and `s2 φ2` force closure exactly when `s1` and `s2` differ and the
//! bilateral normal forms of `φ1` and `φ2` coincide.
//!
//! Entries carrying the same sign never close a branch, whatever the formulas.
//! In particular `t P(a)` together with `t P*(a)` is a glut, an over-determined atom the logic
//! tolerates, and the branch stays open.
//! This separates ACrQ from classical tableaux, where any contradiction refutes a branch, and the
//! engine depends on the separation for soundness.
//!
//! ```rust
//! # use acrq_tableau::closure::closes;
//! # use acrq_tableau::structures::formula::Formula;
//! # use acrq_tableau::structures::sign::Sign;
//! # use acrq_tableau::structures::signed::SignedFormula;
//! # use acrq_tableau::structures::term::Term;
//! let a = Term::Constant("a".to_string());
//! let positive = Formula::predicate("P", vec![a.clone()]);
//! let dual = Formula::bilateral("P", vec![a], true);
//!
//! // A glut. Both entries carry t, and the branch stays open.
//! assert!(!closes(
//!     &SignedFormula::new(Sign::T, positive.clone()),
//!     &SignedFormula::new(Sign::T, dual),
//! ));
//!
//! // A contradiction. Distinct signs over bilaterally equivalent formulas.
//! assert!(closes(
//!     &SignedFormula::new(Sign::T, positive.clone()),
//!     &SignedFormula::new(Sign::F, Formula::negation(Formula::negation(positive))),
//! ));
//!
//! // Distinct signs over formulas with distinct normal forms. No contradiction follows.
//! assert!(!closes(
//!     &SignedFormula::new(Sign::T, Formula::predicate("P", vec![])),
//!     &SignedFormula::new(Sign::F, Formula::predicate("Q", vec![])),
//! ));
//! ```

use crate::bilateral::bilateral_equivalent;
use crate::structures::signed::SignedFormula;

/// Whether the co-occurrence of two entries on a branch forces the branch to close.
///
/// Pure, symmetric, and total over well-formed entries.
pub fn closes(left: &SignedFormula, right: &SignedFormula) -> bool {
    if left.sign == right.sign {
        return false;
    }

    bilateral_equivalent(&left.formula, &right.formula)
}
