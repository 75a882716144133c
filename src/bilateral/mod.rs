//! The bilateral normal form, and equivalence with respect to it.
//!
//! A formula is in bilateral normal form when negation appears only as the `negative` flag of a
//! bilateral leaf.
//! [bilateral_form] rewrites any formula into the normal form by eliminating double negations,
//! distributing negation over conjunction and disjunction, rewriting a negated conditional
//! `~(A -> B)` as `A & ~B`, and turning negated predicates into starred duals.
//! Each rewrite is an exact weak Kleene equivalence, holding at `t`, `f`, and `e` alike.
//!
//! Two formulas are bilateral equivalent when their normal forms are structurally identical, and
//! [bilateral_equivalent] decides exactly this.
//! The relation is what the [closure](crate::closure) check is built on.
//!
//! ```rust
//! # use acrq_tableau::bilateral::{bilateral_equivalent, bilateral_form};
//! # use acrq_tableau::structures::formula::Formula;
//! let p = Formula::predicate("P", vec![]);
//!
//! let twice_negated = Formula::negation(Formula::negation(p.clone()));
//!
//! assert!(bilateral_equivalent(&p, &twice_negated));
//! assert_eq!(bilateral_form(&twice_negated), Formula::bilateral("P", vec![], false));
//! ```

mod equivalence;
pub use equivalence::bilateral_equivalent;

mod transform;
pub use transform::bilateral_form;
