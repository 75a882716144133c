//! A library for determining the satisfiability of formulas of the paraconsistent logic ACrQ.
//!
//! acrq_tableau decides satisfiability and validity for ACrQ, a four-valued logic which extends
//! weak Kleene logic with bilateral predicates.
//! Each predicate P is paired with a syntactic dual P* which asserts the negative form of P as an
//! independent atom, so that a branch may contain both `t P(a)` and `t P*(a)` without being
//! contradictory (a 'glut').
//!
//! Decisions are made by constructing a signed analytic tableau.
//! A tableau begins with a list of signed formulas, and repeatedly decomposes each signed formula
//! according to the weak Kleene rule matching its sign and head connective.
//! Some rules extend a branch, others fork it.
//! A branch closes when it contains two signed formulas with distinct signs whose bilateral normal
//! forms coincide, and a branch on which no rule applies is saturated, and witnesses
//! satisfiability.
//!
//! # Orientation
//!
//! The library is designed around the core structure of a [tableau](crate::tableau::Tableau).
//!
//! Tableaux are built from a list of [signed formulas](crate::structures::signed) and an optional
//! [configuration](crate::config), and settled with
//! [construct](crate::tableau::Tableau::construct).
//!
//! Useful starting points may be:
//! - The [construct procedure](crate::tableau::Tableau::construct) to inspect the dynamics of
//!   branch expansion.
//! - The [expansion rules](crate::tableau::expansion) for the weak Kleene rule table.
//! - The [bilateral module](crate::bilateral) for the normal form on which closure is decided.
//! - The [closure module](crate::closure) for the branch closure condition.
//! - The [structures](crate::structures) to familiarise yourself with formulas, signs, and terms.
//!
//! # Examples
//!
//! + A glut is satisfiable. Both `P(a)` and its dual `P*(a)` hold, and no branch closes.
//!
//! ```rust
//! # use acrq_tableau::reports::Report;
//! # use acrq_tableau::structures::formula::Formula;
//! # use acrq_tableau::structures::sign::Sign;
//! # use acrq_tableau::structures::signed::SignedFormula;
//! # use acrq_tableau::structures::term::Term;
//! # use acrq_tableau::tableau::Tableau;
//! let a = Term::Constant("a".to_string());
//!
//! let glut = Formula::conjunction(
//!     Formula::predicate("P", vec![a.clone()]),
//!     Formula::bilateral("P", vec![a], true),
//! );
//!
//! let mut tableau = Tableau::new(vec![SignedFormula::new(Sign::T, glut)]);
//!
//! assert!(tableau.construct().is_ok());
//! assert_eq!(tableau.report(), Report::Satisfiable);
//! assert!(tableau.open_branch().is_some());
//! ```
//!
//! + A DeMorgan law is valid. The formula is signed `f`, and every branch closes.
//!
//! ```rust
//! # use acrq_tableau::reports::Report;
//! # use acrq_tableau::structures::formula::Formula;
//! # use acrq_tableau::structures::sign::Sign;
//! # use acrq_tableau::structures::signed::SignedFormula;
//! # use acrq_tableau::structures::term::Term;
//! # use acrq_tableau::tableau::Tableau;
//! let a = Term::Constant("a".to_string());
//! let p = Formula::predicate("P", vec![a.clone()]);
//! let q = Formula::predicate("Q", vec![a]);
//!
//! let law = Formula::implication(
//!     Formula::negation(Formula::conjunction(p.clone(), q.clone())),
//!     Formula::disjunction(Formula::negation(p), Formula::negation(q)),
//! );
//!
//! let mut tableau = Tableau::new(vec![SignedFormula::new(Sign::F, law)]);
//!
//! assert!(tableau.construct().is_ok());
//! assert_eq!(tableau.report(), Report::Unsatisfiable);
//! ```
//!
//! # Logs
//!
//! To help diagnose issues (somewhat) detailed calls to [log!](log) are made, and a variety of
//! targets are defined in order to help narrow output to relevant parts of the library.
//! No log implementation is supplied.
//!
//! The targets are listed in [misc::log].
//!
//! For example, when used with [env_logger](https://docs.rs/env_logger/latest/env_logger/):
//! - Logs related to branch closure can be filtered with `RUST_LOG=closure …` or,
//! - Logs related to rule application with `RUST_LOG=expansion …`

#![allow(clippy::single_match)]
#![allow(clippy::collapsible_else_if)]

pub mod structures;

pub mod bilateral;
pub mod closure;
pub mod tableau;

pub mod config;
pub mod reports;
pub mod types;

pub mod misc;
