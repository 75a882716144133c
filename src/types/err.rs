//! Error types used in the library.
//!
//! - Most of these are very unlikely to occur during use.
//! - None of these is recoverable mid-construction. A tableau whose construction returns an error
//!   reports [Unknown](crate::reports::Report::Unknown) rather than a partial answer, as a partial
//!   answer from a prover is worse than no answer.

use crate::structures::formula::Connective;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Formula(FormulaError),
    Tableau(TableauError),
}

/// Noted defects in a formula tree reaching rule dispatch.
///
/// These indicate a bug in whatever built the formula, upstream of the engine.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FormulaError {
    /// A compound whose subformula count conflicts with the arity of its connective.
    Arity {
        /// The head connective of the compound.
        connective: Connective,

        /// The number of subformulas found.
        found: usize,
    },
}

impl From<FormulaError> for ErrorKind {
    fn from(e: FormulaError) -> Self {
        ErrorKind::Formula(e)
    }
}

/// Noted errors during construction of a tableau.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TableauError {
    /// The configured expansion budget was exhausted before every branch settled.
    BudgetExhausted,

    /// The configured time limit passed before every branch settled.
    TimeUp,
}

impl From<TableauError> for ErrorKind {
    fn from(e: TableauError) -> Self {
        ErrorKind::Tableau(e)
    }
}
