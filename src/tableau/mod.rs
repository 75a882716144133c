/*!
The tableau, to which signed formulas are given and within which construction takes place.

A tableau owns a collection of [branches](Branch), initially the single root branch holding the
signed formulas supplied at creation.
[construct](Tableau::construct) expands every branch to a fixpoint, after which each branch is
either closed or saturated, and the [report](Tableau::report) follows:

- Some branch saturated and open, the input is satisfiable.
- Every branch closed, the input is unsatisfiable.

So, a formula φ is unsatisfiable exactly when the tableau for `t φ` reports unsatisfiable, and
valid exactly when the tableau for `f φ` reports unsatisfiable.

# Example

```rust
# use acrq_tableau::reports::Report;
# use acrq_tableau::structures::formula::Formula;
# use acrq_tableau::structures::sign::Sign;
# use acrq_tableau::structures::signed::SignedFormula;
# use acrq_tableau::tableau::Tableau;
let p = Formula::predicate("P", vec![]);

let mut tableau = Tableau::new(vec![
    SignedFormula::new(Sign::T, p.clone()),
    SignedFormula::new(Sign::F, p),
]);

assert!(tableau.construct().is_ok());
assert_eq!(tableau.report(), Report::Unsatisfiable);
assert!(tableau.branches().iter().all(|branch| branch.is_closed()));
```
*/

mod branch;
pub use branch::Branch;

mod construct;

mod counters;
pub use counters::Counters;

pub mod expansion;

use crate::{
    config::Config,
    reports::Report,
    structures::signed::SignedFormula,
};

/// The state of a tableau.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TableauState {
    /// The tableau allows input. Construction has not begun.
    Input,

    /// Construction is in progress, or was interrupted before every branch settled.
    Expanding,

    /// Every branch is closed.
    Closed,

    /// Construction reached a fixpoint with at least one open branch.
    Saturated,
}

impl std::fmt::Display for TableauState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Input => write!(f, "Input"),
            Self::Expanding => write!(f, "Expanding"),
            Self::Closed => write!(f, "Closed"),
            Self::Saturated => write!(f, "Saturated"),
        }
    }
}

/// A tableau over a list of signed formulas.
pub struct Tableau {
    /// The configuration of the tableau.
    pub config: Config,

    /// Counters related to construction.
    pub counters: Counters,

    /// The branches of the tableau.
    branches: Vec<Branch>,

    /// The state of the tableau.
    state: TableauState,
}

impl Tableau {
    /// A tableau whose root branch holds the given signed formulas, with the default
    /// configuration.
    pub fn new(initial: Vec<SignedFormula>) -> Self {
        Self::from_config(Config::default(), initial)
    }

    /// A tableau whose root branch holds the given signed formulas.
    pub fn from_config(config: Config, initial: Vec<SignedFormula>) -> Self {
        Tableau {
            config,
            counters: Counters::default(),

            branches: vec![Branch::from_entries(initial)],
            state: TableauState::Input,
        }
    }

    /// The branches of the tableau.
    ///
    /// After [construct](Tableau::construct) every branch is settled.
    /// Before, the root branch holds the unexpanded input, which is not an error, though the
    /// collection says nothing about satisfiability.
    pub fn branches(&self) -> &[Branch] {
        &self.branches
    }

    /// The state of the tableau.
    pub fn state(&self) -> &TableauState {
        &self.state
    }

    /// A report on the state of the tableau.
    pub fn report(&self) -> Report {
        Report::from(&self.state)
    }

    /// A saturated open branch, if some branch is open.
    ///
    /// The [assertions](Branch::assertions) of the branch are a model of the input formulas.
    pub fn open_branch(&self) -> Option<&Branch> {
        match self.state {
            TableauState::Saturated => self.branches.iter().find(|branch| !branch.is_closed()),
            _ => None,
        }
    }
}
