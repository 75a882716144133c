/*!
Reports for a tableau.
*/

use crate::tableau::TableauState;

/// High-level reports regarding a construction.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Report {
    /// Some branch of the tableau is saturated and open, witnessing satisfiability.
    Satisfiable,

    /// Every branch of the tableau is closed.
    Unsatisfiable,

    /// Satisfiability is unknown, for some reason.
    ///
    /// In particular, the report of any tableau whose construction has not run to completion.
    Unknown,
}

impl From<&TableauState> for Report {
    fn from(value: &TableauState) -> Self {
        match value {
            TableauState::Input | TableauState::Expanding => Self::Unknown,
            TableauState::Saturated => Self::Satisfiable,
            TableauState::Closed => Self::Unsatisfiable,
        }
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Satisfiable => write!(f, "Satisfiable"),
            Self::Unsatisfiable => write!(f, "Unsatisfiable"),
            Self::Unknown => write!(f, "Unknown"),
        }
    }
}
