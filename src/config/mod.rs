/*!
Configuration of a tableau.

All configuration for a tableau is contained within the tableau, set at construction time.

Expansion of a finite formula always terminates, as every rule introduces only strictly smaller
formulas.
Still, the number of branches may grow exponentially in the size of the input, and so the
configuration carries two externally imposed budgets.
Exhausting a budget ends construction with an error, and the tableau reports
[Unknown](crate::reports::Report::Unknown) rather than a partial answer.
*/

mod config_option;
pub use config_option::ConfigOption;

use crate::tableau::TableauState;

/// The primary configuration structure.
#[derive(Clone)]
pub struct Config {
    /// The permitted number of rule applications during construction, with zero read as no limit.
    pub step_limit: ConfigOption<usize>,

    /// The time limit for construction, with a zero duration read as no limit.
    pub time_limit: ConfigOption<std::time::Duration>,
}

impl Default for Config {
    /// The default configuration imposes no budgets.
    fn default() -> Self {
        Config {
            step_limit: ConfigOption {
                name: "step_limit",
                min: usize::MIN,
                max: usize::MAX,
                max_state: TableauState::Input,
                value: 0,
            },

            time_limit: ConfigOption {
                name: "time_limit",
                min: std::time::Duration::from_secs(0),
                max: std::time::Duration::MAX,
                max_state: TableauState::Input,
                value: std::time::Duration::from_secs(0),
            },
        }
    }
}
