/*!
Miscellaneous items related to [logging](log).

Calls to the log macro are made throughout the library.
These are intended to provide useful information for extending the library and/or fixing issues.

Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [rule application](crate::tableau::expansion).
    pub const EXPANSION: &str = "expansion";

    /// Logs related to [branch closure](crate::closure).
    pub const CLOSURE: &str = "closure";

    /// Logs related to branch creation and settlement.
    pub const BRANCH: &str = "branch";
}
