use std::time::Duration;

/// Counts for various things which count, roughly.
#[derive(Clone, Debug)]
pub struct Counters {
    /// A count of every rule application during construction.
    pub expansions: usize,

    /// A count of rule applications which forked a branch.
    pub forks: usize,

    /// A count of branches closed during construction.
    pub closed_branches: usize,

    /// The time taken during construction.
    pub time: Duration,
}

impl Default for Counters {
    fn default() -> Self {
        Counters {
            expansions: 0,
            forks: 0,
            closed_branches: 0,

            time: Duration::from_secs(0),
        }
    }
}
