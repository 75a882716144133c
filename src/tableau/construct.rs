//! Construction of a tableau, to a fixpoint across every branch.
//!
//! # Overview
//!
//! Construction maintains a worklist of open branches and a collection of settled branches.
//! The branch at the top of the worklist is expanded until it settles:
//!
//! - The entry at the branch cursor is taken, and the [expansion rule](crate::tableau::expansion)
//!   matching its sign and head connective is applied.
//! - An extension appends the produced entries to the branch.
//! - A fork copies the branch, one child per alternative, and the children replace the branch on
//!   the worklist.
//! - An atomic entry is passed over, and a branch whose cursor is exhausted is saturated.
//!
//! Every appended entry is checked for [closure](crate::closure) against each entry already
//! resident on its branch.
//! On the first hit the branch is closed and set aside, with no further rule applied to it.
//! The entries of the root branch pass through the same integration, so a contradictory input
//! closes the root without any rule being applied.
//!
//! Branches are processed depth-first, and each branch owns its entries outright, so sibling
//! branches never observe each other.
//!
//! Termination is by the [weight](crate::structures::formula::Formula::weight) measure.
//! Still, the number of branches may be exponential in the size of the input, and the
//! [configured](crate::config) step and time budgets cut construction short when exhausted.
//! An exhausted budget is an error, not an answer, and the tableau continues to report
//! [Unknown](crate::reports::Report::Unknown).

use std::time::Instant;

use crate::{
    closure,
    misc::log::targets::{self},
    reports::Report,
    structures::signed::SignedFormula,
    tableau::{
        expansion::{self, Expansion},
        Branch, Tableau, TableauState,
    },
    types::err::{ErrorKind, TableauError},
};

impl Tableau {
    /// Expands every branch of the tableau until each is closed or saturated.
    ///
    /// Returns the resulting [report](Tableau::report).
    /// Construction runs once. On a tableau no longer accepting input the call is a read of the
    /// current report.
    ///
    /// An error leaves the branches as they stood when construction halted, and the report stays
    /// [Unknown](Report::Unknown). No partial answer is given.
    pub fn construct(&mut self) -> Result<Report, ErrorKind> {
        match self.state {
            TableauState::Input => {}
            _ => return Ok(self.report()),
        };
        self.state = TableauState::Expanding;

        let total_time = Instant::now();

        let mut worklist = std::mem::take(&mut self.branches);
        let mut settled: Vec<Branch> = Vec::new();

        // The root is rebuilt through integration so closure is checked over the input itself.
        if let Some(root) = worklist.pop() {
            let mut fresh = Branch::fresh();
            for entry in root.into_entries() {
                if fresh.is_closed() {
                    break;
                }
                self.integrate(&mut fresh, entry);
            }
            worklist.push(fresh);
        }

        'branch_loop: while let Some(mut branch) = worklist.pop() {
            if branch.is_closed() {
                settled.push(branch);
                continue 'branch_loop;
            }

            'expansion_loop: loop {
                self.counters.time = total_time.elapsed();
                let time_limit = self.config.time_limit.value;
                if !time_limit.is_zero() && self.counters.time > time_limit {
                    worklist.push(branch);
                    self.halt(settled, worklist);
                    return Err(TableauError::TimeUp.into());
                }

                let step_limit = self.config.step_limit.value;
                if step_limit != 0 && self.counters.expansions >= step_limit {
                    worklist.push(branch);
                    self.halt(settled, worklist);
                    return Err(TableauError::BudgetExhausted.into());
                }

                let Some(entry) = branch.next_unexpanded() else {
                    log::trace!(
                        target: targets::BRANCH,
                        "Branch saturated with {} entries",
                        branch.signed_formulas().len()
                    );
                    settled.push(branch);
                    continue 'branch_loop;
                };

                let expansion = match expansion::expand(&entry) {
                    Ok(expansion) => expansion,
                    Err(e) => {
                        worklist.push(branch);
                        self.halt(settled, worklist);
                        return Err(e);
                    }
                };

                match expansion {
                    Expansion::Terminal => continue 'expansion_loop,

                    Expansion::Extend(additions) => {
                        self.counters.expansions += 1;
                        log::trace!(
                            target: targets::EXPANSION,
                            "{entry} extends the branch with {} entries",
                            additions.len()
                        );

                        for addition in additions {
                            self.integrate(&mut branch, addition);
                            if branch.is_closed() {
                                settled.push(branch);
                                continue 'branch_loop;
                            }
                        }
                    }

                    Expansion::Fork(alternatives) => {
                        self.counters.expansions += 1;
                        self.counters.forks += 1;
                        log::trace!(
                            target: targets::EXPANSION,
                            "{entry} forks the branch {} ways",
                            alternatives.len()
                        );

                        for additions in alternatives {
                            let mut child = branch.clone();
                            for addition in additions {
                                self.integrate(&mut child, addition);
                                if child.is_closed() {
                                    break;
                                }
                            }

                            match child.is_closed() {
                                true => settled.push(child),
                                false => worklist.push(child),
                            }
                        }

                        continue 'branch_loop;
                    }
                }
            }
        }

        self.counters.time = total_time.elapsed();
        self.state = match settled.iter().all(Branch::is_closed) {
            true => TableauState::Closed,
            false => TableauState::Saturated,
        };
        self.branches = settled;

        Ok(self.report())
    }

    /// Integrates an entry into a branch.
    ///
    /// A duplicate of a resident entry is dropped.
    /// Otherwise the entry is appended and checked for closure against every resident entry, and
    /// on a hit the branch is closed.
    fn integrate(&mut self, branch: &mut Branch, entry: SignedFormula) {
        if !branch.add(entry) {
            return;
        }

        let entries = branch.signed_formulas();
        let fresh = entries.len() - 1;

        let mut contradiction = false;
        for index in 0..fresh {
            if closure::closes(&entries[fresh], &entries[index]) {
                log::trace!(
                    target: targets::CLOSURE,
                    "{} is incompatible with {}, the branch closes",
                    entries[fresh],
                    entries[index]
                );
                contradiction = true;
                break;
            }
        }

        if contradiction {
            branch.close();
            self.counters.closed_branches += 1;
        }
    }

    /// Stores the outstanding branches of an interrupted construction, for inspection.
    fn halt(&mut self, settled: Vec<Branch>, worklist: Vec<Branch>) {
        self.branches = settled;
        self.branches.extend(worklist);
    }
}
