//! Equivalence of formulas with respect to bilateral normal form.

use crate::bilateral::bilateral_form;
use crate::structures::formula::Formula;

/// Whether two formulas share a bilateral normal form.
///
/// Both formulas are normalized through [bilateral_form], without exception, and the normal forms
/// are then compared structurally.
/// The comparison is positional. `A & B` and `B & A` are distinct, as are predicates whose
/// argument lists differ in length or content, and no case fails.
///
/// The relation is reflexive and symmetric by construction.
pub fn bilateral_equivalent(left: &Formula, right: &Formula) -> bool {
    let left = bilateral_form(left);
    let right = bilateral_form(right);

    structurally_equal(&left, &right)
}

/// Structural equality over a pair of formula trees.
///
/// The walk keeps an explicit stack of node pairs rather than recursing, so comparison of
/// adversarially deep trees cannot exhaust the call stack.
fn structurally_equal(left: &Formula, right: &Formula) -> bool {
    let mut pairs = vec![(left, right)];

    while let Some((left, right)) = pairs.pop() {
        match (left, right) {
            (
                Formula::Predicate {
                    name: left_name,
                    args: left_args,
                },
                Formula::Predicate {
                    name: right_name,
                    args: right_args,
                },
            ) => {
                if left_name != right_name || left_args != right_args {
                    return false;
                }
            }

            (
                Formula::Bilateral {
                    name: left_name,
                    args: left_args,
                    negative: left_negative,
                },
                Formula::Bilateral {
                    name: right_name,
                    args: right_args,
                    negative: right_negative,
                },
            ) => {
                if left_negative != right_negative
                    || left_name != right_name
                    || left_args != right_args
                {
                    return false;
                }
            }

            (
                Formula::Compound {
                    connective: left_connective,
                    subformulas: left_subformulas,
                },
                Formula::Compound {
                    connective: right_connective,
                    subformulas: right_subformulas,
                },
            ) => {
                if left_connective != right_connective
                    || left_subformulas.len() != right_subformulas.len()
                {
                    return false;
                }
                for pair in left_subformulas.iter().zip(right_subformulas.iter()) {
                    pairs.push(pair);
                }
            }

            _ => return false,
        }
    }

    true
}
