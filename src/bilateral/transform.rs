//! The rewrite into bilateral normal form.

use crate::structures::formula::{Connective, Formula};

/// The bilateral normal form of a formula.
///
/// Pure and total. The result contains no [Not](Connective::Not) compound, with negation surviving
/// only as the `negative` flag of bilateral leaves, and applying the function to its own output
/// returns the output unchanged.
///
/// A compound whose subformula count conflicts with the arity of its connective is outside the
/// contract of the function. Such trees are rebuilt with normalized children rather than repaired,
/// and are rejected later, during rule dispatch.
pub fn bilateral_form(formula: &Formula) -> Formula {
    match formula {
        Formula::Predicate { name, args } => Formula::bilateral(name.clone(), args.clone(), false),

        Formula::Bilateral { .. } => formula.clone(),

        Formula::Compound {
            connective: Connective::Not,
            subformulas,
        } => match subformulas.as_slice() {
            [subformula] => negated_form(subformula),
            _ => Formula::Compound {
                connective: Connective::Not,
                subformulas: subformulas.iter().map(bilateral_form).collect(),
            },
        },

        Formula::Compound {
            connective,
            subformulas,
        } => Formula::Compound {
            connective: *connective,
            subformulas: subformulas.iter().map(bilateral_form).collect(),
        },
    }
}

/// The bilateral normal form of the negation of a formula.
///
/// Recursion through this function is what eliminates arbitrarily deep negation nestings, so a
/// formula such as `~~~~P` normalizes in a single pass.
fn negated_form(formula: &Formula) -> Formula {
    match formula {
        Formula::Predicate { name, args } => Formula::bilateral(name.clone(), args.clone(), true),

        Formula::Bilateral {
            name,
            args,
            negative,
        } => Formula::bilateral(name.clone(), args.clone(), !negative),

        Formula::Compound {
            connective: Connective::Not,
            subformulas,
        } => match subformulas.as_slice() {
            // Double negation elimination.
            [subformula] => bilateral_form(subformula),
            _ => bilateral_form(formula),
        },

        Formula::Compound {
            connective: Connective::And,
            subformulas,
        } => match subformulas.as_slice() {
            // DeMorgan: ~(A & B) is (~A | ~B).
            [left, right] => Formula::disjunction(negated_form(left), negated_form(right)),
            _ => Formula::negation(bilateral_form(formula)),
        },

        Formula::Compound {
            connective: Connective::Or,
            subformulas,
        } => match subformulas.as_slice() {
            // DeMorgan: ~(A | B) is (~A & ~B).
            [left, right] => Formula::conjunction(negated_form(left), negated_form(right)),
            _ => Formula::negation(bilateral_form(formula)),
        },

        Formula::Compound {
            connective: Connective::Implies,
            subformulas,
        } => match subformulas.as_slice() {
            // ~(A -> B) is (A & ~B), an exact equivalence at t, f, and e under weak Kleene.
            [antecedent, consequent] => {
                Formula::conjunction(bilateral_form(antecedent), negated_form(consequent))
            }
            _ => Formula::negation(bilateral_form(formula)),
        },
    }
}
