/*!
The weak Kleene expansion rules, by sign and head connective.

Each rule decomposes a signed compound into the assignments of its immediate subformulas under
which the compound takes the value of its sign.
The value `e` is infectious, and a compound takes `e` exactly when some subformula does, so:

- `t (A & B)` extends with `t A, t B`.
- `f (A & B)` forks over `{t A, f B}`, `{f A, t B}`, `{f A, f B}`.
- `t (A | B)` forks over `{t A, t B}`, `{t A, f B}`, `{f A, t B}`.
- `f (A | B)` extends with `f A, f B`.
- `t (A -> B)` forks over `{f A, f B}`, `{f A, t B}`, `{t A, t B}`.
- `f (A -> B)` extends with `t A, f B`.
- `e` on any binary compound forks over `{e A}`, `{e B}`.

Note the three-way forks. The classical two-way fork for `t (A | B)` is unsound here, as the
silent disjunct may be `e`, in which case the disjunction is `e` rather than `t`.

A negated compound is rewritten under its sign rather than decomposed:

- `s ~~A` extends with `s A`.
- `s ~(A & B)` extends with `s (~A | ~B)`.
- `s ~(A | B)` extends with `s (~A & ~B)`.
- `s ~(A -> B)` extends with `s (A & ~B)`.
- `s ~P(…)` extends with `s P*(…)`, and `s ~P*(…)` with `s P(…)`.

Each rewrite is an exact weak Kleene equivalence, holding at `t`, `f`, and `e` alike, so the sign
carries over unchanged.
Every introduced formula is of strictly smaller [weight](crate::structures::formula::Formula::weight)
than the formula expanded, which is what guarantees a branch saturates.

Atomic entries are terminal. They participate in a tableau only through the
[closure](crate::closure) check.
*/

use crate::structures::{
    formula::{Connective, Formula},
    sign::Sign,
    signed::SignedFormula,
};
use crate::types::err::{ErrorKind, FormulaError};

/// The effect of applying the rule matching a signed formula.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Expansion {
    /// The branch is extended with each listed entry.
    Extend(Vec<SignedFormula>),

    /// The branch forks, one child per alternative, each child extended with the listed entries.
    Fork(Vec<Vec<SignedFormula>>),

    /// The entry is atomic, and no rule applies.
    Terminal,
}

/// A signed copy of a formula.
fn signed(sign: Sign, formula: &Formula) -> SignedFormula {
    SignedFormula::new(sign, formula.clone())
}

/// The infectious `e` rule for a binary compound. Either side may carry the error.
fn infectious(left: &Formula, right: &Formula) -> Expansion {
    Expansion::Fork(vec![
        vec![signed(Sign::E, left)],
        vec![signed(Sign::E, right)],
    ])
}

/// The expansion of a signed formula under the rule matching its sign and head connective.
///
/// The only failure is a compound whose subformula count conflicts with the arity of its
/// connective, which indicates a defect upstream of the engine.
pub fn expand(entry: &SignedFormula) -> Result<Expansion, ErrorKind> {
    match &entry.formula {
        Formula::Predicate { .. } | Formula::Bilateral { .. } => Ok(Expansion::Terminal),

        Formula::Compound {
            connective,
            subformulas,
        } => match (connective, subformulas.as_slice()) {
            (Connective::Not, [negated]) => expand_negation(entry.sign, negated),

            (Connective::And, [left, right]) => Ok(match entry.sign {
                Sign::T => Expansion::Extend(vec![signed(Sign::T, left), signed(Sign::T, right)]),
                Sign::F => Expansion::Fork(vec![
                    vec![signed(Sign::T, left), signed(Sign::F, right)],
                    vec![signed(Sign::F, left), signed(Sign::T, right)],
                    vec![signed(Sign::F, left), signed(Sign::F, right)],
                ]),
                Sign::E => infectious(left, right),
            }),

            (Connective::Or, [left, right]) => Ok(match entry.sign {
                Sign::T => Expansion::Fork(vec![
                    vec![signed(Sign::T, left), signed(Sign::T, right)],
                    vec![signed(Sign::T, left), signed(Sign::F, right)],
                    vec![signed(Sign::F, left), signed(Sign::T, right)],
                ]),
                Sign::F => Expansion::Extend(vec![signed(Sign::F, left), signed(Sign::F, right)]),
                Sign::E => infectious(left, right),
            }),

            (Connective::Implies, [antecedent, consequent]) => Ok(match entry.sign {
                Sign::T => Expansion::Fork(vec![
                    vec![signed(Sign::F, antecedent), signed(Sign::F, consequent)],
                    vec![signed(Sign::F, antecedent), signed(Sign::T, consequent)],
                    vec![signed(Sign::T, antecedent), signed(Sign::T, consequent)],
                ]),
                Sign::F => Expansion::Extend(vec![
                    signed(Sign::T, antecedent),
                    signed(Sign::F, consequent),
                ]),
                Sign::E => infectious(antecedent, consequent),
            }),

            (connective, subformulas) => Err(FormulaError::Arity {
                connective: *connective,
                found: subformulas.len(),
            }
            .into()),
        },
    }
}

/// The sign-preserving rewrite of a negated formula.
fn expand_negation(sign: Sign, negated: &Formula) -> Result<Expansion, ErrorKind> {
    match negated {
        Formula::Predicate { name, args } => Ok(Expansion::Extend(vec![SignedFormula::new(
            sign,
            Formula::bilateral(name.clone(), args.clone(), true),
        )])),

        Formula::Bilateral {
            name,
            args,
            negative,
        } => Ok(Expansion::Extend(vec![SignedFormula::new(
            sign,
            Formula::bilateral(name.clone(), args.clone(), !negative),
        )])),

        Formula::Compound {
            connective,
            subformulas,
        } => match (connective, subformulas.as_slice()) {
            (Connective::Not, [inner]) => Ok(Expansion::Extend(vec![signed(sign, inner)])),

            (Connective::And, [left, right]) => Ok(Expansion::Extend(vec![SignedFormula::new(
                sign,
                Formula::disjunction(
                    Formula::negation(left.clone()),
                    Formula::negation(right.clone()),
                ),
            )])),

            (Connective::Or, [left, right]) => Ok(Expansion::Extend(vec![SignedFormula::new(
                sign,
                Formula::conjunction(
                    Formula::negation(left.clone()),
                    Formula::negation(right.clone()),
                ),
            )])),

            (Connective::Implies, [antecedent, consequent]) => {
                Ok(Expansion::Extend(vec![SignedFormula::new(
                    sign,
                    Formula::conjunction(
                        antecedent.clone(),
                        Formula::negation(consequent.clone()),
                    ),
                )]))
            }

            (connective, subformulas) => Err(FormulaError::Arity {
                connective: *connective,
                found: subformulas.len(),
            }
            .into()),
        },
    }
}
