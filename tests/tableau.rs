use acrq_tableau::config::Config;
use acrq_tableau::reports::Report;
use acrq_tableau::structures::formula::Formula;
use acrq_tableau::structures::sign::Sign;
use acrq_tableau::structures::signed::SignedFormula;
use acrq_tableau::structures::term::Term;
use acrq_tableau::tableau::Tableau;
use acrq_tableau::types::err::{ErrorKind, TableauError};

fn constant(name: &str) -> Term {
    Term::Constant(name.to_string())
}

mod basic {
    use super::*;

    #[test]
    fn report_is_unknown_before_construction() {
        let tableau = Tableau::new(vec![SignedFormula::new(
            Sign::T,
            Formula::predicate("P", vec![]),
        )]);

        assert_eq!(tableau.report(), Report::Unknown);
        assert_eq!(tableau.branches().len(), 1);
        assert_eq!(tableau.branches()[0].signed_formulas().len(), 1);
    }

    #[test]
    fn single_atom_is_satisfiable() {
        let entry = SignedFormula::new(Sign::T, Formula::predicate("P", vec![constant("a")]));

        let mut tableau = Tableau::new(vec![entry.clone()]);

        assert_eq!(tableau.construct(), Ok(Report::Satisfiable));

        let open = tableau.open_branch().expect("an open branch");
        assert!(open.assertions().any(|resident| *resident == entry));
    }

    #[test]
    fn contradictory_input_closes_the_root() {
        let p = Formula::predicate("P", vec![constant("a")]);

        let mut tableau = Tableau::new(vec![
            SignedFormula::new(Sign::T, p.clone()),
            SignedFormula::new(Sign::F, p),
        ]);

        assert_eq!(tableau.construct(), Ok(Report::Unsatisfiable));
        assert!(tableau.branches().iter().all(|branch| branch.is_closed()));

        // Closure required no rule application.
        assert_eq!(tableau.counters.expansions, 0);
        assert_eq!(tableau.counters.closed_branches, 1);
    }

    #[test]
    fn conjunction_extends_without_forking() {
        let conjunction = Formula::conjunction(
            Formula::predicate("P", vec![]),
            Formula::predicate("Q", vec![]),
        );

        let mut tableau = Tableau::new(vec![SignedFormula::new(Sign::T, conjunction)]);

        assert_eq!(tableau.construct(), Ok(Report::Satisfiable));
        assert_eq!(tableau.counters.forks, 0);
        assert_eq!(tableau.branches().len(), 1);

        let open = tableau.open_branch().expect("an open branch");
        let assertions: Vec<_> = open.assertions().collect();
        assert_eq!(assertions.len(), 2);
    }

    #[test]
    fn conjunct_contradicting_a_unit_closes() {
        let conjunction = Formula::conjunction(
            Formula::predicate("P", vec![]),
            Formula::predicate("Q", vec![]),
        );

        let mut tableau = Tableau::new(vec![
            SignedFormula::new(Sign::T, conjunction),
            SignedFormula::new(Sign::F, Formula::predicate("P", vec![])),
        ]);

        assert_eq!(tableau.construct(), Ok(Report::Unsatisfiable));
    }

    #[test]
    fn empty_input_is_satisfiable() {
        let mut tableau = Tableau::new(vec![]);

        assert_eq!(tableau.construct(), Ok(Report::Satisfiable));
    }

    #[test]
    fn construction_runs_once() {
        let mut tableau = Tableau::new(vec![SignedFormula::new(
            Sign::T,
            Formula::predicate("P", vec![]),
        )]);

        assert_eq!(tableau.construct(), Ok(Report::Satisfiable));
        assert_eq!(tableau.construct(), Ok(Report::Satisfiable));
        assert_eq!(tableau.counters.expansions, 0);
    }
}

mod paraconsistency {
    use super::*;

    /// The defining scenario. `P(a) & P*(a)` asserts a glut, and the tableau stays open.
    #[test]
    fn glut_is_satisfiable() {
        let a = constant("a");
        let glut = Formula::conjunction(
            Formula::predicate("P", vec![a.clone()]),
            Formula::bilateral("P", vec![a], true),
        );

        let mut tableau = Tableau::new(vec![SignedFormula::new(Sign::T, glut)]);

        assert_eq!(tableau.construct(), Ok(Report::Satisfiable));

        let open = tableau.open_branch().expect("an open branch");
        assert_eq!(open.assertions().count(), 2);
    }

    /// `P & ~P` under `t` is a glut as well, with the negation resolving to the dual.
    #[test]
    fn asserted_classical_contradiction_is_satisfiable() {
        let p = Formula::predicate("P", vec![constant("a")]);
        let contradiction = Formula::conjunction(p.clone(), Formula::negation(p));

        let mut tableau = Tableau::new(vec![SignedFormula::new(Sign::T, contradiction)]);

        assert_eq!(tableau.construct(), Ok(Report::Satisfiable));
    }

    /// Excluded middle fails in weak Kleene logic. `f (P | ~P)` saturates open via the gap.
    #[test]
    fn excluded_middle_is_not_valid() {
        let p = Formula::predicate("P", vec![constant("a")]);
        let excluded_middle = Formula::disjunction(p.clone(), Formula::negation(p));

        let mut tableau = Tableau::new(vec![SignedFormula::new(Sign::F, excluded_middle)]);

        assert_eq!(tableau.construct(), Ok(Report::Satisfiable));
    }

    /// The DeMorgan conditional `~(P & Q) -> (~P | ~Q)` is valid, so its `f` tableau closes.
    #[test]
    fn demorgan_conditional_is_valid() {
        let a = constant("a");
        let p = Formula::predicate("P", vec![a.clone()]);
        let q = Formula::predicate("Q", vec![a]);

        let law = Formula::implication(
            Formula::negation(Formula::conjunction(p.clone(), q.clone())),
            Formula::disjunction(Formula::negation(p), Formula::negation(q)),
        );

        let mut tableau = Tableau::new(vec![SignedFormula::new(Sign::F, law)]);

        assert_eq!(tableau.construct(), Ok(Report::Unsatisfiable));
        assert!(tableau.branches().iter().all(|branch| branch.is_closed()));
    }
}

mod undefinedness {
    use super::*;

    /// `e` on a conjunction forks, as either conjunct may carry the error.
    #[test]
    fn error_on_a_conjunction_forks() {
        let conjunction = Formula::conjunction(
            Formula::predicate("P", vec![]),
            Formula::predicate("Q", vec![]),
        );

        let mut tableau = Tableau::new(vec![SignedFormula::new(Sign::E, conjunction)]);

        assert_eq!(tableau.construct(), Ok(Report::Satisfiable));
        assert_eq!(tableau.counters.forks, 1);
        assert_eq!(tableau.branches().len(), 2);
    }

    #[test]
    fn error_against_truth_closes() {
        let p = Formula::predicate("P", vec![constant("a")]);

        let mut tableau = Tableau::new(vec![
            SignedFormula::new(Sign::T, p.clone()),
            SignedFormula::new(Sign::E, p),
        ]);

        assert_eq!(tableau.construct(), Ok(Report::Unsatisfiable));
    }

    /// A true disjunction requires both disjuncts defined, so `t (P | Q)` with both errors closes.
    #[test]
    fn true_disjunction_excludes_the_error_value() {
        let p = Formula::predicate("P", vec![]);
        let q = Formula::predicate("Q", vec![]);

        let mut tableau = Tableau::new(vec![
            SignedFormula::new(Sign::T, Formula::disjunction(p.clone(), q.clone())),
            SignedFormula::new(Sign::E, p),
            SignedFormula::new(Sign::E, q),
        ]);

        assert_eq!(tableau.construct(), Ok(Report::Unsatisfiable));
    }
}

mod budgets {
    use super::*;

    #[test]
    fn exhausting_the_step_budget_is_an_error() {
        let nested = Formula::conjunction(
            Formula::conjunction(
                Formula::predicate("P", vec![]),
                Formula::predicate("Q", vec![]),
            ),
            Formula::conjunction(
                Formula::predicate("R", vec![]),
                Formula::predicate("S", vec![]),
            ),
        );

        let mut config = Config::default();
        config.step_limit.value = 2;

        let mut tableau = Tableau::from_config(config, vec![SignedFormula::new(Sign::T, nested)]);

        assert_eq!(
            tableau.construct(),
            Err(ErrorKind::Tableau(TableauError::BudgetExhausted))
        );

        // No partial answer. The tableau reports unknown, with the outstanding branches kept.
        assert_eq!(tableau.report(), Report::Unknown);
        assert!(!tableau.branches().is_empty());
        assert!(tableau.open_branch().is_none());
    }

    #[test]
    fn exhausting_the_time_budget_is_an_error() {
        let mut config = Config::default();
        config.time_limit.value = std::time::Duration::from_nanos(1);

        let mut tableau = Tableau::from_config(
            config,
            vec![SignedFormula::new(
                Sign::T,
                Formula::predicate("P", vec![]),
            )],
        );

        assert_eq!(
            tableau.construct(),
            Err(ErrorKind::Tableau(TableauError::TimeUp))
        );
        assert_eq!(tableau.report(), Report::Unknown);
    }
}

mod expansion {
    use super::*;

    use acrq_tableau::tableau::expansion::{expand, Expansion};

    use proptest::prelude::*;

    fn arb_sign() -> impl Strategy<Value = Sign> {
        prop_oneof![Just(Sign::T), Just(Sign::F), Just(Sign::E)]
    }

    fn arb_formula() -> impl Strategy<Value = Formula> {
        let leaf = prop_oneof![
            ("[PQRS]", prop::collection::vec(Just(constant("a")), 0..2))
                .prop_map(|(name, args)| Formula::predicate(name, args)),
            ("[PQRS]", prop::collection::vec(Just(constant("a")), 0..2), any::<bool>())
                .prop_map(|(name, args, negative)| Formula::bilateral(name, args, negative)),
        ];

        leaf.prop_recursive(3, 16, 2, |inner| {
            prop_oneof![
                inner.clone().prop_map(Formula::negation),
                (inner.clone(), inner.clone()).prop_map(|(a, b)| Formula::conjunction(a, b)),
                (inner.clone(), inner.clone()).prop_map(|(a, b)| Formula::disjunction(a, b)),
                (inner.clone(), inner.clone()).prop_map(|(a, b)| Formula::implication(a, b)),
            ]
        })
    }

    #[test]
    fn atomic_entries_are_terminal() {
        let leaf = SignedFormula::new(Sign::T, Formula::bilateral("P", vec![], true));

        assert_eq!(expand(&leaf), Ok(Expansion::Terminal));
    }

    proptest! {
        /// Every rule introduces only formulas of strictly smaller weight.
        #[test]
        fn expansion_decreases_weight(sign in arb_sign(), formula in arb_formula()) {
            let weight = formula.weight();
            let entry = SignedFormula::new(sign, formula);

            let introduced: Vec<SignedFormula> = match expand(&entry) {
                Ok(Expansion::Terminal) => vec![],
                Ok(Expansion::Extend(additions)) => additions,
                Ok(Expansion::Fork(alternatives)) => alternatives.into_iter().flatten().collect(),
                Err(e) => {
                    prop_assert!(false, "unexpected arity defect: {:?}", e);
                    vec![]
                }
            };

            for addition in introduced {
                prop_assert!(addition.formula.weight() < weight);
            }
        }
    }
}
