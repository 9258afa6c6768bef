//! Property-based tests for the minimizer
//!
//! Uses proptest to generate random truth tables and check every result
//! against the function it was computed from.

use qmc::{
    minimize, prime_implicants, BooleanFunction, CoveringTable, Expr, IndexedFunction, Mask,
    Variable,
};
use proptest::prelude::*;
use std::collections::BTreeSet;

proptest! {
    #[test]
    fn test_results_cover_exactly(f in any_function(4)) {
        for result in minimize(&f).unwrap() {
            for index in 0..f.table_size() {
                if f.has_minterm(index) {
                    prop_assert!(result.has_minterm(index), "row {} uncovered", index);
                }
                if result.has_minterm(index) {
                    prop_assert!(f.has_minterm(index) || f.has_dont_care(index), "row {} is false", index);
                }
            }
        }
    }

    #[test]
    fn test_results_are_irredundant(f in any_function(4)) {
        for result in minimize(&f).unwrap() {
            let masks = result.masks();
            for skip in 0..masks.len() {
                let rest: BTreeSet<usize> = masks
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| *i != skip)
                    .flat_map(|(_, m)| m.indices())
                    .collect();
                prop_assert!(f.minterms().any(|m| !rest.contains(&m)), "{} is redundant", masks[skip]);
            }
        }
    }

    #[test]
    fn test_results_tie_in_size(f in any_function(4)) {
        let results = minimize(&f).unwrap();
        prop_assert!(!results.is_empty());
        let size = results[0].masks().len();
        prop_assert!(results.iter().all(|r| r.masks().len() == size));
    }

    #[test]
    fn test_essentials_in_every_result(f in any_function(4)) {
        let minterms: Vec<usize> = f.minterms().collect();
        let primes = prime_implicants(4, f.minterms().chain(f.dont_cares())).unwrap();
        let table = CoveringTable::new(primes, minterms);
        for position in table.essential_primes() {
            let essential = table.prime(position).unwrap().mask();
            for result in minimize(&f).unwrap() {
                prop_assert!(result.masks().contains(essential), "{} missing", essential);
            }
        }
    }

    #[test]
    fn test_all_minimal_covers_found(f in any_function(3)) {
        let found: BTreeSet<BTreeSet<Mask>> = minimize(&f)
            .unwrap()
            .iter()
            .map(|r| r.masks().iter().cloned().collect())
            .collect();
        prop_assert_eq!(found, brute_force_minimal_covers(&f));
    }

    #[test]
    fn test_mask_round_trip(s in "[01x]{0,12}") {
        let mask = Mask::parse(&s).unwrap();
        prop_assert_eq!(mask.to_string(), s);
    }

    #[test]
    fn test_simplify_is_idempotent(expr in any_expr()) {
        let once = expr.simplify();
        prop_assert_eq!(once.simplify(), once);
    }
}

/// A function of `variables` inputs with every row false, true or don't-care
fn any_function(variables: usize) -> impl Strategy<Value = IndexedFunction> {
    prop::collection::vec(0u8..3, 1 << variables).prop_map(move |rows| {
        let minterms: Vec<usize> = (0..rows.len()).filter(|&i| rows[i] == 1).collect();
        let dont_cares: Vec<usize> = (0..rows.len()).filter(|&i| rows[i] == 2).collect();
        let names: Vec<String> = (0..variables).map(|i| format!("x{}", i)).collect();
        IndexedFunction::from_minterms("f", Variable::list(&names), &minterms, &dont_cares)
            .unwrap()
    })
}

fn any_expr() -> impl Strategy<Value = Expr> {
    let leaf = (0u8..4).prop_map(|i| Expr::symbol(format!("P{}", i)));
    leaf.prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 1..4)
                .prop_map(|ops| Expr::conjunction(ops).unwrap()),
            prop::collection::vec(inner, 1..4).prop_map(|ops| Expr::disjunction(ops).unwrap()),
        ]
    })
}

/// Every smallest set of primes covering all minterms, by exhaustive search
fn brute_force_minimal_covers(f: &IndexedFunction) -> BTreeSet<BTreeSet<Mask>> {
    let variables = f.domain().len();
    let minterms: BTreeSet<usize> = f.minterms().collect();
    let primes: Vec<Mask> = prime_implicants(variables, f.minterms().chain(f.dont_cares()))
        .unwrap()
        .iter()
        .map(|p| p.mask().clone())
        .collect();

    let mut best: Option<usize> = None;
    let mut covers = BTreeSet::new();
    for subset in 0u32..(1 << primes.len()) {
        let size = subset.count_ones() as usize;
        if best.is_some_and(|b| size > b) {
            continue;
        }
        let chosen: BTreeSet<Mask> = (0..primes.len())
            .filter(|i| subset & (1 << i) != 0)
            .map(|i| primes[i].clone())
            .collect();
        let covered: BTreeSet<usize> = chosen.iter().flat_map(Mask::indices).collect();
        if !minterms.is_subset(&covered) {
            continue;
        }
        if best.is_some_and(|b| size < b) {
            covers.clear();
        }
        if best.is_none_or(|b| size < b) {
            best = Some(size);
        }
        covers.insert(chosen);
    }
    covers
}
