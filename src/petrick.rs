//! Petrick's method
//!
//! Every minterm left uncovered by the essential primes must be covered by at
//! least one of its candidate primes. Naming the candidates `P0, P1, ...`
//! (ascending mask order) turns this into a product of sums over aliases:
//!
//! ```text
//! (P0 + P1)(P1 + P2)(P0 + P2) ...
//! ```
//!
//! Multiplying it out gives every irredundant choice of primes; the products
//! with the fewest aliases are the minimal covers.

use crate::error::Result;
use crate::implicant::Implicant;
use crate::mask::Mask;
use crate::symbolic::Expr;
use crate::table::CoveringTable;
use log::debug;
use std::collections::{BTreeMap, BTreeSet};

/// Solver for the residual covering problem of a [`CoveringTable`]
#[derive(Debug, Clone)]
pub struct PetrickSolver {
    /// Candidate primes, each carrying its alias
    implicants: Vec<Implicant>,
    /// One clause per uncovered minterm
    clauses: Vec<Expr>,
}

impl PetrickSolver {
    /// Alias the candidate primes of `table` and build one clause per
    /// remaining minterm
    pub fn new(table: &CoveringTable) -> Result<Self> {
        let mut aliases: BTreeMap<usize, String> = BTreeMap::new();
        let mut implicants = Vec::new();
        for (n, position) in table.candidates().into_iter().enumerate() {
            if let Some(prime) = table.prime(position) {
                let alias = format!("P{}", n);
                aliases.insert(position, alias.clone());
                implicants.push(prime.clone().with_alias(alias));
            }
        }

        let clauses = table
            .remaining_minterms()
            .map(|minterm| {
                let symbols = table
                    .covering(minterm)
                    .into_iter()
                    .flatten()
                    .filter_map(|position| aliases.get(position))
                    .map(Expr::symbol)
                    .collect();
                Expr::disjunction(symbols)
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(PetrickSolver {
            implicants,
            clauses,
        })
    }

    /// Aliased candidate primes
    pub fn implicants(&self) -> &[Implicant] {
        &self.implicants
    }

    /// The product-of-sums covering condition, if anything is left to cover
    pub fn expression(&self) -> Option<Expr> {
        Expr::conjunction(self.clauses.clone()).ok()
    }

    /// Every minimal choice of candidate masks.
    ///
    /// With nothing left to cover there is exactly one, empty, choice. Each
    /// choice is sorted, and the choices are listed in ascending order.
    pub fn solve(&self) -> Vec<Vec<Mask>> {
        let Some(expression) = self.expression() else {
            return vec![Vec::new()];
        };

        let sop = expression.evaluate();
        let products: Vec<BTreeSet<&str>> = sop
            .operands()
            .iter()
            .filter_map(Expr::product_symbols)
            .collect();

        let fewest = products.iter().map(BTreeSet::len).min().unwrap_or(0);
        let mut solutions: Vec<Vec<Mask>> = products
            .iter()
            .filter(|product| product.len() == fewest)
            .map(|product| {
                let mut masks: Vec<Mask> = product
                    .iter()
                    .filter_map(|alias| Implicant::mask_by_alias(&self.implicants, alias))
                    .cloned()
                    .collect();
                masks.sort();
                masks
            })
            .collect();
        solutions.sort();

        debug!(
            "petrick: {} clauses over {} candidates, {} products, {} minimal with {} primes",
            self.clauses.len(),
            self.implicants.len(),
            products.len(),
            solutions.len(),
            fewest
        );
        solutions
    }
}
