//! Quine–McCluskey minimization
//!
//! The minimizer runs in four phases:
//!
//! 1. **PRIMES**: combine the minterms and don't-cares into prime implicants
//! 2. **ESSENTIALS**: take every prime that is the only cover of some minterm
//! 3. **PETRICK**: enumerate the cheapest ways to cover what is left
//! 4. **ASSEMBLE**: one result per cheapest cover, essentials first
//!
//! Unlike heuristic minimizers this returns *every* minimal sum of products,
//! so the work grows quickly with the number of variables.

use crate::config::MinimizerOptions;
use crate::error::{Error, Result};
use crate::function::{table_size, BooleanFunction, IndexKind, MaskBasedFunction};
use crate::mask::Mask;
use crate::petrick::PetrickSolver;
use crate::primes::prime_implicants;
use crate::table::CoveringTable;
use log::debug;
use std::collections::BTreeSet;

/// Minimize `function` with default options
pub fn minimize<F>(function: &F) -> Result<Vec<MaskBasedFunction>>
where
    F: BooleanFunction + ?Sized,
{
    minimize_with_options(function, &MinimizerOptions::default())
}

/// Minimize `function` with custom options
pub fn minimize_with_options<F>(
    function: &F,
    options: &MinimizerOptions,
) -> Result<Vec<MaskBasedFunction>>
where
    F: BooleanFunction + ?Sized,
{
    QmcMinimizer::new(options.clone()).minimize(function)
}

/// The Quine–McCluskey minimizer
#[derive(Debug, Clone, Default)]
pub struct QmcMinimizer {
    options: MinimizerOptions,
}

impl QmcMinimizer {
    pub fn new(options: MinimizerOptions) -> Self {
        QmcMinimizer { options }
    }

    pub fn options(&self) -> &MinimizerOptions {
        &self.options
    }

    /// Compute every minimal sum of products of `function`.
    ///
    /// Each result is a function over the same domain whose masks are the
    /// product terms of one minimal cover. A function without minterms yields
    /// a single result with no masks.
    pub fn minimize<F>(&self, function: &F) -> Result<Vec<MaskBasedFunction>>
    where
        F: BooleanFunction + ?Sized,
    {
        self.options.validate()?;
        let (minterms, dont_cares) = self.read(function)?;
        let domain_size = function.domain().len();

        let alternatives = if minterms.is_empty() {
            vec![Vec::new()]
        } else {
            self.cover(domain_size, &minterms, &dont_cares)?
        };

        let results = alternatives
            .into_iter()
            .map(|masks| {
                MaskBasedFunction::new(
                    function.name(),
                    function.domain().to_vec(),
                    IndexKind::Minterms,
                    masks,
                    Vec::new(),
                )
            })
            .collect::<Result<Vec<_>>>()?;

        debug!(
            "minimized '{}' ({} variables, {} minterms, {} don't-cares) into {} solutions",
            function.name(),
            domain_size,
            minterms.len(),
            dont_cares.len(),
            results.len()
        );
        Ok(results)
    }

    /// Read and check the minterms and don't-cares of `function`
    fn read<F>(&self, function: &F) -> Result<(BTreeSet<usize>, BTreeSet<usize>)>
    where
        F: BooleanFunction + ?Sized,
    {
        let variables = function.domain().len();
        if variables > self.options.max_variables {
            return Err(Error::DomainTooLarge {
                variables,
                limit: self.options.max_variables,
            });
        }
        let size = table_size(variables)?;

        let minterms: BTreeSet<usize> = function.minterms().collect();
        let dont_cares: BTreeSet<usize> = function.dont_cares().collect();

        if let Some(&index) = minterms.iter().chain(dont_cares.iter()).find(|&&i| i >= size) {
            return Err(Error::IndexOutOfDomain {
                index,
                table_size: size,
            });
        }
        if let Some(&index) = minterms.intersection(&dont_cares).next() {
            return Err(Error::OverlappingSpecification { index });
        }

        Ok((minterms, dont_cares))
    }

    /// Every minimal cover of `minterms`, as sorted mask lists
    fn cover(
        &self,
        domain_size: usize,
        minterms: &BTreeSet<usize>,
        dont_cares: &BTreeSet<usize>,
    ) -> Result<Vec<Vec<Mask>>> {
        let primes = prime_implicants(domain_size, minterms.union(dont_cares).copied())?;
        debug!("{} prime implicants", primes.len());

        let mut table = CoveringTable::new(primes, minterms.iter().copied());
        let essentials: Vec<Mask> = table
            .extract_essentials()
            .into_iter()
            .filter_map(|position| table.prime(position))
            .map(|prime| prime.mask().clone())
            .collect();

        let mut alternatives = PetrickSolver::new(&table)?.solve();
        if let Some(limit) = self.options.solution_limit() {
            alternatives.truncate(limit);
        }

        Ok(alternatives
            .into_iter()
            .map(|alternative| essentials.iter().cloned().chain(alternative).collect())
            .collect())
    }
}
