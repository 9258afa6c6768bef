//! Prime implicant covering table
//!
//! Maps every minterm that still has to be covered to the primes covering it.
//! Don't-cares never enter the table: they may be covered, but nothing has to
//! cover them.

use crate::implicant::Implicant;
use log::debug;
use std::collections::{BTreeMap, BTreeSet};

/// Covering table over a fixed list of primes
///
/// Primes are referred to by their position in [`CoveringTable::primes`].
#[derive(Debug, Clone)]
pub struct CoveringTable {
    primes: Vec<Implicant>,
    /// Uncovered minterm -> positions of the primes covering it
    rows: BTreeMap<usize, BTreeSet<usize>>,
}

impl CoveringTable {
    /// Build the table of `minterms` over `primes`
    pub fn new<I>(primes: Vec<Implicant>, minterms: I) -> Self
    where
        I: IntoIterator<Item = usize>,
    {
        let rows = minterms
            .into_iter()
            .map(|minterm| {
                let covering = primes
                    .iter()
                    .enumerate()
                    .filter(|(_, prime)| prime.covers(minterm))
                    .map(|(i, _)| i)
                    .collect();
                (minterm, covering)
            })
            .collect();

        CoveringTable { primes, rows }
    }

    pub fn primes(&self) -> &[Implicant] {
        &self.primes
    }

    pub fn prime(&self, position: usize) -> Option<&Implicant> {
        self.primes.get(position)
    }

    /// Check if every minterm is already covered
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Minterms that are still uncovered, ascending
    pub fn remaining_minterms(&self) -> impl Iterator<Item = usize> + '_ {
        self.rows.keys().copied()
    }

    /// Primes covering an uncovered minterm
    pub fn covering(&self, minterm: usize) -> Option<&BTreeSet<usize>> {
        self.rows.get(&minterm)
    }

    /// Primes still offered for the remaining minterms
    pub fn candidates(&self) -> BTreeSet<usize> {
        self.rows.values().flatten().copied().collect()
    }

    /// Primes that are the only cover of some remaining minterm
    pub fn essential_primes(&self) -> BTreeSet<usize> {
        self.rows
            .values()
            .filter(|covering| covering.len() == 1)
            .flatten()
            .copied()
            .collect()
    }

    /// Mark every minterm covered by the prime at `position` as covered
    pub fn cover_with(&mut self, position: usize) {
        if let Some(prime) = self.primes.get(position) {
            self.rows.retain(|minterm, _| !prime.covers(*minterm));
        }
    }

    /// Remove the essential primes and everything they cover.
    ///
    /// Returns the essential primes in ascending position order.
    pub fn extract_essentials(&mut self) -> Vec<usize> {
        let essentials: Vec<usize> = self.essential_primes().into_iter().collect();
        for &position in &essentials {
            self.cover_with(position);
        }
        debug!(
            "{} essential primes, {} minterms left for {} candidates",
            essentials.len(),
            self.rows.len(),
            self.candidates().len()
        );
        essentials
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primes::prime_implicants;

    fn table(minterms: &[usize], dont_cares: &[usize]) -> CoveringTable {
        let primes =
            prime_implicants(4, minterms.iter().chain(dont_cares.iter()).copied()).unwrap();
        CoveringTable::new(primes, minterms.iter().copied())
    }

    fn masks(table: &CoveringTable, positions: impl IntoIterator<Item = usize>) -> Vec<String> {
        positions
            .into_iter()
            .map(|p| table.prime(p).unwrap().mask().to_string())
            .collect()
    }

    #[test]
    fn test_rows() {
        let t = table(&[0, 1, 4, 5, 9, 11, 15], &[]);
        assert_eq!(masks(&t, t.covering(0).unwrap().iter().copied()), vec!["0x0x"]);
        assert_eq!(
            masks(&t, t.covering(9).unwrap().iter().copied()),
            vec!["10x1", "x001"]
        );
        assert!(t.covering(2).is_none());
    }

    #[test]
    fn test_extract_essentials() {
        let mut t = table(&[0, 1, 4, 5, 9, 11, 15], &[]);
        let essentials = t.extract_essentials();
        assert_eq!(masks(&t, essentials), vec!["0x0x", "1x11"]);
        assert_eq!(t.remaining_minterms().collect::<Vec<_>>(), vec![9]);
        assert_eq!(masks(&t, t.candidates()), vec!["10x1", "x001"]);
    }

    #[test]
    fn test_essentials_cover_everything() {
        let mut t = table(&[0, 1, 4, 5, 11, 15], &[]);
        let essentials = t.extract_essentials();
        assert_eq!(masks(&t, essentials), vec!["0x0x", "1x11"]);
        assert!(t.is_empty());
        assert!(t.candidates().is_empty());
    }

    #[test]
    fn test_dont_cares_not_required() {
        let t = table(&[0, 1, 4, 5, 11, 15], &[2, 6, 10]);
        assert!(t.covering(2).is_none());
        assert_eq!(t.remaining_minterms().count(), 6);
    }

    #[test]
    fn test_cyclic_has_no_essentials() {
        // Cyclic cover of three variables: every minterm has two primes
        let primes = prime_implicants(3, [0, 1, 2, 5, 6, 7]).unwrap();
        let mut t = CoveringTable::new(primes, [0, 1, 2, 5, 6, 7]);
        assert!(t.essential_primes().is_empty());
        assert!(t.extract_essentials().is_empty());
        assert_eq!(t.remaining_minterms().count(), 6);
    }
}
