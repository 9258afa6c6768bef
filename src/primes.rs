//! Prime implicant generation
//!
//! Implicants are combined generation by generation until a fixed point is
//! reached:
//!
//! 1. Group the current generation by the number of `1` positions
//! 2. Combine every implicant with every implicant of the next heavier group
//! 3. Implicants that took part in a combination are not prime; the
//!    deduplicated combinations form the next generation
//!
//! The primes are the implicants that were never combined in their own
//! generation.

use crate::error::Result;
use crate::implicant::Implicant;
use crate::mask::Mask;
use log::debug;
use std::collections::BTreeMap;

/// Iterative generator of prime implicants
#[derive(Debug, Clone)]
pub struct PrimeImplicantGenerator {
    /// Implicants of the current generation, keyed (and deduplicated) by mask
    generation: BTreeMap<Mask, Implicant>,
    /// Primes collected so far
    primes: Vec<Implicant>,
    /// Number of completed generations
    generations: usize,
}

impl PrimeImplicantGenerator {
    /// Seed the first generation with one implicant per index
    pub fn new<I>(domain_size: usize, indices: I) -> Self
    where
        I: IntoIterator<Item = usize>,
    {
        let generation = indices
            .into_iter()
            .map(|index| Implicant::from_index(domain_size, index))
            .map(|implicant| (implicant.mask().clone(), implicant))
            .collect();

        PrimeImplicantGenerator {
            generation,
            primes: Vec::new(),
            generations: 0,
        }
    }

    /// Number of generations processed so far
    pub fn generations(&self) -> usize {
        self.generations
    }

    /// Run to the fixed point and return the primes in ascending mask order
    pub fn generate(mut self) -> Result<Vec<Implicant>> {
        while self.step()? {}
        let mut primes = self.primes;
        primes.sort_by(|a, b| a.mask().cmp(b.mask()));
        Ok(primes)
    }

    /// Process one generation. Returns `false` once nothing is left to combine.
    fn step(&mut self) -> Result<bool> {
        if self.generation.is_empty() {
            return Ok(false);
        }

        let current: Vec<Implicant> = std::mem::take(&mut self.generation).into_values().collect();

        let mut groups: BTreeMap<usize, Vec<usize>> = BTreeMap::new();
        for (i, implicant) in current.iter().enumerate() {
            groups
                .entry(implicant.mask().count_ones())
                .or_default()
                .push(i);
        }

        let mut used = vec![false; current.len()];
        let mut next: BTreeMap<Mask, Implicant> = BTreeMap::new();

        for (weight, lower) in &groups {
            let Some(upper) = groups.get(&(weight + 1)) else {
                continue;
            };
            for &i in lower {
                for &j in upper {
                    if let Some(mask) = Mask::combine(current[i].mask(), current[j].mask())? {
                        used[i] = true;
                        used[j] = true;
                        next.entry(mask.clone())
                            .or_insert_with(|| Implicant::merged(mask, &current[i], &current[j]));
                    }
                }
            }
        }

        let combined = used.iter().filter(|u| **u).count();
        let before = self.primes.len();
        self.primes.extend(
            current
                .into_iter()
                .zip(used)
                .filter(|(_, used)| !used)
                .map(|(implicant, _)| implicant),
        );

        debug!(
            "generation {}: {} implicants combined into {}, {} new primes",
            self.generations,
            combined,
            next.len(),
            self.primes.len() - before
        );

        self.generation = next;
        self.generations += 1;
        Ok(true)
    }
}

/// Compute the prime implicants covering `indices` (minterms and don't-cares)
pub fn prime_implicants<I>(domain_size: usize, indices: I) -> Result<Vec<Implicant>>
where
    I: IntoIterator<Item = usize>,
{
    PrimeImplicantGenerator::new(domain_size, indices).generate()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prime_masks(domain_size: usize, indices: &[usize]) -> Vec<String> {
        prime_implicants(domain_size, indices.iter().copied())
            .unwrap()
            .iter()
            .map(|p| p.mask().to_string())
            .collect()
    }

    #[test]
    fn test_no_indices() {
        assert!(prime_masks(3, &[]).is_empty());
    }

    #[test]
    fn test_single_index() {
        assert_eq!(prime_masks(3, &[5]), vec!["101"]);
    }

    #[test]
    fn test_tautology() {
        assert_eq!(prime_masks(3, &[0, 1, 2, 3, 4, 5, 6, 7]), vec!["xxx"]);
    }

    #[test]
    fn test_classic_primes() {
        assert_eq!(
            prime_masks(4, &[0, 1, 4, 5, 9, 11, 15]),
            vec!["0x0x", "10x1", "1x11", "x001"]
        );
    }

    #[test]
    fn test_duplicate_indices_collapse() {
        assert_eq!(prime_masks(2, &[1, 1, 3]), vec!["x1"]);
    }

    #[test]
    fn test_primes_cover_their_rows() {
        let primes = prime_implicants(4, [4, 5, 6, 7, 8, 9, 10, 11, 13, 14]).unwrap();
        for prime in &primes {
            for row in prime.minterms() {
                assert!(prime.mask().covers(*row));
            }
            assert_eq!(prime.minterms().len(), prime.mask().indices().len());
        }
        let masks: Vec<String> = primes.iter().map(|p| p.mask().to_string()).collect();
        assert_eq!(masks, vec!["01xx", "10xx", "1x01", "1x10", "x101", "x110"]);
    }

    #[test]
    fn test_generation_count() {
        let mut generator = PrimeImplicantGenerator::new(2, [0, 1, 2, 3]);
        assert_eq!(generator.generations(), 0);
        while generator.step().unwrap() {}
        // 4 singles -> 4 pairs -> 1 quad -> nothing left
        assert_eq!(generator.generations(), 3);
    }
}
