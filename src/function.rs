//! Boolean functions described by their truth-table rows
//!
//! The minimizer only consumes a function through the [`BooleanFunction`]
//! trait: a variable domain plus the indices of its minterms and don't-cares.
//! Two concrete descriptions are provided here:
//!
//! - [`IndexedFunction`] - explicit minterm (or maxterm) and don't-care indices
//! - [`MaskBasedFunction`] - a list of product-term masks; this is also the
//!   form in which minimization results are returned
//!
//! Row `i` of the truth table assigns the first domain variable the most
//! significant bit of `i`.

use crate::error::{Error, Result};
use crate::mask::Mask;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Largest domain whose truth-table indices fit in a `usize`
pub const MAX_DOMAIN_SIZE: usize = usize::BITS as usize - 1;

/// Number of truth-table rows for a domain of `domain_size` variables
pub fn table_size(domain_size: usize) -> Result<usize> {
    if domain_size > MAX_DOMAIN_SIZE {
        return Err(Error::DomainTooLarge {
            variables: domain_size,
            limit: MAX_DOMAIN_SIZE,
        });
    }
    Ok(1usize << domain_size)
}

/// A named Boolean variable of a function's domain
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Variable {
    name: String,
}

impl Variable {
    pub fn new(name: impl Into<String>) -> Self {
        Variable { name: name.into() }
    }

    /// Build an ordered domain from variable names
    pub fn list<S: AsRef<str>>(names: &[S]) -> Vec<Variable> {
        names.iter().map(|n| Variable::new(n.as_ref())).collect()
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Value of a function at one truth-table row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BooleanValue {
    True,
    False,
    DontCare,
}

/// Whether the listed indices (or masks) describe where the function is true
/// or where it is false
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IndexKind {
    Minterms,
    Maxterms,
}

/// A Boolean function as seen by the minimizer
pub trait BooleanFunction {
    /// Human readable name
    fn name(&self) -> &str;

    /// Ordered variable domain; the first variable is the most significant bit
    fn domain(&self) -> &[Variable];

    fn has_minterm(&self, index: usize) -> bool;

    fn has_dont_care(&self, index: usize) -> bool;

    fn has_maxterm(&self, index: usize) -> bool {
        index < self.table_size() && !self.has_minterm(index) && !self.has_dont_care(index)
    }

    /// Minterm indices in ascending order
    fn minterms(&self) -> Box<dyn Iterator<Item = usize> + '_>;

    /// Don't-care indices in ascending order
    fn dont_cares(&self) -> Box<dyn Iterator<Item = usize> + '_>;

    /// Maxterm indices in ascending order (the complement of minterms and don't-cares)
    fn maxterms(&self) -> Box<dyn Iterator<Item = usize> + '_> {
        Box::new((0..self.table_size()).filter(move |&i| self.has_maxterm(i)))
    }

    /// Number of truth-table rows, saturating at `usize::MAX`
    fn table_size(&self) -> usize {
        1usize
            .checked_shl(self.domain().len() as u32)
            .unwrap_or(usize::MAX)
    }

    /// Value of the function at truth-table row `index`
    fn value_at(&self, index: usize) -> BooleanValue {
        if self.has_minterm(index) {
            BooleanValue::True
        } else if self.has_dont_care(index) {
            BooleanValue::DontCare
        } else {
            BooleanValue::False
        }
    }
}

/// Validated minterm and don't-care index sets shared by both function kinds
#[derive(Debug, Clone, PartialEq, Eq)]
struct IndexSets {
    minterms: BTreeSet<usize>,
    dont_cares: BTreeSet<usize>,
}

impl IndexSets {
    fn new(
        domain_size: usize,
        kind: IndexKind,
        indexes: BTreeSet<usize>,
        dont_cares: BTreeSet<usize>,
    ) -> Result<Self> {
        let table_size = table_size(domain_size)?;

        if let Some(&index) = indexes.iter().chain(dont_cares.iter()).find(|&&i| i >= table_size) {
            return Err(Error::IndexOutOfDomain { index, table_size });
        }
        if let Some(&index) = indexes.intersection(&dont_cares).next() {
            return Err(Error::OverlappingSpecification { index });
        }

        let minterms = match kind {
            IndexKind::Minterms => indexes,
            IndexKind::Maxterms => (0..table_size)
                .filter(|i| !indexes.contains(i) && !dont_cares.contains(i))
                .collect(),
        };

        Ok(IndexSets {
            minterms,
            dont_cares,
        })
    }
}

/// A function given by explicit truth-table indices
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedFunction {
    name: String,
    domain: Vec<Variable>,
    sets: IndexSets,
}

impl IndexedFunction {
    /// Create a function from term indices and don't-care indices.
    ///
    /// With [`IndexKind::Maxterms`] the function is true on every row that is
    /// neither listed in `indexes` nor a don't-care.
    pub fn new<I, D>(
        name: impl Into<String>,
        domain: Vec<Variable>,
        kind: IndexKind,
        indexes: I,
        dont_cares: D,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = usize>,
        D: IntoIterator<Item = usize>,
    {
        let sets = IndexSets::new(
            domain.len(),
            kind,
            indexes.into_iter().collect(),
            dont_cares.into_iter().collect(),
        )?;
        Ok(IndexedFunction {
            name: name.into(),
            domain,
            sets,
        })
    }

    /// Shorthand for a function given by its minterms
    pub fn from_minterms(
        name: impl Into<String>,
        domain: Vec<Variable>,
        minterms: &[usize],
        dont_cares: &[usize],
    ) -> Result<Self> {
        Self::new(
            name,
            domain,
            IndexKind::Minterms,
            minterms.iter().copied(),
            dont_cares.iter().copied(),
        )
    }
}

impl BooleanFunction for IndexedFunction {
    fn name(&self) -> &str {
        &self.name
    }

    fn domain(&self) -> &[Variable] {
        &self.domain
    }

    fn has_minterm(&self, index: usize) -> bool {
        self.sets.minterms.contains(&index)
    }

    fn has_dont_care(&self, index: usize) -> bool {
        self.sets.dont_cares.contains(&index)
    }

    fn minterms(&self) -> Box<dyn Iterator<Item = usize> + '_> {
        Box::new(self.sets.minterms.iter().copied())
    }

    fn dont_cares(&self) -> Box<dyn Iterator<Item = usize> + '_> {
        Box::new(self.sets.dont_cares.iter().copied())
    }
}

/// A function given as a sum of product-term masks
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MaskBasedFunction {
    name: String,
    domain: Vec<Variable>,
    kind: IndexKind,
    masks: Vec<Mask>,
    dont_care_masks: Vec<Mask>,
    #[serde(skip)]
    sets: IndexSets,
}

impl MaskBasedFunction {
    /// Create a function from term masks and don't-care masks.
    ///
    /// Every mask must have one position per domain variable.
    pub fn new(
        name: impl Into<String>,
        domain: Vec<Variable>,
        kind: IndexKind,
        masks: Vec<Mask>,
        dont_care_masks: Vec<Mask>,
    ) -> Result<Self> {
        for mask in masks.iter().chain(dont_care_masks.iter()) {
            if mask.len() != domain.len() {
                return Err(Error::IncompatibleLength {
                    expected: domain.len(),
                    got: mask.len(),
                });
            }
        }
        // Reject oversized domains before expanding any mask
        table_size(domain.len())?;

        let sets = IndexSets::new(
            domain.len(),
            kind,
            masks.iter().flat_map(Mask::indices).collect(),
            dont_care_masks.iter().flat_map(Mask::indices).collect(),
        )?;

        Ok(MaskBasedFunction {
            name: name.into(),
            domain,
            kind,
            masks,
            dont_care_masks,
            sets,
        })
    }

    /// Product terms of the function
    pub fn masks(&self) -> &[Mask] {
        &self.masks
    }

    pub fn dont_care_masks(&self) -> &[Mask] {
        &self.dont_care_masks
    }

    /// Whether the masks describe minterms (a sum of products) or maxterms
    pub fn kind(&self) -> IndexKind {
        self.kind
    }
}

impl BooleanFunction for MaskBasedFunction {
    fn name(&self) -> &str {
        &self.name
    }

    fn domain(&self) -> &[Variable] {
        &self.domain
    }

    fn has_minterm(&self, index: usize) -> bool {
        self.sets.minterms.contains(&index)
    }

    fn has_dont_care(&self, index: usize) -> bool {
        self.sets.dont_cares.contains(&index)
    }

    fn minterms(&self) -> Box<dyn Iterator<Item = usize> + '_> {
        Box::new(self.sets.minterms.iter().copied())
    }

    fn dont_cares(&self) -> Box<dyn Iterator<Item = usize> + '_> {
        Box::new(self.sets.dont_cares.iter().copied())
    }
}

impl fmt::Display for MaskBasedFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let terms: Vec<String> = self.masks.iter().map(|m| m.to_string()).collect();
        write!(f, "{} = [{}]", self.name, terms.join(", "))
    }
}
