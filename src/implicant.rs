//! Implicants: a mask together with the truth-table rows it covers

use crate::mask::Mask;
use std::collections::BTreeSet;
use std::fmt;

/// A product term of the function being minimized
///
/// The covered rows are always the expansion of the mask, so two implicants
/// with equal masks are interchangeable. The alias is only assigned when the
/// implicant takes part in Petrick's method, where it names the implicant in
/// the symbolic covering expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Implicant {
    mask: Mask,
    minterms: BTreeSet<usize>,
    alias: Option<String>,
}

impl Implicant {
    /// Create an implicant covering every row of `mask`
    pub fn new(mask: Mask) -> Self {
        let minterms = mask.indices().into_iter().collect();
        Implicant {
            mask,
            minterms,
            alias: None,
        }
    }

    /// Create the implicant of a single truth-table row
    pub fn from_index(domain_size: usize, index: usize) -> Self {
        Implicant {
            mask: Mask::from_index(domain_size, index),
            minterms: BTreeSet::from([index]),
            alias: None,
        }
    }

    /// Create the implicant produced by combining `first` and `second` into `mask`
    pub(crate) fn merged(mask: Mask, first: &Implicant, second: &Implicant) -> Self {
        Implicant {
            mask,
            minterms: first.minterms.union(&second.minterms).copied().collect(),
            alias: None,
        }
    }

    /// Return the same implicant carrying `alias`
    pub fn with_alias(self, alias: impl Into<String>) -> Self {
        Implicant {
            alias: Some(alias.into()),
            ..self
        }
    }

    pub fn mask(&self) -> &Mask {
        &self.mask
    }

    /// Truth-table rows covered by this implicant
    pub fn minterms(&self) -> &BTreeSet<usize> {
        &self.minterms
    }

    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    pub fn covers(&self, index: usize) -> bool {
        self.minterms.contains(&index)
    }

    /// Find the mask of the implicant named `alias`
    pub fn mask_by_alias<'a>(implicants: &'a [Implicant], alias: &str) -> Option<&'a Mask> {
        implicants
            .iter()
            .find(|i| i.alias() == Some(alias))
            .map(Implicant::mask)
    }
}

impl fmt::Display for Implicant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(alias) = &self.alias {
            write!(f, "{} ", alias)?;
        }
        let rows: Vec<String> = self.minterms.iter().map(|m| m.to_string()).collect();
        write!(f, "{} ({})", self.mask, rows.join(" "))
    }
}
