//! Ternary masks over a variable domain
//!
//! A mask represents a product term. Each position corresponds to one variable
//! of the domain (position 0 is the most significant bit) and holds one of
//! three states: must be 0, must be 1, or don't care.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Value of a single variable in a mask
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MaskValue {
    /// Variable must be false (complemented)
    Zero,
    /// Variable must be true (uncomplemented)
    One,
    /// Variable can be either (don't care)
    DontCare,
}

impl MaskValue {
    /// Convert to character representation
    pub fn to_char(self) -> char {
        match self {
            MaskValue::Zero => '0',
            MaskValue::One => '1',
            MaskValue::DontCare => 'x',
        }
    }

    /// Check if this value is a literal (not don't care)
    pub fn is_literal(self) -> bool {
        matches!(self, MaskValue::Zero | MaskValue::One)
    }

    /// Check whether a concrete bit satisfies this value
    pub fn accepts(self, bit: bool) -> bool {
        match self {
            MaskValue::Zero => !bit,
            MaskValue::One => bit,
            MaskValue::DontCare => true,
        }
    }
}

impl TryFrom<char> for MaskValue {
    type Error = char;

    fn try_from(c: char) -> std::result::Result<Self, char> {
        match c {
            '0' => Ok(MaskValue::Zero),
            '1' => Ok(MaskValue::One),
            'x' => Ok(MaskValue::DontCare),
            other => Err(other),
        }
    }
}

/// An immutable ternary pattern describing a set of truth-table rows
///
/// Masks are ordered lexicographically with `0 < 1 < x` at each position, which
/// gives the deterministic ordering used for implicant aliases.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Mask {
    values: Vec<MaskValue>,
}

impl Mask {
    /// Create a mask from explicit values
    pub fn new(values: Vec<MaskValue>) -> Self {
        Mask { values }
    }

    /// Build a fully defined mask from the binary representation of `index`,
    /// most significant bit first.
    ///
    /// Only the lowest `domain_size` bits of `index` are used.
    pub fn from_index(domain_size: usize, index: usize) -> Self {
        let values = (0..domain_size)
            .map(|pos| {
                let shift = (domain_size - 1 - pos) as u32;
                let bit = index.checked_shr(shift).unwrap_or(0) & 1 == 1;
                if bit {
                    MaskValue::One
                } else {
                    MaskValue::Zero
                }
            })
            .collect();
        Mask { values }
    }

    /// Build one fully defined mask per index
    pub fn from_indices<I>(domain_size: usize, indices: I) -> Vec<Mask>
    where
        I: IntoIterator<Item = usize>,
    {
        indices
            .into_iter()
            .map(|index| Mask::from_index(domain_size, index))
            .collect()
    }

    /// Parse a mask from its string form (`0`, `1` and `x`, one per variable)
    pub fn parse(input: &str) -> Result<Self> {
        let values = input
            .chars()
            .enumerate()
            .map(|(position, c)| {
                MaskValue::try_from(c).map_err(|character| Error::MalformedMask {
                    input: input.to_string(),
                    character,
                    position,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Mask { values })
    }

    /// Parse several masks, failing on the first malformed one
    pub fn parse_all<'a, I>(inputs: I) -> Result<Vec<Mask>>
    where
        I: IntoIterator<Item = &'a str>,
    {
        inputs.into_iter().map(Mask::parse).collect()
    }

    /// Number of positions (variables)
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the mask has no positions at all
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Get value at position
    pub fn value(&self, position: usize) -> Option<MaskValue> {
        self.values.get(position).copied()
    }

    /// Get all values
    pub fn values(&self) -> &[MaskValue] {
        &self.values
    }

    /// Number of positions fixed to `1`
    pub fn count_ones(&self) -> usize {
        self.count(MaskValue::One)
    }

    /// Number of positions fixed to `0`
    pub fn count_zeros(&self) -> usize {
        self.count(MaskValue::Zero)
    }

    /// Number of don't-care positions
    pub fn count_dont_cares(&self) -> usize {
        self.count(MaskValue::DontCare)
    }

    /// Count the number of literals (non-don't-care values)
    pub fn literal_count(&self) -> usize {
        self.values.iter().filter(|v| v.is_literal()).count()
    }

    fn count(&self, what: MaskValue) -> usize {
        self.values.iter().filter(|v| **v == what).count()
    }

    fn check_length(&self, other: &Mask) -> Result<()> {
        if self.len() != other.len() {
            return Err(Error::IncompatibleLength {
                expected: self.len(),
                got: other.len(),
            });
        }
        Ok(())
    }

    /// Check if this mask has strictly more don't-care positions than `other`
    pub fn is_more_general(&self, other: &Mask) -> Result<bool> {
        self.check_length(other)?;
        Ok(self.count_dont_cares() > other.count_dont_cares())
    }

    /// Combine two masks that differ in exactly one defined position.
    ///
    /// Returns `Ok(None)` when the masks cannot be combined: one of them is more
    /// general than the other, they differ in more than one position, or the
    /// differing position is a don't-care in either mask.
    pub fn combine(first: &Mask, second: &Mask) -> Result<Option<Mask>> {
        if first.is_more_general(second)? || second.is_more_general(first)? {
            return Ok(None);
        }

        let mut diff_pos = None;
        for (i, (a, b)) in first.values.iter().zip(second.values.iter()).enumerate() {
            if a == b {
                continue;
            }
            if diff_pos.is_some() || !a.is_literal() || !b.is_literal() {
                return Ok(None);
            }
            diff_pos = Some(i);
        }

        Ok(diff_pos.map(|pos| {
            let mut values = first.values.clone();
            values[pos] = MaskValue::DontCare;
            Mask { values }
        }))
    }

    /// Check if the truth-table row `index` matches this mask
    pub fn covers(&self, index: usize) -> bool {
        let n = self.len();
        if index.checked_shr(n as u32).unwrap_or(0) != 0 {
            return false;
        }
        self.values.iter().enumerate().all(|(pos, value)| {
            let bit = index.checked_shr((n - 1 - pos) as u32).unwrap_or(0) & 1 == 1;
            value.accepts(bit)
        })
    }

    /// Expand every don't-care position into the concrete indices this mask
    /// represents, in ascending order
    pub fn indices(&self) -> Vec<usize> {
        let mut indices = vec![0usize];
        for value in &self.values {
            indices = match value {
                MaskValue::Zero => indices.into_iter().map(|i| i << 1).collect(),
                MaskValue::One => indices.into_iter().map(|i| (i << 1) | 1).collect(),
                MaskValue::DontCare => indices
                    .into_iter()
                    .flat_map(|i| [i << 1, (i << 1) | 1])
                    .collect(),
            };
        }
        indices
    }
}

impl fmt::Display for Mask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: String = self.values.iter().map(|v| v.to_char()).collect();
        f.write_str(&s)
    }
}

impl FromStr for Mask {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Mask::parse(s)
    }
}

impl TryFrom<String> for Mask {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        Mask::parse(&s)
    }
}

impl From<Mask> for String {
    fn from(mask: Mask) -> Self {
        mask.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mask(s: &str) -> Mask {
        Mask::parse(s).unwrap()
    }

    #[test]
    fn test_from_index() {
        assert_eq!(Mask::from_index(4, 11).to_string(), "1011");
        assert_eq!(Mask::from_index(4, 0).to_string(), "0000");
        assert_eq!(Mask::from_index(3, 7).to_string(), "111");
        // Bits above the domain are ignored
        assert_eq!(Mask::from_index(2, 5).to_string(), "01");
    }

    #[test]
    fn test_parse_and_display() {
        let m = mask("10x1");
        assert_eq!(m.len(), 4);
        assert_eq!(m.value(0), Some(MaskValue::One));
        assert_eq!(m.value(1), Some(MaskValue::Zero));
        assert_eq!(m.value(2), Some(MaskValue::DontCare));
        assert_eq!(m.value(4), None);
        assert_eq!(m.to_string(), "10x1");
    }

    #[test]
    fn test_parse_malformed() {
        let err = Mask::parse("10-1").unwrap_err();
        match err {
            Error::MalformedMask {
                character,
                position,
                ..
            } => {
                assert_eq!(character, '-');
                assert_eq!(position, 2);
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(Mask::parse("X").is_err());
    }

    #[test]
    fn test_counts() {
        let m = mask("x10x1");
        assert_eq!(m.count_ones(), 2);
        assert_eq!(m.count_zeros(), 1);
        assert_eq!(m.count_dont_cares(), 2);
        assert_eq!(m.literal_count(), 3);
    }

    #[test]
    fn test_is_more_general() {
        assert!(mask("0x0x").is_more_general(&mask("010x")).unwrap());
        assert!(!mask("010x").is_more_general(&mask("0x0x")).unwrap());
        assert!(!mask("x0").is_more_general(&mask("0x")).unwrap());
    }

    #[test]
    fn test_incompatible_length() {
        assert!(matches!(
            mask("01").is_more_general(&mask("011")),
            Err(Error::IncompatibleLength {
                expected: 2,
                got: 3
            })
        ));
        assert!(Mask::combine(&mask("01"), &mask("011")).is_err());
    }

    #[test]
    fn test_combine() {
        let combined = Mask::combine(&mask("0100"), &mask("0101")).unwrap();
        assert_eq!(combined, Some(mask("010x")));

        let combined = Mask::combine(&mask("010x"), &mask("000x")).unwrap();
        assert_eq!(combined, Some(mask("0x0x")));

        // Commutative
        assert_eq!(
            Mask::combine(&mask("000x"), &mask("010x")).unwrap(),
            Some(mask("0x0x"))
        );
    }

    #[test]
    fn test_combine_refused() {
        // Two differing positions
        assert_eq!(Mask::combine(&mask("0000"), &mask("0011")).unwrap(), None);
        // Identical masks
        assert_eq!(Mask::combine(&mask("0101"), &mask("0101")).unwrap(), None);
        // Don't-cares in different places
        assert_eq!(Mask::combine(&mask("x0"), &mask("0x")).unwrap(), None);
        // One mask more general than the other
        assert_eq!(Mask::combine(&mask("0x"), &mask("01")).unwrap(), None);
        // Multiple shared don't-cares still combine
        assert_eq!(
            Mask::combine(&mask("xx00"), &mask("xx01")).unwrap(),
            Some(mask("xx0x"))
        );
    }

    #[test]
    fn test_covers_and_indices() {
        let m = mask("1x11");
        assert!(m.covers(11));
        assert!(m.covers(15));
        assert!(!m.covers(3));
        assert!(!m.covers(27));
        assert_eq!(m.indices(), vec![11, 15]);
        assert_eq!(mask("0x0x").indices(), vec![0, 1, 4, 5]);
        assert_eq!(mask("").indices(), vec![0]);
    }

    #[test]
    fn test_ordering() {
        let mut masks = Mask::parse_all(["1x11", "x001", "0x0x", "10x1"]).unwrap();
        masks.sort();
        let strings: Vec<String> = masks.iter().map(|m| m.to_string()).collect();
        assert_eq!(strings, vec!["0x0x", "10x1", "1x11", "x001"]);
    }

    #[test]
    fn test_serde_string_form() {
        let json = serde_json::to_string(&mask("0x1")).unwrap();
        assert_eq!(json, "\"0x1\"");
        let back: Mask = serde_json::from_str(&json).unwrap();
        assert_eq!(back, mask("0x1"));
        assert!(serde_json::from_str::<Mask>("\"0?1\"").is_err());
    }
}
