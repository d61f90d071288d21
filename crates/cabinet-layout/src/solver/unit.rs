//! Size sets and unit reduction
//!
//! Sizes are positive integers in millimeters. A [`SizeSet`] keeps them
//! unique and sorted ascending, which fixes the order denominations are
//! tried in by the combination solver.

use crate::types::{LayoutError, Result};

// =============================================================================
// GCD
// =============================================================================

/// Greatest common divisor of two sizes
pub fn gcd(mut a: u32, mut b: u32) -> u32 {
    while b != 0 {
        let t = b;
        b = a % b;
        a = t;
    }
    a
}

/// Greatest common divisor of all sizes, `None` for an empty slice
pub fn gcd_all(sizes: &[u32]) -> Option<u32> {
    let (&first, rest) = sizes.split_first()?;
    Some(rest.iter().fold(first, |g, &size| gcd(g, size)))
}

// =============================================================================
// Size Set
// =============================================================================

/// Unique positive sizes, sorted ascending
#[derive(Debug, Clone, PartialEq, Eq, Default, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<u32>", into = "Vec<u32>")
)]
pub struct SizeSet(Vec<u32>);

impl SizeSet {
    /// Build a set from arbitrary sizes. Zero is rejected; duplicates are
    /// dropped.
    pub fn new(sizes: impl IntoIterator<Item = u32>) -> Result<Self> {
        let mut sizes: Vec<u32> = sizes.into_iter().collect();
        if sizes.contains(&0) {
            return Err(LayoutError::InvalidSize("sizes must be positive".to_string()));
        }
        sizes.sort_unstable();
        sizes.dedup();
        Ok(Self(sizes))
    }

    /// A set holding one size; zero yields an empty set
    pub fn single(size: u32) -> Self {
        Self(if size > 0 { vec![size] } else { Vec::new() })
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.0.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Position of a size in the set (the `type_index` of a module)
    pub fn index_of(&self, size: u32) -> Option<usize> {
        self.0.binary_search(&size).ok()
    }

    pub fn smallest(&self) -> Option<u32> {
        self.0.first().copied()
    }

    /// The reduced unit: GCD of every member
    pub fn reduced_unit(&self) -> Option<u32> {
        gcd_all(&self.0)
    }

    /// Members expressed in the reduced unit, with the unit itself
    pub fn reduce(&self) -> Option<(u32, Vec<u32>)> {
        let unit = self.reduced_unit()?;
        Some((unit, self.0.iter().map(|size| size / unit).collect()))
    }

    /// Subset of members matching a predicate
    pub fn filtered(&self, predicate: impl Fn(u32) -> bool) -> Self {
        Self(self.iter().filter(|&size| predicate(size)).collect())
    }
}

impl TryFrom<Vec<u32>> for SizeSet {
    type Error = LayoutError;

    fn try_from(sizes: Vec<u32>) -> Result<Self> {
        Self::new(sizes)
    }
}

impl From<SizeSet> for Vec<u32> {
    fn from(set: SizeSet) -> Self {
        set.0
    }
}

// =============================================================================
// Parsing
// =============================================================================

/// Parse a list of sizes separated by commas, semicolons or whitespace.
///
/// Any token that is not a positive integer rejects the whole list.
/// An empty string yields an empty set.
pub fn parse_sizes(text: &str) -> Result<SizeSet> {
    let sizes = text
        .split(|c: char| c == ',' || c == ';' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .parse::<u32>()
                .ok()
                .filter(|&size| size > 0)
                .ok_or_else(|| LayoutError::InvalidSize(token.to_string()))
        })
        .collect::<Result<Vec<u32>>>()?;
    SizeSet::new(sizes)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gcd() {
        assert_eq!(gcd(300, 450), 150);
        assert_eq!(gcd(7, 13), 1);
        assert_eq!(gcd(320, 0), 320);
    }

    #[test]
    fn test_gcd_all() {
        assert_eq!(gcd_all(&[200, 300]), Some(100));
        assert_eq!(gcd_all(&[200, 202, 204]), Some(2));
        assert_eq!(gcd_all(&[320]), Some(320));
        assert_eq!(gcd_all(&[]), None);
    }

    #[test]
    fn test_size_set_sorted_and_unique() {
        let set = SizeSet::new([450, 300, 450, 150]).unwrap();
        assert_eq!(set.as_slice(), &[150, 300, 450]);
        assert_eq!(set.index_of(300), Some(1));
        assert_eq!(set.index_of(200), None);
        assert_eq!(set.smallest(), Some(150));
    }

    #[test]
    fn test_size_set_rejects_zero() {
        assert!(matches!(
            SizeSet::new([300, 0]),
            Err(LayoutError::InvalidSize(_))
        ));
    }

    #[test]
    fn test_reduce_divides_every_member() {
        let set = SizeSet::new([300, 450]).unwrap();
        let (unit, reduced) = set.reduce().unwrap();
        assert_eq!(unit, 150);
        assert_eq!(reduced, vec![2, 3]);
        assert!(SizeSet::default().reduce().is_none());
    }

    #[test]
    fn test_parse_sizes_separators() {
        let set = parse_sizes("400, 200;300  200").unwrap();
        assert_eq!(set.as_slice(), &[200, 300, 400]);
        assert!(parse_sizes("").unwrap().is_empty());
    }

    #[test]
    fn test_parse_sizes_rejects_bad_tokens() {
        assert!(parse_sizes("200, 0").is_err());
        assert!(parse_sizes("200, -5").is_err());
        assert!(parse_sizes("200, abc").is_err());
        assert!(parse_sizes("200.5").is_err());
    }
}
