//! Bounded-sum combination solver
//!
//! Given a target and a set of denominations available in unlimited supply,
//! find the largest sum not exceeding the target, reached with as few pieces
//! as possible. The same routine fits modules along a wall and stacks rows
//! into a cabinet body.
//!
//! The table is filled forward over every magnitude `0..=target`. Each
//! reachable magnitude remembers its minimal piece count and the last
//! denomination used; equal counts keep the first denomination tried, and
//! denominations are tried in ascending order.

use std::collections::BTreeMap;

use log::debug;

use super::SizeSet;
use crate::constants::MAX_DP_MAGNITUDE;
use crate::types::{LayoutError, Result};

// =============================================================================
// Solution
// =============================================================================

/// Result of one combination solve
///
/// `counts` has an entry for every denomination of the input set, keyed by
/// the denomination itself (zero when unused).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    /// Sum of all chosen pieces
    pub achieved: u64,
    /// Number of chosen pieces
    pub piece_count: usize,
    /// Pieces per denomination
    pub counts: BTreeMap<u32, usize>,
}

impl Solution {
    /// The trivial solution: nothing chosen
    pub fn empty(denominations: &[u32]) -> Self {
        Self {
            achieved: 0,
            piece_count: 0,
            counts: denominations.iter().map(|&d| (d, 0)).collect(),
        }
    }

    /// True when nothing fits under the target
    pub fn is_empty(&self) -> bool {
        self.piece_count == 0
    }

    /// Shortfall from a target expressed in the same unit
    pub fn gap(&self, target: u64) -> u64 {
        target.saturating_sub(self.achieved)
    }

    /// Rescale a reduced-unit solution back to the original unit
    pub fn scaled(&self, unit: u32) -> Self {
        Self {
            achieved: self.achieved * u64::from(unit),
            piece_count: self.piece_count,
            counts: self
                .counts
                .iter()
                .map(|(&denomination, &count)| (denomination * unit, count))
                .collect(),
        }
    }

    /// Every chosen piece, smallest denomination first
    pub fn expand(&self) -> Vec<u32> {
        self.counts
            .iter()
            .flat_map(|(&denomination, &count)| std::iter::repeat_n(denomination, count))
            .collect()
    }
}

// =============================================================================
// Table
// =============================================================================

#[derive(Debug, Clone, Copy)]
struct Cell {
    pieces: usize,
    /// Index of the denomination that reached this magnitude (`None` at 0)
    last: Option<usize>,
}

/// Solve in reduced units.
///
/// `denominations` must be positive, unique and sorted ascending. Magnitude 0
/// is always reachable, so this never fails: when no denomination fits the
/// result is [`Solution::empty`].
pub fn solve_combination(target: usize, denominations: &[u32]) -> Solution {
    debug!(
        "Combination table: {} magnitudes x {} denominations",
        target + 1,
        denominations.len()
    );

    let mut table: Vec<Option<Cell>> = vec![None; target + 1];
    table[0] = Some(Cell {
        pieces: 0,
        last: None,
    });

    for magnitude in 1..=target {
        let mut best: Option<Cell> = None;
        for (index, &denomination) in denominations.iter().enumerate() {
            let denomination = denomination as usize;
            if denomination > magnitude {
                continue;
            }
            let Some(prev) = table[magnitude - denomination] else {
                continue;
            };
            let pieces = prev.pieces + 1;
            if best.is_none_or(|b| pieces < b.pieces) {
                best = Some(Cell {
                    pieces,
                    last: Some(index),
                });
            }
        }
        table[magnitude] = best;
    }

    // Smallest shortfall first, then fewest pieces, then lowest magnitude
    let mut chosen: Option<(usize, usize, usize)> = None;
    for (magnitude, cell) in table.iter().enumerate() {
        let Some(cell) = cell else {
            continue;
        };
        let gap = target - magnitude;
        let better = match chosen {
            None => true,
            Some((best_gap, best_pieces, _)) => {
                gap < best_gap || (gap == best_gap && cell.pieces < best_pieces)
            }
        };
        if better {
            chosen = Some((gap, cell.pieces, magnitude));
        }
    }

    let magnitude = chosen.map_or(0, |(_, _, magnitude)| magnitude);
    let solution = reconstruct(&table, denominations, magnitude);
    debug!(
        "Best magnitude {} of {} with {} pieces",
        solution.achieved, target, solution.piece_count
    );
    solution
}

/// Walk the back-pointers from `magnitude` down to 0
fn reconstruct(table: &[Option<Cell>], denominations: &[u32], magnitude: usize) -> Solution {
    let mut solution = Solution::empty(denominations);
    let mut remaining = magnitude;
    while let Some(Cell {
        last: Some(index), ..
    }) = table[remaining]
    {
        let denomination = denominations[index];
        *solution.counts.entry(denomination).or_insert(0) += 1;
        solution.piece_count += 1;
        remaining -= denomination as usize;
    }
    solution.achieved = magnitude as u64;
    solution
}

/// Solve in millimeters: reduce the set by its GCD, floor the target to
/// whole reduced units, solve, then scale back.
///
/// # Errors
/// * `EmptyDenominationSet` - no sizes
/// * `TargetTooLarge` - more than [`MAX_DP_MAGNITUDE`] reduced units
pub fn solve_reduced(target_mm: u64, sizes: &SizeSet) -> Result<(u32, Solution)> {
    let (unit, reduced) = sizes.reduce().ok_or(LayoutError::EmptyDenominationSet)?;
    let target_units = target_mm / u64::from(unit);
    let target_units = usize::try_from(target_units)
        .ok()
        .filter(|&units| units <= MAX_DP_MAGNITUDE)
        .ok_or(LayoutError::TargetTooLarge {
            target_mm,
            units: target_units,
        })?;
    debug!(
        "Reduced unit {} mm: target {} mm -> {} units, sizes {:?} -> {:?}",
        unit,
        target_mm,
        target_units,
        sizes.as_slice(),
        reduced
    );
    Ok((unit, solve_combination(target_units, &reduced).scaled(unit)))
}

// =============================================================================
// Tests
// =============================================================================
