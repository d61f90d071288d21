//! Vertical solving: stacking rows into a cabinet body

use log::{debug, warn};

use super::VerticalComposition;
use crate::constants::{DEFAULT_ROW_HEIGHT_MM, MAX_ROW_HEIGHT_MM};
use crate::solver::{SizeSet, solve_reduced};
use crate::types::Result;

/// Row heights the solver may stack: members taller than
/// [`MAX_ROW_HEIGHT_MM`] are dropped, and an empty result falls back to the
/// single [`DEFAULT_ROW_HEIGHT_MM`].
pub fn usable_row_heights(heights: &SizeSet) -> SizeSet {
    let usable = heights.filtered(|height| height <= MAX_ROW_HEIGHT_MM);
    if usable.is_empty() {
        warn!(
            "No usable row height in {:?}, using {} mm",
            heights.as_slice(),
            DEFAULT_ROW_HEIGHT_MM
        );
        SizeSet::single(DEFAULT_ROW_HEIGHT_MM)
    } else {
        usable
    }
}

/// Stack rows into a body height budget.
///
/// Never returns zero rows: when the budget is non-positive or smaller than
/// every usable height, the result is a single row of the smallest usable
/// height, flagged with `is_fallback`.
///
/// # Errors
/// * `TargetTooLarge` - budget too tall for the combination table
pub fn solve_vertical(target_height_mm: i64, heights: &SizeSet) -> Result<VerticalComposition> {
    let heights = usable_row_heights(heights);
    let smallest = heights.smallest().unwrap_or(DEFAULT_ROW_HEIGHT_MM);

    let mut row_heights = if target_height_mm > 0 {
        let (_, solution) = solve_reduced(target_height_mm as u64, &heights)?;
        solution.expand()
    } else {
        Vec::new()
    };

    let is_fallback = row_heights.is_empty();
    if is_fallback {
        warn!(
            "Body height {} mm fits no row, using a single {} mm row",
            target_height_mm, smallest
        );
        row_heights.push(smallest);
    }

    let real_height_mm = row_heights.iter().copied().map(u64::from).sum();
    debug!(
        "Body {} mm: rows {:?} = {} mm",
        target_height_mm, row_heights, real_height_mm
    );

    Ok(VerticalComposition {
        row_heights,
        real_height_mm,
        target_height_mm,
        is_fallback,
    })
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn heights(sizes: &[u32]) -> SizeSet {
        SizeSet::new(sizes.iter().copied()).unwrap()
    }

    #[test]
    fn test_two_full_rows() {
        let composition = solve_vertical(650, &heights(&[320])).unwrap();
        assert_eq!(composition.row_heights, vec![320, 320]);
        assert_eq!(composition.real_height_mm, 640);
        assert_eq!(composition.gap_mm(), 10);
    }

    #[test]
    fn test_mixed_rows() {
        // 160 + 320 + 320 = 800 exactly
        let composition = solve_vertical(800, &heights(&[160, 320])).unwrap();
        assert_eq!(composition.real_height_mm, 800);
        assert_eq!(composition.row_count(), 3);
        assert!(!composition.is_fallback);
    }

    #[test]
    fn test_non_positive_target_gives_one_row() {
        for target in [0, -50] {
            let composition = solve_vertical(target, &heights(&[200, 240])).unwrap();
            assert_eq!(composition.row_heights, vec![200]);
            assert!(composition.exceeds_target());
            assert!(composition.is_fallback);
        }
    }

    #[test]
    fn test_target_below_smallest_row() {
        let composition = solve_vertical(100, &heights(&[160, 320])).unwrap();
        assert_eq!(composition.row_heights, vec![160]);
        assert_eq!(composition.gap_mm(), -60);
        assert!(composition.is_fallback);
    }

    #[test]
    fn test_body_too_tall_for_table() {
        assert!(matches!(
            solve_vertical(i64::MAX, &heights(&[160, 320])),
            Err(crate::types::LayoutError::TargetTooLarge { .. })
        ));
    }

    #[test]
    fn test_too_tall_heights_are_dropped() {
        let usable = usable_row_heights(&heights(&[160, 400]));
        assert_eq!(usable.as_slice(), &[160]);
    }

    #[test]
    fn test_default_row_height() {
        assert_eq!(usable_row_heights(&SizeSet::default()).as_slice(), &[320]);
        assert_eq!(usable_row_heights(&heights(&[500])).as_slice(), &[320]);
    }
}
