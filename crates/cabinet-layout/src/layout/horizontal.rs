//! Horizontal solving: fitting modules along a wall

use log::{debug, warn};

use super::{HorizontalSolve, Layout};
use crate::solver::{SizeSet, solve_reduced};
use crate::types::{LayoutError, Result};

/// Fit modules of the given widths along a wall.
///
/// The run never exceeds the wall. A wall shorter than every width is not an
/// error: the result has an empty layout and the whole wall as gap.
///
/// # Errors
/// * `InvalidTarget` - wall length is zero or negative
/// * `EmptyDenominationSet` - no module widths
/// * `TargetTooLarge` - wall too long for the combination table
pub fn solve_horizontal(wall_length_mm: i64, module_widths: &SizeSet) -> Result<HorizontalSolve> {
    if wall_length_mm <= 0 {
        return Err(LayoutError::InvalidTarget(wall_length_mm));
    }

    let (reduced_unit, solution) = solve_reduced(wall_length_mm as u64, module_widths)?;

    let layout = Layout::from_solution(&solution, module_widths);
    if layout.is_empty() {
        warn!(
            "No module fits a {} mm wall (narrowest module {:?} mm)",
            wall_length_mm,
            module_widths.smallest()
        );
    } else {
        debug!(
            "Wall {} mm: {} modules, {} mm, gap {} mm",
            wall_length_mm,
            layout.len(),
            solution.achieved,
            solution.gap(wall_length_mm as u64)
        );
    }

    Ok(HorizontalSolve {
        wall_length_mm,
        module_widths: module_widths.clone(),
        reduced_unit,
        solution,
        layout,
    })
}

// =============================================================================
// Tests
// =============================================================================
