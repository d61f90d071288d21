//! Layout data types
//!
//! These are the values the solver hands to the cut-list generator and to
//! whatever renders, edits or persists a plan.

use std::collections::BTreeMap;

use crate::solver::{SizeSet, Solution};
use crate::types::{LayoutError, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One cabinet module placed along the wall
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct ModuleInstance {
    /// Module width in mm
    pub width: u32,
    /// Position of the width in the sorted module-width set
    pub type_index: usize,
}

/// Ordered modules along the wall
///
/// The order is a display concern; the solver only fixes which widths appear
/// and how often.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct Layout {
    pub modules: Vec<ModuleInstance>,
}

/// Recomputed figures of a layout against its wall
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutMetrics {
    pub wall_length_mm: i64,
    pub total_length_mm: u64,
    /// Unused wall length (never negative)
    pub gap_mm: u64,
    /// Modules per width, every width of the set included
    pub counts: BTreeMap<u32, usize>,
    pub module_count: usize,
}

impl Layout {
    /// Expand a solution into module instances, narrowest width first
    pub fn from_solution(solution: &Solution, widths: &SizeSet) -> Self {
        let modules = solution
            .expand()
            .into_iter()
            .filter_map(|width| {
                widths
                    .index_of(width)
                    .map(|type_index| ModuleInstance { width, type_index })
            })
            .collect();
        Self { modules }
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    pub fn widths(&self) -> impl Iterator<Item = u32> + '_ {
        self.modules.iter().map(|module| module.width)
    }

    pub fn total_length_mm(&self) -> u64 {
        self.widths().map(u64::from).sum()
    }

    /// Modules per width of `widths`; widths outside the set are ignored
    pub fn counts(&self, widths: &SizeSet) -> BTreeMap<u32, usize> {
        let mut counts: BTreeMap<u32, usize> = widths.iter().map(|w| (w, 0)).collect();
        for width in self.widths() {
            if let Some(count) = counts.get_mut(&width) {
                *count += 1;
            }
        }
        counts
    }

    /// Recompute totals from the instances themselves
    pub fn metrics(&self, wall_length_mm: i64, widths: &SizeSet) -> LayoutMetrics {
        let total_length_mm = self.total_length_mm();
        let gap_mm = u64::try_from(wall_length_mm)
            .unwrap_or(0)
            .saturating_sub(total_length_mm);
        LayoutMetrics {
            wall_length_mm,
            total_length_mm,
            gap_mm,
            counts: self.counts(widths),
            module_count: self.len(),
        }
    }

    /// A copy with one more module of `width` appended.
    ///
    /// Refused when the width is not part of the set or when the run would
    /// become longer than the wall.
    pub fn with_module_added(
        &self,
        width: u32,
        wall_length_mm: i64,
        widths: &SizeSet,
    ) -> Result<Self> {
        let type_index = widths.index_of(width).ok_or_else(|| {
            LayoutError::Config(format!("{} mm is not one of the module widths", width))
        })?;
        let new_total = self.total_length_mm() + u64::from(width);
        if i64::try_from(new_total).map_or(true, |total| total > wall_length_mm) {
            return Err(LayoutError::Config(format!(
                "Adding {} mm would exceed the wall ({} mm > {} mm)",
                width, new_total, wall_length_mm
            )));
        }
        let mut modules = self.modules.clone();
        modules.push(ModuleInstance { width, type_index });
        Ok(Self { modules })
    }

    /// A copy without the first module of `width` (unchanged when absent)
    pub fn with_module_removed(&self, width: u32) -> Self {
        let mut modules = self.modules.clone();
        if let Some(pos) = modules.iter().position(|module| module.width == width) {
            modules.remove(pos);
        }
        Self { modules }
    }
}

/// Result of a horizontal solve
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct HorizontalSolve {
    pub wall_length_mm: i64,
    pub module_widths: SizeSet,
    /// GCD of the module widths
    pub reduced_unit: u32,
    /// Solution in mm
    pub solution: Solution,
    pub layout: Layout,
}

impl HorizontalSolve {
    pub fn total_length_mm(&self) -> u64 {
        self.solution.achieved
    }

    pub fn gap_mm(&self) -> u64 {
        self.solution.gap(self.wall_length_mm.max(0) as u64)
    }

    /// Nothing fits on the wall
    pub fn is_empty(&self) -> bool {
        self.layout.is_empty()
    }
}

/// Stacked rows of the cabinet body
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct VerticalComposition {
    /// Row heights, bottom to top
    pub row_heights: Vec<u32>,
    /// Sum of the row heights
    pub real_height_mm: u64,
    /// Body height budget the rows were stacked into
    pub target_height_mm: i64,
    /// The budget fit no row and a single smallest row was used instead
    #[cfg_attr(feature = "serde", serde(default))]
    pub is_fallback: bool,
}

impl VerticalComposition {
    pub fn row_count(&self) -> usize {
        self.row_heights.len()
    }

    /// Remaining height; negative when the guaranteed single row is taller
    /// than the budget
    pub fn gap_mm(&self) -> i64 {
        self.target_height_mm - self.real_height_mm as i64
    }

    pub fn exceeds_target(&self) -> bool {
        self.gap_mm() < 0
    }
}
