//! Cut-list generation
//!
//! Turns a solved layout and its stacked rows into the panels a workshop has
//! to cut. Panels with the same part, length, width and thickness are merged
//! into one row with a summed quantity.

use std::collections::BTreeMap;

use log::debug;

use crate::constants::{DEFAULT_DEPTH_MM, DEFAULT_MATERIAL_THICKNESS_MM};
use crate::layout::{Layout, VerticalComposition};
use crate::types::{AssemblyMode, PartKind};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// =============================================================================
// Parameters
// =============================================================================

/// Physical parameters of the carcass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CutListParams {
    pub depth_mm: u32,
    pub material_thickness_mm: u32,
    pub back_thickness_mm: u32,
    pub include_back: bool,
    pub assembly_mode: AssemblyMode,
    /// Extra stock on independent-mode panels for trimming on site
    pub corner_allowance_mm: u32,
}

impl Default for CutListParams {
    fn default() -> Self {
        Self {
            depth_mm: DEFAULT_DEPTH_MM,
            material_thickness_mm: DEFAULT_MATERIAL_THICKNESS_MM,
            back_thickness_mm: 0,
            include_back: true,
            assembly_mode: AssemblyMode::Independent,
            corner_allowance_mm: 0,
        }
    }
}

// =============================================================================
// Panels
// =============================================================================

/// One row of the cut list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Panel {
    pub part: PartKind,
    pub length: u32,
    pub width: u32,
    pub thickness: u32,
    pub quantity: u32,
}

/// Merged panels, sorted by part label, thickness, length, then width
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct CutList {
    pub panels: Vec<Panel>,
}

impl CutList {
    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    pub fn len(&self) -> usize {
        self.panels.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Panel> {
        self.panels.iter()
    }

    /// Number of panels to cut, all rows together
    pub fn total_quantity(&self) -> u64 {
        self.panels.iter().map(|p| u64::from(p.quantity)).sum()
    }

    /// Number of panels of one part, all dimensions together
    pub fn quantity_of(&self, part: PartKind) -> u64 {
        self.panels
            .iter()
            .filter(|p| p.part == part)
            .map(|p| u64::from(p.quantity))
            .sum()
    }
}

/// Identity of a panel; field order is the output order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct PanelKey {
    part: PartKind,
    thickness: u32,
    length: u32,
    width: u32,
}

#[derive(Default)]
struct PanelAccumulator {
    quantities: BTreeMap<PanelKey, u32>,
}

impl PanelAccumulator {
    fn add(&mut self, part: PartKind, length: u32, width: u32, thickness: u32, quantity: u32) {
        let key = PanelKey {
            part,
            thickness,
            length,
            width,
        };
        *self.quantities.entry(key).or_insert(0) += quantity;
    }

    fn finish(self) -> CutList {
        let panels = self
            .quantities
            .into_iter()
            .map(|(key, quantity)| Panel {
                part: key.part,
                length: key.length,
                width: key.width,
                thickness: key.thickness,
                quantity,
            })
            .collect();
        CutList { panels }
    }
}

// =============================================================================
// Generation
// =============================================================================

/// Generate the cut list for a layout stacked into rows.
///
/// Every module spans every row. An empty layout or no rows gives an empty
/// cut list.
pub fn generate_cut_list(
    layout: &Layout,
    vertical: &VerticalComposition,
    params: &CutListParams,
) -> CutList {
    generate_cut_list_for_rows(layout, &vertical.row_heights, params)
}

/// Same as [`generate_cut_list`] with the row heights given directly
pub fn generate_cut_list_for_rows(
    layout: &Layout,
    row_heights: &[u32],
    params: &CutListParams,
) -> CutList {
    let mut panels = PanelAccumulator::default();
    if layout.is_empty() || row_heights.is_empty() {
        return panels.finish();
    }

    match params.assembly_mode {
        AssemblyMode::Independent => add_independent(&mut panels, layout, row_heights, params),
        AssemblyMode::Shared => add_shared(&mut panels, layout, row_heights, params),
    }

    if params.include_back && params.back_thickness_mm > 0 {
        for &height in row_heights {
            for width in layout.widths() {
                panels.add(PartKind::Back, width, height, params.back_thickness_mm, 1);
            }
        }
    }

    let cut_list = panels.finish();
    debug!(
        "Cut list ({:?}): {} modules x {} rows -> {} rows, {} panels",
        params.assembly_mode,
        layout.len(),
        row_heights.len(),
        cut_list.len(),
        cut_list.total_quantity()
    );
    cut_list
}

/// Each (module, row) is a box: two sides, a top and a bottom, all grown by
/// the corner allowance
fn add_independent(
    panels: &mut PanelAccumulator,
    layout: &Layout,
    row_heights: &[u32],
    params: &CutListParams,
) {
    let allowance = params.corner_allowance_mm;
    let depth = params.depth_mm.saturating_add(allowance);
    let thickness = params.material_thickness_mm;

    for &height in row_heights {
        let side = height.saturating_add(allowance);
        for width in layout.widths() {
            let across = width.saturating_add(allowance);
            panels.add(PartKind::Side, side, depth, thickness, 2);
            panels.add(PartKind::Top, across, depth, thickness, 1);
            panels.add(PartKind::Bottom, across, depth, thickness, 1);
        }
    }
}

/// Neighbouring modules share partitions and stacked rows share shelves.
/// Panels are cut net.
fn add_shared(
    panels: &mut PanelAccumulator,
    layout: &Layout,
    row_heights: &[u32],
    params: &CutListParams,
) {
    let depth = params.depth_mm;
    let thickness = params.material_thickness_mm;
    let modules = layout.len() as u32;
    let rows = row_heights.len() as u32;

    for &height in row_heights {
        panels.add(PartKind::EndSide, height, depth, thickness, 2);
        if modules > 1 {
            panels.add(PartKind::Partition, height, depth, thickness, modules - 1);
        }
    }

    for width in layout.widths() {
        panels.add(PartKind::BaseBottom, width, depth, thickness, 1);
        if rows > 1 {
            panels.add(PartKind::Shelf, width, depth, thickness, rows - 1);
        }
        panels.add(PartKind::CapTop, width, depth, thickness, 1);
    }
}

// =============================================================================
// Tests
// =============================================================================
