//! Shared constants for cabinet layout
//!
//! This module centralizes the standard dimensions and presets used
//! throughout the solving process.

// =============================================================================
// Rows
// =============================================================================

/// Tallest single row a cabinet body may be stacked from (mm)
pub const MAX_ROW_HEIGHT_MM: u32 = 320;

/// Row height used when no usable row height is given (mm)
pub const DEFAULT_ROW_HEIGHT_MM: u32 = 320;

// =============================================================================
// Solver
// =============================================================================

/// Largest target, in reduced units, the combination table is built for.
/// One table cell per magnitude is allocated up front.
pub const MAX_DP_MAGNITUDE: usize = 1_000_000;

// =============================================================================
// Carcass
// =============================================================================

/// Default cabinet depth (mm)
pub const DEFAULT_DEPTH_MM: u32 = 400;

/// Default carcass material thickness (mm)
pub const DEFAULT_MATERIAL_THICKNESS_MM: u32 = 19;

// =============================================================================
// Tolerances
// =============================================================================

/// Horizontal gap considered acceptable when no tolerance is requested (mm)
pub const GENERAL_TOLERANCE_MM: u32 = 20;

// =============================================================================
// Solid wood preset
// =============================================================================

/// Module widths of the solid wood range (mm).
/// The 2 mm steps near 200 let the solver absorb small leftovers.
pub const SOLID_WOOD_MODULE_WIDTHS: [u32; 15] = [
    200, 202, 204, 206, 208, 210, 280, 320, 360, 400, 480, 560, 640, 720, 800,
];

/// Row heights of the solid wood range (mm)
pub const SOLID_WOOD_ROW_HEIGHTS: [u32; 15] = [
    160, 162, 164, 166, 168, 170, 172, 174, 176, 178, 180, 200, 240, 280, 320,
];

/// Target tolerance of the solid wood range (mm)
pub const SOLID_WOOD_TOLERANCE_MM: u32 = 2;

// =============================================================================
// Module width ranges
// =============================================================================

/// Standard module widths (mm)
pub const STANDARD_MODULE_WIDTHS: [u32; 7] = [200, 240, 320, 480, 640, 960, 1280];

/// Module widths on a 150 mm grid starting at 300 (mm)
pub const RANGE_300_MODULE_WIDTHS: [u32; 5] = [300, 450, 600, 900, 1200];
