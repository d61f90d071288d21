//! Full pipeline: horizontal solve, vertical solve, cut list
//!
//! A plan is always recomputed from scratch. The caller keeps the current
//! plan and replaces it wholesale after each solve.

use log::info;

use crate::cutlist::{CutList, generate_cut_list};
use crate::layout::{HorizontalSolve, VerticalComposition, solve_horizontal, solve_vertical};
use crate::options::PlanOptions;
use crate::types::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Everything solved for one set of options
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct Plan {
    pub horizontal: HorizontalSolve,
    pub vertical: VerticalComposition,
    pub cut_list: CutList,
}

/// Solve a plan.
///
/// The two axes share no state, so they run side by side on the blocking
/// pool before the cut list is derived from both.
pub async fn plan(options: &PlanOptions) -> Result<Plan> {
    options.validate()?;

    let wall_length_mm = options.wall_length_mm;
    let module_widths = options.module_widths.clone();
    let horizontal =
        tokio::task::spawn_blocking(move || solve_horizontal(wall_length_mm, &module_widths));

    let body_target_mm = options.body_height_target_mm();
    let vertical_heights = options.vertical_heights.clone();
    let vertical =
        tokio::task::spawn_blocking(move || solve_vertical(body_target_mm, &vertical_heights));

    let horizontal = horizontal.await??;
    let vertical = vertical.await??;

    Ok(assemble(horizontal, vertical, options))
}

/// Solve a plan on the current thread
pub fn plan_sync(options: &PlanOptions) -> Result<Plan> {
    options.validate()?;

    let horizontal = solve_horizontal(options.wall_length_mm, &options.module_widths)?;
    let vertical = solve_vertical(options.body_height_target_mm(), &options.vertical_heights)?;

    Ok(assemble(horizontal, vertical, options))
}

fn assemble(
    horizontal: HorizontalSolve,
    vertical: VerticalComposition,
    options: &PlanOptions,
) -> Plan {
    let cut_list = generate_cut_list(&horizontal.layout, &vertical, &options.cut_list_params());
    info!(
        "Planned {} modules ({} mm of {} mm) x {} rows ({} mm of {} mm), {} panels",
        horizontal.layout.len(),
        horizontal.total_length_mm(),
        horizontal.wall_length_mm,
        vertical.row_count(),
        vertical.real_height_mm,
        vertical.target_height_mm,
        cut_list.total_quantity()
    );
    Plan {
        horizontal,
        vertical,
        cut_list,
    }
}
