use crate::options::PlanOptions;
use crate::plan::Plan;
use crate::types::*;

/// Calculate statistics for a solved plan
pub fn calculate_statistics(plan: &Plan, options: &PlanOptions) -> PlanStatistics {
    let horizontal = &plan.horizontal;

    // Counts come from the layout itself so an edited layout is reported as is
    let metrics = horizontal
        .layout
        .metrics(horizontal.wall_length_mm, &horizontal.module_widths);

    let tolerance_mm = options.effective_tolerance_mm();
    let tolerance = if metrics.gap_mm <= u64::from(tolerance_mm) {
        ToleranceVerdict::Within { tolerance_mm }
    } else {
        ToleranceVerdict::Exceeds { tolerance_mm }
    };

    PlanStatistics {
        wall_length_mm: metrics.wall_length_mm,
        total_length_mm: metrics.total_length_mm,
        gap_mm: metrics.gap_mm,
        module_count: metrics.module_count,
        modules_per_width: metrics.counts,
        tolerance,
        body_target_mm: plan.vertical.target_height_mm,
        body_real_mm: plan.vertical.real_height_mm,
        row_count: plan.vertical.row_count(),
        panel_rows: plan.cut_list.len(),
        panel_count: plan.cut_list.total_quantity(),
    }
}
