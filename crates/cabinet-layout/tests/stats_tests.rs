use cabinet_layout::*;

fn options(wall: i64, widths: &str) -> PlanOptions {
    PlanOptions {
        wall_length_mm: wall,
        module_widths: parse_sizes(widths).unwrap(),
        total_height_mm: Some(870),
        plinth_mm: 150,
        top_mm: 20,
        vertical_heights: parse_sizes("160, 320").unwrap(),
        ..Default::default()
    }
}

#[test]
fn test_stats_exact_wall() {
    let options = options(700, "200, 300");
    let plan = plan_sync(&options).unwrap();
    let stats = calculate_statistics(&plan, &options);

    assert_eq!(stats.wall_length_mm, 700);
    assert_eq!(stats.total_length_mm, 700);
    assert_eq!(stats.gap_mm, 0);
    assert_eq!(stats.module_count, 3);
    assert_eq!(stats.modules_per_width[&200], 2);
    assert_eq!(stats.modules_per_width[&300], 1);
    assert_eq!(stats.tolerance, ToleranceVerdict::Within { tolerance_mm: 20 });
}

#[test]
fn test_stats_body() {
    let options = options(700, "200, 300");
    let plan = plan_sync(&options).unwrap();
    let stats = calculate_statistics(&plan, &options);

    // 870 - 150 - 20 = 700; 320 + 320 = 640, 160 * 2 + 320 = 640, best is 640
    assert_eq!(stats.body_target_mm, 700);
    assert_eq!(stats.body_real_mm, 640);
    assert_eq!(stats.row_count, plan.vertical.row_count());
}

#[test]
fn test_stats_tolerance() {
    // 1000 with {300, 450}: 900, gap 100
    let mut options = options(1000, "300, 450");
    let plan = plan_sync(&options).unwrap();

    let stats = calculate_statistics(&plan, &options);
    assert_eq!(stats.gap_mm, 100);
    assert_eq!(stats.tolerance, ToleranceVerdict::Exceeds { tolerance_mm: 20 });

    options.target_tolerance_mm = Some(100);
    let stats = calculate_statistics(&plan, &options);
    assert!(stats.tolerance.is_within());
}

#[test]
fn test_stats_panels() {
    let options = options(700, "200, 300");
    let plan = plan_sync(&options).unwrap();
    let stats = calculate_statistics(&plan, &options);

    assert_eq!(stats.panel_rows, plan.cut_list.len());
    // Independent mode without backs: 4 panels per module and row
    let expected = 4 * stats.module_count as u64 * stats.row_count as u64;
    assert_eq!(stats.panel_count, expected);
}

#[test]
fn test_stats_follow_edited_layout() {
    let options = options(700, "200, 300");
    let mut plan = plan_sync(&options).unwrap();
    plan.horizontal.layout = plan.horizontal.layout.with_module_removed(300);

    let stats = calculate_statistics(&plan, &options);
    assert_eq!(stats.total_length_mm, 400);
    assert_eq!(stats.gap_mm, 300);
    assert_eq!(stats.module_count, 2);
    assert_eq!(stats.modules_per_width[&300], 0);
}
