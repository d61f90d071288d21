use cabinet_layout::*;

fn sizes(values: &[u32]) -> SizeSet {
    SizeSet::new(values.iter().copied()).unwrap()
}

#[test]
fn test_exact_fit_preferred_over_fewer_modules() {
    // 200 + 200 + 300 = 700 beats 300 + 300 = 600 despite one more module
    let solved = solve_horizontal(700, &sizes(&[200, 300])).unwrap();

    assert_eq!(solved.solution.achieved, 700);
    assert_eq!(solved.solution.piece_count, 3);
    assert_eq!(solved.solution.counts[&200], 2);
    assert_eq!(solved.solution.counts[&300], 1);
    assert_eq!(solved.gap_mm(), 0);
}

#[test]
fn test_reduced_units_floor_the_wall() {
    // GCD 150: sizes {2, 3} units, wall 1000 / 150 = 6 units
    let widths = sizes(&[300, 450]);
    assert_eq!(widths.reduced_unit(), Some(150));

    let solved = solve_horizontal(1000, &widths).unwrap();
    assert_eq!(solved.reduced_unit, 150);
    assert_eq!(solved.solution.achieved, 900);
    assert_eq!(solved.solution.piece_count, 2);
    assert_eq!(solved.solution.counts[&450], 2);
    assert_eq!(solved.solution.counts[&300], 0);
    assert_eq!(solved.gap_mm(), 100);
    assert_eq!(solved.layout.widths().collect::<Vec<_>>(), vec![450, 450]);
}

#[test]
fn test_no_fit_is_a_valid_empty_result() {
    let solved = solve_horizontal(250, &sizes(&[300, 450])).unwrap();

    assert!(solved.is_empty());
    assert!(solved.solution.is_empty());
    assert_eq!(solved.total_length_mm(), 0);
    assert_eq!(solved.gap_mm(), 250);
}

#[test]
fn test_horizontal_failures() {
    assert!(matches!(
        solve_horizontal(0, &sizes(&[300])),
        Err(LayoutError::InvalidTarget(0))
    ));
    assert!(matches!(
        solve_horizontal(-1, &sizes(&[300])),
        Err(LayoutError::InvalidTarget(-1))
    ));
    assert!(matches!(
        solve_horizontal(2400, &SizeSet::default()),
        Err(LayoutError::EmptyDenominationSet)
    ));
}

#[test]
fn test_boundedness_and_minimal_shortfall() {
    let widths = sizes(&[280, 320, 400, 560]);
    let (unit, reduced) = widths.reduce().unwrap();

    for wall in (100..=3000).step_by(37) {
        let solved = solve_horizontal(wall, &widths).unwrap();
        assert!(solved.total_length_mm() <= wall as u64);

        // No reachable magnitude lies between the result and the wall
        let target_units = (wall as u64 / u64::from(unit)) as usize;
        let mut reachable = vec![false; target_units + 1];
        reachable[0] = true;
        for i in 1..=target_units {
            reachable[i] = reduced
                .iter()
                .any(|&d| d as usize <= i && reachable[i - d as usize]);
        }
        let best = (0..=target_units).rev().find(|&i| reachable[i]).unwrap();
        assert_eq!(solved.total_length_mm(), best as u64 * u64::from(unit));
    }
}

#[test]
fn test_minimal_piece_count_at_best_magnitude() {
    // 1200 = 400 * 3 = 600 * 2 = 300 * 4; two pieces is minimal
    let solved = solve_horizontal(1200, &sizes(&[300, 400, 600])).unwrap();
    assert_eq!(solved.solution.achieved, 1200);
    assert_eq!(solved.solution.piece_count, 2);
    assert_eq!(solved.solution.counts[&600], 2);
}

#[test]
fn test_repeated_solves_are_identical() {
    let widths = sizes(&[200, 202, 204, 206, 208, 210, 280, 320, 360, 400]);
    let first = solve_horizontal(3517, &widths).unwrap();
    for _ in 0..5 {
        assert_eq!(solve_horizontal(3517, &widths).unwrap(), first);
    }
}

#[test]
fn test_reduction_soundness() {
    let widths = sizes(&[240, 360, 600]);
    for wall in [500i64, 959, 1200, 1799, 2641] {
        let reduced = solve_horizontal(wall, &widths).unwrap();
        let direct = solve_combination(wall as usize, widths.as_slice());
        assert_eq!(reduced.solution.achieved, direct.achieved);
        assert_eq!(reduced.solution.piece_count, direct.piece_count);
    }
}

#[test]
fn test_layout_round_trip_from_counts() {
    let widths = sizes(&[200, 300, 450]);
    let solved = solve_horizontal(2350, &widths).unwrap();

    let metrics = solved.layout.metrics(solved.wall_length_mm, &widths);
    assert_eq!(metrics.total_length_mm, solved.total_length_mm());
    assert_eq!(metrics.gap_mm, solved.gap_mm());
    assert_eq!(metrics.counts, solved.solution.counts);
    assert_eq!(metrics.module_count, solved.solution.piece_count);
}
