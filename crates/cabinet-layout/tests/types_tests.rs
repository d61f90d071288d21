use cabinet_layout::*;

#[test]
fn test_part_labels() {
    assert_eq!(PartKind::Side.label(), "Side");
    assert_eq!(PartKind::Top.label(), "Top");
    assert_eq!(PartKind::Bottom.label(), "Bottom");
    assert_eq!(PartKind::EndSide.label(), "End side");
    assert_eq!(PartKind::Partition.label(), "Intermediate partition");
    assert_eq!(PartKind::BaseBottom.label(), "Bottom (base)");
    assert_eq!(PartKind::CapTop.label(), "Top (cap)");
    assert_eq!(PartKind::Shelf.label(), "Intermediate shelf");
    assert_eq!(PartKind::Back.label(), "Back");
}

#[test]
fn test_part_label_round_trip() {
    for part in PartKind::ALL {
        assert_eq!(PartKind::from_label(part.label()), Some(part));
        assert_eq!(part.to_string(), part.label());
    }
    assert_eq!(PartKind::from_label("Drawer"), None);
}

#[test]
fn test_parts_order_by_label() {
    let mut parts = PartKind::ALL.to_vec();
    parts.sort();
    let labels: Vec<&str> = parts.iter().map(|p| p.label()).collect();
    let mut expected = labels.clone();
    expected.sort();
    assert_eq!(labels, expected);
    assert_eq!(parts[0], PartKind::Back);
}

#[test]
fn test_assembly_mode_default() {
    assert_eq!(AssemblyMode::default(), AssemblyMode::Independent);
}

#[test]
fn test_solution_helpers() {
    let solution = solve_combination(7, &[2, 3]);
    assert_eq!(solution.gap(7), 0);
    assert_eq!(solution.gap(10), 3);
    assert_eq!(solution.expand(), vec![2, 2, 3]);

    let empty = Solution::empty(&[2, 3]);
    assert!(empty.is_empty());
    assert_eq!(empty.counts.len(), 2);
}

#[test]
fn test_tolerance_verdict() {
    assert!(ToleranceVerdict::Within { tolerance_mm: 2 }.is_within());
    assert!(!ToleranceVerdict::Exceeds { tolerance_mm: 2 }.is_within());
}

#[cfg(feature = "serde")]
#[test]
fn test_serialized_strings() {
    assert_eq!(
        serde_json::to_string(&AssemblyMode::Shared).unwrap(),
        "\"shared\""
    );
    assert_eq!(
        serde_json::to_string(&PartKind::EndSide).unwrap(),
        "\"End side\""
    );
    let part: PartKind = serde_json::from_str("\"Intermediate shelf\"").unwrap();
    assert_eq!(part, PartKind::Shelf);

    let layout: Layout =
        serde_json::from_str(r#"[{"width": 300, "typeIndex": 0}, {"width": 450, "typeIndex": 1}]"#)
            .unwrap();
    assert_eq!(layout.total_length_mm(), 750);
    assert_eq!(layout.modules[1].type_index, 1);
}
