use planset_layout::*;
use std::collections::HashSet;

fn view(id: &str, group_key: &str, rank: i32, width: f32, height: f32) -> LayoutItem {
    LayoutItem {
        id: id.to_string(),
        label: format!("{group_key} - Scale {rank}"),
        group_key: group_key.to_string(),
        priority_rank: rank,
        width,
        height,
        placeable: true,
    }
}

#[test]
fn test_six_levels_yield_six_individual_and_two_combined() {
    let items: Vec<LayoutItem> = (1..=6)
        .map(|n| view(&format!("v{n}"), &format!("Level {n}"), 96, 1.0, 0.8))
        .collect();

    let plan = compose_sheet_plan(&items, INDIVIDUAL_MAX_WIDTH_FT, INDIVIDUAL_MAX_HEIGHT_FT)
        .unwrap();

    assert_eq!(plan.len(), 8);

    let individual: Vec<_> = plan
        .iter()
        .filter(|e| e.template == SheetTemplate::Single)
        .collect();
    assert_eq!(individual.len(), 6);

    let combined: Vec<_> = plan
        .iter()
        .filter(|e| e.template != SheetTemplate::Single)
        .collect();
    assert_eq!(combined.len(), 2);

    // Levels 1-4 share a four-panel sheet, 5-6 a two-panel sheet
    assert_eq!(combined[0].template, SheetTemplate::FourPanel);
    assert_eq!(combined[0].placements.len(), 4);
    assert_eq!(combined[1].template, SheetTemplate::TwoPanel);
    assert_eq!(combined[1].placements.len(), 2);

    let first_cluster: Vec<&str> = combined[0]
        .placements
        .iter()
        .map(|p| p.item.group_key.as_str())
        .collect();
    assert_eq!(first_cluster, vec!["Level 1", "Level 2", "Level 3", "Level 4"]);
}

#[test]
fn test_sheet_labels_are_unique() {
    let items: Vec<LayoutItem> = (1..=9)
        .map(|n| view(&format!("v{n}"), &format!("Level {n}"), 48, 1.0, 0.8))
        .collect();

    let plan = compose_sheet_plan(&items, INDIVIDUAL_MAX_WIDTH_FT, INDIVIDUAL_MAX_HEIGHT_FT)
        .unwrap();

    let labels: HashSet<&str> = plan.iter().map(|e| e.label.as_str()).collect();
    assert_eq!(labels.len(), plan.len());
    assert!(labels.contains("Individual - Level 1"));
    assert!(labels.contains("Combined - Sheet 1"));
}

#[test]
fn test_oversized_group_is_skipped_in_both_passes() {
    let items = vec![
        view("ok", "Level 1", 96, 1.0, 0.8),
        // Exceeds both the individual and the combined limits
        view("huge", "Penthouse", 96, 10.0, 10.0),
    ];

    let plan = compose_sheet_plan(&items, INDIVIDUAL_MAX_WIDTH_FT, INDIVIDUAL_MAX_HEIGHT_FT)
        .unwrap();

    for entry in &plan {
        for placement in &entry.placements {
            assert_ne!(placement.item.group_key, "Penthouse");
        }
    }
    // Level 1 still gets its individual sheet and a combined slot
    assert_eq!(plan.len(), 2);
}

#[test]
fn test_all_items_oversized_yields_empty_plan_without_error() {
    let items = vec![view("huge", "Level 1", 96, 10.0, 10.0)];
    let plan = compose_sheet_plan(&items, INDIVIDUAL_MAX_WIDTH_FT, INDIVIDUAL_MAX_HEIGHT_FT)
        .unwrap();
    assert!(plan.is_empty());
}

#[test]
fn test_non_placeable_items_never_reach_a_sheet() {
    let mut draft = view("draft", "Level 1", 96, 1.0, 0.8);
    draft.placeable = false;
    let items = vec![draft, view("plan", "Level 2", 96, 1.0, 0.8)];

    let plan = compose_sheet_plan(&items, INDIVIDUAL_MAX_WIDTH_FT, INDIVIDUAL_MAX_HEIGHT_FT)
        .unwrap();

    for entry in &plan {
        for placement in &entry.placements {
            assert!(placement.item.placeable);
            assert_ne!(placement.item.id, "draft");
        }
    }
}

#[test]
fn test_combined_panel_prefers_detail_that_fits() {
    // The 1:48 view is too large for a four-panel slot; the 1:96 fallback
    // fits. Individual pass keeps the detailed one, combined pass drops to
    // the coarser one.
    let items = vec![
        view("detail", "Level 1", 96, 1.8, 1.2),
        view("coarse", "Level 1", 48, 0.9, 0.6),
        view("other-a", "Level 2", 96, 1.0, 0.8),
        view("other-b", "Level 3", 96, 1.0, 0.8),
    ];

    let plan = compose_sheet_plan(&items, INDIVIDUAL_MAX_WIDTH_FT, INDIVIDUAL_MAX_HEIGHT_FT)
        .unwrap();

    let individual_l1 = plan
        .iter()
        .find(|e| e.label == "Individual - Level 1")
        .unwrap();
    assert_eq!(individual_l1.placements[0].item.id, "detail");

    let combined = plan
        .iter()
        .find(|e| e.template == SheetTemplate::FourPanel)
        .unwrap();
    let level1_slot = combined
        .placements
        .iter()
        .find(|p| p.item.group_key == "Level 1")
        .unwrap();
    assert_eq!(level1_slot.item.id, "coarse");
}

#[test]
fn test_roof_sorts_into_first_combined_slot() {
    let items = vec![
        view("l1", "Level 1", 96, 1.0, 0.8),
        view("l2", "Level 2", 96, 1.0, 0.8),
        view("roof", "Roof", 96, 1.0, 0.8),
    ];

    let plan = compose_sheet_plan(&items, INDIVIDUAL_MAX_WIDTH_FT, INDIVIDUAL_MAX_HEIGHT_FT)
        .unwrap();

    let combined = plan
        .iter()
        .find(|e| e.template == SheetTemplate::FourPanel)
        .unwrap();
    // Roof ranks 0 and leads the sorted keys
    assert_eq!(combined.placements[0].slot, PanelSlot::A);
    assert_eq!(combined.placements[0].item.group_key, "Roof");
    assert_eq!(combined.placements[1].item.group_key, "Level 1");
}

#[test]
fn test_slot_count_never_exceeds_template() {
    let items: Vec<LayoutItem> = (1..=5)
        .map(|n| view(&format!("v{n}"), &format!("Level {n}"), 96, 1.0, 0.8))
        .collect();

    let plan = compose_sheet_plan(&items, INDIVIDUAL_MAX_WIDTH_FT, INDIVIDUAL_MAX_HEIGHT_FT)
        .unwrap();

    for entry in &plan {
        assert!(entry.placements.len() <= entry.template.slots().len());
        let slots: HashSet<PanelSlot> = entry.placements.iter().map(|p| p.slot).collect();
        assert_eq!(slots.len(), entry.placements.len(), "duplicate slot");
    }
}

#[test]
fn test_plan_statistics() {
    let items: Vec<LayoutItem> = (1..=6)
        .map(|n| view(&format!("v{n}"), &format!("Level {n}"), 96, 1.0, 0.8))
        .collect();

    let plan = compose_sheet_plan(&items, INDIVIDUAL_MAX_WIDTH_FT, INDIVIDUAL_MAX_HEIGHT_FT)
        .unwrap();
    let stats = plan_statistics(&plan);

    assert_eq!(stats.individual_sheets, 6);
    assert_eq!(stats.combined_sheets, 2);
    // 6 individual placements + 4 + 2 combined placements
    assert_eq!(stats.placed_items, 12);
    assert_eq!(stats.empty_slots, 0);
}

#[test]
fn test_single_group_cluster_uses_four_panel_template() {
    let items = vec![view("v1", "Level 1", 96, 1.0, 0.8)];
    let plan = compose_sheet_plan(&items, INDIVIDUAL_MAX_WIDTH_FT, INDIVIDUAL_MAX_HEIGHT_FT)
        .unwrap();

    let combined = plan
        .iter()
        .find(|e| e.label.starts_with("Combined"))
        .unwrap();
    assert_eq!(combined.template, SheetTemplate::FourPanel);
    assert_eq!(combined.placements.len(), 1);
    assert_eq!(combined.placements[0].slot, PanelSlot::A);
}
