//! Sheet plan composition
//!
//! Orchestrates grouping, chunking, best-fit selection, and panel
//! geometry into a complete sheet plan: first one individual sheet per
//! group, then combined multi-panel sheets over clusters of sorted keys.

use log::warn;

use crate::constants::MAX_KEYS_PER_COMBINED_SHEET;
use crate::fit::select_best_fit;
use crate::grouping::{chunk_keys, group_by_key, sort_keys};
use crate::panel::panel_box;
use crate::types::{
    LayoutItem, PanelSlot, PlannedPlacement, Result, SheetEntry, SheetPlan, SheetTemplate,
};

/// Compose the full sheet plan for a set of layout items.
///
/// Pass 1 emits one `Single` sheet per group whose best candidate fits the
/// individual-sheet limits, in group discovery order. Pass 2 sorts the
/// group keys, clusters them four at a time, and emits one combined sheet
/// per cluster, filling slots `A`..`D` in cluster order under the
/// template's own panel limits. A group or slot with no fitting candidate
/// is logged and omitted; an entirely empty plan is left for the caller to
/// judge.
pub fn compose_sheet_plan(
    items: &[LayoutItem],
    individual_max_width: f32,
    individual_max_height: f32,
) -> Result<SheetPlan> {
    let placeable: Vec<LayoutItem> = items.iter().filter(|i| i.placeable).cloned().collect();
    let groups = group_by_key(&placeable);

    let mut plan: SheetPlan = Vec::new();

    // Pass 1: individual sheets
    for (key, members) in &groups {
        match select_best_fit(members, individual_max_width, individual_max_height) {
            Some(item) => {
                plan.push(SheetEntry {
                    label: format!("Individual - {key}"),
                    template: SheetTemplate::Single,
                    placements: vec![PlannedPlacement {
                        slot: PanelSlot::A,
                        panel: panel_box(SheetTemplate::Single, PanelSlot::A)?,
                        item: item.clone(),
                    }],
                });
            }
            None => {
                warn!("no view in group '{key}' fits the individual sheet, skipping");
            }
        }
    }

    // Pass 2: combined sheets over clusters of sorted keys
    let keys: Vec<String> = groups.keys().cloned().collect();
    let sorted = sort_keys(&keys);
    let clusters = chunk_keys(&sorted, MAX_KEYS_PER_COMBINED_SHEET);

    let mut combined_count = 0;
    for cluster in &clusters {
        let template = SheetTemplate::for_cluster_size(cluster.len());
        let (max_width, max_height) = template.panel_limits();

        let mut placements = Vec::new();
        for (key, &slot) in cluster.iter().zip(template.slots()) {
            let members = &groups[key];
            match select_best_fit(members, max_width, max_height) {
                Some(item) => placements.push(PlannedPlacement {
                    slot,
                    panel: panel_box(template, slot)?,
                    item: item.clone(),
                }),
                None => {
                    warn!("no view in group '{key}' fits a combined-sheet panel, slot omitted");
                }
            }
        }

        if placements.is_empty() {
            warn!("combined sheet for cluster {cluster:?} has no placements, skipping");
            continue;
        }

        combined_count += 1;
        plan.push(SheetEntry {
            label: format!("Combined - Sheet {combined_count}"),
            template,
            placements,
        });
    }

    Ok(plan)
}
