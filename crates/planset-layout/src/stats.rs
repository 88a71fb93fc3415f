use crate::types::{PlanStatistics, SheetPlan, SheetTemplate};

/// Summarize a composed plan for the run report.
pub fn plan_statistics(plan: &SheetPlan) -> PlanStatistics {
    let mut stats = PlanStatistics {
        individual_sheets: 0,
        combined_sheets: 0,
        placed_items: 0,
        empty_slots: 0,
    };

    for entry in plan {
        stats.placed_items += entry.placements.len();
        match entry.template {
            SheetTemplate::Single => stats.individual_sheets += 1,
            SheetTemplate::TwoPanel | SheetTemplate::FourPanel => {
                stats.combined_sheets += 1;
                stats.empty_slots += entry.template.slots().len() - entry.placements.len();
            }
        }
    }

    stats
}
