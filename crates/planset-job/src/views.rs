//! Document view table
//!
//! The host document's drawing views arrive as a JSON export
//! (`views.json`). Records are filtered upstream of the layout engine:
//! by view type, by the job's named filters, then truncated to the
//! configured cap.

use crate::params::JobParams;
use crate::types::{JobError, Result};
use log::warn;
use planset_layout::LayoutItem;
use serde::{Deserialize, Serialize};

/// Fixed delimiter between a view's level name and its scale suffix,
/// e.g. "Level 2 - Scale 96"
pub const SCALE_DELIMITER: &str = " - Scale ";

/// One drawing view from the document's view table
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewRecord {
    pub id: String,
    pub name: String,
    pub view_type: String,
    /// Drawing scale denominator (1:scale)
    pub scale: u32,
    /// Crop extent width in model feet
    pub crop_width: f32,
    /// Crop extent height in model feet
    pub crop_height: f32,
    #[serde(default = "default_placeable")]
    pub placeable: bool,
}

fn default_placeable() -> bool {
    true
}

impl ViewRecord {
    /// Printed footprint of this view: crop extents divided by scale
    pub fn printed_size(&self) -> (f32, f32) {
        let scale = self.scale.max(1) as f32;
        (self.crop_width / scale, self.crop_height / scale)
    }

    pub fn to_layout_item(&self) -> LayoutItem {
        let (width, height) = self.printed_size();
        LayoutItem {
            id: self.id.clone(),
            label: self.name.clone(),
            group_key: group_key_for(&self.name).to_string(),
            priority_rank: self.scale as i32,
            width,
            height,
            placeable: self.placeable,
        }
    }
}

/// Group key for a view name: everything left of the scale delimiter, or
/// the whole name when the delimiter is absent.
pub fn group_key_for(name: &str) -> &str {
    match name.split_once(SCALE_DELIMITER) {
        Some((level, _)) => level,
        None => name,
    }
}

/// Load the view table from a JSON file
pub async fn load_views(path: impl AsRef<std::path::Path>) -> Result<Vec<ViewRecord>> {
    let bytes = tokio::fs::read(path).await?;
    let views: Vec<ViewRecord> = serde_json::from_slice(&bytes)
        .map_err(|e| JobError::Config(format!("failed to parse view table: {e}")))?;
    Ok(views)
}

/// Apply the job's upstream view filtering: view-type membership, named
/// filters, then the `maxViews` truncation. Unknown filter kinds are
/// logged and ignored.
pub fn apply_view_filters(views: Vec<ViewRecord>, params: &JobParams) -> Vec<ViewRecord> {
    let mut filtered: Vec<ViewRecord> = views
        .into_iter()
        .filter(|v| params.view_types.is_empty() || params.view_types.contains(&v.view_type))
        .collect();

    for filter in &params.filters {
        let value = filter.parameters.get("value").cloned().unwrap_or_default();
        match filter.kind.as_str() {
            "name-prefix" => filtered.retain(|v| v.name.starts_with(&value)),
            "name-contains" => filtered.retain(|v| v.name.contains(&value)),
            "min-scale" => match value.parse::<u32>() {
                Ok(min) => filtered.retain(|v| v.scale >= min),
                Err(_) => {
                    warn!(
                        "filter '{}': min-scale value '{value}' is not a number, ignoring",
                        filter.name
                    );
                }
            },
            other => {
                warn!("filter '{}': unknown kind '{other}', ignoring", filter.name);
            }
        }
    }

    if let Some(cap) = params.max_views {
        if filtered.len() > cap {
            warn!("view table truncated from {} to {cap} views", filtered.len());
            filtered.truncate(cap);
        }
    }

    filtered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{Credentials, FilterSpec, ReportType};
    use std::collections::HashMap;

    fn view(name: &str, view_type: &str, scale: u32) -> ViewRecord {
        ViewRecord {
            id: format!("id-{name}"),
            name: name.to_string(),
            view_type: view_type.to_string(),
            scale,
            crop_width: 120.0,
            crop_height: 80.0,
            placeable: true,
        }
    }

    fn params_with(view_types: Vec<&str>, filters: Vec<FilterSpec>) -> JobParams {
        JobParams {
            project_name: "P".to_string(),
            project_number: "1".to_string(),
            report_type: ReportType::SheetSet,
            view_types: view_types.into_iter().map(String::from).collect(),
            filters,
            max_views: None,
            output_file: "out.pdf".to_string(),
            environment: String::new(),
            credentials: Credentials {
                username: "u".to_string(),
                password: "p".to_string(),
            },
            assets: Vec::new(),
        }
    }

    #[test]
    fn test_group_key_split() {
        assert_eq!(group_key_for("Level 2 - Scale 96"), "Level 2");
        assert_eq!(group_key_for("Roof - Scale 48"), "Roof");
        assert_eq!(group_key_for("Site Plan"), "Site Plan");
        // Only the first delimiter splits
        assert_eq!(
            group_key_for("Level 1 - Scale 96 - Scale 48"),
            "Level 1"
        );
    }

    #[test]
    fn test_printed_size_divides_by_scale() {
        let v = view("Level 1 - Scale 96", "FloorPlan", 96);
        let (w, h) = v.printed_size();
        assert!((w - 1.25).abs() < 1e-6);
        assert!((h - 80.0 / 96.0).abs() < 1e-6);
    }

    #[test]
    fn test_to_layout_item() {
        let item = view("Level 3 - Scale 48", "FloorPlan", 48).to_layout_item();
        assert_eq!(item.group_key, "Level 3");
        assert_eq!(item.priority_rank, 48);
        assert!(item.placeable);
        assert!((item.width - 2.5).abs() < 1e-6);
    }

    #[test]
    fn test_view_type_filter() {
        let views = vec![
            view("Level 1 - Scale 96", "FloorPlan", 96),
            view("Section A", "Section", 48),
        ];
        let kept = apply_view_filters(views, &params_with(vec!["FloorPlan"], vec![]));
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].view_type, "FloorPlan");
    }

    #[test]
    fn test_empty_view_type_filter_keeps_all() {
        let views = vec![
            view("Level 1 - Scale 96", "FloorPlan", 96),
            view("Section A", "Section", 48),
        ];
        let kept = apply_view_filters(views, &params_with(vec![], vec![]));
        assert_eq!(kept.len(), 2);
    }

    #[test]
    fn test_named_filters() {
        let views = vec![
            view("Level 1 - Scale 96", "FloorPlan", 96),
            view("Level 2 - Scale 24", "FloorPlan", 24),
            view("Enlarged Core - Scale 96", "FloorPlan", 96),
        ];
        let filters = vec![
            FilterSpec {
                name: "levels only".to_string(),
                kind: "name-prefix".to_string(),
                parameters: HashMap::from([("value".to_string(), "Level".to_string())]),
            },
            FilterSpec {
                name: "coarse enough".to_string(),
                kind: "min-scale".to_string(),
                parameters: HashMap::from([("value".to_string(), "48".to_string())]),
            },
        ];
        let kept = apply_view_filters(views, &params_with(vec![], filters));
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].name, "Level 1 - Scale 96");
    }

    #[test]
    fn test_unknown_filter_kind_is_ignored() {
        let views = vec![view("Level 1 - Scale 96", "FloorPlan", 96)];
        let filters = vec![FilterSpec {
            name: "mystery".to_string(),
            kind: "phase-of-moon".to_string(),
            parameters: HashMap::new(),
        }];
        let kept = apply_view_filters(views, &params_with(vec![], filters));
        assert_eq!(kept.len(), 1);
    }

    #[test]
    fn test_max_views_truncation() {
        let views: Vec<ViewRecord> = (1..=5)
            .map(|n| view(&format!("Level {n} - Scale 96"), "FloorPlan", 96))
            .collect();
        let mut params = params_with(vec![], vec![]);
        params.max_views = Some(3);

        let kept = apply_view_filters(views, &params);
        assert_eq!(kept.len(), 3);
        assert_eq!(kept[0].name, "Level 1 - Scale 96");
        assert_eq!(kept[2].name, "Level 3 - Scale 96");
    }
}
