use thiserror::Error;

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("template {template:?} has no panel slot {slot:?}")]
    InvalidSlot {
        template: SheetTemplate,
        slot: PanelSlot,
    },
    #[error("invalid layout configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, LayoutError>;

/// A placeable visual unit: a drawing view or a downloaded image.
///
/// Items are built once from their source record before layout begins and
/// are read-only to the engine. `width` and `height` are the printed size
/// in feet; `priority_rank` orders candidates within a group (higher is
/// the more detailed representation and is preferred).
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutItem {
    /// Opaque handle back to the source record (view id or asset id)
    pub id: String,
    /// Display name
    pub label: String,
    /// Logical grouping label (building level, asset batch); empty allowed
    pub group_key: String,
    /// Preference rank within a group (e.g. drawing scale)
    pub priority_rank: i32,
    /// Printed width in feet
    pub width: f32,
    /// Printed height in feet
    pub height: f32,
    /// Only placeable items may land on a sheet
    pub placeable: bool,
}

/// Named panel slot on a sheet template, assigned in `A`..`D` order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PanelSlot {
    A,
    B,
    C,
    D,
}

impl PanelSlot {
    pub fn letter(self) -> char {
        match self {
            PanelSlot::A => 'A',
            PanelSlot::B => 'B',
            PanelSlot::C => 'C',
            PanelSlot::D => 'D',
        }
    }
}

/// Fixed page templates for composed sheets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SheetTemplate {
    /// One item filling the usable sheet area
    Single,
    /// Two side-by-side panels
    TwoPanel,
    /// 2x2 panel grid
    FourPanel,
}

impl SheetTemplate {
    /// Ordered slots for this template; keys are assigned in this order.
    pub fn slots(self) -> &'static [PanelSlot] {
        match self {
            SheetTemplate::Single => &[PanelSlot::A],
            SheetTemplate::TwoPanel => &[PanelSlot::A, PanelSlot::B],
            SheetTemplate::FourPanel => {
                &[PanelSlot::A, PanelSlot::B, PanelSlot::C, PanelSlot::D]
            }
        }
    }

    /// Template used for a combined sheet holding `cluster_size` group keys.
    /// Only a 2-key cluster gets the two-panel sheet; 1- and 3-key clusters
    /// use the four-panel grid with trailing slots left empty.
    pub fn for_cluster_size(cluster_size: usize) -> Self {
        match cluster_size {
            2 => SheetTemplate::TwoPanel,
            _ => SheetTemplate::FourPanel,
        }
    }

    /// Maximum item width/height that a panel of this template accepts, in feet
    pub fn panel_limits(self) -> (f32, f32) {
        match self {
            SheetTemplate::Single => (
                crate::constants::INDIVIDUAL_MAX_WIDTH_FT,
                crate::constants::INDIVIDUAL_MAX_HEIGHT_FT,
            ),
            SheetTemplate::TwoPanel => (
                crate::constants::TWO_PANEL_WIDTH_FT,
                crate::constants::TWO_PANEL_HEIGHT_FT,
            ),
            SheetTemplate::FourPanel => (
                crate::constants::FOUR_PANEL_WIDTH_FT,
                crate::constants::FOUR_PANEL_HEIGHT_FT,
            ),
        }
    }
}

/// A panel's position on the sheet: center point plus box size, in feet.
///
/// Panel boxes come from the template geometry table only; the placed
/// item's own size never feeds back into the box.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PanelBox {
    pub center_x: f32,
    pub center_y: f32,
    pub width: f32,
    pub height: f32,
}

impl PanelBox {
    /// Left edge x coordinate
    pub fn left(&self) -> f32 {
        self.center_x - self.width / 2.0
    }

    /// Bottom edge y coordinate
    pub fn bottom(&self) -> f32 {
        self.center_y - self.height / 2.0
    }

    /// Top edge y coordinate
    pub fn top(&self) -> f32 {
        self.center_y + self.height / 2.0
    }
}

/// One item assigned to one slot of a planned sheet
#[derive(Debug, Clone, PartialEq)]
pub struct PlannedPlacement {
    pub slot: PanelSlot,
    pub panel: PanelBox,
    pub item: LayoutItem,
}

/// One planned output sheet: unique label plus its filled slots.
/// Slots that found no fitting item are absent, not padded.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetEntry {
    pub label: String,
    pub template: SheetTemplate,
    pub placements: Vec<PlannedPlacement>,
}

/// The composition output, in emission order: individual sheets first,
/// then combined sheets.
pub type SheetPlan = Vec<SheetEntry>;

/// Row/column/page capacity configuration for the image report grid.
/// All lengths are in feet; `origin_y` is the top edge of row 0 and rows
/// grow downward.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PaginationGrid {
    pub items_per_row: usize,
    pub rows_per_page: usize,
    pub cell_width: f32,
    pub cell_height: f32,
    pub cell_spacing: f32,
    pub origin_x: f32,
    pub origin_y: f32,
}

impl PaginationGrid {
    /// Slots on one full page
    pub fn page_capacity(&self) -> usize {
        self.items_per_row * self.rows_per_page
    }
}

impl Default for PaginationGrid {
    fn default() -> Self {
        Self {
            items_per_row: crate::constants::REPORT_ITEMS_PER_ROW,
            rows_per_page: crate::constants::REPORT_ROWS_PER_PAGE,
            cell_width: crate::constants::REPORT_CELL_WIDTH_FT,
            cell_height: crate::constants::REPORT_CELL_HEIGHT_FT,
            cell_spacing: crate::constants::REPORT_CELL_SPACING_FT,
            origin_x: crate::constants::REPORT_ORIGIN_X_FT,
            origin_y: crate::constants::REPORT_ORIGIN_Y_FT,
        }
    }
}

/// One grid cell filled by `paginate`; `x`/`y` is the cell's top-left
/// corner in feet
#[derive(Debug, Clone, PartialEq)]
pub struct CellPlacement {
    pub row: usize,
    pub col: usize,
    pub x: f32,
    pub y: f32,
    pub item: LayoutItem,
}

/// One report page produced by `paginate`
#[derive(Debug, Clone, PartialEq)]
pub struct PageLayout {
    pub label: String,
    pub cells: Vec<CellPlacement>,
}

/// Counts describing a composed sheet plan
#[derive(Debug, Clone, PartialEq)]
pub struct PlanStatistics {
    /// Single-template sheets, one per group that found a fit
    pub individual_sheets: usize,
    /// Multi-panel sheets produced from key clusters
    pub combined_sheets: usize,
    /// Items placed across all sheets
    pub placed_items: usize,
    /// Unfilled panel slots across all combined sheets
    pub empty_slots: usize,
}
