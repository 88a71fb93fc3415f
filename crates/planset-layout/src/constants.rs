//! Shared layout constants
//!
//! All sheet geometry derives from the constants here; panel boxes are
//! never computed from a placed item's own size.

// =============================================================================
// Unit Conversion
// =============================================================================

/// Points per foot (1 ft = 12 in, 1 in = 72 points)
pub const POINTS_PER_FOOT: f32 = 864.0;

/// Convert feet to points
#[inline]
pub fn ft_to_pt(ft: f32) -> f32 {
    ft * POINTS_PER_FOOT
}

// =============================================================================
// Sheet Geometry (ARCH D landscape, in feet)
// =============================================================================

/// Physical sheet width (36 in)
pub const SHEET_WIDTH_FT: f32 = 3.0;

/// Physical sheet height (24 in)
pub const SHEET_HEIGHT_FT: f32 = 2.0;

/// Printer-safe margin on every sheet edge
pub const SHEET_MARGIN_FT: f32 = 0.1;

/// Width of the title strip along the right sheet edge
pub const TITLE_STRIP_FT: f32 = 0.35;

/// Gap between adjacent panels on multi-panel sheets
pub const PANEL_GAP_FT: f32 = 0.05;

/// Left edge of the usable drawing area
pub const USABLE_LEFT_FT: f32 = SHEET_MARGIN_FT;

/// Bottom edge of the usable drawing area
pub const USABLE_BOTTOM_FT: f32 = SHEET_MARGIN_FT;

/// Usable drawing width: sheet minus margins and title strip
pub const USABLE_WIDTH_FT: f32 =
    SHEET_WIDTH_FT - 2.0 * SHEET_MARGIN_FT - TITLE_STRIP_FT;

/// Usable drawing height: sheet minus margins
pub const USABLE_HEIGHT_FT: f32 = SHEET_HEIGHT_FT - 2.0 * SHEET_MARGIN_FT;

// =============================================================================
// Fit Constraints
// =============================================================================

/// Largest item width accepted on an individual (single-view) sheet
pub const INDIVIDUAL_MAX_WIDTH_FT: f32 = 2.4;

/// Largest item height accepted on an individual (single-view) sheet
pub const INDIVIDUAL_MAX_HEIGHT_FT: f32 = 1.7;

/// Panel size on the two-panel template; also its per-slot fit limit
pub const TWO_PANEL_WIDTH_FT: f32 = 1.2;
pub const TWO_PANEL_HEIGHT_FT: f32 = 1.6;

/// Panel size on the four-panel template; also its per-slot fit limit
pub const FOUR_PANEL_WIDTH_FT: f32 = 1.2;
pub const FOUR_PANEL_HEIGHT_FT: f32 = 0.85;

/// Most group keys placed together on one combined sheet
pub const MAX_KEYS_PER_COMBINED_SHEET: usize = 4;

// =============================================================================
// Report Grid Defaults
// =============================================================================

/// Image cells per row on a report page
pub const REPORT_ITEMS_PER_ROW: usize = 3;

/// Image rows per report page
pub const REPORT_ROWS_PER_PAGE: usize = 3;

/// Report grid cell width in feet
pub const REPORT_CELL_WIDTH_FT: f32 = 0.72;

/// Report grid cell height in feet
pub const REPORT_CELL_HEIGHT_FT: f32 = 0.5;

/// Horizontal and vertical gap between report cells
pub const REPORT_CELL_SPACING_FT: f32 = 0.06;

/// Top-left corner of cell (0, 0) on every report page
pub const REPORT_ORIGIN_X_FT: f32 = 0.13;
pub const REPORT_ORIGIN_Y_FT: f32 = 1.78;
