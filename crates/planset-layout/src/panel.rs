//! Panel geometry tables
//!
//! Maps (template, slot) to a fixed box on the sheet. Everything is
//! computed from the sheet constants; the placed item's own size never
//! participates.

use crate::constants::*;
use crate::types::{LayoutError, PanelBox, PanelSlot, Result, SheetTemplate};

/// Fixed box for a panel slot, in feet from the sheet's bottom-left corner.
///
/// Single: one panel spanning the usable area. TwoPanel: `A` left and `B`
/// right, top-aligned under the top margin. FourPanel: a 2x2 grid running
/// clockwise from the top-left (`A` TL, `B` TR, `C` BR, `D` BL).
///
/// A slot the template does not define is an invalid-argument error, never
/// a zero box.
pub fn panel_box(template: SheetTemplate, slot: PanelSlot) -> Result<PanelBox> {
    let usable_top = USABLE_BOTTOM_FT + USABLE_HEIGHT_FT;
    let left_col_x = USABLE_LEFT_FT + TWO_PANEL_WIDTH_FT / 2.0;
    let right_col_x = USABLE_LEFT_FT + TWO_PANEL_WIDTH_FT + PANEL_GAP_FT + TWO_PANEL_WIDTH_FT / 2.0;

    match (template, slot) {
        (SheetTemplate::Single, PanelSlot::A) => Ok(PanelBox {
            center_x: USABLE_LEFT_FT + USABLE_WIDTH_FT / 2.0,
            center_y: USABLE_BOTTOM_FT + USABLE_HEIGHT_FT / 2.0,
            width: USABLE_WIDTH_FT,
            height: USABLE_HEIGHT_FT,
        }),

        (SheetTemplate::TwoPanel, PanelSlot::A) => Ok(PanelBox {
            center_x: left_col_x,
            center_y: usable_top - TWO_PANEL_HEIGHT_FT / 2.0,
            width: TWO_PANEL_WIDTH_FT,
            height: TWO_PANEL_HEIGHT_FT,
        }),
        (SheetTemplate::TwoPanel, PanelSlot::B) => Ok(PanelBox {
            center_x: right_col_x,
            center_y: usable_top - TWO_PANEL_HEIGHT_FT / 2.0,
            width: TWO_PANEL_WIDTH_FT,
            height: TWO_PANEL_HEIGHT_FT,
        }),

        (SheetTemplate::FourPanel, slot) => {
            let top_row_y = usable_top - FOUR_PANEL_HEIGHT_FT / 2.0;
            let bottom_row_y =
                usable_top - FOUR_PANEL_HEIGHT_FT - PANEL_GAP_FT - FOUR_PANEL_HEIGHT_FT / 2.0;
            let (center_x, center_y) = match slot {
                PanelSlot::A => (left_col_x, top_row_y),
                PanelSlot::B => (right_col_x, top_row_y),
                PanelSlot::C => (right_col_x, bottom_row_y),
                PanelSlot::D => (left_col_x, bottom_row_y),
            };
            Ok(PanelBox {
                center_x,
                center_y,
                width: FOUR_PANEL_WIDTH_FT,
                height: FOUR_PANEL_HEIGHT_FT,
            })
        }

        (template, slot) => Err(LayoutError::InvalidSlot { template, slot }),
    }
}
