//! Title block registry
//!
//! Sheets are framed by a title block looked up by its fixed name. A name
//! with no registered block is a configuration error that fails the whole
//! run; there is no fallback block.

use crate::types::{RenderError, Result};

/// Name used when the job does not pick a block explicitly
pub const DEFAULT_TITLE_BLOCK: &str = "ARCH D - Landscape";

/// Frame geometry for one sheet family, in feet
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TitleBlock {
    pub name: &'static str,
    /// Physical sheet width
    pub width_ft: f32,
    /// Physical sheet height
    pub height_ft: f32,
    /// Border inset from every sheet edge
    pub border_inset_ft: f32,
    /// Width of the title strip along the right edge, inside the border
    pub strip_width_ft: f32,
}

impl TitleBlock {
    /// Left edge of the title strip
    pub fn strip_left_ft(&self) -> f32 {
        self.width_ft - self.border_inset_ft - self.strip_width_ft
    }
}

static TITLE_BLOCKS: &[TitleBlock] = &[
    TitleBlock {
        name: "ARCH D - Landscape",
        width_ft: 3.0,
        height_ft: 2.0,
        border_inset_ft: 0.1,
        strip_width_ft: 0.35,
    },
    TitleBlock {
        name: "ANSI B - Landscape",
        width_ft: 17.0 / 12.0,
        height_ft: 11.0 / 12.0,
        border_inset_ft: 0.05,
        strip_width_ft: 0.2,
    },
];

/// Find a registered title block by its exact name.
pub fn lookup_title_block(name: &str) -> Result<&'static TitleBlock> {
    TITLE_BLOCKS
        .iter()
        .find(|tb| tb.name == name)
        .ok_or_else(|| RenderError::TitleBlockNotFound(name.to_string()))
}
