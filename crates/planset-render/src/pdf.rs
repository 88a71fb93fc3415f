//! PDF page assembly
//!
//! Turns a composed sheet plan and paginated report pages into printpdf
//! pages and exports everything as one combined document. Viewports are
//! drawn as outlines at the engine's panel centers; report cells embed
//! the downloaded raster images.

use crate::titleblock::TitleBlock;
use crate::types::{RenderError, Result};
use log::warn;
use planset_layout::{PageLayout, PlannedPlacement, SheetPlan, ft_to_pt};
use printpdf::*;
use std::collections::HashMap;
use std::path::Path;

/// Project fields printed in every title strip
#[derive(Debug, Clone)]
pub struct ReportMeta {
    pub project_name: String,
    pub project_number: String,
}

/// Approximate Helvetica advance as a fraction of the font size, used to
/// center builtin-font text without glyph metrics
const HELVETICA_CHAR_WIDTH_RATIO: f32 = 0.5;

const LABEL_FONT_SIZE_PT: f32 = 12.0;
const CAPTION_FONT_SIZE_PT: f32 = 9.0;

/// Vertical room reserved under each report cell for the asset caption
const CAPTION_STRIP_FT: f32 = 0.06;

/// Start a fresh output document
pub fn new_document(title: &str) -> PdfDocument {
    PdfDocument::new(title)
}

/// Append one page per planned sheet.
///
/// Every placement becomes a viewport outline of the item's own printed
/// size at the panel's center point; the panel box is fixed by the
/// template, so the outline never exceeds it.
pub fn append_sheet_pages(
    doc: &mut PdfDocument,
    plan: &SheetPlan,
    title_block: &TitleBlock,
    meta: &ReportMeta,
) {
    for entry in plan {
        let mut ops = frame_ops(title_block, &entry.label, meta);
        for placement in &entry.placements {
            ops.extend(viewport_ops(placement));
        }
        doc.pages.push(sheet_page(title_block, ops));
    }
}

/// Append one page per report page, embedding each cell's image.
///
/// `images` maps item ids to raw downloaded bytes. A cell whose image is
/// missing or undecodable is logged and drawn as an empty outline; the
/// rest of the page still renders.
pub fn append_report_pages(
    doc: &mut PdfDocument,
    pages: &[PageLayout],
    images: &HashMap<String, Vec<u8>>,
    title_block: &TitleBlock,
    meta: &ReportMeta,
    cell_width_ft: f32,
    cell_height_ft: f32,
) {
    for page in pages {
        let mut ops = frame_ops(title_block, &page.label, meta);

        for cell in &page.cells {
            let image_box_h = cell_height_ft - CAPTION_STRIP_FT;
            let box_left = cell.x;
            let box_bottom = cell.y - image_box_h;

            match images.get(&cell.item.id) {
                Some(bytes) => match decode_image(bytes) {
                    Ok(raw) => {
                        let xobject_id = doc.add_image(&raw);
                        ops.extend(image_ops(
                            xobject_id,
                            raw.width as f32,
                            raw.height as f32,
                            box_left,
                            box_bottom,
                            cell_width_ft,
                            image_box_h,
                        ));
                    }
                    Err(e) => {
                        warn!("image for {} not drawable: {e}, cell left empty", cell.item.id);
                        ops.push(stroke_rect(box_left, box_bottom, cell_width_ft, image_box_h));
                    }
                },
                None => {
                    warn!("no image bytes for {}, cell left empty", cell.item.id);
                    ops.push(stroke_rect(box_left, box_bottom, cell_width_ft, image_box_h));
                }
            }

            ops.extend(centered_text_ops(
                &cell.item.label,
                cell.x + cell_width_ft / 2.0,
                cell.y - cell_height_ft + 0.01,
                CAPTION_FONT_SIZE_PT,
            ));
        }

        doc.pages.push(sheet_page(title_block, ops));
    }
}

/// Save the finished document and write it to disk.
pub async fn export_pdf(doc: PdfDocument, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref().to_owned();
    let bytes = tokio::task::spawn_blocking(move || {
        let mut warnings = Vec::new();
        doc.save(&PdfSaveOptions::default(), &mut warnings)
    })
    .await?;
    tokio::fs::write(&path, bytes).await?;
    Ok(())
}

fn decode_image(bytes: &[u8]) -> Result<RawImage> {
    let mut warnings = Vec::new();
    RawImage::decode_from_bytes(bytes, &mut warnings).map_err(RenderError::Pdf)
}

fn sheet_page(title_block: &TitleBlock, ops: Vec<Op>) -> PdfPage {
    PdfPage::new(
        Mm::from(Pt(ft_to_pt(title_block.width_ft))),
        Mm::from(Pt(ft_to_pt(title_block.height_ft))),
        ops,
    )
}

/// Border, title strip divider, and title strip text for one page
fn frame_ops(title_block: &TitleBlock, sheet_label: &str, meta: &ReportMeta) -> Vec<Op> {
    let inset = title_block.border_inset_ft;
    let border_w = title_block.width_ft - 2.0 * inset;
    let border_h = title_block.height_ft - 2.0 * inset;
    let strip_left = title_block.strip_left_ft();
    let strip_center = strip_left + title_block.strip_width_ft / 2.0;

    let mut ops = vec![
        Op::SetOutlineColor {
            col: Color::Rgb(Rgb {
                r: 0.0,
                g: 0.0,
                b: 0.0,
                icc_profile: None,
            }),
        },
        Op::SetOutlineThickness { pt: Pt(1.2) },
        stroke_rect(inset, inset, border_w, border_h),
        Op::DrawLine {
            line: Line {
                points: vec![
                    line_point(strip_left, inset),
                    line_point(strip_left, inset + border_h),
                ],
                is_closed: false,
            },
        },
    ];

    let label_y = title_block.height_ft - inset - 0.08;
    ops.extend(centered_text_ops(
        sheet_label,
        strip_center,
        label_y,
        LABEL_FONT_SIZE_PT,
    ));
    ops.extend(centered_text_ops(
        &meta.project_name,
        strip_center,
        label_y - 0.06,
        CAPTION_FONT_SIZE_PT,
    ));
    ops.extend(centered_text_ops(
        &meta.project_number,
        strip_center,
        label_y - 0.11,
        CAPTION_FONT_SIZE_PT,
    ));

    ops
}

/// Outline of one placed item at its panel center, with the item label
/// centered underneath
fn viewport_ops(placement: &PlannedPlacement) -> Vec<Op> {
    let item = &placement.item;
    let panel = &placement.panel;
    let left = panel.center_x - item.width / 2.0;
    let bottom = panel.center_y - item.height / 2.0;

    let mut ops = vec![
        Op::SetOutlineThickness { pt: Pt(0.75) },
        stroke_rect(left, bottom, item.width, item.height),
    ];
    ops.extend(centered_text_ops(
        &item.label,
        panel.center_x,
        bottom - 0.035,
        CAPTION_FONT_SIZE_PT,
    ));
    ops
}

/// Embed an image scaled to fit a box, centered, aspect ratio preserved.
/// With the dpi pinned at 72 one pixel maps to one point, so the scale
/// factors are plain points-per-pixel ratios.
fn image_ops(
    id: XObjectId,
    width_px: f32,
    height_px: f32,
    box_left_ft: f32,
    box_bottom_ft: f32,
    box_width_ft: f32,
    box_height_ft: f32,
) -> Vec<Op> {
    let box_w_pt = ft_to_pt(box_width_ft);
    let box_h_pt = ft_to_pt(box_height_ft);
    let scale = (box_w_pt / width_px).min(box_h_pt / height_px);

    let drawn_w_pt = width_px * scale;
    let drawn_h_pt = height_px * scale;
    let x_pt = ft_to_pt(box_left_ft) + (box_w_pt - drawn_w_pt) / 2.0;
    let y_pt = ft_to_pt(box_bottom_ft) + (box_h_pt - drawn_h_pt) / 2.0;

    vec![Op::UseXobject {
        id,
        transform: XObjectTransform {
            translate_x: Some(Pt(x_pt)),
            translate_y: Some(Pt(y_pt)),
            rotate: None,
            scale_x: Some(scale),
            scale_y: Some(scale),
            dpi: Some(72.0),
        },
    }]
}

fn line_point(x_ft: f32, y_ft: f32) -> LinePoint {
    LinePoint {
        p: Point {
            x: Pt(ft_to_pt(x_ft)),
            y: Pt(ft_to_pt(y_ft)),
        },
        bezier: false,
    }
}

fn stroke_rect(x_ft: f32, y_ft: f32, width_ft: f32, height_ft: f32) -> Op {
    Op::DrawPolygon {
        polygon: Polygon {
            rings: vec![PolygonRing {
                points: vec![
                    line_point(x_ft, y_ft),
                    line_point(x_ft + width_ft, y_ft),
                    line_point(x_ft + width_ft, y_ft + height_ft),
                    line_point(x_ft, y_ft + height_ft),
                ],
            }],
            mode: PaintMode::Stroke,
            winding_order: WindingOrder::NonZero,
        },
    }
}

fn centered_text_ops(text: &str, center_x_ft: f32, baseline_y_ft: f32, size_pt: f32) -> Vec<Op> {
    let text_width_pt = text.chars().count() as f32 * size_pt * HELVETICA_CHAR_WIDTH_RATIO;
    let x_pt = ft_to_pt(center_x_ft) - text_width_pt / 2.0;

    vec![
        Op::StartTextSection,
        Op::SetTextCursor {
            pos: Point {
                x: Pt(x_pt),
                y: Pt(ft_to_pt(baseline_y_ft)),
            },
        },
        Op::SetFontSizeBuiltinFont {
            font: BuiltinFont::Helvetica,
            size: Pt(size_pt),
        },
        Op::WriteTextBuiltinFont {
            items: vec![TextItem::Text(text.to_string())],
            font: BuiltinFont::Helvetica,
        },
        Op::EndTextSection,
    ]
}
