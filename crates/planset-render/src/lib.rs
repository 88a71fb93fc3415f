mod pdf;
mod titleblock;
mod types;

pub use pdf::{ReportMeta, append_report_pages, append_sheet_pages, export_pdf, new_document};
pub use printpdf::PdfDocument;
pub use titleblock::{DEFAULT_TITLE_BLOCK, TitleBlock, lookup_title_block};
pub use types::*;
