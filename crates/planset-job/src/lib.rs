mod context;
mod download;
mod params;
mod types;
mod views;

pub use context::JobContext;
pub use download::{DownloadedAsset, REPORT_PIXELS_PER_FOOT, download_assets};
pub use params::*;
pub use types::*;
pub use views::{SCALE_DELIMITER, ViewRecord, apply_view_filters, group_key_for, load_views};
