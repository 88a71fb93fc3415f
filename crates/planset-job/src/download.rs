//! Asset image download
//!
//! Assets are fetched one at a time with basic auth. A failed asset is
//! logged and dropped; the report pagination never sees an item for an
//! asset that did not download.

use crate::params::{AssetRecord, Credentials};
use crate::types::{JobError, Result};
use image::GenericImageView;
use log::{debug, info, warn};
use planset_layout::LayoutItem;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Pixels per foot at the report's fixed 96 dpi
pub const REPORT_PIXELS_PER_FOOT: f32 = 96.0 * 12.0;

const DOWNLOAD_TIMEOUT: Duration = Duration::from_secs(120);

/// An asset image on disk with its decoded pixel dimensions
#[derive(Debug, Clone)]
pub struct DownloadedAsset {
    pub record: AssetRecord,
    pub path: PathBuf,
    pub width_px: u32,
    pub height_px: u32,
}

impl DownloadedAsset {
    /// Layout item for the report grid, sized in feet at the report dpi
    pub fn to_layout_item(&self) -> LayoutItem {
        LayoutItem {
            id: self.record.asset_id.clone(),
            label: self.record.asset_name.clone(),
            group_key: self.record.asset_type.clone(),
            priority_rank: 0,
            width: self.width_px as f32 / REPORT_PIXELS_PER_FOOT,
            height: self.height_px as f32 / REPORT_PIXELS_PER_FOOT,
            placeable: true,
        }
    }
}

/// Download every asset in order into `dest_dir`.
///
/// Downloads are sequential, one request per asset. An asset that fails
/// (bad URL, HTTP error, undecodable body) is logged and skipped; the
/// rest of the list still downloads.
pub async fn download_assets(
    assets: &[AssetRecord],
    credentials: &Credentials,
    dest_dir: impl AsRef<Path>,
) -> Result<Vec<DownloadedAsset>> {
    let dest_dir = dest_dir.as_ref();
    tokio::fs::create_dir_all(dest_dir).await?;

    let client = reqwest::Client::builder()
        .timeout(DOWNLOAD_TIMEOUT)
        .build()?;

    let mut downloaded = Vec::new();
    for record in assets {
        match download_one(&client, record, credentials, dest_dir).await {
            Ok(asset) => {
                info!(
                    "downloaded {} ({}x{} px)",
                    asset.record.asset_name, asset.width_px, asset.height_px
                );
                downloaded.push(asset);
            }
            Err(e) => {
                warn!("asset {} failed to download: {e}, skipping", record.asset_id);
            }
        }
    }

    Ok(downloaded)
}

async fn download_one(
    client: &reqwest::Client,
    record: &AssetRecord,
    credentials: &Credentials,
    dest_dir: &Path,
) -> Result<DownloadedAsset> {
    let url = record.effective_url();
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(JobError::Config(format!(
            "asset {} has a non-http url: {url}",
            record.asset_id
        )));
    }

    debug!("GET {url}");
    let response = client
        .get(url)
        .basic_auth(&credentials.username, Some(&credentials.password))
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(JobError::HttpStatus {
            status: response.status().as_u16(),
            url: url.to_string(),
        });
    }

    let bytes = response.bytes().await?;
    let (width_px, height_px) = image::load_from_memory(&bytes)?.dimensions();

    let path = dest_dir.join(asset_file_name(record));
    tokio::fs::write(&path, &bytes).await?;

    Ok(DownloadedAsset {
        record: record.clone(),
        path,
        width_px,
        height_px,
    })
}

/// On-disk name for an asset: its id plus the extension inferred from the
/// URL path (default "img" when the URL has none)
fn asset_file_name(record: &AssetRecord) -> String {
    let extension = infer_extension_from_url(record.effective_url()).unwrap_or("img");
    format!("{}.{extension}", record.asset_id)
}

fn infer_extension_from_url(url: &str) -> Option<&'static str> {
    let path = url.split(['?', '#']).next().unwrap_or(url);
    let lower = path.to_lowercase();
    if lower.ends_with(".jpg") || lower.ends_with(".jpeg") {
        Some("jpg")
    } else if lower.ends_with(".png") {
        Some("png")
    } else if lower.ends_with(".gif") {
        Some("gif")
    } else if lower.ends_with(".bmp") {
        Some("bmp")
    } else {
        None
    }
}
