//! Job specification DTOs
//!
//! The automation framework drops a `params.json` into the job working
//! directory; these types mirror its wire shape (camelCase keys).

use crate::types::{JobError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Which outputs this job produces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReportType {
    /// Floor-plan sheet set only
    SheetSet,
    /// Paginated asset photo report only
    AssetPhotos,
    /// Both, combined into one PDF
    Full,
}

/// Basic-auth credentials for asset downloads
#[derive(Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// A named view filter with a free-form parameter map.
/// Supported kinds: `name-prefix`, `name-contains`, `min-scale`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterSpec {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub parameters: HashMap<String, String>,
}

/// One downloadable asset referenced by the job
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetRecord {
    pub asset_id: String,
    pub project: String,
    pub asset_type: String,
    #[serde(default)]
    pub image_subtype: Option<String>,
    pub asset_name: String,
    pub asset_url: String,
    #[serde(default)]
    pub url_override: Option<String>,
}

impl AssetRecord {
    /// Download URL, with the override taking precedence when present
    pub fn effective_url(&self) -> &str {
        self.url_override.as_deref().unwrap_or(&self.asset_url)
    }
}

/// The job specification read from the working directory
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobParams {
    pub project_name: String,
    pub project_number: String,
    pub report_type: ReportType,
    #[serde(default)]
    pub view_types: Vec<String>,
    #[serde(default)]
    pub filters: Vec<FilterSpec>,
    #[serde(default)]
    pub max_views: Option<usize>,
    pub output_file: String,
    #[serde(default)]
    pub environment: String,
    pub credentials: Credentials,
    #[serde(default)]
    pub assets: Vec<AssetRecord>,
}

impl JobParams {
    /// Load params from a JSON file
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let params: JobParams = serde_json::from_slice(&bytes)
            .map_err(|e| JobError::Config(format!("failed to parse params: {e}")))?;
        Ok(params)
    }

    /// Save params to a JSON file
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| JobError::Config(format!("failed to serialize params: {e}")))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Validate the params before any work starts
    pub fn validate(&self) -> Result<()> {
        if self.output_file.trim().is_empty() {
            return Err(JobError::Config("outputFile must not be empty".to_string()));
        }

        if self.max_views == Some(0) {
            return Err(JobError::Config("maxViews must be at least 1".to_string()));
        }

        let needs_assets = matches!(self.report_type, ReportType::AssetPhotos | ReportType::Full);
        if needs_assets && !self.assets.is_empty() && self.credentials.username.is_empty() {
            return Err(JobError::Config(
                "asset downloads require a basic-auth username".to_string(),
            ));
        }

        Ok(())
    }
}
