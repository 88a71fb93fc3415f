use std::path::{Path, PathBuf};

/// Paths for one automation invocation.
///
/// Built once when the job trigger fires and passed by reference through
/// the pipeline; nothing here is global or cached across runs.
#[derive(Debug, Clone)]
pub struct JobContext {
    job_dir: PathBuf,
}

impl JobContext {
    pub fn new(job_dir: impl Into<PathBuf>) -> Self {
        Self {
            job_dir: job_dir.into(),
        }
    }

    pub fn job_dir(&self) -> &Path {
        &self.job_dir
    }

    /// The job specification dropped by the automation framework
    pub fn params_path(&self) -> PathBuf {
        self.job_dir.join("params.json")
    }

    /// The document's exported view table
    pub fn views_path(&self) -> PathBuf {
        self.job_dir.join("views.json")
    }

    /// Where downloaded assets land
    pub fn assets_dir(&self) -> PathBuf {
        self.job_dir.join("assets")
    }

    /// Final PDF location for the configured output file name
    pub fn output_path(&self, output_file: &str) -> PathBuf {
        self.job_dir.join(output_file)
    }
}
