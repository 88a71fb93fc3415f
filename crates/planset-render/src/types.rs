use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    /// No title block registered under the requested name; fatal, no
    /// sheets can be produced without one
    #[error("title block not found: {0}")]
    TitleBlockNotFound(String),
    #[error("PDF error: {0}")]
    Pdf(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, RenderError>;
