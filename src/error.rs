use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CorpusdlError>;

#[derive(Error, Debug)]
pub enum CorpusdlError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Zip archive error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("Unsupported archive format: {name}")]
    UnsupportedArchive { name: String },

    #[error("Invalid archive file name: {path}")]
    InvalidArchiveName { path: PathBuf },

    #[error("Permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),
}
