use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("access to the notes application was denied")]
    AccessDenied,

    #[error("permission denied\n{0}")]
    PermissionDenied(String),

    #[error("could not fetch notes: {0}")]
    FetchFailed(String),

    #[error("no notes to export")]
    NoNotes,

    #[error("{0}")]
    ExportFailed(String),

    #[error("unknown error: {0}")]
    Unknown(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ExportError>;
