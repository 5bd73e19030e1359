use thiserror::Error;

#[derive(Error, Debug)]
pub enum KeyGaError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Geometry Error: {0}")]
    Geometry(String),

    #[error("Layout Error: {0}")]
    Layout(String),
}

pub type KgResult<T> = Result<T, KeyGaError>;
