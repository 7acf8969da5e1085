use translit_core::TransliterateError;

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("IO error: {msg}")]
    Io { msg: String },
    #[error("invalid data: {msg}")]
    InvalidData { msg: String },
    #[error("invalid standard: {id}")]
    InvalidStandard { id: String },
}

impl From<TransliterateError> for ApiError {
    fn from(e: TransliterateError) -> Self {
        match e {
            TransliterateError::InvalidStandard(id) => ApiError::InvalidStandard { id },
        }
    }
}

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

/// Summary of one registered standard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StandardInfo {
    pub id: String,
    pub description: String,
    pub mappings: usize,
}
