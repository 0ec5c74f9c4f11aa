use thiserror::Error;

#[derive(Error, Debug)]
pub enum CopyError {
    #[error("No file or folder selected")]
    NoSelection,

    #[error("Failed to read {0}")]
    ReadError(String),

    #[error("Clipboard initialization failed: {0}")]
    ClipboardInitError(String),

    #[error("Clipboard write failed: {0}")]
    ClipboardWriteError(String),

    #[error("Tokenizer Error: {0}")]
    TokenizerModelError(String),

    #[error("IO Error: {0}")]
    IoError(String),
}

impl From<std::io::Error> for CopyError {
    fn from(err: std::io::Error) -> Self {
        CopyError::IoError(err.to_string())
    }
}
