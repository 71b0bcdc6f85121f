use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("No images provided")]
    NoImages,

    #[error("Only image files are allowed: {0}")]
    UnsupportedImage(String),

    #[error("Image too large: {filename} exceeds {limit} bytes")]
    ImageTooLarge { filename: String, limit: usize },

    #[error("Too many images: at most {0} per scan")]
    TooManyImages(usize),

    #[error("Malformed upload: {0}")]
    MalformedUpload(String),

    #[error("JSON serialization error: {0}")]
    JsonSerialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl Error {
    /// Whether this error was caused by bad client input rather than a
    /// server-side failure. Drives the HTTP status mapping in services.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Error::NoImages
                | Error::UnsupportedImage(_)
                | Error::ImageTooLarge { .. }
                | Error::TooManyImages(_)
                | Error::MalformedUpload(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;
