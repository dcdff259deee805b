use std::fmt;

// === RenderError ===

/// Errors produced while submitting content to the render endpoint.
///
/// Every variant's `Display` output is the message shown to the user in the
/// transient error notice.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderError {
    /// The trimmed input was empty; nothing was sent.
    EmptyContent,
    /// The request never produced an HTTP response.
    NetworkError(String),
    /// The endpoint answered with a non-success status.
    ServerError(String),
    /// The success response was not a PNG image.
    WrongContentType(String),
    /// The success response carried no bytes.
    EmptyImage,
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::EmptyContent => write!(f, "Please enter content to render"),
            RenderError::NetworkError(msg) => write!(f, "Render network error: {}", msg),
            RenderError::ServerError(msg) => write!(f, "{}", msg),
            RenderError::WrongContentType(_) => write!(f, "Server returned wrong content type"),
            RenderError::EmptyImage => write!(f, "Generated image is empty"),
        }
    }
}

impl std::error::Error for RenderError {}

// === StorageError ===

/// Errors related to the durable key-value store.
#[derive(Debug, Clone, PartialEq)]
pub enum StorageError {
    /// The backing database rejected the operation.
    DatabaseError(String),
    /// A value could not be serialized for storage.
    SerializationError(String),
    /// The write would exceed the store's capacity.
    QuotaExceeded { key: String, needed: usize, available: usize },
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::DatabaseError(msg) => write!(f, "Storage database error: {}", msg),
            StorageError::SerializationError(msg) => {
                write!(f, "Storage serialization error: {}", msg)
            }
            StorageError::QuotaExceeded {
                key,
                needed,
                available,
            } => write!(
                f,
                "Storage quota exceeded for '{}': needed {} bytes, {} available",
                key, needed, available
            ),
        }
    }
}

impl std::error::Error for StorageError {}

// === CodecError ===

/// Errors related to data URL encoding of rendered images.
#[derive(Debug, Clone, PartialEq)]
pub enum CodecError {
    /// The string is not a `data:` URL.
    NotADataUrl,
    /// The data URL is not base64-encoded.
    UnsupportedEncoding(String),
    /// The base64 payload could not be decoded.
    InvalidPayload(String),
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodecError::NotADataUrl => write!(f, "Not a data URL"),
            CodecError::UnsupportedEncoding(header) => {
                write!(f, "Unsupported data URL encoding: {}", header)
            }
            CodecError::InvalidPayload(msg) => write!(f, "Invalid data URL payload: {}", msg),
        }
    }
}

impl std::error::Error for CodecError {}

// === SettingsError ===

/// Errors related to settings management.
#[derive(Debug)]
pub enum SettingsError {
    /// An I/O error occurred while reading or writing settings.
    IoError(String),
    /// Failed to serialize or deserialize settings.
    SerializationError(String),
    /// The provided settings key is invalid.
    InvalidKey(String),
    /// The provided settings value is invalid.
    InvalidValue(String),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::IoError(msg) => write!(f, "Settings I/O error: {}", msg),
            SettingsError::SerializationError(msg) => {
                write!(f, "Settings serialization error: {}", msg)
            }
            SettingsError::InvalidKey(key) => write!(f, "Invalid settings key: {}", key),
            SettingsError::InvalidValue(msg) => {
                write!(f, "Invalid settings value: {}", msg)
            }
        }
    }
}

impl std::error::Error for SettingsError {}
