//! Data URL encoding for rendered images.
//!
//! History records keep the image as a self-contained `data:` URL so it
//! survives restarts without any external file.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};

use crate::types::errors::CodecError;
use crate::types::render::RenderedImage;

const DATA_PREFIX: &str = "data:";
const BASE64_MARKER: &str = ";base64";

/// Encodes `bytes` as `data:<mime>;base64,<payload>`.
pub fn to_data_url(mime: &str, bytes: &[u8]) -> String {
    format!("{}{}{},{}", DATA_PREFIX, mime, BASE64_MARKER, BASE64.encode(bytes))
}

/// Encodes a rendered image, dropping any content-type parameters.
pub fn image_to_data_url(image: &RenderedImage) -> String {
    to_data_url(image.mime(), &image.bytes)
}

/// Splits a base64 data URL into its MIME type and decoded bytes.
pub fn from_data_url(url: &str) -> Result<(String, Vec<u8>), CodecError> {
    let rest = url.strip_prefix(DATA_PREFIX).ok_or(CodecError::NotADataUrl)?;
    let (header, payload) = rest.split_once(',').ok_or(CodecError::NotADataUrl)?;
    let mime = header
        .strip_suffix(BASE64_MARKER)
        .ok_or_else(|| CodecError::UnsupportedEncoding(header.to_string()))?;
    let bytes = BASE64
        .decode(payload.trim())
        .map_err(|e| CodecError::InvalidPayload(e.to_string()))?;
    Ok((mime.to_string(), bytes))
}
