use std::path::Path;

use base64::Engine;
use image::ImageFormat;

use crate::global_constants::LOG_TAG_EXTRACTOR;

#[derive(Clone, PartialEq, Eq)]
pub struct ImagePayload {
    bytes: Vec<u8>,
}

impl std::fmt::Debug for ImagePayload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImagePayload")
            .field("length", &self.bytes.len())
            .field("format", &self.detected_format())
            .finish()
    }
}

impl ImagePayload {
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    /// Reads a file written by the host and deletes it straight away.
    ///
    /// A failed delete is only logged; the enclosing workspace removes the file later.
    pub fn take_from_file(path: &Path) -> std::io::Result<Self> {
        let bytes = std::fs::read(path)?;

        if let Err(error) = std::fs::remove_file(path) {
            log::debug!(
                "{} could not remove {:?} after reading it: {}",
                LOG_TAG_EXTRACTOR,
                path,
                error
            );
        }

        Ok(Self { bytes })
    }

    /// Decodes standard base64, ignoring ASCII whitespace such as line breaks.
    pub fn from_base64(encoded: &str) -> anyhow::Result<Self> {
        let compact: String = encoded
            .chars()
            .filter(|character| !character.is_ascii_whitespace())
            .collect();

        let bytes = base64::engine::general_purpose::STANDARD.decode(compact.as_bytes())?;
        Ok(Self { bytes })
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn to_base64(&self) -> String {
        base64::engine::general_purpose::STANDARD.encode(&self.bytes)
    }

    /// Best-effort format sniffing, only used for logging.
    pub fn detected_format(&self) -> Option<ImageFormat> {
        image::guess_format(&self.bytes).ok()
    }
}
