use std::path::Path;

use anyhow::Result;

use crate::core::interfaces::adapters::ImageDataExtractor;
use crate::core::interfaces::ports::RawMessage;
use crate::core::models::ImagePayload;

/// Decodes base64 image data carried inline in the raw message `Content` field.
pub struct ContentFieldImageExtractor;

impl ContentFieldImageExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ContentFieldImageExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageDataExtractor for ContentFieldImageExtractor {
    fn name(&self) -> &'static str {
        "content field"
    }

    fn is_applicable(&self, raw_message: &dyn RawMessage) -> bool {
        raw_message
            .content_field()
            .is_some_and(|content| !content.is_empty())
    }

    fn extract(&self, raw_message: &dyn RawMessage, _workspace: &Path) -> Result<ImagePayload> {
        let content = raw_message
            .content_field()
            .filter(|content| !content.is_empty())
            .ok_or_else(|| anyhow::anyhow!("raw message has no content field"))?;

        ImagePayload::from_base64(&content)
    }
}
