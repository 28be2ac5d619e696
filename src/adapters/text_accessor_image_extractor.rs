use std::path::Path;

use anyhow::{Context, Result};

use crate::core::interfaces::adapters::ImageDataExtractor;
use crate::core::interfaces::ports::RawMessage;
use crate::core::models::ImagePayload;
use crate::global_constants::{self, LOG_TAG_EXTRACTOR};

/// Calls the raw message `Text` accessor, which saves the attachment to a given path.
pub struct TextAccessorImageExtractor;

impl TextAccessorImageExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TextAccessorImageExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageDataExtractor for TextAccessorImageExtractor {
    fn name(&self) -> &'static str {
        "text accessor"
    }

    fn is_applicable(&self, raw_message: &dyn RawMessage) -> bool {
        raw_message.has_text_accessor()
    }

    fn extract(&self, raw_message: &dyn RawMessage, workspace: &Path) -> Result<ImagePayload> {
        let target_path = workspace.join(global_constants::TEXT_ACCESSOR_FILE_NAME);
        log::debug!(
            "{} invoking text accessor with {:?}",
            LOG_TAG_EXTRACTOR,
            target_path
        );

        raw_message.call_text_accessor(&target_path)?;

        ImagePayload::take_from_file(&target_path)
            .with_context(|| format!("text accessor output {:?} could not be read", target_path))
    }
}
