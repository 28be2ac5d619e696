use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::core::interfaces::adapters::ImageDataExtractor;
use crate::core::interfaces::ports::RawMessage;
use crate::core::models::ImagePayload;
use crate::global_constants::{self, LOG_TAG_EXTRACTOR};

/// Asks the host to download the attachment into the workspace, then reads it back.
pub struct DownloadImageExtractor;

impl DownloadImageExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Keeps only the final path component so a hostile file name cannot escape the workspace.
    fn resolve_target_path(workspace: &Path, file_name: Option<String>) -> PathBuf {
        let safe_name = file_name
            .as_deref()
            .and_then(|name| Path::new(name).file_name())
            .map(|name| name.to_os_string())
            .unwrap_or_else(|| global_constants::DEFAULT_DOWNLOAD_FILE_NAME.into());

        workspace.join(safe_name)
    }
}

impl Default for DownloadImageExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageDataExtractor for DownloadImageExtractor {
    fn name(&self) -> &'static str {
        "download"
    }

    fn is_applicable(&self, raw_message: &dyn RawMessage) -> bool {
        raw_message.can_download()
    }

    fn extract(&self, raw_message: &dyn RawMessage, workspace: &Path) -> Result<ImagePayload> {
        let target_path = Self::resolve_target_path(workspace, raw_message.file_name());
        log::debug!("{} downloading attachment to {:?}", LOG_TAG_EXTRACTOR, target_path);

        raw_message.download_to(&target_path)?;

        ImagePayload::take_from_file(&target_path)
            .with_context(|| format!("downloaded file {:?} could not be read", target_path))
    }
}
