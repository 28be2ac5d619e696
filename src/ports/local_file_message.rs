use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::core::interfaces::ports::RawMessage;
use crate::global_constants::LOG_TAG_HOST;

/// Raw message whose attachment is a file on the local disk.
///
/// Downloading copies the file, mirroring how chat platforms save an
/// attachment to a caller supplied path.
pub struct LocalFileMessage {
    source_path: PathBuf,
}

impl LocalFileMessage {
    pub fn from_path(source_path: impl Into<PathBuf>) -> Self {
        Self {
            source_path: source_path.into(),
        }
    }
}

impl RawMessage for LocalFileMessage {
    fn file_name(&self) -> Option<String> {
        self.source_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
    }

    fn can_download(&self) -> bool {
        true
    }

    fn download_to(&self, destination: &Path) -> Result<()> {
        log::debug!(
            "{} copying {:?} to {:?}",
            LOG_TAG_HOST,
            self.source_path,
            destination
        );

        std::fs::copy(&self.source_path, destination)
            .with_context(|| format!("could not copy {:?}", self.source_path))?;
        Ok(())
    }

    fn describe(&self) -> String {
        format!("LocalFileMessage({:?})", self.source_path)
    }
}
