use std::path::Path;

use anyhow::Result;

/// Platform specific message object handed over by the host.
///
/// Every capability is optional. The defaults describe a message that
/// exposes none of them, so a host only overrides what its platform offers.
pub trait RawMessage: Send + Sync {
    /// File name the platform attached to the message, if any.
    fn file_name(&self) -> Option<String> {
        None
    }

    fn can_download(&self) -> bool {
        false
    }

    /// Writes the message attachment to `destination`.
    fn download_to(&self, _destination: &Path) -> Result<()> {
        anyhow::bail!("raw message has no download capability")
    }

    /// Inline `Content` field, expected to carry base64 image data.
    fn content_field(&self) -> Option<String> {
        None
    }

    fn has_text_accessor(&self) -> bool {
        false
    }

    /// Invokes the callable `Text` accessor, which writes the attachment to `destination`.
    fn call_text_accessor(&self, _destination: &Path) -> Result<()> {
        anyhow::bail!("raw message has no callable text accessor")
    }

    fn describe(&self) -> String {
        format!(
            "RawMessage(file_name={:?}, download={}, content={}, text_accessor={})",
            self.file_name(),
            self.can_download(),
            self.content_field().is_some(),
            self.has_text_accessor()
        )
    }
}
