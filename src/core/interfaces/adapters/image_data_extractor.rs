use std::path::Path;

use anyhow::Result;

use crate::core::interfaces::ports::RawMessage;
use crate::core::models::ImagePayload;

/// One way of pulling image bytes out of a host raw message.
pub trait ImageDataExtractor: Send + Sync {
    fn name(&self) -> &'static str;

    /// Whether the raw message exposes the capability this strategy needs.
    fn is_applicable(&self, raw_message: &dyn RawMessage) -> bool;

    /// `workspace` is a scratch directory owned by the caller and removed
    /// once the event has been handled.
    fn extract(&self, raw_message: &dyn RawMessage, workspace: &Path) -> Result<ImagePayload>;
}
