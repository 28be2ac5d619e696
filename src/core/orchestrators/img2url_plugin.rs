use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::adapters::{
    ContentFieldImageExtractor, DownloadImageExtractor, ImgbbImageHostingService,
    TextAccessorImageExtractor,
};
use crate::core::interfaces::adapters::{ImageDataExtractor, ImageHostingService};
use crate::core::interfaces::ports::{Clock, Plugin};
use crate::core::models::{
    ContextType, EventAction, EventContext, HostContext, ImagePayload, PendingImageSessions,
    PluginConfig, PluginDescriptor, Reply,
};
use crate::global_constants::{self, LOG_TAG_PLUGIN};
use crate::ports::SystemClock;

enum ImageLinkOutcome {
    Uploaded(String),
    NoImageData,
    UploadFailed,
}

/// Turns the next image a user sends after the trigger phrase into an ImgBB link.
pub struct Img2UrlPlugin {
    trigger_word: String,
    pending_sessions: PendingImageSessions,
    image_hosting_service: Arc<dyn ImageHostingService>,
    extractors: Vec<Box<dyn ImageDataExtractor>>,
    /// Directory holding per-event scratch workspaces; the system temp dir when `None`.
    workspace_root: Option<PathBuf>,
}

impl Img2UrlPlugin {
    pub fn build(
        image_hosting_service: Arc<dyn ImageHostingService>,
        clock: Arc<dyn Clock>,
        pending_image_timeout: Option<Duration>,
    ) -> Self {
        Self::build_with_extractors(
            image_hosting_service,
            clock,
            pending_image_timeout,
            Self::default_extractors(),
            None,
        )
    }

    pub fn build_with_extractors(
        image_hosting_service: Arc<dyn ImageHostingService>,
        clock: Arc<dyn Clock>,
        pending_image_timeout: Option<Duration>,
        extractors: Vec<Box<dyn ImageDataExtractor>>,
        workspace_root: Option<PathBuf>,
    ) -> Self {
        log::info!(
            "{} plugin initialized with {} extractors",
            LOG_TAG_PLUGIN,
            extractors.len()
        );

        Self {
            trigger_word: global_constants::TRIGGER_WORD.to_string(),
            pending_sessions: PendingImageSessions::new(clock, pending_image_timeout),
            image_hosting_service,
            extractors,
            workspace_root,
        }
    }

    pub fn from_config(config: &PluginConfig) -> Self {
        Self::build(
            Arc::new(ImgbbImageHostingService::from_config(config)),
            Arc::new(SystemClock::initialize()),
            config.pending_image_timeout(),
        )
    }

    /// Download capability first, then the inline content field, then the text accessor.
    pub fn default_extractors() -> Vec<Box<dyn ImageDataExtractor>> {
        vec![
            Box::new(DownloadImageExtractor::new()),
            Box::new(ContentFieldImageExtractor::new()),
            Box::new(TextAccessorImageExtractor::new()),
        ]
    }

    pub fn is_waiting_for_image(&mut self, user_id: &str) -> bool {
        self.pending_sessions.is_waiting(user_id)
    }

    /// Tries every extractor in order and returns the first non-empty payload.
    ///
    /// Fails only when the scratch workspace cannot be created; a message
    /// that yields no data from any extractor is `Ok(None)`.
    pub fn get_image_data(&self, context: &HostContext) -> Result<Option<ImagePayload>> {
        let Some(raw_message) = context.raw_message.as_deref() else {
            log::error!("{} image event carries no raw message", LOG_TAG_PLUGIN);
            return Ok(None);
        };

        let mut workspace_builder = tempfile::Builder::new();
        workspace_builder.prefix(global_constants::EXTRACTION_WORKSPACE_PREFIX);

        let workspace = match &self.workspace_root {
            Some(root) => workspace_builder.tempdir_in(root),
            None => workspace_builder.tempdir(),
        }
        .context("could not create a temporary workspace for the image")?;

        for extractor in &self.extractors {
            if !extractor.is_applicable(raw_message) {
                log::debug!(
                    "{} {} extractor not applicable",
                    LOG_TAG_PLUGIN,
                    extractor.name()
                );
                continue;
            }

            match extractor.extract(raw_message, workspace.path()) {
                Ok(payload) if !payload.is_empty() => {
                    log::debug!(
                        "{} got {} bytes ({:?}) via {} extractor",
                        LOG_TAG_PLUGIN,
                        payload.len(),
                        payload.detected_format(),
                        extractor.name()
                    );
                    return Ok(Some(payload));
                }
                Ok(_) => {
                    log::warn!(
                        "{} {} extractor returned no data",
                        LOG_TAG_PLUGIN,
                        extractor.name()
                    );
                }
                Err(error) => {
                    log::warn!(
                        "{} {} extractor failed: {:#}",
                        LOG_TAG_PLUGIN,
                        extractor.name(),
                        error
                    );
                }
            }
        }

        log::error!("{} every image extractor failed", LOG_TAG_PLUGIN);
        log::debug!("{} raw message: {}", LOG_TAG_PLUGIN, raw_message.describe());
        Ok(None)
    }

    fn upload_image_payload(&self, payload: &ImagePayload) -> Option<String> {
        match self.image_hosting_service.upload_image(&payload.to_base64()) {
            Ok(image_url) => Some(image_url),
            Err(error) => {
                log::error!("{} upload failed: {:#}", LOG_TAG_PLUGIN, error);
                None
            }
        }
    }

    fn convert_image_to_link(&self, context: &HostContext) -> Result<ImageLinkOutcome> {
        let Some(payload) = self.get_image_data(context)? else {
            return Ok(ImageLinkOutcome::NoImageData);
        };

        log::debug!("{} image data ready, uploading", LOG_TAG_PLUGIN);

        match self.upload_image_payload(&payload) {
            Some(image_url) => Ok(ImageLinkOutcome::Uploaded(image_url)),
            None => Ok(ImageLinkOutcome::UploadFailed),
        }
    }

    pub fn format_upload_success(image_url: &str) -> String {
        format!(
            "{}\n{}{}\n{}",
            global_constants::UPLOAD_SUCCESS_HEADER,
            global_constants::UPLOAD_SUCCESS_LINK_LABEL,
            image_url,
            global_constants::UPLOAD_SUCCESS_FOOTER
        )
    }

    fn handle_trigger(&mut self, event_context: &mut EventContext, user_id: &str) {
        log::info!("{} trigger phrase from user {}", LOG_TAG_PLUGIN, user_id);

        self.pending_sessions.begin_waiting(user_id);
        event_context.reply = Some(Reply::text(global_constants::REPLY_SEND_IMAGE_PROMPT));
        event_context.action = EventAction::BreakPass;
    }

    fn handle_pending_image(&mut self, event_context: &mut EventContext, user_id: &str) {
        log::debug!(
            "{} processing image from user {}: {:?}",
            LOG_TAG_PLUGIN,
            user_id,
            event_context.context
        );

        match self.convert_image_to_link(&event_context.context) {
            Ok(ImageLinkOutcome::Uploaded(image_url)) => {
                event_context.reply = Some(Reply::text(Self::format_upload_success(&image_url)));
                event_context.context.no_image_parse = true;
                event_context.action = EventAction::BreakPass;
                self.pending_sessions.finish_waiting(user_id);
            }
            Ok(ImageLinkOutcome::NoImageData) => {
                log::error!("{} no image data for user {}", LOG_TAG_PLUGIN, user_id);
                event_context.reply = Some(Reply::error(
                    global_constants::REPLY_IMAGE_DATA_UNAVAILABLE,
                ));
            }
            Ok(ImageLinkOutcome::UploadFailed) => {
                event_context.reply = Some(Reply::error(global_constants::REPLY_UPLOAD_FAILED));
            }
            Err(error) => {
                log::error!("{} error while processing image: {:#}", LOG_TAG_PLUGIN, error);
                event_context.reply = Some(Reply::error(format!(
                    "{}{}",
                    global_constants::REPLY_UNEXPECTED_ERROR_PREFIX,
                    error
                )));
            }
        }
    }
}

impl Plugin for Img2UrlPlugin {
    fn descriptor(&self) -> PluginDescriptor {
        PluginDescriptor::img2url()
    }

    fn on_handle_context(&mut self, event_context: &mut EventContext) {
        let Some(user_id) = event_context.context.sender().map(str::to_string) else {
            return;
        };

        let context_type = event_context.context.context_type.clone();

        if context_type == ContextType::Text
            && event_context.context.content.contains(&self.trigger_word)
        {
            self.handle_trigger(event_context, &user_id);
            return;
        }

        if context_type == ContextType::Image && self.pending_sessions.is_waiting(&user_id) {
            self.handle_pending_image(event_context, &user_id);
        }
    }

    fn help_text(&self) -> String {
        global_constants::HELP_TEXT.to_string()
    }
}
