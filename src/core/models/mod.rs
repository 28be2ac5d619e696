mod host_event;
mod image_payload;
mod pending_sessions;
mod plugin_config;
mod plugin_descriptor;

pub use host_event::{ContextType, EventAction, EventContext, HostContext, Reply, ReplyType};
pub use image_payload::ImagePayload;
pub use pending_sessions::PendingImageSessions;
pub use plugin_config::PluginConfig;
pub use plugin_descriptor::PluginDescriptor;
