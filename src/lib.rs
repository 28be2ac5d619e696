pub mod adapters;
pub mod app;
pub mod core;
pub mod global_constants;
pub mod ports;

pub use crate::app::ConsoleChatHost;
pub use crate::core::interfaces::ports::{Plugin, RawMessage};
pub use crate::core::models::{
    ContextType, EventAction, EventContext, HostContext, PluginConfig, Reply, ReplyType,
};
pub use crate::core::orchestrators::Img2UrlPlugin;
