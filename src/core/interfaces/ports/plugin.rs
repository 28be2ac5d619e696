use crate::core::models::{EventContext, PluginDescriptor};

/// Contract between the host chat-bot pipeline and a plugin.
///
/// The host calls `on_handle_context` once per incoming message, serially.
/// A plugin that wants to answer sets `EventContext::reply`; setting
/// `EventContext::action` to a break variant stops downstream handlers.
pub trait Plugin {
    fn descriptor(&self) -> PluginDescriptor;

    fn on_handle_context(&mut self, event_context: &mut EventContext);

    fn help_text(&self) -> String;
}
