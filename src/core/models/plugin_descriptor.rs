use crate::global_constants;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginDescriptor {
    pub name: &'static str,
    pub desire_priority: i32,
    pub hidden: bool,
    pub description: &'static str,
    pub version: &'static str,
    pub author: &'static str,
}

impl PluginDescriptor {
    pub fn img2url() -> Self {
        Self {
            name: global_constants::PLUGIN_NAME,
            desire_priority: global_constants::PLUGIN_DESIRE_PRIORITY,
            hidden: false,
            description: global_constants::PLUGIN_DESCRIPTION,
            version: global_constants::PLUGIN_VERSION,
            author: global_constants::PLUGIN_AUTHOR,
        }
    }
}
