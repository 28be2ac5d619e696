mod clock;
mod plugin;
mod raw_message;

pub use clock::Clock;
pub use plugin::Plugin;
pub use raw_message::RawMessage;
