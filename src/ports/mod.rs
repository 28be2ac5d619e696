mod local_file_message;
mod system_clock;

pub use local_file_message::LocalFileMessage;
pub use system_clock::SystemClock;
