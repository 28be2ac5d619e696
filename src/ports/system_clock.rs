use std::time::SystemTime;

use crate::core::interfaces::ports::Clock;

pub struct SystemClock;

impl SystemClock {
    pub fn initialize() -> Self {
        Self
    }
}

impl Clock for SystemClock {
    fn now(&self) -> SystemTime {
        SystemTime::now()
    }
}
