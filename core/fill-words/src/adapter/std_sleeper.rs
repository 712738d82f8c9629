//! 標準の待機実装（std::thread::sleep を委譲）

use crate::ports::outbound::Sleeper;
use std::time::Duration;

#[derive(Debug, Clone, Default)]
pub struct StdSleeper;

impl Sleeper for StdSleeper {
    fn sleep(&self, duration: Duration) {
        if !duration.is_zero() {
            std::thread::sleep(duration);
        }
    }
}
