//! 待機の抽象
//!
//! usecase はこの trait 経由で書き込み後の待ち時間を取る（テストでは記録するだけ）。

use std::time::Duration;

pub trait Sleeper: Send + Sync {
    fn sleep(&self, duration: Duration);
}
