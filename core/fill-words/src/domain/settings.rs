//! 1 回の実行パラメータ

use std::time::Duration;

pub const DEFAULT_LIMIT: usize = 500;
pub const DEFAULT_DELAY_MS: u64 = 1200;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// 取得上限と書き込み後の待ち時間
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSettings {
    /// 1 回の実行で取得する空エントリの最大数
    pub limit: usize,
    /// 各書き込みの後に待つ時間（簡易なレート制限回避）
    pub delay: Duration,
}
