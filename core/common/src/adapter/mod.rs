//! アダプター（外界の I/O をポートの trait 越しに提供する標準実装）
//!
//! 実装は標準実装（Std*）やログ出力先ごとの Log 実装。テストではモックを注入する。

pub mod file_json_log;
pub mod std_env_resolver;
pub mod std_fs;
pub mod stderr_log;
pub mod tee_log;

pub use file_json_log::{FileJsonLog, NoopLog};
pub use std_env_resolver::StdEnvResolver;
pub use std_fs::StdFileSystem;
pub use stderr_log::StderrLog;
pub use tee_log::TeeLog;
