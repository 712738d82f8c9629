//! エラーハンドリング
//!
//! 終了コードは sysexits.h に合わせる。

/// 共通エラー型
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// 引数不正（EX_USAGE）
    #[error("{0}")]
    InvalidArgument(String),
    /// 環境変数・設定の不足（EX_CONFIG）
    #[error("environment: {0}")]
    Env(String),
    /// HTTP 通信・ステータスエラー（EX_UNAVAILABLE）
    #[error("http: {0}")]
    Http(String),
    /// JSON のパース・形状エラー（EX_DATAERR）
    #[error("json: {0}")]
    Json(String),
    /// モデル出力を JSON として解釈できない（EX_DATAERR）。raw は診断用の生テキスト
    #[error("unparseable model output: {message}\n--- raw output ---\n{raw}")]
    ModelOutput { message: String, raw: String },
    /// I/O エラー（EX_IOERR）
    #[error("io: {0}")]
    Io(String),
    /// その他のシステムエラー（EX_SOFTWARE）
    #[error("{0}")]
    System(String),
}

impl Error {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn env(msg: impl Into<String>) -> Self {
        Self::Env(msg.into())
    }

    pub fn http(msg: impl Into<String>) -> Self {
        Self::Http(msg.into())
    }

    pub fn json(msg: impl Into<String>) -> Self {
        Self::Json(msg.into())
    }

    pub fn model_output(msg: impl Into<String>, raw: impl Into<String>) -> Self {
        Self::ModelOutput {
            message: msg.into(),
            raw: raw.into(),
        }
    }

    pub fn io_msg(msg: impl Into<String>) -> Self {
        Self::Io(msg.into())
    }

    pub fn system(msg: impl Into<String>) -> Self {
        Self::System(msg.into())
    }

    /// プロセス終了コード
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidArgument(_) => 64,
            Self::Json(_) | Self::ModelOutput { .. } => 65,
            Self::Http(_) => 69,
            Self::System(_) => 70,
            Self::Io(_) => 74,
            Self::Env(_) => 78,
        }
    }

    /// usage を表示すべきエラーか
    pub fn is_usage(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_exit_codes() {
        assert_eq!(Error::invalid_argument("x").exit_code(), 64);
        assert_eq!(Error::json("x").exit_code(), 65);
        assert_eq!(Error::model_output("x", "raw").exit_code(), 65);
        assert_eq!(Error::http("x").exit_code(), 69);
        assert_eq!(Error::system("x").exit_code(), 70);
        assert_eq!(Error::io_msg("x").exit_code(), 74);
        assert_eq!(Error::env("x").exit_code(), 78);
    }

    #[test]
    fn test_error_is_usage() {
        assert!(Error::invalid_argument("bad flag").is_usage());
        assert!(!Error::env("SF_API_KEY is not set").is_usage());
    }

    #[test]
    fn test_model_output_display_contains_raw() {
        let err = Error::model_output("expected value at line 1", "Sure! Here it is");
        let s = err.to_string();
        assert!(s.contains("unparseable model output"));
        assert!(s.contains("Sure! Here it is"));
    }

    #[test]
    fn test_from_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: Error = io.into();
        assert_eq!(err.exit_code(), 74);
        assert!(err.to_string().contains("missing"));
    }
}
