//! 人間向けログ（LogRecord → stderr へ要点のみ出力）
//!
//! fields の全量は出さず要点のみ（巨大化防止）。

use crate::error::Error;
use crate::ports::outbound::{Log, LogLevel, LogRecord};

const FIELDS_SUMMARY_MAX: usize = 400;

/// fields を `k=v` 形式の短い文字列にする
fn fields_summary(record: &LogRecord) -> String {
    let Some(fields) = &record.fields else {
        return String::new();
    };
    let s = fields
        .iter()
        .map(|(k, v)| match v {
            serde_json::Value::String(s) => format!("{}={}", k, s),
            other => format!("{}={}", k, other),
        })
        .collect::<Vec<_>>()
        .join(" ");
    if s.chars().count() <= FIELDS_SUMMARY_MAX {
        return s;
    }
    let truncated = s.chars().take(FIELDS_SUMMARY_MAX).collect::<String>();
    format!("{}... (len={})", truncated, s.len())
}

/// 1 行に整形する（`[fill-words] info: message k=v`）
pub fn format_line(record: &LogRecord) -> String {
    let summary = fields_summary(record);
    if summary.is_empty() {
        format!("[fill-words] {}: {}", record.level.as_str(), record.message)
    } else {
        format!(
            "[fill-words] {}: {} {}",
            record.level.as_str(),
            record.message,
            summary
        )
    }
}

/// stderr へ出力する Log 実装。`max_level` より詳細なレコードと、除外した kind のレコードは捨てる
pub struct StderrLog {
    max_level: LogLevel,
    skipped_kinds: Vec<String>,
}

impl StderrLog {
    pub fn new(max_level: LogLevel) -> Self {
        Self {
            max_level,
            skipped_kinds: Vec::new(),
        }
    }

    /// verbose なら debug まで、そうでなければ warn まで
    pub fn for_verbosity(verbose: bool) -> Self {
        if verbose {
            Self::new(LogLevel::Debug)
        } else {
            Self::new(LogLevel::Warn)
        }
    }

    /// 指定 kind のレコードを stderr に出さない（別経路で表示済みのもの向け）
    pub fn skip_kind(mut self, kind: impl Into<String>) -> Self {
        self.skipped_kinds.push(kind.into());
        self
    }

    pub fn enabled(&self, level: LogLevel) -> bool {
        level <= self.max_level
    }

    pub fn accepts(&self, record: &LogRecord) -> bool {
        if !self.enabled(record.level) {
            return false;
        }
        match &record.kind {
            Some(kind) => !self.skipped_kinds.iter().any(|k| k == kind),
            None => true,
        }
    }
}

impl Log for StderrLog {
    fn log(&self, record: &LogRecord) -> Result<(), Error> {
        if self.accepts(record) {
            eprintln!("{}", format_line(record));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line_without_fields() {
        let rec = LogRecord::new(LogLevel::Info, "nothing to do");
        assert_eq!(format_line(&rec), "[fill-words] info: nothing to do");
    }

    #[test]
    fn test_format_line_with_fields() {
        let rec = LogRecord::new(LogLevel::Debug, "entry enriched")
            .field("word", "sprout")
            .field("page_id", "abc");
        assert_eq!(
            format_line(&rec),
            "[fill-words] debug: entry enriched page_id=abc word=sprout"
        );
    }

    #[test]
    fn test_format_line_truncates_long_fields() {
        let rec = LogRecord::new(LogLevel::Info, "x").field("raw", "a".repeat(1000));
        let line = format_line(&rec);
        assert!(line.contains("... (len="));
    }

    #[test]
    fn test_verbosity_levels() {
        let quiet = StderrLog::for_verbosity(false);
        assert!(quiet.enabled(LogLevel::Error));
        assert!(!quiet.enabled(LogLevel::Info));
        let verbose = StderrLog::for_verbosity(true);
        assert!(verbose.enabled(LogLevel::Debug));
    }

    #[test]
    fn test_skipped_kind_is_not_accepted() {
        let log = StderrLog::for_verbosity(false).skip_kind("error");
        let cli_error = LogRecord::new(LogLevel::Error, "Notion query error")
            .layer("cli")
            .kind("error");
        assert!(!log.accepts(&cli_error));

        let other_error = LogRecord::new(LogLevel::Error, "write failed").kind("http");
        assert!(log.accepts(&other_error));
        assert!(log.accepts(&LogRecord::new(LogLevel::Warn, "no kind")));
    }

    #[test]
    fn test_accepts_still_filters_by_level() {
        let log = StderrLog::for_verbosity(false).skip_kind("error");
        assert!(!log.accepts(&LogRecord::new(LogLevel::Info, "run started").kind("lifecycle")));
    }
}
