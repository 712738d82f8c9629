//! テスト共通の Stub（Sleeper / ProgressReporter / EnvResolver / Log）

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;

use common::domain::HomeDir;
use common::error::Error;
use common::ports::outbound::{EnvResolver, Log, LogRecord};

use crate::domain::{RunSummary, Word};
use crate::ports::outbound::{ProgressReporter, Sleeper};

/// 呼ばれた待ち時間を記録するだけの Sleeper
#[derive(Default)]
pub struct RecordingSleeper {
    pub calls: Mutex<Vec<Duration>>,
}

impl Sleeper for RecordingSleeper {
    fn sleep(&self, duration: Duration) {
        self.calls.lock().unwrap().push(duration);
    }
}

/// 進捗を記録する ProgressReporter
#[derive(Default)]
pub struct RecordingProgress {
    pub started: Mutex<Vec<(usize, usize, String)>>,
    pub finished: Mutex<Vec<RunSummary>>,
}

impl ProgressReporter for RecordingProgress {
    fn entry_started(&self, index: usize, total: usize, word: &Word) {
        self.started
            .lock()
            .unwrap()
            .push((index, total, word.to_string()));
    }

    fn finished(&self, summary: &RunSummary) {
        self.finished.lock().unwrap().push(*summary);
    }
}

/// メモリ上のレコードを保持する Log
#[derive(Default)]
pub struct RecordingLog {
    pub records: Mutex<Vec<LogRecord>>,
}

impl RecordingLog {
    pub fn messages(&self) -> Vec<String> {
        self.records
            .lock()
            .unwrap()
            .iter()
            .map(|r| r.message.clone())
            .collect()
    }
}

impl Log for RecordingLog {
    fn log(&self, record: &LogRecord) -> Result<(), Error> {
        self.records.lock().unwrap().push(record.clone());
        Ok(())
    }
}

/// HashMap を環境変数として使う EnvResolver
#[derive(Default)]
pub struct MapEnvResolver {
    vars: HashMap<String, String>,
}

impl MapEnvResolver {
    pub fn with(mut self, name: &str, value: &str) -> Self {
        self.vars.insert(name.to_string(), value.to_string());
        self
    }
}

impl EnvResolver for MapEnvResolver {
    fn var(&self, name: &str) -> Option<String> {
        self.vars.get(name).filter(|v| !v.is_empty()).cloned()
    }

    fn resolve_home_dir(&self) -> Result<HomeDir, Error> {
        self.var("FILL_WORDS_HOME")
            .map(|h| HomeDir::new(PathBuf::from(h)))
            .ok_or_else(|| Error::env("HOME is not set"))
    }
}
