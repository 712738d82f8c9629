//! 空エントリ補完ユースケース
//!
//! 取得 → 1 件ずつ エンリッチ → 書き戻し → 待機。1 件でも失敗したら残りは処理せずにエラーを返す。

use crate::domain::{RunSettings, RunSummary};
use crate::ports::outbound::{EntryStore, ProgressReporter, Sleeper, WordEnricher};
use common::error::Error;
use common::ports::outbound::{Log, LogLevel, LogRecord};
use std::sync::Arc;

pub struct FillWordsUseCase {
    store: Arc<dyn EntryStore>,
    enricher: Arc<dyn WordEnricher>,
    sleeper: Arc<dyn Sleeper>,
    progress: Arc<dyn ProgressReporter>,
    logger: Arc<dyn Log>,
}

impl FillWordsUseCase {
    pub fn new(
        store: Arc<dyn EntryStore>,
        enricher: Arc<dyn WordEnricher>,
        sleeper: Arc<dyn Sleeper>,
        progress: Arc<dyn ProgressReporter>,
        logger: Arc<dyn Log>,
    ) -> Self {
        Self {
            store,
            enricher,
            sleeper,
            progress,
            logger,
        }
    }

    fn log(&self, record: LogRecord) {
        let _ = self.logger.log(&record.layer("usecase"));
    }

    pub fn run(&self, settings: &RunSettings) -> Result<RunSummary, Error> {
        self.log(
            LogRecord::new(LogLevel::Info, "run started")
                .kind("lifecycle")
                .field("limit", settings.limit)
                .field("delay_ms", settings.delay.as_millis() as u64),
        );

        let entries = self.store.fetch_blank(settings.limit)?;
        self.log(
            LogRecord::new(LogLevel::Info, "fetched entries")
                .kind("store")
                .field("count", entries.len()),
        );

        if entries.is_empty() {
            self.log(LogRecord::new(LogLevel::Info, "nothing to do").kind("lifecycle"));
            let summary = RunSummary::NothingToDo;
            self.progress.finished(&summary);
            return Ok(summary);
        }

        let total = entries.len();
        for (i, entry) in entries.iter().enumerate() {
            self.progress.entry_started(i + 1, total, &entry.word);

            let enrichment = self.enricher.enrich(&entry.word)?;
            self.log(
                LogRecord::new(LogLevel::Debug, "entry enriched")
                    .kind("entry")
                    .field("page_id", entry.id.as_ref())
                    .field("word", entry.word.as_ref())
                    .field("definition", enrichment.definition.as_str()),
            );

            self.store.write_back(&entry.id, &enrichment)?;
            self.log(
                LogRecord::new(LogLevel::Info, "entry written")
                    .kind("entry")
                    .field("page_id", entry.id.as_ref())
                    .field("word", entry.word.as_ref()),
            );

            self.sleeper.sleep(settings.delay);
        }

        let summary = RunSummary::Processed(total);
        self.log(
            LogRecord::new(LogLevel::Info, "run finished")
                .kind("lifecycle")
                .field("processed", total),
        );
        self.progress.finished(&summary);
        Ok(summary)
    }
}
