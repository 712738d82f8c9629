//! 進捗とサマリを stdout に出す ProgressReporter

use crate::domain::{RunSummary, Word};
use crate::ports::outbound::ProgressReporter;

/// サマリ行の文言
pub fn summary_line(summary: &RunSummary) -> String {
    match summary {
        RunSummary::NothingToDo => ">>> No entries with a blank Definition. Nothing to do.".to_string(),
        RunSummary::Processed(n) => format!(">>> Wrote back {} entries.", n),
    }
}

#[derive(Debug, Clone, Default)]
pub struct StdoutProgress;

impl ProgressReporter for StdoutProgress {
    fn entry_started(&self, index: usize, total: usize, word: &Word) {
        println!("[*] ({}/{}) processing: {}", index, total, word);
    }

    fn finished(&self, summary: &RunSummary) {
        println!("{}", summary_line(summary));
    }
}
