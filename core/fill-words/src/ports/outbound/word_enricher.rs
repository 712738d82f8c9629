//! 単語エンリッチ Outbound ポート

use crate::domain::{Enrichment, Word};
use common::error::Error;

/// 単語から定義・類義語・反義語を得る
pub trait WordEnricher: Send + Sync {
    fn enrich(&self, word: &Word) -> Result<Enrichment, Error>;
}
