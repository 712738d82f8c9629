//! fill-words 固有のドメイン型（型と不変条件）

pub mod command;
pub mod enrichment;
pub mod entry;
pub mod settings;
pub mod summary;

pub use command::FillCommand;
pub use enrichment::{Enrichment, PLACEHOLDER};
pub use entry::{Entry, PageId, Word};
pub use settings::RunSettings;
pub use summary::RunSummary;
