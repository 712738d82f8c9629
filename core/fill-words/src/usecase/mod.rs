//! ユースケース層

pub mod fill_words;

pub use fill_words::FillWordsUseCase;
