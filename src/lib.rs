//! tm-viewer-core
//!
//! 翻訳メモリ（translation memory）ビューアのコア: 類似セグメント検索とコンテキスト参照

pub mod config;
pub mod corpus;
pub mod lookup;
pub mod matcher;
pub mod similarity;
pub mod types;
pub mod viewer;

#[cfg(test)]
mod test_utils;

pub use corpus::{
    Corpus,
    LoadError,
};
pub use matcher::{
    MATCH_THRESHOLD,
    MatchResult,
    find_matches,
};
pub use similarity::similarity;
pub use types::{
    TranslationUnit,
    UnitId,
};
pub use viewer::TranslationMemory;
