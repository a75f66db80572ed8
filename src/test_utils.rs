//! テスト用ユーティリティ関数
//!
//! 複数のテストモジュールで使用される共通のヘルパー関数を提供します。
#![cfg(test)]

use crate::corpus::Corpus;
use crate::types::TranslationUnit;

/// テスト用の `TranslationUnit` を作成する
///
/// # Arguments
/// * `origin_language` - 原文の言語コード（例: "en", "de"）
/// * `origin_segment` - 原文（`None` はマッチ対象外）
/// * `translation_language` - 訳文の言語コード
///
/// 訳文は `"<translation_language>: <origin_segment>"` 形式で生成される
pub(crate) fn create_unit(
    origin_language: &str,
    origin_segment: Option<&str>,
    translation_language: &str,
) -> TranslationUnit {
    let translation = origin_segment.map(|segment| format!("{translation_language}: {segment}"));
    TranslationUnit::new(
        origin_language,
        origin_segment.map(str::to_string),
        translation_language,
        translation,
    )
}

/// `(origin_language, origin_segment, translation_language)` の列から `Corpus` を作成する
pub(crate) fn create_corpus(rows: &[(&str, Option<&str>, &str)]) -> Corpus {
    rows.iter()
        .map(|(origin_language, origin_segment, translation_language)| {
            create_unit(origin_language, *origin_segment, translation_language)
        })
        .collect()
}
