//! テスト用ユーティリティ関数
//!
//! 複数のテストモジュールで使用される共通のヘルパー関数を提供します。
#![cfg(test)]
#![allow(clippy::unwrap_used)]

use serde_json::Value;

use crate::catalog::Catalog;
use crate::input::translation::TranslationTree;
use crate::types::Locale;

/// テスト用の `TranslationTree` を JSON から作成する
pub(crate) fn tree_from_json(json: &Value) -> TranslationTree {
    TranslationTree::from_json(json).unwrap()
}

/// 同梱の翻訳ファイル相当の小さなカタログ
pub(crate) fn sample_catalog() -> Catalog {
    Catalog::new()
        .with_tree(
            Locale::Ko,
            tree_from_json(&serde_json::json!({
                "site": { "name": "다국어 사이트", "tagline": "작은 웹사이트" },
                "nav": { "home": "홈", "about": "소개", "contact": "연락처" },
                "languageSwitcher": { "label": "언어" },
                "welcome": "환영합니다",
                "contact": { "form": { "success": "메시지가 전송되었습니다" } },
                "notFound": { "title": "페이지를 찾을 수 없습니다" }
            })),
        )
        .with_tree(
            Locale::En,
            tree_from_json(&serde_json::json!({
                "site": { "name": "Multilingual Site", "tagline": "Two languages & one \"site\"" },
                "nav": { "home": "Home", "about": "About", "contact": "Contact" },
                "languageSwitcher": { "label": "Language" },
                "welcome": "Welcome <friends>",
                "contact": { "form": { "success": "Your message has been sent" } },
                "notFound": { "title": "Page not found" }
            })),
        )
}
