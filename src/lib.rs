//! i18n-site
//!
//! 韓国語・英語の 2 言語で提供するマーケティングサイト。
//! ロケール解決（パス → Cookie → デフォルト）とドット区切りキーによる翻訳検索を中核とする。

pub mod catalog;
pub mod config;
pub mod i18n;
pub mod input;
pub mod logging;
pub mod site;
pub mod types;

#[cfg(test)]
mod test_utils;

pub use catalog::Catalog;
pub use types::Locale;
