//! tracing subscriber のセットアップ

use std::path::{
    Path,
    PathBuf,
};

use thiserror::Error;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{
    RollingFileAppender,
    Rotation,
};
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

#[derive(Error, Debug)]
pub enum LoggingError {
    /// `logging.level` is not a valid `EnvFilter`
    #[error("Invalid log filter: {0}")]
    Filter(#[from] tracing_subscriber::filter::ParseError),

    /// `logging.file` ends in `..` or `/`
    #[error("Log file path has no file name: {}", .0.display())]
    InvalidFilePath(PathBuf),

    /// The log file or its directory cannot be created
    #[error("Failed to open log file {}: {source}", path.display())]
    File {
        /// Configured log file
        path: PathBuf,
        #[source]
        source: tracing_appender::rolling::InitError,
    },

    /// A global subscriber is already set
    #[error("Failed to install tracing subscriber: {0}")]
    Init(String),
}

/// グローバルな subscriber をインストールする
///
/// `RUST_LOG` が有効ならそれを、無ければ `logging.level` をフィルタに使う。
/// 出力は non-blocking writer 経由で stdout か `logging.file` へ。
/// 返される guard を drop するとバッファがフラッシュされるので、`main` で保持すること。
///
/// # Errors
/// - フィルタが不正
/// - ログファイルを開けない
/// - subscriber が既にインストール済み
pub fn init(config: &LoggingConfig) -> Result<WorkerGuard, LoggingError> {
    let filter = build_filter(std::env::var("RUST_LOG").ok().as_deref(), &config.level)?;

    let (writer, guard) = match &config.file {
        Some(path) => tracing_appender::non_blocking(file_appender(path)?),
        None => tracing_appender::non_blocking(std::io::stdout()),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(config.file.is_none())
        .try_init()
        .map_err(|e| LoggingError::Init(e.to_string()))?;

    Ok(guard)
}

/// `RUST_LOG` の値が空でなくパースできればそれを優先する
fn build_filter(rust_log: Option<&str>, level: &str) -> Result<EnvFilter, LoggingError> {
    if let Some(directives) = rust_log.filter(|d| !d.trim().is_empty())
        && let Ok(filter) = EnvFilter::try_new(directives)
    {
        return Ok(filter);
    }
    Ok(EnvFilter::try_new(level)?)
}

/// ローテーションしない追記型のファイル appender
fn file_appender(path: &Path) -> Result<RollingFileAppender, LoggingError> {
    let (directory, file_name) = split_log_path(path)?;

    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name)
        .build(directory)
        .map_err(|source| LoggingError::File { path: path.to_path_buf(), source })
}

/// ログファイルパスをディレクトリとファイル名に分ける
fn split_log_path(path: &Path) -> Result<(PathBuf, String), LoggingError> {
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| LoggingError::InvalidFilePath(path.to_path_buf()))?;

    let directory = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };

    Ok((directory, file_name.to_string()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use googletest::prelude::*;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::level_only(None, "debug", "debug")]
    #[case::rust_log_wins(Some("warn"), "debug", "warn")]
    #[case::blank_rust_log(Some("  "), "info", "info")]
    #[case::invalid_rust_log(Some("i18n_site=loud"), "info", "info")]
    fn test_build_filter(
        #[case] rust_log: Option<&str>,
        #[case] level: &str,
        #[case] expected: &str,
    ) {
        let filter = build_filter(rust_log, level).unwrap();

        assert_that!(filter.to_string(), eq(expected));
    }

    #[rstest]
    fn test_build_filter_invalid_level() {
        let result = build_filter(None, "info,i18n_site=loud");

        assert!(matches!(result, Err(LoggingError::Filter(_))));
    }

    #[rstest]
    #[case("logs/site.log", "logs", "site.log")]
    #[case("site.log", ".", "site.log")]
    #[case("/var/log/i18n-site/site.log", "/var/log/i18n-site", "site.log")]
    fn test_split_log_path(#[case] path: &str, #[case] directory: &str, #[case] file_name: &str) {
        let (dir, name) = split_log_path(Path::new(path)).unwrap();

        assert_eq!(dir, PathBuf::from(directory));
        assert_that!(name, eq(file_name));
    }

    #[rstest]
    fn test_split_log_path_without_file_name() {
        let result = split_log_path(Path::new("/"));

        assert!(matches!(result, Err(LoggingError::InvalidFilePath(_))));
    }

    #[rstest]
    fn test_file_appender_creates_file() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("site.log");

        let appender = file_appender(&path);

        assert!(appender.is_ok());
        assert!(path.exists());
    }
}
