//! Entry point for the multilingual site server.

use std::process::ExitCode;

use i18n_site::config::ConfigManager;
use i18n_site::{
    logging,
    site,
};

#[tokio::main]
async fn main() -> ExitCode {
    let workspace_root = std::env::current_dir().ok();
    let mut config_manager = ConfigManager::new();
    let config_result = config_manager.load_settings(workspace_root);

    // 設定の読み込みに失敗してもデフォルトのログ設定で起動してエラーを出力する
    let _guard = match logging::init(&config_manager.get_settings().logging) {
        Ok(guard) => guard,
        Err(error) => {
            report_without_logging(&error);
            return ExitCode::FAILURE;
        }
    };

    if let Err(error) = config_result {
        tracing::error!("{error}");
        return ExitCode::FAILURE;
    }

    match site::run(&config_manager).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::error!(%error, "Site stopped");
            ExitCode::FAILURE
        }
    }
}

/// subscriber が無いときのエラー出力
#[allow(clippy::print_stderr)]
fn report_without_logging(error: &logging::LoggingError) {
    eprintln!("Failed to initialize logging: {error}");
}
