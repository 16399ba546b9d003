//! 設定管理を行うモジュール

use std::path::PathBuf;

use super::{
    ConfigError,
    Environment,
    SiteSettings,
    loader,
};

/// Environment variable that overrides `environment` from the config file.
pub const ENVIRONMENT_VAR: &str = "SITE_ENV";

/// 設定管理を行う
#[derive(Default, Debug, Clone)]
pub struct ConfigManager {
    /// 現在の設定
    current_settings: SiteSettings,

    /// ワークスペースのルートパス
    workspace_root: Option<PathBuf>,
}

impl ConfigManager {
    /// 新しい設定マネージャーを作成
    #[must_use]
    pub fn new() -> Self {
        Self { current_settings: SiteSettings::default(), workspace_root: None }
    }

    /// 設定を読み込む
    ///
    /// ワークスペースの `.i18n-site.json` を読み込み、`SITE_ENV` 環境変数を適用してから
    /// バリデーションする。
    ///
    /// # Errors
    /// - ファイル読み込みエラー
    /// - JSON パースエラー
    /// - バリデーションエラー
    pub fn load_settings(&mut self, workspace_root: Option<PathBuf>) -> Result<(), ConfigError> {
        let environment = std::env::var(ENVIRONMENT_VAR).ok();
        self.load_settings_with_environment(workspace_root, environment.as_deref())
    }

    /// `load_settings` の本体。環境変数の値を引数で受け取る。
    ///
    /// # Errors
    /// `load_settings` と同じ
    pub fn load_settings_with_environment(
        &mut self,
        workspace_root: Option<PathBuf>,
        environment: Option<&str>,
    ) -> Result<(), ConfigError> {
        tracing::debug!("Loading settings for workspace: {:?}", workspace_root);

        let mut settings = if let Some(root) = &workspace_root {
            loader::load_from_workspace(root)?.map_or_else(SiteSettings::default, |ws| {
                tracing::debug!("Loaded workspace settings: {:?}", ws);
                ws
            })
        } else {
            SiteSettings::default()
        };

        if let Some(value) = environment.filter(|value| !value.is_empty()) {
            settings.environment = value
                .parse::<Environment>()
                .map_err(|error| ConfigError::ValidationErrors(vec![error]))?;
            tracing::debug!(environment = ?settings.environment, "Environment overridden by {ENVIRONMENT_VAR}");
        }

        // バリデーション
        settings.validate().map_err(ConfigError::ValidationErrors)?;

        self.current_settings = settings;
        self.workspace_root = workspace_root;
        tracing::debug!("Settings loaded successfully: {:?}", self.current_settings);

        Ok(())
    }

    /// 現在の設定を取得
    #[must_use]
    pub const fn get_settings(&self) -> &SiteSettings {
        &self.current_settings
    }

    /// 翻訳ファイルのディレクトリ（相対パスはワークスペースルート基準）
    #[must_use]
    pub fn translations_dir(&self) -> PathBuf {
        let directory = &self.current_settings.translation_files.directory;
        match &self.workspace_root {
            Some(root) if directory.is_relative() => root.join(directory),
            _ => directory.clone(),
        }
    }
}
