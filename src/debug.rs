//! デバッグとログ機能
//!
//! プロジェクト全体のログ初期化とエラー詳細の出力を提供

use std::fs;
use std::path::PathBuf;
use tracing::{Level, debug, info};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;

/// デバッグ設定
#[derive(Debug, Clone)]
pub struct DebugConfig {
    /// ログレベル
    pub log_level: Level,
    /// 指定されていればJSON形式で日次ローテーションのファイルに出力する
    pub log_directory: Option<PathBuf>,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: Level::INFO,
            log_directory: None,
        }
    }
}

impl DebugConfig {
    /// 開発環境用の設定
    pub fn development() -> Self {
        Self {
            log_level: Level::DEBUG,
            log_directory: None,
        }
    }

    pub fn with_log_directory(mut self, directory: Option<PathBuf>) -> Self {
        self.log_directory = directory;
        self
    }

    /// `RUST_LOG` が未設定のときに使うフィルター
    pub fn default_filter(&self) -> String {
        format!("rootnote={},tower_http={}", self.log_level, self.log_level)
    }
}

/// ログシステムを初期化
pub fn init_logging(config: &DebugConfig) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // 環境変数からのフィルター設定
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.default_filter()))?;

    match &config.log_directory {
        Some(directory) => {
            fs::create_dir_all(directory)?;
            let file_appender = RollingFileAppender::new(Rotation::DAILY, directory, "rootnote.log");

            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_writer(file_appender)
                .json()
                .try_init()?;
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .pretty()
                .with_target(true)
                .try_init()?;
        }
    }

    info!("ログシステムが初期化されました");
    debug!("デバッグ設定: {:?}", config);

    Ok(())
}

/// デバッグ用のヘルパー関数
pub mod debug_helpers {
    use tracing::error;

    /// エラーの詳細情報をログに出力
    pub fn log_error_details(error: &dyn std::error::Error, context: &str) {
        error!(
            context = context,
            error = %error,
            "エラーが発生しました"
        );

        // エラーチェーンをログに出力
        let mut source = error.source();
        let mut level = 1;
        while let Some(err) = source {
            error!(
                context = context,
                level = level,
                source_error = %err,
                "エラーの原因"
            );
            source = err.source();
            level += 1;
        }
    }
}
