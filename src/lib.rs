//! # Rootnote
//!
//! 個人用の植物記録サービス。植物レコード（一般名、品種、栽培品種、メモ、
//! 世話の日付）をSQLiteの単一テーブルに保存し、薄いREST APIで公開する。
//!
//! このクレートは Domain-Driven Design (DDD) 原則に基づいて、
//! 以下の層に分かれています：
//!
//! - **Domain Layer**: 植物レコードとストアのトレイト
//! - **Application Layer**: 起動から終了までのユースケース
//! - **Infrastructure Layer**: SQLiteによる永続化
//! - **Interface Layer**: HTTP API

pub mod application;
pub mod debug;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

// 公開API
pub use domain::*;

use std::path::PathBuf;

/// アプリケーション全体の設定
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database_path: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3333,
            database_path: PathBuf::from("rootnote.db"),
        }
    }
}
