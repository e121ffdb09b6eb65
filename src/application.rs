//! アプリケーション層
//!
//! ストアとWebインターフェースを組み立てるユースケース

pub mod use_cases;
