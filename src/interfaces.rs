//! インターフェース層
//!
//! 外部（Webクライアント）からの要求を受け付ける層

pub mod web;
