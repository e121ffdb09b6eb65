//! ドメイン層
//!
//! 植物レコードのモデル、値オブジェクト、永続化トレイトを含む層

pub mod plant;
