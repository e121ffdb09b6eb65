//! インフラストラクチャ層
//!
//! ドメイン層のトレイトを外部システム（SQLite）に接続する層

pub mod persistence;
