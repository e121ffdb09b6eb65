//! 永続化インフラストラクチャの実装
//!
//! ドメイン層で定義された `PlantRepository` のSQLite実装を提供します。

mod sqlite_plant_repository;

pub use sqlite_plant_repository::SqlitePlantRepository;
