//! 植物集約
//!
//! 植物レコードの作成、部分更新、削除に関するモジュール

pub mod entities;
pub mod errors;
pub mod repositories;
pub mod value_objects;

pub use entities::{NewPlant, Plant, PlantField, PlantPatch};
pub use errors::PlantError;
pub use repositories::{DeleteOutcome, PlantRepository, UpdateOutcome};
pub use value_objects::{CommonName, PlantId};
