//! Web インターフェース
//!
//! 植物ストアをHTTPのREST APIとして公開します。
//! すべてのエンドポイントは `/api` 以下にマウントされます。

mod dto;
mod error_response;
mod handlers;
mod plant_handlers;

pub mod server;

// 内部使用のため、必要な型のみを再エクスポート
pub use dto::{DeletePlantResponse, HealthResponse, UpdatePlantResponse};
pub use error_response::ErrorResponse;
pub(crate) use handlers::{health, not_found};
pub(crate) use plant_handlers::{
    PlantState, create_plant, delete_plant, get_plant, list_plants, update_plant,
};
