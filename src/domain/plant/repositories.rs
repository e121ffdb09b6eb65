//! 植物集約のリポジトリトレイト
//!
//! 植物レコードの永続化に関するトレイトと操作結果を定義

use crate::domain::plant::entities::{NewPlant, Plant, PlantPatch};
use crate::domain::plant::errors::PlantError;
use crate::domain::plant::value_objects::PlantId;
use async_trait::async_trait;

/// 部分更新の結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// 更新後のレコード
    Updated(Plant),
    NotFound,
}

impl UpdateOutcome {
    pub fn rows_affected(&self) -> usize {
        match self {
            Self::Updated(_) => 1,
            Self::NotFound => 0,
        }
    }
}

/// 削除の結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    NotFound,
}

impl DeleteOutcome {
    pub fn rows_affected(self) -> usize {
        match self {
            Self::Deleted => 1,
            Self::NotFound => 0,
        }
    }
}

/// 植物ストア
#[async_trait]
pub trait PlantRepository: Send + Sync {
    /// すべての植物を保存順に取得
    async fn list(&self) -> Result<Vec<Plant>, PlantError>;

    /// 植物を作成し、採番済みのレコードを返す
    async fn create(&self, plant: &NewPlant) -> Result<Plant, PlantError>;

    /// IDで取得（存在しなければ `PlantError::NotFound`）
    async fn get(&self, id: PlantId) -> Result<Plant, PlantError>;

    /// 指定された列だけを更新する。空のパッチは `PlantError::Validation`。
    async fn update(&self, id: PlantId, patch: &PlantPatch) -> Result<UpdateOutcome, PlantError>;

    /// 削除。存在しないIDはエラーではなく `DeleteOutcome::NotFound`。
    async fn delete(&self, id: PlantId) -> Result<DeleteOutcome, PlantError>;

    /// ヘルスチェック
    async fn ping(&self) -> Result<(), PlantError>;
}
