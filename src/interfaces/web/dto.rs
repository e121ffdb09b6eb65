//! リクエスト／レスポンスのスキーマ
//!
//! JSONボディはここで型付きの構造体として検証されてからストアに渡る。
//! 未知のキー（クライアントが送り返す `id` など）は無視する。

use crate::domain::plant::{CommonName, NewPlant, Plant, PlantError, PlantPatch};
use serde::{Deserialize, Deserializer, Serialize};

/// キーが存在すれば `Some`（値が `null` なら `Some(None)`）
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePlantRequest {
    pub common_name: Option<String>,
    pub variety: Option<String>,
    pub cultivar: Option<String>,
    pub notes: Option<String>,
    pub last_watered_on: Option<String>,
    pub seeded_date: Option<String>,
    pub sprouted_date: Option<String>,
    pub transplanted_date: Option<String>,
    pub first_flower_date: Option<String>,
    pub first_fruit_date: Option<String>,
    pub last_pruned_date: Option<String>,
    pub last_fertilized_date: Option<String>,
    pub last_harvested_date: Option<String>,
}

impl CreatePlantRequest {
    pub fn into_new_plant(self) -> Result<NewPlant, PlantError> {
        let common_name = self
            .common_name
            .ok_or_else(|| PlantError::validation("commonName is required"))?;

        Ok(NewPlant {
            common_name: CommonName::parse(common_name)?,
            variety: self.variety,
            cultivar: self.cultivar,
            notes: self.notes,
            last_watered_on: self.last_watered_on,
            seeded_date: self.seeded_date,
            sprouted_date: self.sprouted_date,
            transplanted_date: self.transplanted_date,
            first_flower_date: self.first_flower_date,
            first_fruit_date: self.first_fruit_date,
            last_pruned_date: self.last_pruned_date,
            last_fertilized_date: self.last_fertilized_date,
            last_harvested_date: self.last_harvested_date,
        })
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePlantRequest {
    #[serde(default, deserialize_with = "present")]
    pub common_name: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub variety: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub cultivar: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub notes: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub last_watered_on: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub seeded_date: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub sprouted_date: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub transplanted_date: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub first_flower_date: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub first_fruit_date: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub last_pruned_date: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub last_fertilized_date: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub last_harvested_date: Option<Option<String>>,
}

impl UpdatePlantRequest {
    pub fn into_patch(self) -> Result<PlantPatch, PlantError> {
        let common_name = match self.common_name {
            None => None,
            Some(None) => return Err(PlantError::validation("commonName cannot be null")),
            Some(Some(name)) => Some(CommonName::parse(name)?),
        };

        Ok(PlantPatch {
            common_name,
            variety: self.variety,
            cultivar: self.cultivar,
            notes: self.notes,
            last_watered_on: self.last_watered_on,
            seeded_date: self.seeded_date,
            sprouted_date: self.sprouted_date,
            transplanted_date: self.transplanted_date,
            first_flower_date: self.first_flower_date,
            first_fruit_date: self.first_fruit_date,
            last_pruned_date: self.last_pruned_date,
            last_fertilized_date: self.last_fertilized_date,
            last_harvested_date: self.last_harvested_date,
        })
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UpdatePlantResponse {
    pub changes: usize,
    pub plant: Plant,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DeletePlantResponse {
    pub changes: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}
