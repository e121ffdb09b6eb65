//! 植物集約のエンティティ
//!
//! 保存済みの植物レコード、作成入力、部分更新入力を定義

use crate::domain::plant::value_objects::{CommonName, PlantId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 植物レコードの更新可能な列
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PlantField {
    CommonName,
    Variety,
    Cultivar,
    Notes,
    LastWateredOn,
    SeededDate,
    SproutedDate,
    TransplantedDate,
    FirstFlowerDate,
    FirstFruitDate,
    LastPrunedDate,
    LastFertilizedDate,
    LastHarvestedDate,
}

impl PlantField {
    /// テーブルの列順
    pub const ALL: [PlantField; 13] = [
        PlantField::CommonName,
        PlantField::Variety,
        PlantField::Cultivar,
        PlantField::Notes,
        PlantField::LastWateredOn,
        PlantField::SeededDate,
        PlantField::SproutedDate,
        PlantField::TransplantedDate,
        PlantField::FirstFlowerDate,
        PlantField::FirstFruitDate,
        PlantField::LastPrunedDate,
        PlantField::LastFertilizedDate,
        PlantField::LastHarvestedDate,
    ];

    /// SQL列名（JSONのフィールド名と同じ）
    pub fn column(self) -> &'static str {
        match self {
            PlantField::CommonName => "commonName",
            PlantField::Variety => "variety",
            PlantField::Cultivar => "cultivar",
            PlantField::Notes => "notes",
            PlantField::LastWateredOn => "lastWateredOn",
            PlantField::SeededDate => "seededDate",
            PlantField::SproutedDate => "sproutedDate",
            PlantField::TransplantedDate => "transplantedDate",
            PlantField::FirstFlowerDate => "firstFlowerDate",
            PlantField::FirstFruitDate => "firstFruitDate",
            PlantField::LastPrunedDate => "lastPrunedDate",
            PlantField::LastFertilizedDate => "lastFertilizedDate",
            PlantField::LastHarvestedDate => "lastHarvestedDate",
        }
    }
}

impl fmt::Display for PlantField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

/// 保存済みの植物レコード
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plant {
    pub id: PlantId,
    pub common_name: CommonName,
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

/// 新規作成する植物（IDなし）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPlant {
    pub common_name: CommonName,
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

impl NewPlant {
    pub fn new(common_name: CommonName) -> Self {
        Self {
            common_name,
            variety: None,
            cultivar: None,
            notes: None,
            last_watered_on: None,
            seeded_date: None,
            sprouted_date: None,
            transplanted_date: None,
            first_flower_date: None,
            first_fruit_date: None,
            last_pruned_date: None,
            last_fertilized_date: None,
            last_harvested_date: None,
        }
    }

    pub fn with_variety(mut self, variety: impl Into<String>) -> Self {
        self.variety = Some(variety.into());
        self
    }

    pub fn with_cultivar(mut self, cultivar: impl Into<String>) -> Self {
        self.cultivar = Some(cultivar.into());
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// `PlantField::ALL` と同じ順で列の値を返す
    pub fn values(&self) -> [Option<&str>; 13] {
        [
            Some(self.common_name.as_str()),
            self.variety.as_deref(),
            self.cultivar.as_deref(),
            self.notes.as_deref(),
            self.last_watered_on.as_deref(),
            self.seeded_date.as_deref(),
            self.sprouted_date.as_deref(),
            self.transplanted_date.as_deref(),
            self.first_flower_date.as_deref(),
            self.first_fruit_date.as_deref(),
            self.last_pruned_date.as_deref(),
            self.last_fertilized_date.as_deref(),
            self.last_harvested_date.as_deref(),
        ]
    }
}

/// 部分更新
///
/// `None` は「変更しない」、`Some(None)` は「NULLにする」。
/// 一般名はNULLにできないため `Option<CommonName>` のみ。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlantPatch {
    pub common_name: Option<CommonName>,
    pub variety: Option<Option<String>>,
    pub cultivar: Option<Option<String>>,
    pub notes: Option<Option<String>>,
    pub last_watered_on: Option<Option<String>>,
    pub seeded_date: Option<Option<String>>,
    pub sprouted_date: Option<Option<String>>,
    pub transplanted_date: Option<Option<String>>,
    pub first_flower_date: Option<Option<String>>,
    pub first_fruit_date: Option<Option<String>>,
    pub last_pruned_date: Option<Option<String>>,
    pub last_fertilized_date: Option<Option<String>>,
    pub last_harvested_date: Option<Option<String>>,
}

impl PlantPatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// 指定された列だけを (列, 新しい値) として列挙
    pub fn assignments(&self) -> Vec<(PlantField, Option<&str>)> {
        let optional = [
            (PlantField::Variety, &self.variety),
            (PlantField::Cultivar, &self.cultivar),
            (PlantField::Notes, &self.notes),
            (PlantField::LastWateredOn, &self.last_watered_on),
            (PlantField::SeededDate, &self.seeded_date),
            (PlantField::SproutedDate, &self.sprouted_date),
            (PlantField::TransplantedDate, &self.transplanted_date),
            (PlantField::FirstFlowerDate, &self.first_flower_date),
            (PlantField::FirstFruitDate, &self.first_fruit_date),
            (PlantField::LastPrunedDate, &self.last_pruned_date),
            (PlantField::LastFertilizedDate, &self.last_fertilized_date),
            (PlantField::LastHarvestedDate, &self.last_harvested_date),
        ];

        let mut assignments = Vec::new();
        if let Some(name) = &self.common_name {
            assignments.push((PlantField::CommonName, Some(name.as_str())));
        }
        for (field, slot) in optional {
            if let Some(value) = slot {
                assignments.push((field, value.as_deref()));
            }
        }
        assignments
    }

    pub fn is_empty(&self) -> bool {
        self.common_name.is_none()
            && [
                &self.variety,
                &self.cultivar,
                &self.notes,
                &self.last_watered_on,
                &self.seeded_date,
                &self.sprouted_date,
                &self.transplanted_date,
                &self.first_flower_date,
                &self.first_fruit_date,
                &self.last_pruned_date,
                &self.last_fertilized_date,
                &self.last_harvested_date,
            ]
            .iter()
            .all(|slot| slot.is_none())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn basil() -> Plant {
        Plant {
            id: PlantId::new(1),
            common_name: CommonName::parse("Basil").unwrap(),
            variety: None,
            cultivar: Some("Genovese".to_string()),
            notes: Some("south window".to_string()),
            last_watered_on: None,
            seeded_date: None,
            sprouted_date: None,
            transplanted_date: None,
            first_flower_date: None,
            first_fruit_date: None,
            last_pruned_date: None,
            last_fertilized_date: None,
            last_harvested_date: None,
        }
    }

    #[test]
    fn test_plant_serializes_camel_case_with_nulls() {
        let json = serde_json::to_value(basil()).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["commonName"], "Basil");
        assert_eq!(json["cultivar"], "Genovese");
        assert!(json["variety"].is_null());
        assert!(json["lastHarvestedDate"].is_null());
        assert_eq!(json.as_object().unwrap().len(), 14);
    }

    #[test]
    fn test_field_columns_match_json_names() {
        let json = serde_json::to_value(basil()).unwrap();
        for field in PlantField::ALL {
            assert!(json.get(field.column()).is_some(), "missing {field}");
        }
    }

    #[test]
    fn test_new_plant_values_follow_column_order() {
        let plant = NewPlant::new(CommonName::parse("Tomato").unwrap())
            .with_variety("Cherry")
            .with_notes("staked");
        let values = plant.values();
        assert_eq!(values[0], Some("Tomato"));
        assert_eq!(values[1], Some("Cherry"));
        assert_eq!(values[2], None);
        assert_eq!(values[3], Some("staked"));
    }

    #[test]
    fn test_empty_patch() {
        let patch = PlantPatch::new();
        assert!(patch.is_empty());
        assert!(patch.assignments().is_empty());
    }

    #[test]
    fn test_patch_assignments_only_list_supplied_fields() {
        let patch = PlantPatch {
            notes: Some(Some("x".to_string())),
            cultivar: Some(None),
            ..Default::default()
        };
        assert!(!patch.is_empty());
        assert_eq!(
            patch.assignments(),
            vec![(PlantField::Cultivar, None), (PlantField::Notes, Some("x"))]
        );
    }
}
