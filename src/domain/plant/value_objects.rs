//! 植物集約の値オブジェクト

use crate::domain::plant::errors::PlantError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 植物ID
///
/// 作成時にストアが採番する。変更不可、再利用されない。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlantId(i64);

impl PlantId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(self) -> i64 {
        self.0
    }

    /// 文字列から作成
    pub fn parse(s: &str) -> Result<Self, PlantError> {
        s.trim()
            .parse::<i64>()
            .map(Self)
            .map_err(|e| PlantError::validation(format!("Invalid plant id '{s}': {e}")))
    }
}

impl FromStr for PlantId {
    type Err = PlantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for PlantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 植物の一般名
///
/// 空文字列や空白のみの名前は保存できない。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CommonName(String);

impl CommonName {
    pub fn parse(value: impl Into<String>) -> Result<Self, PlantError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(PlantError::validation("commonName must not be empty"));
        }
        Ok(Self(value))
    }

    /// 保存済みの行から復元する。
    ///
    /// CHECK制約のない既存テーブルには空白のみの名前が残っていることがあるため、
    /// 読み込み時は検証しない。
    pub(crate) fn from_stored(value: String) -> Self {
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for CommonName {
    type Error = PlantError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<CommonName> for String {
    fn from(name: CommonName) -> Self {
        name.0
    }
}

impl fmt::Display for CommonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plant_id() {
        let id = PlantId::parse("12").unwrap();
        assert_eq!(id.value(), 12);
        assert_eq!(id.to_string(), "12");
        assert_eq!("12".parse::<PlantId>().unwrap(), id);

        assert!(PlantId::parse("basil").is_err());
        assert!(PlantId::parse("").is_err());
    }

    #[test]
    fn test_common_name_rejects_blank() {
        assert!(CommonName::parse("").is_err());
        assert!(CommonName::parse("   ").is_err());

        let name = CommonName::parse("Basil").unwrap();
        assert_eq!(name.as_str(), "Basil");
    }

    #[test]
    fn test_common_name_serde() {
        let name: CommonName = serde_json::from_str("\"Tomato\"").unwrap();
        assert_eq!(name.to_string(), "Tomato");
        assert_eq!(serde_json::to_string(&name).unwrap(), "\"Tomato\"");

        assert!(serde_json::from_str::<CommonName>("\"\"").is_err());
    }
}
