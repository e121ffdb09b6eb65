use crate::domain::plant::{
    CommonName, DeleteOutcome, NewPlant, Plant, PlantError, PlantField, PlantId, PlantPatch,
    PlantRepository, UpdateOutcome,
};
use async_trait::async_trait;
use rusqlite::types::Value;
use rusqlite::{Connection, OptionalExtension, Row, params, params_from_iter};
use std::path::Path;
use tokio::sync::Mutex;
use tracing::{debug, info, instrument};

const CREATE_PLANTS_TABLE: &str = "
    CREATE TABLE IF NOT EXISTS plants (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        commonName TEXT NOT NULL CHECK (length(trim(commonName)) > 0),
        variety TEXT,
        cultivar TEXT,
        notes TEXT,
        lastWateredOn TEXT,
        seededDate TEXT,
        sproutedDate TEXT,
        transplantedDate TEXT,
        firstFlowerDate TEXT,
        firstFruitDate TEXT,
        lastPrunedDate TEXT,
        lastFertilizedDate TEXT,
        lastHarvestedDate TEXT
    );
";

/// SQLiteの単一テーブルに植物を保存するストア
///
/// 接続は1本だけで、各操作はロックを保持したまま1文だけ実行する。
pub struct SqlitePlantRepository {
    conn: Mutex<Connection>,
}

impl SqlitePlantRepository {
    /// ファイルを開き、テーブルがなければ作成する
    pub fn open(path: impl AsRef<Path>) -> Result<Self, PlantError> {
        let path = path.as_ref();
        info!("Opening plant store at {}", path.display());
        let conn = Connection::open(path)?;
        Self::from_connection(conn)
    }

    pub fn open_in_memory() -> Result<Self, PlantError> {
        let conn = Connection::open_in_memory()?;
        Self::from_connection(conn)
    }

    fn from_connection(conn: Connection) -> Result<Self, PlantError> {
        conn.execute_batch(CREATE_PLANTS_TABLE)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// 接続を閉じる
    pub fn close(self) -> Result<(), PlantError> {
        info!("Closing plant store");
        self.conn
            .into_inner()
            .close()
            .map_err(|(_, error)| error.into())
    }

    fn column_list() -> String {
        std::iter::once("id")
            .chain(PlantField::ALL.iter().map(|field| field.column()))
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn plant_from_row(row: &Row) -> rusqlite::Result<Plant> {
        Ok(Plant {
            id: PlantId::new(row.get("id")?),
            common_name: CommonName::from_stored(row.get(PlantField::CommonName.column())?),
            variety: row.get(PlantField::Variety.column())?,
            cultivar: row.get(PlantField::Cultivar.column())?,
            notes: row.get(PlantField::Notes.column())?,
            last_watered_on: row.get(PlantField::LastWateredOn.column())?,
            seeded_date: row.get(PlantField::SeededDate.column())?,
            sprouted_date: row.get(PlantField::SproutedDate.column())?,
            transplanted_date: row.get(PlantField::TransplantedDate.column())?,
            first_flower_date: row.get(PlantField::FirstFlowerDate.column())?,
            first_fruit_date: row.get(PlantField::FirstFruitDate.column())?,
            last_pruned_date: row.get(PlantField::LastPrunedDate.column())?,
            last_fertilized_date: row.get(PlantField::LastFertilizedDate.column())?,
            last_harvested_date: row.get(PlantField::LastHarvestedDate.column())?,
        })
    }
}

#[async_trait]
impl PlantRepository for SqlitePlantRepository {
    #[instrument(skip(self))]
    async fn list(&self) -> Result<Vec<Plant>, PlantError> {
        let conn = self.conn.lock().await;
        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM plants ORDER BY id",
            Self::column_list()
        ))?;
        let plants = stmt
            .query_map([], Self::plant_from_row)?
            .collect::<Result<Vec<_>, _>>()?;

        debug!("Listed {} plants", plants.len());
        Ok(plants)
    }

    #[instrument(skip(self, plant), fields(common_name = %plant.common_name))]
    async fn create(&self, plant: &NewPlant) -> Result<Plant, PlantError> {
        let columns: Vec<&str> = PlantField::ALL.iter().map(|field| field.column()).collect();
        let placeholders: Vec<String> = (1..=columns.len()).map(|i| format!("?{i}")).collect();
        let sql = format!(
            "INSERT INTO plants ({}) VALUES ({}) RETURNING {}",
            columns.join(", "),
            placeholders.join(", "),
            Self::column_list()
        );

        let conn = self.conn.lock().await;
        let created = conn.query_row(&sql, params_from_iter(plant.values()), Self::plant_from_row)?;

        info!("Plant created with ID: {}", created.id);
        Ok(created)
    }

    #[instrument(skip(self))]
    async fn get(&self, id: PlantId) -> Result<Plant, PlantError> {
        let conn = self.conn.lock().await;
        conn.query_row(
            &format!("SELECT {} FROM plants WHERE id = ?1", Self::column_list()),
            params![id.value()],
            Self::plant_from_row,
        )
        .optional()?
        .ok_or(PlantError::NotFound { id })
    }

    #[instrument(skip(self, patch))]
    async fn update(&self, id: PlantId, patch: &PlantPatch) -> Result<UpdateOutcome, PlantError> {
        let assignments = patch.assignments();
        if assignments.is_empty() {
            return Err(PlantError::validation("No fields to update"));
        }

        let set_clause = assignments
            .iter()
            .enumerate()
            .map(|(i, (field, _))| format!("{} = ?{}", field.column(), i + 1))
            .collect::<Vec<_>>()
            .join(", ");
        let mut values: Vec<Value> = assignments
            .iter()
            .map(|(_, value)| value.map_or(Value::Null, |s| Value::Text(s.to_string())))
            .collect();
        values.push(Value::Integer(id.value()));

        let sql = format!(
            "UPDATE plants SET {set_clause} WHERE id = ?{} RETURNING {}",
            values.len(),
            Self::column_list()
        );

        let conn = self.conn.lock().await;
        let updated = conn
            .query_row(&sql, params_from_iter(values.iter()), Self::plant_from_row)
            .optional()?;

        match updated {
            Some(plant) => {
                info!("Plant {} updated ({} fields)", id, assignments.len());
                Ok(UpdateOutcome::Updated(plant))
            }
            None => {
                debug!("Plant {} not found for update", id);
                Ok(UpdateOutcome::NotFound)
            }
        }
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: PlantId) -> Result<DeleteOutcome, PlantError> {
        let conn = self.conn.lock().await;
        let removed = conn.execute("DELETE FROM plants WHERE id = ?1", params![id.value()])?;

        if removed > 0 {
            info!("Plant {} deleted", id);
            Ok(DeleteOutcome::Deleted)
        } else {
            debug!("Plant {} not found for delete", id);
            Ok(DeleteOutcome::NotFound)
        }
    }

    async fn ping(&self) -> Result<(), PlantError> {
        let conn = self.conn.lock().await;
        conn.query_row("SELECT 1", [], |row| row.get::<_, i64>(0))?;
        Ok(())
    }
}
