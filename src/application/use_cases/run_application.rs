use crate::AppConfig;
use crate::domain::plant::{PlantError, PlantRepository};
use crate::infrastructure::persistence::SqlitePlantRepository;
use crate::interfaces::web::server::create_server;
use anyhow::Context;
use std::sync::Arc;
use tracing::{error, info, warn};

/// ストアを開き、APIサーバーを終了まで実行するユースケース
pub struct RunApplicationUseCase {
    config: AppConfig,
}

impl RunApplicationUseCase {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub async fn execute(&self) -> anyhow::Result<()> {
        let store = SqlitePlantRepository::open(&self.config.database_path).with_context(|| {
            format!(
                "Failed to open plant store: {}",
                self.config.database_path.display()
            )
        })?;
        let store = Arc::new(store);
        let plants: Arc<dyn PlantRepository> = store.clone();

        let served = create_server(&self.config.host, self.config.port, plants).await;

        // サーバー停止後はルーターが破棄されているので、ここで唯一の所有者になる
        match Arc::try_unwrap(store) {
            Ok(store) => finish(served, store.close()),
            Err(_) => {
                warn!("Plant store is still shared; closing on drop");
                served
            }
        }
    }
}

/// サーバーの結果を優先し、クローズ失敗はサーバーが正常終了した場合のみ返す
fn finish(served: anyhow::Result<()>, closed: Result<(), PlantError>) -> anyhow::Result<()> {
    match closed {
        Ok(()) => {
            info!("Plant store closed");
            served
        }
        Err(e) if served.is_err() => {
            error!("Failed to close plant store: {}", e);
            served
        }
        Err(e) => Err(e).context("Failed to close plant store"),
    }
}
