use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
};
use std::sync::Arc;
use tracing::info;

use super::dto::{CreatePlantRequest, DeletePlantResponse, UpdatePlantRequest, UpdatePlantResponse};
use super::error_response::ErrorResponse;
use crate::domain::plant::{DeleteOutcome, Plant, PlantError, PlantId, PlantRepository, UpdateOutcome};

#[derive(Clone)]
pub struct PlantState {
    pub plants: Arc<dyn PlantRepository>,
}

impl PlantState {
    pub fn new(plants: Arc<dyn PlantRepository>) -> Self {
        Self { plants }
    }
}

fn plant_id(path: Result<Path<String>, PathRejection>) -> Result<PlantId, ErrorResponse> {
    let Path(raw) = path?;
    Ok(PlantId::parse(&raw)?)
}

/// List all plants
pub async fn list_plants(
    State(state): State<Arc<PlantState>>,
) -> Result<Json<Vec<Plant>>, ErrorResponse> {
    Ok(Json(state.plants.list().await?))
}

/// Create a new plant
pub async fn create_plant(
    State(state): State<Arc<PlantState>>,
    request: Result<Json<CreatePlantRequest>, JsonRejection>,
) -> Result<Json<Plant>, ErrorResponse> {
    let Json(request) = request?;
    let new_plant = request.into_new_plant()?;

    info!("Creating plant: {}", new_plant.common_name);
    let plant = state.plants.create(&new_plant).await?;

    Ok(Json(plant))
}

/// Get a specific plant
pub async fn get_plant(
    State(state): State<Arc<PlantState>>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<Plant>, ErrorResponse> {
    let id = plant_id(path)?;
    Ok(Json(state.plants.get(id).await?))
}

/// Partially update a plant
pub async fn update_plant(
    State(state): State<Arc<PlantState>>,
    path: Result<Path<String>, PathRejection>,
    request: Result<Json<UpdatePlantRequest>, JsonRejection>,
) -> Result<Json<UpdatePlantResponse>, ErrorResponse> {
    let id = plant_id(path)?;
    let Json(request) = request?;
    let patch = request.into_patch()?;

    let outcome = state.plants.update(id, &patch).await?;
    let changes = outcome.rows_affected();
    match outcome {
        UpdateOutcome::Updated(plant) => Ok(Json(UpdatePlantResponse { changes, plant })),
        UpdateOutcome::NotFound => Err(PlantError::NotFound { id }.into()),
    }
}

/// Delete a plant
pub async fn delete_plant(
    State(state): State<Arc<PlantState>>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<DeletePlantResponse>, ErrorResponse> {
    let id = plant_id(path)?;

    match state.plants.delete(id).await? {
        outcome @ DeleteOutcome::Deleted => Ok(Json(DeletePlantResponse {
            changes: outcome.rows_affected(),
        })),
        DeleteOutcome::NotFound => Err(PlantError::NotFound { id }.into()),
    }
}
