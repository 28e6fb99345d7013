//! Car inventory handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use veloce_core::{Car, CarId, CreateCar, DeleteCarResponse, UpdateCar};

use crate::db::RepositoryError;
use crate::error::{AppError, Result};
use crate::state::AppState;

/// List the inventory, newest first.
pub async fn list(State(state): State<AppState>) -> Json<Vec<Car>> {
    Json(state.cars().list())
}

/// Fetch a single car.
///
/// # Errors
///
/// Returns 404 if no car has this ID.
pub async fn get(State(state): State<AppState>, Path(id): Path<CarId>) -> Result<Json<Car>> {
    state
        .cars()
        .get(&id)
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Car not found".to_owned()))
}

/// Create a car.
///
/// Loose numeric fields in the payload are coerced to zero rather than
/// rejected; an explicit ID that is already taken is a 409.
///
/// # Errors
///
/// Returns 409 on an ID collision or 500 on a persistence failure.
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<CreateCar>,
) -> Result<(StatusCode, Json<Car>)> {
    let car = state.cars().create(payload)?;
    tracing::info!(car_id = %car.id, "Car created");
    Ok((StatusCode::CREATED, Json(car)))
}

/// Merge an update into a car.
///
/// # Errors
///
/// Returns 404 if no car has this ID.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<CarId>,
    Json(payload): Json<UpdateCar>,
) -> Result<Json<Car>> {
    let car = state.cars().update(&id, payload).map_err(not_found)?;
    Ok(Json(car))
}

/// Delete a car.
///
/// # Errors
///
/// Returns 404 if no car has this ID; the collection is untouched.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<CarId>,
) -> Result<Json<DeleteCarResponse>> {
    let car = state.cars().delete(&id).map_err(not_found)?;
    tracing::info!(car_id = %car.id, "Car deleted");
    Ok(Json(DeleteCarResponse {
        success: true,
        message: "Car deleted successfully".to_owned(),
        id: car.id,
    }))
}

fn not_found(err: RepositoryError) -> AppError {
    match err {
        RepositoryError::NotFound => AppError::NotFound("Car not found".to_owned()),
        other => other.into(),
    }
}
