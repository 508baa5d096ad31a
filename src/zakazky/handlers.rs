use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Serialize;
use tracing::instrument;

use crate::{
    auth::jwt::AuthUser,
    error::{store_error, ApiError},
    state::AppState,
};

use super::repo::{Zakazka, ZakazkaFields};

/// Response for a successful delete, echoing the removed row.
#[derive(Debug, Serialize)]
pub struct DeletedZakazka {
    pub message: &'static str,
    pub zakazka: Zakazka,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/zakazky", get(list_zakazky).post(create_zakazka))
        .route(
            "/zakazky/:id",
            get(get_zakazka).put(update_zakazka).delete(delete_zakazka),
        )
}

#[instrument(skip(state, _claims, payload))]
pub async fn create_zakazka(
    State(state): State<AppState>,
    AuthUser(_claims): AuthUser,
    Json(payload): Json<ZakazkaFields>,
) -> Result<(StatusCode, Json<Zakazka>), ApiError> {
    let zakazka = Zakazka::create(&state.db, payload)
        .await
        .map_err(store_error("Failed to create zakazka"))?;
    Ok((StatusCode::CREATED, Json(zakazka)))
}

#[instrument(skip(state, _claims))]
pub async fn list_zakazky(
    State(state): State<AppState>,
    AuthUser(_claims): AuthUser,
) -> Result<Json<Vec<Zakazka>>, ApiError> {
    let zakazky = Zakazka::list(&state.db)
        .await
        .map_err(store_error("Failed to fetch zakazky"))?;
    Ok(Json(zakazky))
}

#[instrument(skip(state, _claims))]
pub async fn get_zakazka(
    State(state): State<AppState>,
    AuthUser(_claims): AuthUser,
    Path(id): Path<i32>,
) -> Result<Json<Zakazka>, ApiError> {
    Zakazka::find_by_id(&state.db, id)
        .await
        .map_err(store_error("Failed to fetch zakazka"))?
        .map(Json)
        .ok_or(ApiError::NotFound("Zakazka not found"))
}

#[instrument(skip(state, _claims, payload))]
pub async fn update_zakazka(
    State(state): State<AppState>,
    AuthUser(_claims): AuthUser,
    Path(id): Path<i32>,
    Json(payload): Json<ZakazkaFields>,
) -> Result<Json<Zakazka>, ApiError> {
    Zakazka::update(&state.db, id, payload)
        .await
        .map_err(store_error("Failed to update zakazka"))?
        .map(Json)
        .ok_or(ApiError::NotFound("Zakazka not found"))
}

#[instrument(skip(state, _claims))]
pub async fn delete_zakazka(
    State(state): State<AppState>,
    AuthUser(_claims): AuthUser,
    Path(id): Path<i32>,
) -> Result<Json<DeletedZakazka>, ApiError> {
    let zakazka = Zakazka::delete(&state.db, id)
        .await
        .map_err(store_error("Failed to delete zakazka"))?
        .ok_or(ApiError::NotFound("Zakazka not found"))?;
    Ok(Json(DeletedZakazka {
        message: "Zakazka deleted successfully",
        zakazka,
    }))
}
