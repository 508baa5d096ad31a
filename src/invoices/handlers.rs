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

use super::repo::{Invoice, InvoiceFields};

/// Response for a successful delete, echoing the removed row.
#[derive(Debug, Serialize)]
pub struct DeletedInvoice {
    pub message: &'static str,
    pub invoice: Invoice,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/invoices", get(list_invoices).post(create_invoice))
        .route(
            "/invoices/:id",
            get(get_invoice).put(update_invoice).delete(delete_invoice),
        )
}

#[instrument(skip(state, _claims, payload))]
pub async fn create_invoice(
    State(state): State<AppState>,
    AuthUser(_claims): AuthUser,
    Json(payload): Json<InvoiceFields>,
) -> Result<(StatusCode, Json<Invoice>), ApiError> {
    let invoice = Invoice::create(&state.db, payload)
        .await
        .map_err(store_error("Failed to create invoice"))?;
    Ok((StatusCode::CREATED, Json(invoice)))
}

#[instrument(skip(state, _claims))]
pub async fn list_invoices(
    State(state): State<AppState>,
    AuthUser(_claims): AuthUser,
) -> Result<Json<Vec<Invoice>>, ApiError> {
    let invoices = Invoice::list(&state.db)
        .await
        .map_err(store_error("Failed to fetch invoices"))?;
    Ok(Json(invoices))
}

#[instrument(skip(state, _claims))]
pub async fn get_invoice(
    State(state): State<AppState>,
    AuthUser(_claims): AuthUser,
    Path(id): Path<i32>,
) -> Result<Json<Invoice>, ApiError> {
    Invoice::find_by_id(&state.db, id)
        .await
        .map_err(store_error("Failed to fetch invoice"))?
        .map(Json)
        .ok_or(ApiError::NotFound("Invoice not found"))
}

#[instrument(skip(state, _claims, payload))]
pub async fn update_invoice(
    State(state): State<AppState>,
    AuthUser(_claims): AuthUser,
    Path(id): Path<i32>,
    Json(payload): Json<InvoiceFields>,
) -> Result<Json<Invoice>, ApiError> {
    Invoice::update(&state.db, id, payload)
        .await
        .map_err(store_error("Failed to update invoice"))?
        .map(Json)
        .ok_or(ApiError::NotFound("Invoice not found"))
}

#[instrument(skip(state, _claims))]
pub async fn delete_invoice(
    State(state): State<AppState>,
    AuthUser(_claims): AuthUser,
    Path(id): Path<i32>,
) -> Result<Json<DeletedInvoice>, ApiError> {
    let invoice = Invoice::delete(&state.db, id)
        .await
        .map_err(store_error("Failed to delete invoice"))?
        .ok_or(ApiError::NotFound("Invoice not found"))?;
    Ok(Json(DeletedInvoice {
        message: "Invoice deleted successfully",
        invoice,
    }))
}
