//! Read-only catalog handlers.

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};

use compas_olfactif_core::AdminProduct;

use crate::error::AppError;
use crate::state::AppState;

/// Build the catalog router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/products", get(list_products))
        .route("/api/products/{slug}", get(get_product))
}

/// All catalog products, in content order.
pub async fn list_products(State(state): State<AppState>) -> Json<Vec<AdminProduct>> {
    Json(state.catalog().all().to_vec())
}

/// One product by slug.
///
/// # Errors
///
/// 404 for an unknown slug.
pub async fn get_product(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<AdminProduct>, AppError> {
    state
        .catalog()
        .get(&slug)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(slug))
}
