use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Extension, Json,
};
use serde::Serialize;

use freshlink_core::ListingId;

use crate::middleware::RequestId;

use super::{map_catalog_error, ApiError, ApiResponse, AppState, ResponseMeta};

#[derive(Debug, Serialize)]
pub(super) struct FavoritesData {
    product_ids: Vec<ListingId>,
}

#[derive(Debug, Serialize)]
pub(super) struct ToggleData {
    product_id: ListingId,
    is_favorite: bool,
    product_ids: Vec<ListingId>,
}

pub(super) async fn list_favorites(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Json<ApiResponse<FavoritesData>> {
    let product_ids = state.favorites.lock().await.ids().to_vec();
    Json(ApiResponse {
        data: FavoritesData { product_ids },
        meta: ResponseMeta::new(req_id.0),
    })
}

pub(super) async fn toggle_favorite(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(product_id): Path<ListingId>,
) -> Result<Json<ApiResponse<ToggleData>>, ApiError> {
    let catalogs = state
        .catalogs
        .get()
        .await
        .map_err(|e| map_catalog_error(req_id.0.clone(), &e))?;
    if catalogs.products.get(product_id).is_none() {
        return Err(ApiError::new(
            req_id.0,
            "not_found",
            format!("product {product_id} not found"),
        ));
    }

    // Persisting may block on file I/O.
    let mut favorites = Arc::clone(&state.favorites).lock_owned().await;
    let (toggled, product_ids) = tokio::task::spawn_blocking(move || {
        let toggled = favorites.toggle(product_id);
        (toggled, favorites.ids().to_vec())
    })
    .await
    .map_err(|e| {
        tracing::error!(error = %e, product_id, "favorites task failed");
        ApiError::new(req_id.0.clone(), "internal_error", "failed to save favorites")
    })?;
    let is_favorite = toggled.map_err(|e| {
        tracing::error!(error = %e, product_id, "failed to persist favorites");
        ApiError::new(req_id.0.clone(), "internal_error", "failed to save favorites")
    })?;

    Ok(Json(ApiResponse {
        data: ToggleData {
            product_id,
            is_favorite,
            product_ids,
        },
        meta: ResponseMeta::new(req_id.0),
    }))
}
