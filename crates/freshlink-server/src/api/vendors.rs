use axum::{
    extract::{Query, State},
    Extension, Json,
};
use serde::Deserialize;

use freshlink_catalog::{suggest, PageKind, Suggestion};
use freshlink_core::{SortKey, StatusFilter, VendorCard};

use crate::middleware::RequestId;

use super::{
    map_catalog_error, page_for, parse_param, reveal_page, ApiError, ApiResponse, AppState,
    ListingData, ResponseMeta,
};

const DEFAULT_SUGGESTIONS: usize = 5;
const MAX_SUGGESTIONS: usize = 20;

#[derive(Debug, Default, Deserialize)]
pub(super) struct VendorsQuery {
    pub q: Option<String>,
    pub status: Option<String>,
    pub sort: Option<String>,
    pub page: Option<usize>,
}

pub(super) async fn list_vendors(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(params): Query<VendorsQuery>,
) -> Result<Json<ApiResponse<ListingData<VendorCard>>>, ApiError> {
    let sort = parse_param::<SortKey>(&req_id.0, "sort", params.sort.as_deref())?;
    let status = parse_param::<StatusFilter>(&req_id.0, "status", params.status.as_deref())?;

    let catalogs = state
        .catalogs
        .get()
        .await
        .map_err(|e| map_catalog_error(req_id.0.clone(), &e))?;

    let mut listing = page_for(PageKind::Vendors, catalogs.vendors, &state);
    listing.update_query(|query| {
        query.term = params.q.as_deref().unwrap_or_default().trim().to_string();
        query.status = status.unwrap_or_default();
        if let Some(sort) = sort {
            query.sort = sort;
        }
    });
    reveal_page(&mut listing, params.page).await;

    let snapshot = listing.snapshot(|vendor| VendorCard::new(vendor, &state.contact));

    Ok(Json(ApiResponse {
        data: ListingData::new(&listing, snapshot),
        meta: ResponseMeta::new(req_id.0),
    }))
}

#[derive(Debug, Deserialize)]
pub(super) struct SuggestionsQuery {
    pub q: Option<String>,
    pub limit: Option<usize>,
}

pub(super) async fn list_suggestions(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(params): Query<SuggestionsQuery>,
) -> Result<Json<ApiResponse<Vec<Suggestion>>>, ApiError> {
    let catalogs = state
        .catalogs
        .get()
        .await
        .map_err(|e| map_catalog_error(req_id.0.clone(), &e))?;

    let limit = params
        .limit
        .unwrap_or(DEFAULT_SUGGESTIONS)
        .clamp(1, MAX_SUGGESTIONS);
    let data = suggest(
        catalogs.vendors.records(),
        params.q.as_deref().unwrap_or_default(),
        limit,
    );

    Ok(Json(ApiResponse {
        data,
        meta: ResponseMeta::new(req_id.0),
    }))
}
