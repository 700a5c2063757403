use axum::{
    extract::{Path, Query, State},
    Extension, Json,
};
use serde::{Deserialize, Serialize};

use freshlink_catalog::PageKind;
use freshlink_core::navigation::ProductDetailRoute;
use freshlink_core::{ListingId, PriceBucket, ProductCard, SortKey};

use crate::middleware::RequestId;

use super::{
    map_catalog_error, page_for, parse_param, reveal_page, ApiError, ApiResponse, AppState,
    ListingData, ResponseMeta,
};

#[derive(Debug, Default, Deserialize)]
pub(super) struct ProductsQuery {
    pub q: Option<String>,
    pub category: Option<String>,
    pub sort: Option<String>,
    pub price: Option<String>,
    pub min: Option<String>,
    pub max: Option<String>,
    #[serde(default)]
    pub organic: bool,
    pub page: Option<usize>,
}

pub(super) async fn list_products(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(params): Query<ProductsQuery>,
) -> Result<Json<ApiResponse<ListingData<ProductCard>>>, ApiError> {
    let sort = parse_param::<SortKey>(&req_id.0, "sort", params.sort.as_deref())?;
    let bucket = parse_param::<PriceBucket>(&req_id.0, "price", params.price.as_deref())?;

    let catalogs = state
        .catalogs
        .get()
        .await
        .map_err(|e| map_catalog_error(req_id.0.clone(), &e))?;

    let mut listing = page_for(PageKind::Products, catalogs.products, &state);
    listing.update_query(|query| {
        query.term = params.q.as_deref().unwrap_or_default().trim().to_string();
        if let Some(category) = params.category {
            query.category = category;
        }
        if let Some(sort) = sort {
            query.sort = sort;
        }
        query.price.bucket = bucket.unwrap_or_default();
        query.price.custom_min = params.min.unwrap_or_default();
        query.price.custom_max = params.max.unwrap_or_default();
        query.organic_only = params.organic;
    });
    reveal_page(&mut listing, params.page).await;

    let favorites = state.favorites.lock().await;
    let snapshot = listing.snapshot(|product| {
        ProductCard::new(product, &state.contact, favorites.contains(product.id))
    });
    drop(favorites);

    Ok(Json(ApiResponse {
        data: ListingData::new(&listing, snapshot),
        meta: ResponseMeta::new(req_id.0),
    }))
}

#[derive(Debug, Serialize)]
pub(super) struct ProductDetailData {
    route: ProductDetailRoute,
    url: String,
    whatsapp_url: String,
}

pub(super) async fn product_detail(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(product_id): Path<ListingId>,
) -> Result<Json<ApiResponse<ProductDetailData>>, ApiError> {
    let catalogs = state
        .catalogs
        .get()
        .await
        .map_err(|e| map_catalog_error(req_id.0.clone(), &e))?;

    let product = catalogs.products.get(product_id).ok_or_else(|| {
        ApiError::new(
            req_id.0.clone(),
            "not_found",
            format!("product {product_id} not found"),
        )
    })?;

    let route = ProductDetailRoute::new(product);
    let data = ProductDetailData {
        url: route.to_url(),
        whatsapp_url: state.contact.product_inquiry_link(product),
        route,
    };

    Ok(Json(ApiResponse {
        data,
        meta: ResponseMeta::new(req_id.0),
    }))
}
