mod favorites;
mod map;
mod products;
mod vendors;

use std::str::FromStr;

use axum::{
    extract::State,
    http::{header, HeaderName, Method, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Extension, Json, Router,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;

use freshlink_catalog::page_kind::CategoryOption;
use freshlink_catalog::{CatalogError, ListingPage, PageKind, PageSnapshot};
use freshlink_core::listing::Listing;
use freshlink_core::SortKey;

use crate::middleware::{request_id, RequestId};
pub use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub data: T,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ResponseMeta {
    pub request_id: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: ErrorBody,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct HealthData {
    status: &'static str,
    catalog: &'static str,
}

impl ResponseMeta {
    pub(super) fn new(request_id: String) -> Self {
        Self {
            request_id,
            timestamp: Utc::now(),
        }
    }
}

impl ApiError {
    pub fn new(
        request_id: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            error: ErrorBody {
                code: code.into(),
                message: message.into(),
            },
            meta: ResponseMeta::new(request_id.into()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match self.error.code.as_str() {
            "not_found" => StatusCode::NOT_FOUND,
            "bad_request" | "validation_error" => StatusCode::BAD_REQUEST,
            "catalog_unavailable" => StatusCode::SERVICE_UNAVAILABLE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(self)).into_response()
    }
}

/// A sort option with its display label.
#[derive(Debug, Serialize)]
pub(super) struct SortOption {
    value: SortKey,
    label: &'static str,
}

/// One page of cards plus the controls the page offers.
#[derive(Debug, Serialize)]
pub(super) struct ListingData<T: Serialize> {
    #[serde(flatten)]
    page: PageSnapshot<T>,
    sort: SortKey,
    sort_options: Vec<SortOption>,
    categories: &'static [CategoryOption],
}

impl<T: Serialize> ListingData<T> {
    pub(super) fn new<L: Listing>(listing: &ListingPage<L>, page: PageSnapshot<T>) -> Self {
        let kind = listing.kind();
        Self {
            page,
            sort: listing.query().sort,
            sort_options: kind
                .sort_options()
                .iter()
                .map(|key| SortOption {
                    value: *key,
                    label: key.label(),
                })
                .collect(),
            categories: kind.categories(),
        }
    }
}

pub(super) fn map_catalog_error(request_id: String, error: &CatalogError) -> ApiError {
    tracing::error!(error = %error, "catalog load failed");
    ApiError::new(
        request_id,
        "catalog_unavailable",
        "catalog could not be loaded; try again",
    )
}

/// Parse an optional query parameter, rejecting unknown values with a 400.
pub(super) fn parse_param<T>(
    request_id: &str,
    name: &str,
    raw: Option<&str>,
) -> Result<Option<T>, ApiError>
where
    T: FromStr<Err = String>,
{
    raw.filter(|value| !value.trim().is_empty())
        .map(|value| {
            value.parse::<T>().map_err(|reason| {
                ApiError::new(request_id, "validation_error", format!("{name}: {reason}"))
            })
        })
        .transpose()
}

/// Reveal pages up to `page`. Reaching past page 1 counts as one "load more".
pub(super) async fn reveal_page<L: Listing>(listing: &mut ListingPage<L>, page: Option<usize>) {
    let page = page.unwrap_or(1).max(1);
    if page > 1 {
        listing.advance_to(page - 1);
        listing.load_more().await;
    }
}

pub(super) fn page_for<L: Listing>(
    kind: PageKind,
    catalog: freshlink_catalog::Catalog<L>,
    state: &AppState,
) -> ListingPage<L> {
    ListingPage::new(kind, catalog).with_load_more_latency(state.load_more_latency)
}

fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE, HeaderName::from_static("x-request-id")])
}

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/api/v1/health", get(health))
        .route("/api/v1/products", get(products::list_products))
        .route(
            "/api/v1/products/{product_id}/detail",
            get(products::product_detail),
        )
        .route("/api/v1/vendors", get(vendors::list_vendors))
        .route(
            "/api/v1/vendors/suggestions",
            get(vendors::list_suggestions),
        )
        .route("/api/v1/vendors/map", get(map::vendors_map))
        .route("/api/v1/favorites", get(favorites::list_favorites))
        .route(
            "/api/v1/favorites/{product_id}/toggle",
            post(favorites::toggle_favorite),
        )
        .layer(
            ServiceBuilder::new()
                .layer(build_cors())
                .layer(axum::middleware::from_fn(request_id)),
        )
        .with_state(state)
}

async fn health(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> impl IntoResponse {
    let meta = ResponseMeta::new(req_id.0);

    match state.catalogs.get().await {
        Ok(_) => (
            StatusCode::OK,
            Json(ApiResponse {
                data: HealthData {
                    status: "ok",
                    catalog: "ok",
                },
                meta,
            }),
        ),
        Err(e) => {
            tracing::warn!(error = %e, "health check: catalog unavailable");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ApiResponse {
                    data: HealthData {
                        status: "degraded",
                        catalog: "unavailable",
                    },
                    meta,
                }),
            )
        }
    }
}

#[cfg(test)]
#[path = "api_test.rs"]
mod tests;
