use axum::{
    extract::{Query, State},
    Extension, Json,
};
use serde::{Deserialize, Serialize};

use freshlink_catalog::{FixedGeolocator, MapMarker, MapView, NoGeolocation, PageKind};
use freshlink_core::navigation::vendor_profile_path;
use freshlink_core::{Coordinates, ListingId, SortKey, VendorCard};

use crate::middleware::RequestId;

use super::{
    map_catalog_error, page_for, parse_param, ApiError, ApiResponse, AppState, ListingData,
    ResponseMeta,
};

#[derive(Debug, Default, Deserialize)]
pub(super) struct MapQuery {
    pub q: Option<String>,
    pub category: Option<String>,
    #[serde(default)]
    pub open: bool,
    pub sort: Option<String>,
    /// The user's position, when the client could determine it.
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub selected: Option<ListingId>,
}

#[derive(Debug, Serialize)]
pub(super) struct MapData {
    view: MapView,
    markers: Vec<MapMarker>,
    profile_path: Option<String>,
    #[serde(flatten)]
    listing: ListingData<VendorCard>,
}

pub(super) async fn vendors_map(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(params): Query<MapQuery>,
) -> Result<Json<ApiResponse<MapData>>, ApiError> {
    let sort = parse_param::<SortKey>(&req_id.0, "sort", params.sort.as_deref())?;

    let catalogs = state
        .catalogs
        .get()
        .await
        .map_err(|e| map_catalog_error(req_id.0.clone(), &e))?;

    let mut listing = page_for(PageKind::VendorsMap, catalogs.map_vendors, &state);
    listing.update_query(|query| {
        query.term = params.q.as_deref().unwrap_or_default().trim().to_string();
        if let Some(category) = params.category {
            query.category = category;
        }
        query.open_only = params.open;
        if let Some(sort) = sort {
            query.sort = sort;
        }
    });

    let mut view = match (params.lat, params.lng) {
        (Some(lat), Some(lng)) => {
            MapView::locate(&FixedGeolocator(Coordinates::new(lat, lng))).await
        }
        _ => MapView::locate(&NoGeolocation).await,
    };

    let mut profile_path = None;
    if let Some(id) = params.selected {
        let vendor = listing.catalog().get(id).ok_or_else(|| {
            ApiError::new(
                req_id.0.clone(),
                "not_found",
                format!("vendor {id} not found"),
            )
        })?;
        view.select(vendor);
        profile_path = Some(vendor_profile_path(id));
    }

    let markers = view.markers(listing.results());
    let snapshot = listing.snapshot(|vendor| VendorCard::new(vendor, &state.contact));

    Ok(Json(ApiResponse {
        data: MapData {
            view,
            markers,
            profile_path,
            listing: ListingData::new(&listing, snapshot),
        },
        meta: ResponseMeta::new(req_id.0),
    }))
}
