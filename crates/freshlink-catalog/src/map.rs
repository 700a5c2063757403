//! Map page view state: center, zoom, the user's position and the selected
//! vendor, plus marker placement for the visible vendors.

use std::future::Future;

use serde::Serialize;
use thiserror::Error;

use freshlink_core::listing::{Coordinates, ListingId, Vendor};

/// Fallback map center (São Paulo) used until a user location is known.
pub const DEFAULT_CENTER: Coordinates = Coordinates::new(-23.5505, -46.6333);
pub const DEFAULT_ZOOM: u8 = 13;

pub const OPEN_MARKER_COLOR: &str = "#10B981";
pub const CLOSED_MARKER_COLOR: &str = "#EF4444";

#[derive(Debug, Error)]
pub enum GeolocationError {
    #[error("geolocation permission denied")]
    PermissionDenied,

    #[error("geolocation unavailable: {0}")]
    Unavailable(String),
}

/// Source of the user's current position.
pub trait Geolocator: Send + Sync {
    fn current_position(
        &self,
    ) -> impl Future<Output = Result<Coordinates, GeolocationError>> + Send;
}

/// Always reports the same position.
#[derive(Debug, Clone, Copy)]
pub struct FixedGeolocator(pub Coordinates);

impl Geolocator for FixedGeolocator {
    async fn current_position(&self) -> Result<Coordinates, GeolocationError> {
        Ok(self.0)
    }
}

/// No position source; every request fails as unavailable.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoGeolocation;

impl Geolocator for NoGeolocation {
    async fn current_position(&self) -> Result<Coordinates, GeolocationError> {
        Err(GeolocationError::Unavailable(
            "no position source configured".to_string(),
        ))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapMarker {
    pub vendor_id: ListingId,
    pub name: String,
    pub position: Coordinates,
    pub color: &'static str,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapView {
    pub center: Coordinates,
    pub zoom: u8,
    pub user_location: Option<Coordinates>,
    pub selected: Option<ListingId>,
}

impl Default for MapView {
    fn default() -> Self {
        Self {
            center: DEFAULT_CENTER,
            zoom: DEFAULT_ZOOM,
            user_location: None,
            selected: None,
        }
    }
}

impl MapView {
    /// Ask `geolocator` for the user's position and center on it. Failures are
    /// logged and leave the default center in place.
    pub async fn locate<G: Geolocator>(geolocator: &G) -> Self {
        let mut view = Self::default();
        match geolocator.current_position().await {
            Ok(position) => {
                view.user_location = Some(position);
                view.center = position;
            }
            Err(e) => {
                tracing::warn!(error = %e, "geolocation failed; using default map center");
            }
        }
        view
    }

    /// One marker per vendor with coordinates, in input order.
    #[must_use]
    pub fn markers(&self, vendors: &[Vendor]) -> Vec<MapMarker> {
        vendors
            .iter()
            .filter_map(|vendor| {
                let position = vendor.coordinates?;
                Some(MapMarker {
                    vendor_id: vendor.id,
                    name: vendor.name.clone(),
                    position,
                    color: marker_color(vendor.is_open),
                    selected: self.selected == Some(vendor.id),
                })
            })
            .collect()
    }

    /// Select `vendor` and pan to it when it has coordinates.
    pub fn select(&mut self, vendor: &Vendor) {
        self.selected = Some(vendor.id);
        if let Some(position) = vendor.coordinates {
            self.center = position;
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// The "center on me" action: the user's position, or the default center.
    pub fn recenter_to_user(&mut self) {
        self.center = self.user_location.unwrap_or(DEFAULT_CENTER);
    }
}

#[must_use]
pub fn marker_color(is_open: bool) -> &'static str {
    if is_open {
        OPEN_MARKER_COLOR
    } else {
        CLOSED_MARKER_COLOR
    }
}
