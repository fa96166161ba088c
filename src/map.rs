use serde::Serialize;

use crate::ride::RidePredictionRequest;
use crate::utils::geo;

pub const MAP_STYLE: &str = "mapbox://styles/mapbox/light-v9";
pub const POINT_RADIUS_M: f64 = 500.0;
pub const POINT_COLOR: [u8; 3] = [255, 0, 0];
pub const VIEW_ZOOM: u8 = 10;
pub const VIEW_PITCH: u8 = 30;

/// A single plottable stop, in the `{lat, lon}` shape map hosts consume.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MapPoint {
    pub lat: f64,
    pub lon: f64,
}

/// Camera placement for the route view.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ViewState {
    pub latitude: f64,
    pub longitude: f64,
    pub zoom: u8,
    pub pitch: u8,
}

/// Shared styling for both stop markers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MarkerStyle {
    pub radius_m: f64,
    pub color: [u8; 3],
}

/// Everything a map front end needs to draw the requested ride: the pickup
/// and dropoff stops, a camera centered between them, and marker styling.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteMap {
    /// Pickup first, dropoff second.
    pub points: [MapPoint; 2],
    pub view: ViewState,
    pub markers: MarkerStyle,
    pub style: &'static str,
}

impl RouteMap {
    /// Build the map data for a validated ride request.
    pub fn for_ride(request: &RidePredictionRequest) -> Self {
        let (latitude, longitude) = geo::route_midpoint(request);

        Self {
            points: [
                MapPoint {
                    lat: request.pickup_latitude,
                    lon: request.pickup_longitude,
                },
                MapPoint {
                    lat: request.dropoff_latitude,
                    lon: request.dropoff_longitude,
                },
            ],
            view: ViewState {
                latitude,
                longitude,
                zoom: VIEW_ZOOM,
                pitch: VIEW_PITCH,
            },
            markers: MarkerStyle {
                radius_m: POINT_RADIUS_M,
                color: POINT_COLOR,
            },
            style: MAP_STYLE,
        }
    }
}
