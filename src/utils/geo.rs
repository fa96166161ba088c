use crate::ride::RidePredictionRequest;

/// Rectangular latitude/longitude box approximating the serviceable
/// metropolitan area. Both ends of each band are inclusive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ServiceArea {
    pub lat_min: f64,
    pub lat_max: f64,
    pub lon_min: f64,
    pub lon_max: f64,
}

/// The New York City box the fare service was trained on.
pub const NYC_SERVICE_AREA: ServiceArea = ServiceArea {
    lat_min: 40.5,
    lat_max: 40.9,
    lon_min: -74.3,
    lon_max: -73.7,
};

impl Default for ServiceArea {
    fn default() -> Self {
        NYC_SERVICE_AREA
    }
}

impl ServiceArea {
    /// Check that a latitude falls inside the serviceable band.
    pub fn contains_latitude(&self, lat: f64) -> bool {
        (self.lat_min..=self.lat_max).contains(&lat)
    }

    /// Check that a longitude falls inside the serviceable band.
    pub fn contains_longitude(&self, lon: f64) -> bool {
        (self.lon_min..=self.lon_max).contains(&lon)
    }
}

/// Point halfway between pickup and dropoff, used to center the route map.
pub fn route_midpoint(request: &RidePredictionRequest) -> (f64, f64) {
    (
        (request.pickup_latitude + request.dropoff_latitude) / 2.0,
        (request.pickup_longitude + request.dropoff_longitude) / 2.0,
    )
}
