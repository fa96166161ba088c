use std::fmt;

use serde::{Deserialize, Serialize};

/// Wire format of the pickup timestamp query parameter.
pub const PICKUP_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Raw ride parameters exactly as the form host collected them. Date and
/// time arrive as separate strings and are only combined during validation.
#[derive(Debug, Clone, Deserialize)]
pub struct RideDetails {
    pub ride_date: String,
    pub ride_time: String,
    pub pickup_longitude: f64,
    pub pickup_latitude: f64,
    pub dropoff_longitude: f64,
    pub dropoff_latitude: f64,
    pub passenger_count: i32,
}

/// Which stop of the ride a coordinate belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RideEnd {
    Pickup,
    Dropoff,
}

impl fmt::Display for RideEnd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RideEnd::Pickup => write!(f, "Pickup"),
            RideEnd::Dropoff => write!(f, "Dropoff"),
        }
    }
}

/// Normalized payload sent to the prediction service. Only constructed once
/// every check has passed; field order matches the query parameters the
/// service expects.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RidePredictionRequest {
    pub pickup_datetime: String,
    pub pickup_longitude: f64,
    pub pickup_latitude: f64,
    pub dropoff_longitude: f64,
    pub dropoff_latitude: f64,
    pub passenger_count: i32,
}

/// Fare estimate decoded from the service response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FarePrediction {
    pub fare: f64,
}

impl fmt::Display for FarePrediction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Predicted Fare: ${:.2}", self.fare)
    }
}
