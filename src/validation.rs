use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::ValidationError;
use crate::ride::{PICKUP_DATETIME_FORMAT, RideDetails, RideEnd, RidePredictionRequest};
use crate::utils::geo::ServiceArea;

/// Bounds a submission must satisfy before it is sent to the fare service.
/// The passenger cap varies by deployment; the lower bound is always one
/// rider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RideLimits {
    pub area: ServiceArea,
    pub max_passengers: i32,
}

impl Default for RideLimits {
    fn default() -> Self {
        Self {
            area: ServiceArea::default(),
            max_passengers: 8,
        }
    }
}

/// Validate raw ride details against `limits`, using `now` for the
/// past-pickup check.
///
/// Every check runs independently so the rider sees all problems at once;
/// the normalized request is only built when the error list stays empty.
/// The past-pickup check is skipped when the date and time do not combine
/// into a real timestamp.
pub fn validate(
    details: &RideDetails,
    limits: &RideLimits,
    now: NaiveDateTime,
) -> Result<RidePredictionRequest, Vec<ValidationError>> {
    let area = limits.area;
    let mut errors = Vec::new();

    if !area.contains_latitude(details.pickup_latitude) {
        errors.push(ValidationError::LatitudeOutOfBounds {
            end: RideEnd::Pickup,
            min: area.lat_min,
            max: area.lat_max,
        });
    }
    if !area.contains_latitude(details.dropoff_latitude) {
        errors.push(ValidationError::LatitudeOutOfBounds {
            end: RideEnd::Dropoff,
            min: area.lat_min,
            max: area.lat_max,
        });
    }
    if !area.contains_longitude(details.pickup_longitude) {
        errors.push(ValidationError::LongitudeOutOfBounds {
            end: RideEnd::Pickup,
            min: area.lon_min,
            max: area.lon_max,
        });
    }
    if !area.contains_longitude(details.dropoff_longitude) {
        errors.push(ValidationError::LongitudeOutOfBounds {
            end: RideEnd::Dropoff,
            min: area.lon_min,
            max: area.lon_max,
        });
    }

    if details.passenger_count <= 0 || details.passenger_count > limits.max_passengers {
        errors.push(ValidationError::PassengerCountOutOfBounds {
            max: limits.max_passengers,
        });
    }

    let pickup_at = match combine_date_time(&details.ride_date, &details.ride_time) {
        Some(at) => {
            if at < now {
                errors.push(ValidationError::PickupInPast);
            }
            Some(at)
        }
        None => {
            errors.push(ValidationError::InvalidDateTime);
            None
        }
    };

    match (pickup_at, errors.is_empty()) {
        (Some(pickup_at), true) => Ok(RidePredictionRequest {
            pickup_datetime: pickup_at.format(PICKUP_DATETIME_FORMAT).to_string(),
            pickup_longitude: details.pickup_longitude,
            pickup_latitude: details.pickup_latitude,
            dropoff_longitude: details.dropoff_longitude,
            dropoff_latitude: details.dropoff_latitude,
            passenger_count: details.passenger_count,
        }),
        _ => Err(errors),
    }
}

/// Combine the raw date and time fields into a single timestamp. Seconds may
/// be omitted from the time.
fn combine_date_time(date: &str, time: &str) -> Option<NaiveDateTime> {
    let date = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d").ok()?;
    let time = time.trim();
    let time = NaiveTime::parse_from_str(time, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(time, "%H:%M"))
        .ok()?;
    Some(date.and_time(time))
}
