use serde::Serialize;

use crate::client::PredictionClient;
use crate::clock::{Clock, SystemClock};
use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::map::RouteMap;
use crate::ride::{FarePrediction, RideDetails};
use crate::validation::{self, RideLimits};

/// The result of a successful submission: the predicted fare plus the data a
/// front end needs to draw the route.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RideOutcome {
    pub prediction: FarePrediction,
    pub map: RouteMap,
}

/// Drives one ride submission end to end: validate the details, call the
/// remote fare service, and assemble the outcome.
pub struct FarePredictor {
    limits: RideLimits,
    client: PredictionClient,
    clock: Box<dyn Clock + Send + Sync>,
}

impl FarePredictor {
    /// Build a predictor that reads the current time from the system clock.
    pub fn new(config: &Config) -> AppResult<Self> {
        Self::with_clock(config, SystemClock)
    }

    /// Build a predictor with an injected clock for the past-pickup check.
    pub fn with_clock(
        config: &Config,
        clock: impl Clock + Send + Sync + 'static,
    ) -> AppResult<Self> {
        Ok(Self {
            limits: config.limits,
            client: PredictionClient::new(&config.prediction_url)?,
            clock: Box::new(clock),
        })
    }

    /// Validate `details` and, when they pass, fetch a fare prediction.
    ///
    /// Invalid details never reach the remote service; every violation is
    /// reported in one `AppError::Validation`.
    pub fn submit(&self, details: &RideDetails) -> AppResult<RideOutcome> {
        let now = self.clock.now();

        let request = match validation::validate(details, &self.limits, now) {
            Ok(request) => request,
            Err(errors) => {
                tracing::warn!(errors = errors.len(), "Ride submission rejected by validation");
                return Err(AppError::Validation(errors));
            }
        };

        let prediction = match self.client.fetch_fare(&request) {
            Ok(prediction) => prediction,
            Err(error) => {
                tracing::warn!(error = %error, "Fare prediction request failed");
                return Err(error.into());
            }
        };
        tracing::info!(fare = prediction.fare, "Fare prediction received");

        Ok(RideOutcome {
            map: RouteMap::for_ride(&request),
            prediction,
        })
    }
}
