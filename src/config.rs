use std::env;

use crate::validation::RideLimits;

/// Public endpoint of the deployed fare prediction service.
pub const DEFAULT_PREDICTION_URL: &str =
    "https://taxifare-177918934575.europe-west1.run.app/predict";

#[derive(Clone)]
pub struct Config {
    pub prediction_url: String,
    pub limits: RideLimits,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut limits = RideLimits::default();
        if let Ok(raw) = env::var("MAX_PASSENGERS") {
            limits.max_passengers = raw
                .parse()
                .expect("MAX_PASSENGERS must be a number");
        }

        Self {
            prediction_url: env::var("PREDICTION_URL")
                .unwrap_or_else(|_| DEFAULT_PREDICTION_URL.to_string()),
            limits,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            prediction_url: DEFAULT_PREDICTION_URL.to_string(),
            limits: RideLimits::default(),
        }
    }
}
