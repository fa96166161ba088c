pub mod client;
pub mod clock;
pub mod config;
pub mod error;
pub mod map;
pub mod predict;
pub mod ride;
pub mod utils;
pub mod validation;

pub use client::PredictionClient;
pub use config::Config;
pub use error::{AppError, AppResult, RemoteCallError, ValidationError};
pub use predict::{FarePredictor, RideOutcome};
pub use ride::{FarePrediction, RideDetails};
