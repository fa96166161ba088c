use thiserror::Error;

use crate::ride::RideEnd;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    /// Every violation found in one submission attempt, reported together.
    #[error("ride details failed validation with {} error(s)", .0.len())]
    Validation(Vec<ValidationError>),
    /// The prediction service could not produce a usable answer.
    #[error(transparent)]
    RemoteCall(#[from] RemoteCallError),
    #[error("{0}")]
    Internal(String),
}

impl AppError {
    /// Messages for the form host to display: the full validation list, or a
    /// single description for any other failure.
    pub fn messages(&self) -> Vec<String> {
        match self {
            AppError::Validation(errors) => errors.iter().map(ToString::to_string).collect(),
            other => vec![other.to_string()],
        }
    }
}

/// A single rejected input field. Recoverable: the rider corrects the form
/// and resubmits.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("{end} latitude must be between {min} and {max}.")]
    LatitudeOutOfBounds { end: RideEnd, min: f64, max: f64 },
    #[error("{end} longitude must be between {min} and {max}.")]
    LongitudeOutOfBounds { end: RideEnd, min: f64, max: f64 },
    #[error("Passenger count must be between 1 and {max}.")]
    PassengerCountOutOfBounds { max: i32 },
    #[error("Invalid date or time provided.")]
    InvalidDateTime,
    #[error("Pickup date and time cannot be in the past.")]
    PickupInPast,
}

/// Failure talking to the prediction service. Fatal to the submission
/// attempt, not to the application; never retried.
#[derive(Debug, Error)]
pub enum RemoteCallError {
    /// The request never completed: DNS, connect, TLS, or a dropped body.
    #[error("prediction service unreachable: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("prediction service returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("prediction service returned a malformed response: {source}")]
    MalformedResponse {
        #[source]
        source: serde_json::Error,
        body: String,
    },
}
