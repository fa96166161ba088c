use reqwest::blocking::Client;

use crate::error::{AppError, AppResult, RemoteCallError};
use crate::ride::{FarePrediction, RidePredictionRequest};

/// How much of an unexpected response body to keep in an error message.
const BODY_SNIPPET_CHARS: usize = 200;

/// Blocking HTTP client for the remote fare prediction service.
///
/// The service exposes a single GET endpoint that takes the normalized ride
/// fields as query parameters and answers with a JSON fare. Calls block the
/// current thread until the service responds; no timeout is applied.
pub struct PredictionClient {
    http: Client,
    endpoint: String,
}

impl PredictionClient {
    pub fn new(endpoint: impl Into<String>) -> AppResult<Self> {
        let http = Client::builder()
            .timeout(None)
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            endpoint: endpoint.into(),
        })
    }

    /// Send a validated request to the prediction service and decode the fare.
    pub fn fetch_fare(
        &self,
        request: &RidePredictionRequest,
    ) -> Result<FarePrediction, RemoteCallError> {
        tracing::debug!(endpoint = %self.endpoint, "Requesting fare prediction");

        let response = self.http.get(&self.endpoint).query(request).send()?;

        let status = response.status();
        let body = response.text()?;

        if !status.is_success() {
            return Err(RemoteCallError::Status {
                status,
                body: snippet(&body),
            });
        }

        serde_json::from_str(&body).map_err(|source| RemoteCallError::MalformedResponse {
            source,
            body: snippet(&body),
        })
    }
}

fn snippet(body: &str) -> String {
    body.chars().take(BODY_SNIPPET_CHARS).collect()
}
