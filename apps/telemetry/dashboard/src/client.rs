//! HTTP client for the telemetry API.
//!
//! Thin typed wrapper over reqwest. API errors carry the `message` field
//! from the standard error body so callers can surface it directly.

use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

/// A sensor as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sensor {
    pub id: i32,
    pub sensor_id: String,
    pub name: String,
    pub location: String,
    pub status: String,
    pub created_at: String,
    pub updated_at: String,
}

/// An event with its sensor embedded, as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub id: i32,
    #[serde(rename = "type")]
    pub event_type: String,
    pub data: String,
    pub sensor: Sensor,
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

/// Payload for registering a sensor.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSensor {
    pub sensor_id: String,
    pub name: String,
    pub location: String,
}

/// Reference to an existing sensor by numeric id.
#[derive(Debug, Clone, Serialize)]
pub struct SensorRef {
    pub id: i32,
}

/// Payload for recording an event.
#[derive(Debug, Clone, Serialize)]
pub struct CreateEvent {
    #[serde(rename = "type")]
    pub event_type: String,
    pub data: String,
    pub sensor: SensorRef,
}

/// Standard error body returned by the API.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("{message}")]
    Api { status: u16, message: String },
}

pub struct ApiClient {
    base_url: String,
    client: Client,
}

impl ApiClient {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    pub async fn list_sensors(&self) -> Result<Vec<Sensor>, ClientError> {
        self.get("/sensors").await
    }

    pub async fn create_sensor(&self, input: &CreateSensor) -> Result<Sensor, ClientError> {
        self.post("/sensors", input).await
    }

    pub async fn list_events(&self) -> Result<Vec<Event>, ClientError> {
        self.get("/events").await
    }

    pub async fn create_event(&self, input: &CreateEvent) -> Result<Event, ClientError> {
        self.post("/events", input).await
    }

    async fn get<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let url = format!("{}{}", self.base_url, path);
        let response = self.client.get(&url).send().await?;
        Self::decode(response).await
    }

    async fn post<B: Serialize, T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ClientError> {
        let url = format!("{}{}", self.base_url, path);
        let response = self.client.post(&url).json(body).send().await?;
        Self::decode(response).await
    }

    async fn decode<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Api {
                status: status.as_u16(),
                message: error_message(status, &body),
            });
        }
        Ok(response.json::<T>().await?)
    }
}

/// Extract the API's error message from a response body, falling back to
/// the status code when the body is not the standard `{"message": ...}`.
fn error_message(status: StatusCode, body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .map(|b| b.message)
        .unwrap_or_else(|_| format!("API error: {}", status))
}
