//! JSON body extractor whose rejection is the application error type.

use crate::errors::AppError;
use axum::extract::{FromRequest, Json, Request};
use serde::de::DeserializeOwned;

/// JSON extractor with standardized error responses.
///
/// Malformed or missing bodies surface as the usual `{"message": ...}`
/// payload instead of axum's plain-text rejection.
///
/// # Example
/// ```ignore
/// use axum::Router;
/// use axum::routing::post;
/// use axum_helpers::extractors::JsonBody;
/// use serde::Deserialize;
///
/// #[derive(Deserialize)]
/// struct CreateSensor {
///     sensor_id: String,
///     name: String,
/// }
///
/// async fn create_sensor(JsonBody(payload): JsonBody<CreateSensor>) -> String {
///     format!("Registering sensor: {}", payload.sensor_id)
/// }
///
/// let app = Router::new().route("/sensors", post(create_sensor));
/// ```
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = Json::<T>::from_request(req, state).await?;

        Ok(JsonBody(data))
    }
}
