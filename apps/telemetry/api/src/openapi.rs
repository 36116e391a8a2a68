use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    components(
        schemas(axum_helpers::ErrorResponse)
    ),
    info(
        title = "Telemetry API",
        version = "0.1.0",
        description = "API for managing IoT sensors and the events they report"
    ),
    servers(
        (url = "/api", description = "API base path")
    ),
    nest(
        (path = "/sensors", api = domain_monitoring::SensorsApiDoc),
        (path = "/events", api = domain_monitoring::EventsApiDoc)
    )
)]
pub struct ApiDoc;
