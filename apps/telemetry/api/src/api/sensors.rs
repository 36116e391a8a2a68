use axum::Router;
use domain_monitoring::{PgSensorRepository, SensorService, handlers};

pub fn router(state: &crate::state::AppState) -> Router {
    let repository = PgSensorRepository::new(state.db.clone());
    let service = SensorService::new(repository);
    handlers::sensors_router(service)
}
