//! Terminal rendering for the dashboard lists.
//!
//! Mirrors the web dashboard's behavior: a loading indicator first, then
//! one line per record, or a fixed failure message when the fetch errors.

use crate::client::{ApiClient, Event, Sensor};

pub const LOADING: &str = "Loading...";
pub const SENSORS_FETCH_ERROR: &str = "Failed to fetch sensors";
pub const EVENTS_FETCH_ERROR: &str = "Failed to fetch events";

/// One sensor per line: `{name} - {location} - {status}`.
pub fn sensor_line(sensor: &Sensor) -> String {
    format!("{} - {} - {}", sensor.name, sensor.location, sensor.status)
}

/// One event per line: `{type} - {data} - {createdAt}`.
pub fn event_line(event: &Event) -> String {
    format!("{} - {} - {}", event.event_type, event.data, event.created_at)
}

pub async fn show_sensors(client: &ApiClient) {
    println!("{}", LOADING);
    match client.list_sensors().await {
        Ok(sensors) => {
            println!("Sensors");
            for sensor in &sensors {
                println!("{}", sensor_line(sensor));
            }
        }
        Err(_) => println!("{}", SENSORS_FETCH_ERROR),
    }
}

pub async fn show_events(client: &ApiClient) {
    println!("{}", LOADING);
    match client.list_events().await {
        Ok(events) => {
            println!("Events");
            for event in &events {
                println!("{}", event_line(event));
            }
        }
        Err(_) => println!("{}", EVENTS_FETCH_ERROR),
    }
}
