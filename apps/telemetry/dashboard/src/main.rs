//! Telemetry Dashboard
//!
//! Terminal client for the telemetry API. Renders the same sensor and
//! event lists as the web dashboard, and can register new records.

use clap::{Parser, Subcommand};
use color_eyre::Result;

mod client;
mod views;

use client::{ApiClient, CreateEvent, CreateSensor, SensorRef};

#[derive(Parser)]
#[command(name = "telemetry-dashboard")]
#[command(about = "Browse sensors and events from the telemetry API")]
struct Cli {
    /// Base URL of the telemetry API
    #[arg(
        long,
        env = "TELEMETRY_API_URL",
        default_value = "http://localhost:3000/api"
    )]
    api_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse and register sensors
    Sensors {
        #[command(subcommand)]
        command: SensorCommands,
    },

    /// Browse and record events
    Events {
        #[command(subcommand)]
        command: EventCommands,
    },
}

#[derive(Subcommand)]
enum SensorCommands {
    /// List all sensors
    List,

    /// Register a new sensor
    Create {
        /// Device identifier, unique across sensors
        #[arg(long)]
        sensor_id: String,

        /// Human-readable sensor name
        #[arg(long)]
        name: String,

        /// Where the sensor is installed
        #[arg(long)]
        location: String,
    },
}

#[derive(Subcommand)]
enum EventCommands {
    /// List all events
    List,

    /// Record a new event
    Create {
        /// Numeric id of the sensor that produced the event
        #[arg(long)]
        sensor: i32,

        /// Event type (button_press, connection, error)
        #[arg(long = "type")]
        event_type: String,

        /// Event payload
        #[arg(long)]
        data: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    let client = ApiClient::new(cli.api_url);

    match cli.command {
        Commands::Sensors { command } => match command {
            SensorCommands::List => views::show_sensors(&client).await,
            SensorCommands::Create {
                sensor_id,
                name,
                location,
            } => {
                let sensor = client
                    .create_sensor(&CreateSensor {
                        sensor_id,
                        name,
                        location,
                    })
                    .await?;
                println!("{}", serde_json::to_string_pretty(&sensor)?);
            }
        },
        Commands::Events { command } => match command {
            EventCommands::List => views::show_events(&client).await,
            EventCommands::Create {
                sensor,
                event_type,
                data,
            } => {
                let event = client
                    .create_event(&CreateEvent {
                        event_type,
                        data,
                        sensor: SensorRef { id: sensor },
                    })
                    .await?;
                println!("{}", serde_json::to_string_pretty(&event)?);
            }
        },
    }

    Ok(())
}
