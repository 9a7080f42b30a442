//! CLI tool to request a drift prediction from a running drift server.

use anyhow::Context;
use clap::{Parser, ValueEnum};
use drift_core::TrajectoryPoint;
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Profile {
    /// Level flight, 50 fixed steps
    T1,
    /// Descent until the ground
    T2,
    /// Mass-scaled descent
    T3,
    /// Level flight traced backward to the origin
    T1r,
    /// Descent traced backward to the origin
    T2r,
    /// Mass-scaled descent traced backward to the origin
    T3r,
}

impl Profile {
    fn endpoint(self) -> &'static str {
        match self {
            Profile::T1 => "/trajectory_t1",
            Profile::T2 => "/trajectory_t2",
            Profile::T3 => "/trajectory_t3",
            Profile::T1r => "/trajectory_t1r",
            Profile::T2r => "/trajectory_t2r",
            Profile::T3r => "/trajectory_t3r",
        }
    }
}

/// Request a drift trajectory from a drift server and print the outcome
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Drift server URL
    #[arg(long, default_value = "http://localhost:3000")]
    url: String,

    /// Launch latitude in degrees
    #[arg(long, default_value_t = 55.0)]
    lat: f64,

    /// Launch longitude in degrees
    #[arg(long, default_value_t = 24.0)]
    lon: f64,

    /// Launch altitude in meters
    #[arg(long, default_value_t = 3000.0)]
    altitude: f64,

    /// Vertical speed in m/s (0 selects the server default)
    #[arg(long, default_value_t = 0.0)]
    speed: f64,

    /// Drift profile to request
    #[arg(long, value_enum, default_value = "t2")]
    profile: Profile,
}

#[derive(Debug, Deserialize)]
struct TrajectoryResponse {
    trajectory: Vec<TrajectoryPoint>,
    src: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let url = format!(
        "{}{}",
        args.url.trim_end_matches('/'),
        args.profile.endpoint()
    );
    let client = reqwest::blocking::Client::new();
    let response = client
        .post(&url)
        .json(&json!({
            "lat": args.lat,
            "lon": args.lon,
            "altitude": args.altitude,
            "speed": args.speed,
        }))
        .send()
        .with_context(|| format!("request to {} failed", url))?
        .error_for_status()?;

    let prediction: TrajectoryResponse =
        response.json().context("invalid server response")?;

    println!("Wind source: {}", prediction.src);
    println!("Trajectory points: {}", prediction.trajectory.len());
    match prediction.trajectory.last() {
        Some(point) => println!(
            "Final position: {:.5}, {:.5} at {:.0} m",
            point.lat, point.lon, point.alt
        ),
        None => println!("Object is already on the ground."),
    }

    Ok(())
}
