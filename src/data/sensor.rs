//! HTTP client for the remote moisture endpoint.
//!
//! The endpoint is expected to return a JSON object with two numeric fields,
//! `moisture1` and `moisture2`, which are mapped onto the two hardcoded
//! listing plants. One unauthenticated GET, no retry.

use std::time::Duration;

use anyhow::{Context, Result};

use super::models::{Plant, SensorSnapshot};

/// Address of the moisture endpoint when none is configured
pub const DEFAULT_ENDPOINT: &str = "http://192.168.254.242:5000/moisture";

const FETCH_TIMEOUT_SECS: u64 = 10;

/// Client for fetching the current sensor snapshot
pub struct SensorClient {
    client: reqwest::blocking::Client,
    endpoint: String,
}

impl SensorClient {
    /// Build a client for the given endpoint address
    pub fn new(endpoint: String) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(FETCH_TIMEOUT_SECS))
            .build()
            .context("Failed to build HTTP client")?;
        Ok(SensorClient { client, endpoint })
    }

    #[allow(dead_code)] // Used in tests
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetch the two sensor readings from the endpoint
    pub fn fetch_snapshot(&self) -> Result<SensorSnapshot> {
        self.client
            .get(&self.endpoint)
            .send()
            .with_context(|| format!("Failed to reach moisture endpoint: {}", self.endpoint))?
            .error_for_status()
            .context("Moisture endpoint returned an error status")?
            .json()
            .context("Failed to parse moisture response")
    }
}

/// Map a sensor snapshot onto the two hardcoded listing plants
pub fn plants_from_snapshot(snapshot: &SensorSnapshot) -> Vec<Plant> {
    vec![
        Plant {
            id: "1".to_string(),
            name: "Aloe Vera".to_string(),
            moisture: snapshot.moisture1,
            min: 30,
            max: 60,
            image: "https://upload.wikimedia.org/wikipedia/commons/c/cd/Aloe_vera_flower_1.jpg"
                .to_string(),
        },
        Plant {
            id: "2".to_string(),
            name: "Snake Plant".to_string(),
            moisture: snapshot.moisture2,
            min: 40,
            max: 70,
            image: "https://upload.wikimedia.org/wikipedia/commons/f/fd/Sansevieria_trifasciata_01.jpg"
                .to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_maps_to_listing_plants() {
        let snapshot = SensorSnapshot {
            moisture1: 45.0,
            moisture2: 25.0,
        };
        let plants = plants_from_snapshot(&snapshot);

        assert_eq!(plants.len(), 2);
        assert_eq!(plants[0].name, "Aloe Vera");
        assert_eq!(plants[0].moisture, 45.0);
        assert!(plants[0].is_healthy(), "45 > 30 renders green");

        assert_eq!(plants[1].name, "Snake Plant");
        assert_eq!(plants[1].moisture, 25.0);
        assert!(!plants[1].is_healthy(), "25 <= 30 renders red");
    }

    #[test]
    fn test_snapshot_mapping_carries_photo_urls() {
        let snapshot = SensorSnapshot {
            moisture1: 50.0,
            moisture2: 50.0,
        };
        let plants = plants_from_snapshot(&snapshot);
        assert!(plants[0].image.contains("Aloe_vera"));
        assert!(plants[1].image.contains("Sansevieria"));
    }

    #[test]
    fn test_client_keeps_endpoint() {
        let client = SensorClient::new(DEFAULT_ENDPOINT.to_string()).unwrap();
        assert_eq!(client.endpoint(), DEFAULT_ENDPOINT);
    }
}
