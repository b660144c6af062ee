//! Data models for plant configuration and moisture readings.

use serde::{Deserialize, Serialize};

/// Moisture percentage above which a plant shows as healthy in the listing.
/// The listing deliberately uses this fixed cutoff rather than the per-plant
/// ranges; see the detail view for the range-based status.
pub const LISTING_HEALTHY_ABOVE: f64 = 30.0;

fn default_max() -> u8 {
    100
}

/// A persisted plant configuration record, editable in the settings view.
///
/// Serialized with the field names of the stored JSON document: `imageUri`
/// is omitted when unset, and `min`/`max` fall back to 0/100 when a stored
/// record lacks them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlantConfig {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub min: u8,
    #[serde(default = "default_max")]
    pub max: u8,
    #[serde(rename = "imageUri", skip_serializing_if = "Option::is_none")]
    pub image_uri: Option<String>,
}

impl PlantConfig {
    pub fn new(id: impl Into<String>, name: impl Into<String>, min: u8, max: u8) -> Self {
        PlantConfig {
            id: id.into(),
            name: name.into(),
            min,
            max,
            image_uri: None,
        }
    }

    /// Name to show in user-facing messages when the record may be blank
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            "Unnamed Plant"
        } else {
            &self.name
        }
    }
}

/// Default configuration list used to seed an empty settings store
pub fn default_configs() -> Vec<PlantConfig> {
    vec![
        PlantConfig::new("1", "Aloe Vera", 30, 60),
        PlantConfig::new("2", "Snake Plant", 40, 70),
    ]
}

/// An ephemeral listing record: a hardcoded plant joined with its live
/// moisture reading. Never persisted and never reconciled with PlantConfig.
#[derive(Debug, Clone)]
pub struct Plant {
    pub id: String,
    pub name: String,
    pub moisture: f64,
    pub min: u8,
    pub max: u8,
    /// Photo URL carried from the endpoint mapping
    #[allow(dead_code)] // Used in tests
    pub image: String,
}

impl Plant {
    /// Listing health status, based on the fixed cutoff
    pub fn is_healthy(&self) -> bool {
        self.moisture > LISTING_HEALTHY_ABOVE
    }
}

/// A fixture record backing the detail view. Independent of the listing's
/// live data and of the persisted configuration.
#[derive(Debug, Clone)]
pub struct PlantDetail {
    pub id: &'static str,
    pub name: &'static str,
    pub image: &'static str,
    pub moisture: f64,
    pub min: u8,
    pub max: u8,
}

impl PlantDetail {
    /// Whether the reading falls inside the acceptable range (inclusive)
    pub fn in_range(&self) -> bool {
        self.moisture >= f64::from(self.min) && self.moisture <= f64::from(self.max)
    }

    /// Fill fraction for the range bar, clamped to [0, 1]
    pub fn fill_ratio(&self) -> f64 {
        let span = f64::from(self.max) - f64::from(self.min);
        if span <= 0.0 {
            return 0.0;
        }
        ((self.moisture - f64::from(self.min)) / span).clamp(0.0, 1.0)
    }

    pub fn status_message(&self) -> &'static str {
        if self.in_range() {
            "Happy and healthy!"
        } else {
            "Needs attention!"
        }
    }
}

const DETAIL_FIXTURES: &[PlantDetail] = &[
    PlantDetail {
        id: "1",
        name: "Aloe Vera",
        image: "https://upload.wikimedia.org/wikipedia/commons/c/cd/Aloe_vera_flower.jpg",
        moisture: 30.0,
        min: 40,
        max: 70,
    },
    PlantDetail {
        id: "2",
        name: "Snake Plant",
        image: "https://upload.wikimedia.org/wikipedia/commons/1/10/Sansevieria_trifasciata_01.JPG",
        moisture: 70.0,
        min: 50,
        max: 80,
    },
];

/// Look up a detail fixture by its string identifier
pub fn find_detail(id: &str) -> Option<&'static PlantDetail> {
    DETAIL_FIXTURES.iter().find(|p| p.id == id)
}

/// The two numeric sensor readings returned by the moisture endpoint
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct SensorSnapshot {
    pub moisture1: f64,
    pub moisture2: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_falls_back_when_empty() {
        let named = PlantConfig::new("1", "Aloe Vera", 30, 60);
        assert_eq!(named.display_name(), "Aloe Vera");

        let unnamed = PlantConfig::new("2", "", 30, 60);
        assert_eq!(unnamed.display_name(), "Unnamed Plant");
    }

    #[test]
    fn test_config_json_field_names() {
        let mut config = PlantConfig::new("1", "Aloe Vera", 30, 60);
        let json = serde_json::to_value(&config).unwrap();
        // imageUri is absent when unset
        assert!(json.get("imageUri").is_none());

        config.image_uri = Some("file:///photos/aloe.jpg".to_string());
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["imageUri"], "file:///photos/aloe.jpg");
    }

    #[test]
    fn test_config_defaults_for_missing_fields() {
        let config: PlantConfig = serde_json::from_str(r#"{"id": "7"}"#).unwrap();
        assert_eq!(config.name, "");
        assert_eq!(config.min, 0);
        assert_eq!(config.max, 100);
        assert!(config.image_uri.is_none());
    }

    #[test]
    fn test_listing_health_cutoff() {
        let mut plant = Plant {
            id: "1".to_string(),
            name: "Aloe Vera".to_string(),
            moisture: 45.0,
            min: 30,
            max: 60,
            image: String::new(),
        };
        assert!(plant.is_healthy());

        plant.moisture = 30.0;
        assert!(!plant.is_healthy(), "exactly 30 is not healthy");

        plant.moisture = 25.0;
        assert!(!plant.is_healthy());
    }

    #[test]
    fn test_detail_lookup() {
        let aloe = find_detail("1").expect("fixture 1 exists");
        assert_eq!(aloe.name, "Aloe Vera");
        assert!(find_detail("99").is_none());
    }

    #[test]
    fn test_detail_in_range() {
        let aloe = find_detail("1").unwrap();
        // fixture reading 30 is below its 40-70 range
        assert!(!aloe.in_range());
        assert_eq!(aloe.status_message(), "Needs attention!");

        let snake = find_detail("2").unwrap();
        // fixture reading 70 sits inside 50-80
        assert!(snake.in_range());
        assert_eq!(snake.status_message(), "Happy and healthy!");
    }

    #[test]
    fn test_fill_ratio_clamps() {
        let mut plant = PlantDetail {
            id: "t",
            name: "Test",
            image: "",
            moisture: 55.0,
            min: 40,
            max: 70,
        };
        assert!((plant.fill_ratio() - 0.5).abs() < 1e-9);

        plant.moisture = 10.0;
        assert_eq!(plant.fill_ratio(), 0.0);

        plant.moisture = 95.0;
        assert_eq!(plant.fill_ratio(), 1.0);
    }

    #[test]
    fn test_sensor_snapshot_parses() {
        let snapshot: SensorSnapshot =
            serde_json::from_str(r#"{"moisture1": 45, "moisture2": 25}"#).unwrap();
        assert_eq!(snapshot.moisture1, 45.0);
        assert_eq!(snapshot.moisture2, 25.0);
    }
}
