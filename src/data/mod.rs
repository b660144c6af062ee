//! Data layer: plant models, the settings store, and the sensor endpoint.

mod models;
mod sensor;
mod store;

pub use models::{
    default_configs, find_detail, Plant, PlantConfig, PlantDetail, SensorSnapshot,
};
pub use sensor::{plants_from_snapshot, SensorClient, DEFAULT_ENDPOINT};
pub use store::PlantStore;
