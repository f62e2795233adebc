pub mod document;
pub mod error;
pub mod record;
pub mod store;

pub use document::GardenDocument;
pub use error::{GardenError, Result};
pub use record::{Observation, ObservationType, Plant, PlantType, SunExposure, WateringNeeds, Zone};
pub use store::{Store, DEFAULT_DATA_FILE};
