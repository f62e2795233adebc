use serde::{Deserialize, Serialize};

use crate::record::{Observation, Plant, Zone};

/// The whole journal as persisted on disk: three ordered collections,
/// append-only, insertion order is the only order. Each collection carries
/// a serde default so a hand-edited file missing one of the keys still
/// loads, with the absent collection empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GardenDocument {
    #[serde(default)]
    pub zones: Vec<Zone>,
    #[serde(default)]
    pub plants: Vec<Plant>,
    #[serde(default)]
    pub observations_log: Vec<Observation>,
}

impl GardenDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a zone onto the end of the zone collection. No uniqueness
    /// check: a duplicate `zone_id` is silently accepted.
    pub fn append_zone(&mut self, zone: Zone) {
        self.zones.push(zone);
    }

    /// Push a plant onto the end of the plant collection. `location_zone`
    /// is not checked against the registered zones.
    pub fn append_plant(&mut self, plant: Plant) {
        self.plants.push(plant);
    }

    /// Push an observation onto the end of the log. `plant_name` is not
    /// checked against the registered plants.
    pub fn append_observation(&mut self, observation: Observation) {
        self.observations_log.push(observation);
    }

    /// Find a zone by id. First match wins when ids repeat.
    pub fn zone(&self, zone_id: &str) -> Option<&Zone> {
        self.zones.iter().find(|z| z.zone_id == zone_id)
    }

    /// Find a plant by name. First match wins when names repeat.
    pub fn plant(&self, name: &str) -> Option<&Plant> {
        self.plants.iter().find(|p| p.name == name)
    }
}
