// Record shapes - the three kinds of entry the journal holds

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::GardenError;

/// Light level, as offered by the entry forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SunExposure {
    #[serde(rename = "Full sun")]
    FullSun,
    #[serde(rename = "Partial shade")]
    PartialShade,
    Shade,
}

impl SunExposure {
    const EXPECTED: &'static str = "Full sun, Partial shade, Shade";

    pub fn as_str(&self) -> &'static str {
        match self {
            SunExposure::FullSun => "Full sun",
            SunExposure::PartialShade => "Partial shade",
            SunExposure::Shade => "Shade",
        }
    }
}

impl fmt::Display for SunExposure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SunExposure {
    type Err = GardenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Full sun" => Ok(SunExposure::FullSun),
            "Partial shade" => Ok(SunExposure::PartialShade),
            "Shade" => Ok(SunExposure::Shade),
            other => Err(GardenError::UnknownVariant {
                field: "sun_exposure",
                value: other.to_string(),
                expected: Self::EXPECTED,
            }),
        }
    }
}

/// Life cycle of a plant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlantType {
    Perennial,
    Annual,
    Bulb,
}

impl PlantType {
    const EXPECTED: &'static str = "Perennial, Annual, Bulb";

    pub fn as_str(&self) -> &'static str {
        match self {
            PlantType::Perennial => "Perennial",
            PlantType::Annual => "Annual",
            PlantType::Bulb => "Bulb",
        }
    }
}

impl fmt::Display for PlantType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlantType {
    type Err = GardenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Perennial" => Ok(PlantType::Perennial),
            "Annual" => Ok(PlantType::Annual),
            "Bulb" => Ok(PlantType::Bulb),
            other => Err(GardenError::UnknownVariant {
                field: "type",
                value: other.to_string(),
                expected: Self::EXPECTED,
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WateringNeeds {
    Light,
    Medium,
    Heavy,
}

impl WateringNeeds {
    const EXPECTED: &'static str = "Light, Medium, Heavy";

    pub fn as_str(&self) -> &'static str {
        match self {
            WateringNeeds::Light => "Light",
            WateringNeeds::Medium => "Medium",
            WateringNeeds::Heavy => "Heavy",
        }
    }
}

impl fmt::Display for WateringNeeds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WateringNeeds {
    type Err = GardenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Light" => Ok(WateringNeeds::Light),
            "Medium" => Ok(WateringNeeds::Medium),
            "Heavy" => Ok(WateringNeeds::Heavy),
            other => Err(GardenError::UnknownVariant {
                field: "watering_needs",
                value: other.to_string(),
                expected: Self::EXPECTED,
            }),
        }
    }
}

/// What happened during a garden visit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObservationType {
    Watered,
    Weeded,
    Fertilized,
    #[serde(rename = "Pest Noted")]
    PestNoted,
    Other,
}

impl ObservationType {
    const EXPECTED: &'static str = "Watered, Weeded, Fertilized, Pest Noted, Other";

    pub fn as_str(&self) -> &'static str {
        match self {
            ObservationType::Watered => "Watered",
            ObservationType::Weeded => "Weeded",
            ObservationType::Fertilized => "Fertilized",
            ObservationType::PestNoted => "Pest Noted",
            ObservationType::Other => "Other",
        }
    }
}

impl fmt::Display for ObservationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ObservationType {
    type Err = GardenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Watered" => Ok(ObservationType::Watered),
            "Weeded" => Ok(ObservationType::Weeded),
            "Fertilized" => Ok(ObservationType::Fertilized),
            "Pest Noted" => Ok(ObservationType::PestNoted),
            "Other" => Ok(ObservationType::Other),
            other => Err(GardenError::UnknownVariant {
                field: "observation_type",
                value: other.to_string(),
                expected: Self::EXPECTED,
            }),
        }
    }
}

/// A garden zone. `zone_id` is intended to be unique but nothing enforces it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    pub zone_id: String,
    pub description: String,
    pub sun_exposure: SunExposure,
    pub soil_type: String,
    #[serde(rename = "pH")]
    pub ph: f64,
    pub irrigated: bool,
}

/// A plant. `location_zone` is a soft reference to a zone's `zone_id`;
/// dangling values are representable and not an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plant {
    pub name: String,
    pub species: String,
    #[serde(rename = "type")]
    pub plant_type: PlantType,
    pub location_zone: String,
    pub sun_exposure: SunExposure,
    pub watering_needs: WateringNeeds,
    pub fertilizer_type: String,
    pub bloom_season: String,
    pub last_watered: NaiveDate,
    pub last_fertilized: NaiveDate,
}

/// A dated log entry. `plant_name` is a soft reference to a plant's `name`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub date: NaiveDate,
    pub plant_name: String,
    pub observation_type: ObservationType,
    pub notes: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn enum_literals_round_trip_through_from_str() {
        for exposure in [
            SunExposure::FullSun,
            SunExposure::PartialShade,
            SunExposure::Shade,
        ] {
            assert_eq!(exposure.as_str().parse::<SunExposure>().unwrap(), exposure);
        }
        for kind in [
            ObservationType::Watered,
            ObservationType::Weeded,
            ObservationType::Fertilized,
            ObservationType::PestNoted,
            ObservationType::Other,
        ] {
            assert_eq!(kind.as_str().parse::<ObservationType>().unwrap(), kind);
        }
    }

    #[test]
    fn unknown_literal_names_the_legal_set() {
        let err = "full sun".parse::<SunExposure>().unwrap_err();
        let message = err.to_string();
        assert!(message.contains("full sun"));
        assert!(message.contains("Partial shade"));
    }

    #[test]
    fn multi_word_literals_serialize_with_spaces() {
        assert_eq!(
            serde_json::to_string(&SunExposure::PartialShade).unwrap(),
            "\"Partial shade\""
        );
        assert_eq!(
            serde_json::to_string(&ObservationType::PestNoted).unwrap(),
            "\"Pest Noted\""
        );
    }

    #[test]
    fn dates_serialize_as_calendar_days() {
        let observation = Observation {
            date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            plant_name: "Rose".into(),
            observation_type: ObservationType::Watered,
            notes: String::new(),
        };
        let json = serde_json::to_string(&observation).unwrap();
        assert!(json.contains("\"date\":\"2024-06-01\""));
    }

    #[test]
    fn zone_ph_keeps_its_original_key_spelling() {
        let zone = Zone {
            zone_id: "Z1".into(),
            description: String::new(),
            sun_exposure: SunExposure::Shade,
            soil_type: "clay".into(),
            ph: 7.2,
            irrigated: false,
        };
        let json = serde_json::to_string(&zone).unwrap();
        assert!(json.contains("\"pH\":7.2"));
    }
}
