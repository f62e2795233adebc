use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand, ValueEnum};
use gardenlog::{
    Observation, ObservationType, Plant, PlantType, Store, SunExposure, WateringNeeds, Zone,
    DEFAULT_DATA_FILE,
};
use std::process;

/// Garden journal CLI — register zones and plants, log observations
#[derive(Parser)]
#[command(name = "gardenlog", version, about)]
struct Cli {
    /// Output format
    #[arg(long, default_value = "yaml")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    Yaml,
    Json,
}

#[derive(Subcommand)]
enum Command {
    /// Register a new garden zone
    AddZone {
        /// Zone identifier (e.g. Z1)
        #[arg(long)]
        zone_id: String,

        /// Free-text description
        #[arg(long, default_value = "")]
        description: String,

        /// "Full sun", "Partial shade" or "Shade"
        #[arg(long)]
        sun_exposure: SunExposure,

        /// Soil type (free text, e.g. loam)
        #[arg(long, default_value = "")]
        soil_type: String,

        /// Soil pH, 0.0 to 14.0
        #[arg(long, default_value_t = 6.5, value_parser = parse_ph)]
        ph: f64,

        /// The zone has irrigation
        #[arg(long)]
        irrigated: bool,
    },

    /// Register a new plant (requires at least one zone)
    AddPlant {
        /// Plant name
        #[arg(long)]
        name: String,

        /// Species
        #[arg(long)]
        species: String,

        /// Perennial, Annual or Bulb
        #[arg(long)]
        plant_type: PlantType,

        /// Zone the plant lives in (matched against zone ids, not enforced)
        #[arg(long)]
        location_zone: String,

        /// "Full sun", "Partial shade" or "Shade"
        #[arg(long)]
        sun_exposure: SunExposure,

        /// Light, Medium or Heavy
        #[arg(long)]
        watering_needs: WateringNeeds,

        /// Fertilizer type (free text, e.g. 10-10-10)
        #[arg(long, default_value = "")]
        fertilizer_type: String,

        /// Bloom season (free text, e.g. Summer)
        #[arg(long, default_value = "")]
        bloom_season: String,

        /// YYYY-MM-DD, defaults to today
        #[arg(long)]
        last_watered: Option<NaiveDate>,

        /// YYYY-MM-DD, defaults to today
        #[arg(long)]
        last_fertilized: Option<NaiveDate>,
    },

    /// Log a garden observation (requires at least one plant)
    Observe {
        /// Name of the observed plant (matched against plants, not enforced)
        #[arg(long)]
        plant_name: String,

        /// Watered, Weeded, Fertilized, "Pest Noted" or Other
        #[arg(long)]
        observation_type: ObservationType,

        /// Free-text notes
        #[arg(long, default_value = "")]
        notes: String,

        /// YYYY-MM-DD, defaults to today
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// List one record collection
    List {
        #[arg(value_enum)]
        kind: RecordKind,
    },

    /// Show the backing file path and per-collection counts
    Status,
}

#[derive(Clone, ValueEnum)]
enum RecordKind {
    Zones,
    Plants,
    Observations,
}

fn parse_ph(s: &str) -> Result<f64, String> {
    let ph: f64 = s
        .parse()
        .map_err(|_| format!("'{s}' is not a number"))?;
    if !(0.0..=14.0).contains(&ph) {
        return Err(format!("pH must be between 0.0 and 14.0, got {ph}"));
    }
    Ok(ph)
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let store = Store::open(DEFAULT_DATA_FILE);
    let mut document = store.load()?;

    match cli.command {
        Command::AddZone {
            zone_id,
            description,
            sun_exposure,
            soil_type,
            ph,
            irrigated,
        } => {
            document.append_zone(Zone {
                zone_id: zone_id.clone(),
                description,
                sun_exposure,
                soil_type,
                ph,
                irrigated,
            });
            store.save(&document)?;
            print_output(&serde_json::json!({ "ok": true, "zone_id": zone_id }), &cli.format);
        }

        Command::AddPlant {
            name,
            species,
            plant_type,
            location_zone,
            sun_exposure,
            watering_needs,
            fertilizer_type,
            bloom_season,
            last_watered,
            last_fertilized,
        } => {
            if document.zones.is_empty() {
                return Err("please add at least one garden zone before adding plants".into());
            }
            if document.zone(&location_zone).is_none() {
                log::warn!("location zone '{location_zone}' matches no registered zone");
            }

            let today = Local::now().date_naive();
            document.append_plant(Plant {
                name: name.clone(),
                species,
                plant_type,
                location_zone,
                sun_exposure,
                watering_needs,
                fertilizer_type,
                bloom_season,
                last_watered: last_watered.unwrap_or(today),
                last_fertilized: last_fertilized.unwrap_or(today),
            });
            store.save(&document)?;
            print_output(&serde_json::json!({ "ok": true, "name": name }), &cli.format);
        }

        Command::Observe {
            plant_name,
            observation_type,
            notes,
            date,
        } => {
            if document.plants.is_empty() {
                return Err("please add at least one plant before logging observations".into());
            }
            if document.plant(&plant_name).is_none() {
                log::warn!("plant '{plant_name}' is not in the journal");
            }

            document.append_observation(Observation {
                date: date.unwrap_or_else(|| Local::now().date_naive()),
                plant_name: plant_name.clone(),
                observation_type,
                notes,
            });
            store.save(&document)?;
            print_output(
                &serde_json::json!({ "ok": true, "plant_name": plant_name }),
                &cli.format,
            );
        }

        Command::List { kind } => {
            let value = match kind {
                RecordKind::Zones => serde_json::to_value(&document.zones)?,
                RecordKind::Plants => serde_json::to_value(&document.plants)?,
                RecordKind::Observations => serde_json::to_value(&document.observations_log)?,
            };
            print_output(&value, &cli.format);
        }

        Command::Status => {
            print_output(
                &serde_json::json!({
                    "path": store.path().display().to_string(),
                    "zones": document.zones.len(),
                    "plants": document.plants.len(),
                    "observations_log": document.observations_log.len(),
                }),
                &cli.format,
            );
        }
    }

    Ok(())
}

fn print_output(value: &serde_json::Value, format: &OutputFormat) {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(value).unwrap());
        }
        OutputFormat::Yaml => {
            print!("{}", serde_yaml::to_string(value).unwrap());
        }
    }
}
