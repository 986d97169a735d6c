use std::env;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{anyhow, Context, Result};
use chrono::NaiveDate;
use serde::Deserialize;
use tokio::fs;
use tracing::warn;

use eventgen_domain::{EventTypeWeights, GenerationSettings};

use crate::config::validate_start_date;
use crate::utils::resolve_path;

pub const CONFIG_ENV: &str = "EVENTGEN_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "./eventgen.toml";

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub output_dir: String,
    pub start_date: String,
    pub seed: Option<u64>,
    pub days_per_week: u32,
    pub parts_per_day: u32,
    pub events_per_part: u32,
    pub customer_id_count: u16,
    pub product_id_count: u16,
    pub event_type_weights: EventTypeWeights,
    pub quantity_min: u8,
    pub quantity_max: u8,
}

impl Default for AppConfig {
    fn default() -> Self {
        let settings = GenerationSettings::default();
        Self {
            output_dir: "data".to_string(),
            start_date: "2023-10-23".to_string(),
            seed: settings.seed,
            days_per_week: settings.days_per_week,
            parts_per_day: settings.parts_per_day,
            events_per_part: settings.events_per_part,
            customer_id_count: settings.customer_id_count,
            product_id_count: settings.product_id_count,
            event_type_weights: settings.event_type_weights,
            quantity_min: settings.quantity_min,
            quantity_max: settings.quantity_max,
        }
    }
}

impl AppConfig {
    /// Loads defaults, then the TOML file, then `EVENTGEN_*` overrides.
    ///
    /// An explicit path must exist. Without one, `EVENTGEN_CONFIG` or
    /// `./eventgen.toml` is read when present and skipped otherwise.
    pub async fn load(explicit: Option<&Path>) -> Result<Self> {
        let (path, required) = match explicit {
            Some(path) => (path.to_path_buf(), true),
            None => (
                PathBuf::from(env::var(CONFIG_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string())),
                false,
            ),
        };

        let mut config = if path.exists() {
            let content = fs::read_to_string(&path)
                .await
                .with_context(|| format!("reading config {}", path.display()))?;
            let mut config = Self::parse(&content)
                .with_context(|| format!("parsing config {}", path.display()))?;
            if let Some(base) = path.parent() {
                config.resolve_paths(base);
            }
            config
        } else if required {
            return Err(anyhow!("config file {} not found", path.display()));
        } else {
            warn!("{} not found, using defaults", path.display());
            AppConfig::default()
        };

        config.apply_env_overrides();
        config.normalize();
        Ok(config)
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn normalize(&mut self) {
        self.output_dir = self.output_dir.trim().to_string();
        self.start_date = self.start_date.trim().to_string();
        if self.output_dir.is_empty() {
            self.output_dir = AppConfig::default().output_dir;
        }
    }

    fn resolve_paths(&mut self, base: &Path) {
        if base.as_os_str().is_empty() {
            return;
        }
        self.output_dir = resolve_path(base, &self.output_dir);
    }

    pub fn validate(&self) -> Result<()> {
        validate_start_date(&self.start_date)?;
        self.to_generation_settings()
            .validate()
            .map_err(|err| anyhow!("invalid generation settings: {}", err))?;
        Ok(())
    }

    pub fn start_date(&self) -> Result<NaiveDate> {
        validate_start_date(&self.start_date)
    }

    pub fn to_generation_settings(&self) -> GenerationSettings {
        GenerationSettings {
            days_per_week: self.days_per_week,
            parts_per_day: self.parts_per_day,
            events_per_part: self.events_per_part,
            customer_id_count: self.customer_id_count,
            product_id_count: self.product_id_count,
            event_type_weights: self.event_type_weights,
            quantity_min: self.quantity_min,
            quantity_max: self.quantity_max,
            seed: self.seed,
        }
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| env::var(key).ok());
    }

    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup("EVENTGEN_OUTPUT_DIR") {
            self.output_dir = value;
        }
        if let Some(value) = lookup("EVENTGEN_START_DATE") {
            self.start_date = value;
        }
        if let Some(value) = lookup("EVENTGEN_SEED") {
            if let Some(seed) = parse_override("EVENTGEN_SEED", &value) {
                self.seed = Some(seed);
            }
        }
        if let Some(value) = lookup("EVENTGEN_DAYS_PER_WEEK") {
            if let Some(days) = parse_override("EVENTGEN_DAYS_PER_WEEK", &value) {
                self.days_per_week = days;
            }
        }
        if let Some(value) = lookup("EVENTGEN_PARTS_PER_DAY") {
            if let Some(parts) = parse_override("EVENTGEN_PARTS_PER_DAY", &value) {
                self.parts_per_day = parts;
            }
        }
        if let Some(value) = lookup("EVENTGEN_EVENTS_PER_PART") {
            if let Some(events) = parse_override("EVENTGEN_EVENTS_PER_PART", &value) {
                self.events_per_part = events;
            }
        }
    }
}

/// Unparsable values are reported and leave the current setting in place.
fn parse_override<T: FromStr>(key: &str, raw: &str) -> Option<T> {
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!("ignoring {}={:?}: not a valid number", key, raw);
            None
        }
    }
}
