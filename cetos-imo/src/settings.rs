use crate::{
    Result,
    error::error::{ConfigSnafu, InvalidSettingSnafu},
};
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use snafu::ResultExt;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub estimation: EstimationSettings,
    /// YAML file replacing the built-in IMO 2020 reference tables.
    #[serde(default)]
    pub reference_tables: Option<PathBuf>,
}

#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimationSettings {
    pub include_steam_boilers: bool,
    /// Propulsion engines below 7% load are assumed to be shut down.
    pub limit_low_load: bool,
    /// Overrides the tabulated speed-power correction (delta_w) for every vessel.
    pub speed_power_correction: Option<f64>,
}

impl Default for EstimationSettings {
    fn default() -> Self {
        Self {
            include_steam_boilers: true,
            limit_low_load: true,
            speed_power_correction: None,
        }
    }
}

impl EstimationSettings {
    pub fn include_steam_boilers(self, include_steam_boilers: bool) -> Self {
        Self {
            include_steam_boilers,
            ..self
        }
    }

    pub fn limit_low_load(self, limit_low_load: bool) -> Self {
        Self {
            limit_low_load,
            ..self
        }
    }

    pub fn speed_power_correction(self, speed_power_correction: f64) -> Self {
        Self {
            speed_power_correction: Some(speed_power_correction),
            ..self
        }
    }

    pub fn validate(&self) -> Result<()> {
        match self.speed_power_correction {
            Some(v) if !(0. ..=1.).contains(&v) => InvalidSettingSnafu {
                name: "speed_power_correction",
                value: v,
                min: 0.,
                max: 1.,
            }
            .fail(),
            _ => Ok(()),
        }
    }
}

impl Settings {
    /// Reads the optional YAML file at `path`, overridden by `CETOS__` prefixed environment
    /// variables such as `CETOS__ESTIMATION__LIMIT_LOW_LOAD=false`.
    pub fn new(path: Option<&Path>) -> Result<Settings> {
        Self::from_sources(path, Environment::with_prefix("CETOS"))
    }

    fn from_sources(path: Option<&Path>, environment: Environment) -> Result<Settings> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(File::from(path).format(FileFormat::Yaml).required(true));
        }

        let settings: Settings = builder
            .add_source(environment.separator("__").try_parsing(true))
            .build()
            .context(ConfigSnafu)?
            .try_deserialize()
            .context(ConfigSnafu)?;

        settings.estimation.validate()?;

        Ok(settings)
    }
}
