use crate::{
    Result,
    error::error::{
        AdmiraltyLookupSnafu, AuxiliaryPowerLookupSnafu, ConfigSnafu, InvalidTablesSnafu,
        SfcLookupSnafu,
    },
};
use cetos_core::{EngineAge, EngineType, FuelType, OperationMode, VesselType};
use config::{Config, File, FileFormat};
use serde::{Deserialize, Serialize};
use snafu::{OptionExt, ResultExt};
use std::{
    path::Path,
    sync::{Arc, LazyLock},
};
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoEnumIterator};
use tracing::{info, instrument};

mod imo_2020;
mod shared;

pub use shared::*;

static IMO_2020: LazyLock<Arc<ReferenceTables>> = LazyLock::new(|| Arc::new(imo_2020::tables()));

/// Machinery with a specific fuel consumption baseline, the propulsion engine types
/// extended with the auxiliary consumers.
#[derive(
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumIter,
    Display,
    AsRefStr,
    EnumString,
)]
pub enum Machinery {
    #[serde(rename = "SSD")]
    #[strum(serialize = "SSD")]
    SlowSpeedDiesel,
    #[serde(rename = "MSD")]
    #[strum(serialize = "MSD")]
    MediumSpeedDiesel,
    #[serde(rename = "HSD")]
    #[strum(serialize = "HSD")]
    HighSpeedDiesel,
    #[serde(rename = "LNG-Otto-MS")]
    #[strum(serialize = "LNG-Otto-MS")]
    LngOttoMediumSpeed,
    #[serde(rename = "LBSI")]
    #[strum(serialize = "LBSI")]
    LeanBurnSparkIgnited,
    #[serde(rename = "gas_turbine")]
    #[strum(serialize = "gas_turbine")]
    GasTurbine,
    #[serde(rename = "steam_turbine")]
    #[strum(serialize = "steam_turbine")]
    SteamTurbine,
    #[serde(rename = "auxiliary_engine")]
    #[strum(serialize = "auxiliary_engine")]
    AuxiliaryEngine,
    #[serde(rename = "steam_boiler")]
    #[strum(serialize = "steam_boiler")]
    SteamBoiler,
}

impl Machinery {
    /// Turbines, auxiliary engines and boilers run at a fixed consumption regardless of load.
    pub fn is_load_dependent(&self) -> bool {
        match self {
            Machinery::SlowSpeedDiesel
            | Machinery::MediumSpeedDiesel
            | Machinery::HighSpeedDiesel
            | Machinery::LngOttoMediumSpeed
            | Machinery::LeanBurnSparkIgnited => true,
            Machinery::GasTurbine
            | Machinery::SteamTurbine
            | Machinery::AuxiliaryEngine
            | Machinery::SteamBoiler => false,
        }
    }
}

impl From<EngineType> for Machinery {
    fn from(value: EngineType) -> Self {
        match value {
            EngineType::SlowSpeedDiesel => Machinery::SlowSpeedDiesel,
            EngineType::MediumSpeedDiesel => Machinery::MediumSpeedDiesel,
            EngineType::HighSpeedDiesel => Machinery::HighSpeedDiesel,
            EngineType::LngOttoMediumSpeed => Machinery::LngOttoMediumSpeed,
            EngineType::LeanBurnSparkIgnited => Machinery::LeanBurnSparkIgnited,
            EngineType::GasTurbine => Machinery::GasTurbine,
            EngineType::SteamTurbine => Machinery::SteamTurbine,
        }
    }
}

/// The reference data driving the estimation, swappable as a whole.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceTables {
    pub specific_fuel_consumption: Vec<SfcBaseline>,
    pub load_correction: LoadCorrection,
    pub auxiliary_power: Vec<AuxiliaryPowerTable>,
    pub speed_power: SpeedPowerReference,
}

#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct SfcBaseline {
    pub machinery: Machinery,
    pub fuel_type: FuelType,
    pub engine_age: EngineAge,
    pub g_per_kwh: f64,
}

/// Second order polynomial scaling the SFC baseline of load dependent machinery.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadCorrection {
    pub quadratic: f64,
    pub linear: f64,
    pub constant: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuxiliaryPowerTable {
    pub vessel_type: VesselType,
    /// Ordered by ascending `min_size`, the first band starts at zero.
    pub bands: Vec<AuxiliaryPowerBand>,
}

#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuxiliaryPowerBand {
    pub min_size: f64,
    pub at_berth: AuxiliaryPower,
    pub anchored: AuxiliaryPower,
    pub manoeuvring: AuxiliaryPower,
    pub at_sea: AuxiliaryPower,
}

#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuxiliaryPower {
    pub auxiliary_engine_kw: f64,
    pub boiler_kw: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeedPowerReference {
    pub speed_exponent: f64,
    pub draft_exponent: f64,
    pub fouling_correction: f64,
    pub default_speed_power_correction: f64,
    pub weather_correction: Vec<WeatherCorrection>,
    pub speed_power_correction: Vec<SpeedPowerCorrection>,
}

#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherCorrection {
    pub vessel_type: VesselType,
    pub factor: f64,
    #[serde(default)]
    pub small_vessel: Option<SmallVesselCorrection>,
}

/// Applies to vessels with a size strictly below `below_size`.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct SmallVesselCorrection {
    pub below_size: f64,
    pub factor: f64,
}

/// Overrides the default speed-power correction, optionally only above a given size.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeedPowerCorrection {
    pub vessel_type: VesselType,
    pub factor: f64,
    #[serde(default)]
    pub above_size: Option<f64>,
}

/// Coefficients of the admiralty formula resolved for a single vessel.
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct AdmiraltyCoefficients {
    pub speed_exponent: f64,
    pub draft_exponent: f64,
    pub fouling_correction: f64,
    pub weather_correction: f64,
    pub speed_power_correction: f64,
}

impl LoadCorrection {
    pub fn factor(&self, load_factor: f64) -> f64 {
        self.quadratic * load_factor.powi(2) + self.linear * load_factor + self.constant
    }
}

impl AuxiliaryPowerBand {
    pub fn demand(&self, mode: OperationMode) -> AuxiliaryPower {
        match mode {
            OperationMode::AtSea => self.at_sea,
            OperationMode::Manoeuvring => self.manoeuvring,
            OperationMode::AtBerth => self.at_berth,
            OperationMode::Anchored => self.anchored,
        }
    }
}

impl ReferenceTables {
    /// Reference data of the Fourth IMO GHG Study 2020.
    pub fn imo_2020() -> Arc<ReferenceTables> {
        IMO_2020.clone()
    }

    #[instrument]
    pub fn from_file(path: &Path) -> Result<ReferenceTables> {
        let tables = Self::from_source(File::from(path).format(FileFormat::Yaml))?;
        info!("loaded reference tables from file");
        Ok(tables)
    }

    pub fn from_yaml_str(contents: &str) -> Result<ReferenceTables> {
        Self::from_source(File::from_str(contents, FileFormat::Yaml))
    }

    fn from_source<T>(source: T) -> Result<ReferenceTables>
    where
        T: config::Source + Send + Sync + 'static,
    {
        let tables: ReferenceTables = Config::builder()
            .add_source(source)
            .build()
            .context(ConfigSnafu)?
            .try_deserialize()
            .context(ConfigSnafu)?;
        tables.validate()?;
        Ok(tables)
    }

    /// Checks that every vessel type has auxiliary power and weather correction entries,
    /// and that size bands are usable for lookups.
    pub fn validate(&self) -> Result<()> {
        for vessel_type in VesselType::iter() {
            let tables = self
                .auxiliary_power
                .iter()
                .filter(|t| t.vessel_type == vessel_type)
                .count();
            if tables != 1 {
                return InvalidTablesSnafu {
                    reason: format!(
                        "expected one auxiliary power table for '{vessel_type}', found {tables}"
                    ),
                }
                .fail();
            }
            if !self
                .speed_power
                .weather_correction
                .iter()
                .any(|w| w.vessel_type == vessel_type)
            {
                return InvalidTablesSnafu {
                    reason: format!("missing weather correction for '{vessel_type}'"),
                }
                .fail();
            }
        }

        for table in &self.auxiliary_power {
            match table.bands.first() {
                Some(band) if band.min_size == 0. => {}
                _ => {
                    return InvalidTablesSnafu {
                        reason: format!(
                            "auxiliary power bands of '{}' must start at size 0",
                            table.vessel_type
                        ),
                    }
                    .fail();
                }
            }
            if table.bands.windows(2).any(|w| w[0].min_size >= w[1].min_size) {
                return InvalidTablesSnafu {
                    reason: format!(
                        "auxiliary power bands of '{}' are not strictly ascending",
                        table.vessel_type
                    ),
                }
                .fail();
            }
        }

        let reference = &self.speed_power;
        let factors = reference
            .weather_correction
            .iter()
            .flat_map(|w| [Some(w.factor), w.small_vessel.map(|s| s.factor)])
            .flatten()
            .chain([reference.fouling_correction]);
        for factor in factors {
            if !(factor.is_finite() && factor > 0.) {
                return InvalidTablesSnafu {
                    reason: format!("efficiency factor '{factor}' must be positive"),
                }
                .fail();
            }
        }

        if let Some(baseline) = self
            .specific_fuel_consumption
            .iter()
            .find(|b| !(b.g_per_kwh.is_finite() && b.g_per_kwh > 0.))
        {
            return InvalidTablesSnafu {
                reason: format!(
                    "SFC baseline of '{}', '{}', '{}' must be positive",
                    baseline.machinery, baseline.fuel_type, baseline.engine_age
                ),
            }
            .fail();
        }

        Ok(())
    }

    /// Baseline SFC in g/kWh, before any load correction.
    pub fn sfc(
        &self,
        machinery: Machinery,
        engine_age: EngineAge,
        fuel_type: FuelType,
    ) -> Result<f64> {
        self.specific_fuel_consumption
            .iter()
            .find(|b| {
                b.machinery == machinery && b.fuel_type == fuel_type && b.engine_age == engine_age
            })
            .map(|b| b.g_per_kwh)
            .context(SfcLookupSnafu {
                machinery,
                fuel_type,
                engine_age,
            })
    }

    /// The size band with the largest lower bound not exceeding `size`.
    pub fn auxiliary_power_band(
        &self,
        vessel_type: VesselType,
        size: f64,
    ) -> Result<&AuxiliaryPowerBand> {
        self.auxiliary_power
            .iter()
            .find(|t| t.vessel_type == vessel_type)
            .and_then(|t| t.bands.iter().rev().find(|b| size >= b.min_size))
            .context(AuxiliaryPowerLookupSnafu { vessel_type, size })
    }

    pub fn admiralty(&self, vessel_type: VesselType, size: f64) -> Result<AdmiraltyCoefficients> {
        let reference = &self.speed_power;

        let weather = reference
            .weather_correction
            .iter()
            .find(|w| w.vessel_type == vessel_type)
            .context(AdmiraltyLookupSnafu { vessel_type })?;
        let weather_correction = match weather.small_vessel {
            Some(small) if size < small.below_size => small.factor,
            _ => weather.factor,
        };

        let speed_power_correction = reference
            .speed_power_correction
            .iter()
            .find(|c| c.vessel_type == vessel_type && c.above_size.is_none_or(|s| size > s))
            .map(|c| c.factor)
            .unwrap_or(reference.default_speed_power_correction);

        Ok(AdmiraltyCoefficients {
            speed_exponent: reference.speed_exponent,
            draft_exponent: reference.draft_exponent,
            fouling_correction: reference.fouling_correction,
            weather_correction,
            speed_power_correction,
        })
    }
}
