use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Propulsion engine categories recognized by the Fourth IMO GHG Study 2020.
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
pub enum EngineType {
    /// Oil engine running at or below 300 RPM.
    #[serde(rename = "SSD")]
    #[strum(serialize = "SSD")]
    SlowSpeedDiesel,
    /// Oil engine running between 300 and 900 RPM.
    #[serde(rename = "MSD")]
    #[strum(serialize = "MSD")]
    MediumSpeedDiesel,
    /// Oil engine running above 900 RPM.
    #[serde(rename = "HSD")]
    #[strum(serialize = "HSD")]
    HighSpeedDiesel,
    /// Four-stroke, medium-speed dual-fuel engine on the Otto cycle.
    #[serde(rename = "LNG-Otto-MS")]
    #[strum(serialize = "LNG-Otto-MS")]
    LngOttoMediumSpeed,
    /// Lean-burn spark-ignited LNG engine.
    #[serde(rename = "LBSI")]
    #[strum(serialize = "LBSI")]
    LeanBurnSparkIgnited,
    #[serde(rename = "gas_turbine")]
    #[strum(serialize = "gas_turbine")]
    GasTurbine,
    /// Includes oil-based fuels, LNG and boil-off gas.
    #[serde(rename = "steam_turbine")]
    #[strum(serialize = "steam_turbine")]
    SteamTurbine,
}

/// Engine age buckets used by the SFC baseline table.
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
pub enum EngineAge {
    #[serde(rename = "before_1984")]
    #[strum(serialize = "before_1984")]
    Before1984,
    #[serde(rename = "1984-2000")]
    #[strum(serialize = "1984-2000")]
    From1984To2000,
    #[serde(rename = "after_2000")]
    #[strum(serialize = "after_2000")]
    After2000,
}

impl EngineAge {
    pub fn from_building_year(engine_building_year: u32) -> EngineAge {
        match engine_building_year {
            ..1984 => EngineAge::Before1984,
            1984..2001 => EngineAge::From1984To2000,
            2001.. => EngineAge::After2000,
        }
    }
}
