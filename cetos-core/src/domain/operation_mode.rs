use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

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
pub enum OperationMode {
    #[serde(rename = "at_sea")]
    #[strum(serialize = "at_sea")]
    AtSea,
    #[serde(rename = "manoeuvring")]
    #[strum(serialize = "manoeuvring")]
    Manoeuvring,
    #[serde(rename = "berth", alias = "at_berth")]
    #[strum(to_string = "berth", serialize = "at_berth")]
    AtBerth,
    #[serde(rename = "anchor", alias = "anchored")]
    #[strum(to_string = "anchor", serialize = "anchored")]
    Anchored,
}

impl OperationMode {
    /// Sailing modes are described by voyage legs, the others by a stationary duration.
    pub fn is_sailing(&self) -> bool {
        match self {
            OperationMode::AtSea | OperationMode::Manoeuvring => true,
            OperationMode::AtBerth | OperationMode::Anchored => false,
        }
    }
}
