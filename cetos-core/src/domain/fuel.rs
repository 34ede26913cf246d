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
pub enum FuelType {
    /// Heavy Fuel Oil
    #[serde(rename = "HFO")]
    #[strum(serialize = "HFO")]
    Hfo,
    /// Marine Diesel Oil
    #[serde(rename = "MDO")]
    #[strum(serialize = "MDO")]
    Mdo,
    /// Methanol
    #[serde(rename = "MeOH")]
    #[strum(serialize = "MeOH")]
    Methanol,
    /// Liquefied Natural Gas
    #[serde(rename = "LNG")]
    #[strum(serialize = "LNG")]
    Lng,
}

impl FuelType {
    // Source: https://wwwcdn.imo.org/localresources/en/OurWork/Environment/Documents/Fourth%20IMO%20GHG%20Study%202020%20-%20Full%20report%20and%20annexes.pdf
    //         Table 10, page 294
    pub fn density_kg_per_m3(&self) -> f64 {
        match self {
            FuelType::Hfo => 1001.,
            FuelType::Mdo => 895.,
            FuelType::Methanol => 790.,
            FuelType::Lng => 450.,
        }
    }

    pub fn mass_to_volume_m3(&self, mass_kg: f64) -> f64 {
        mass_kg / self.density_kg_per_m3()
    }

    pub fn volume_to_mass_kg(&self, volume_m3: f64) -> f64 {
        volume_m3 * self.density_kg_per_m3()
    }
}
