use cetos_core::{FuelType, KILOGRAMS_PER_TONNE, LITERS_PER_CUBIC_METER, OperationMode};
use serde::Serialize;
use strum::IntoEnumIterator;

/// Fuel burned per operation mode, in kilograms.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FuelBreakdown {
    pub fuel_type: FuelType,
    pub at_sea: SailingFuel,
    pub manoeuvring: SailingFuel,
    #[serde(rename = "berth")]
    pub at_berth: StationaryFuel,
    #[serde(rename = "anchor")]
    pub anchored: StationaryFuel,
    pub total_kg: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SailingFuel {
    pub propulsion_engines_kg: f64,
    pub auxiliary_engines_kg: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steam_boilers_kg: Option<f64>,
    pub subtotal_kg: f64,
    pub total_time_h: f64,
    pub total_distance_nm: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_fuel_consumption_l_per_nm: Option<f64>,
    pub legs: Vec<LegFuel>,
}

#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct LegFuel {
    pub transit_time_h: f64,
    pub load_factor: f64,
    pub propulsion_power_kw: f64,
    pub sfc_g_per_kwh: f64,
    pub propulsion_engines_kg: f64,
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Serialize)]
pub struct StationaryFuel {
    pub auxiliary_engines_kg: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steam_boilers_kg: Option<f64>,
    pub subtotal_kg: f64,
}

/// Fuel burned by the propulsion engines alone, over every sailed leg.
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct PropulsionFuel {
    pub fuel_type: FuelType,
    pub propulsion_engines_kg: f64,
    pub total_distance_nm: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_fuel_consumption_l_per_nm: Option<f64>,
}

impl FuelBreakdown {
    pub fn mode_kg(&self, mode: OperationMode) -> f64 {
        match mode {
            OperationMode::AtSea => self.at_sea.subtotal_kg,
            OperationMode::Manoeuvring => self.manoeuvring.subtotal_kg,
            OperationMode::AtBerth => self.at_berth.subtotal_kg,
            OperationMode::Anchored => self.anchored.subtotal_kg,
        }
    }

    pub fn modes(&self) -> impl Iterator<Item = (OperationMode, f64)> + '_ {
        OperationMode::iter().map(|m| (m, self.mode_kg(m)))
    }

    pub fn total_tonnes(&self) -> f64 {
        self.total_kg / KILOGRAMS_PER_TONNE
    }

    pub fn total_volume_m3(&self) -> f64 {
        self.fuel_type.mass_to_volume_m3(self.total_kg)
    }
}

/// Average consumption in litres per nautical mile, undefined without any distance.
pub(crate) fn average_l_per_nm(fuel_type: FuelType, mass_kg: f64, distance_nm: f64) -> Option<f64> {
    (distance_nm > 0.).then(|| {
        fuel_type.mass_to_volume_m3(mass_kg) * LITERS_PER_CUBIC_METER / distance_nm
    })
}
