use crate::{
    AuxiliaryPower, Machinery, ReferenceTables, Result, installed_propulsion_power_kw,
    specific_fuel_consumption,
};
use cetos_core::{OperationMode, VesselDescriptor};
use serde::Serialize;

/// Vessels with less installed propulsion power have no auxiliary engines or boilers.
pub const MIN_AUXILIARY_PROPULSION_POWER_KW: f64 = 150.;
/// Below this installed propulsion power the auxiliary engine demand is a share of it.
pub const TABULATED_AUXILIARY_PROPULSION_POWER_KW: f64 = 500.;
pub const SMALL_VESSEL_AUXILIARY_SHARE: f64 = 0.05;

/// Auxiliary engine and boiler demand of `vessel` in `mode`, in kW.
pub fn auxiliary_power_demand(
    vessel: &VesselDescriptor,
    mode: OperationMode,
    tables: &ReferenceTables,
) -> Result<AuxiliaryPower> {
    let band = tables.auxiliary_power_band(vessel.vessel_type(), vessel.size_or_smallest())?;
    let tabulated = band.demand(mode);
    let installed = installed_propulsion_power_kw(vessel);

    Ok(if installed < MIN_AUXILIARY_PROPULSION_POWER_KW {
        AuxiliaryPower::default()
    } else if installed < TABULATED_AUXILIARY_PROPULSION_POWER_KW {
        AuxiliaryPower {
            auxiliary_engine_kw: SMALL_VESSEL_AUXILIARY_SHARE * installed,
            boiler_kw: tabulated.boiler_kw,
        }
    } else {
        tabulated
    })
}

/// Load independent SFC of the auxiliary consumers, running on the propulsion fuel.
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct AuxiliarySfc {
    pub auxiliary_engine_g_per_kwh: f64,
    pub steam_boiler_g_per_kwh: f64,
}

impl AuxiliarySfc {
    pub fn new(vessel: &VesselDescriptor, tables: &ReferenceTables) -> Result<Self> {
        let lookup = |machinery| {
            specific_fuel_consumption(
                tables,
                machinery,
                vessel.propulsion_engine_fuel_type(),
                vessel.propulsion_engine_age(),
                0.,
            )
        };
        Ok(Self {
            auxiliary_engine_g_per_kwh: lookup(Machinery::AuxiliaryEngine)?,
            steam_boiler_g_per_kwh: lookup(Machinery::SteamBoiler)?,
        })
    }
}
