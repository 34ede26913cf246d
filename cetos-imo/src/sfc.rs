use crate::{Machinery, ReferenceTables, Result, installed_propulsion_power_kw};
use cetos_core::{EngineAge, FuelType, OperationMode, VesselDescriptor};
use serde::Serialize;
use tracing::warn;

/// Propulsion engines below this load are assumed to be shut down when low loads are limited.
pub const LOW_LOAD_CUTOFF: f64 = 0.07;
/// Manoeuvring is expected below this load, and sailing at sea above it.
pub const MANOEUVRING_LOAD_THRESHOLD: f64 = 0.2;

/// Operating point of the propulsion engines for a single leg.
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct EngineLoad {
    /// Required power over installed power, above 1 when the engines are overloaded.
    pub load_factor: f64,
    pub sfc_g_per_kwh: f64,
}

impl EngineLoad {
    pub fn reported_load_factor(&self) -> f64 {
        self.load_factor.clamp(0., 1.)
    }

    pub fn exceeds_rating(&self) -> bool {
        self.load_factor > 1.
    }

    pub fn below_cutoff(&self) -> bool {
        self.load_factor < LOW_LOAD_CUTOFF
    }
}

/// SFC in g/kWh of `machinery` at `load_factor`, load independent machinery
/// keeps its baseline.
pub fn specific_fuel_consumption(
    tables: &ReferenceTables,
    machinery: Machinery,
    fuel_type: FuelType,
    engine_age: EngineAge,
    load_factor: f64,
) -> Result<f64> {
    let baseline = tables.sfc(machinery, engine_age, fuel_type)?;
    if machinery.is_load_dependent() {
        Ok(baseline * tables.load_correction.factor(load_factor))
    } else {
        Ok(baseline)
    }
}

pub fn resolve_engine_load(
    vessel: &VesselDescriptor,
    power_kw: f64,
    tables: &ReferenceTables,
) -> Result<EngineLoad> {
    let load_factor = power_kw / installed_propulsion_power_kw(vessel);
    let sfc_g_per_kwh = specific_fuel_consumption(
        tables,
        vessel.propulsion_engine_type().into(),
        vessel.propulsion_engine_fuel_type(),
        vessel.propulsion_engine_age(),
        load_factor,
    )?;

    Ok(EngineLoad {
        load_factor,
        sfc_g_per_kwh,
    })
}

/// Logs engine loads that are unexpected for the mode they were sailed in.
pub fn cross_check(mode: OperationMode, engine_load: &EngineLoad) {
    let load_factor = engine_load.load_factor;
    if engine_load.exceeds_rating() {
        warn!(
            "propulsion load exceeds installed power, \
             mode: {mode}, load_factor: {load_factor}, reported: {}",
            engine_load.reported_load_factor()
        );
    }
    match mode {
        OperationMode::Manoeuvring if load_factor >= MANOEUVRING_LOAD_THRESHOLD => {
            warn!("high load while manoeuvring, load_factor: {load_factor}");
        }
        OperationMode::AtSea if load_factor < MANOEUVRING_LOAD_THRESHOLD => {
            warn!("low load at sea, load_factor: {load_factor}");
        }
        OperationMode::AtSea
        | OperationMode::Manoeuvring
        | OperationMode::AtBerth
        | OperationMode::Anchored => {}
    }
}
