use super::{StationaryFuel, VesselContext};
use crate::{AuxiliarySfc, Result};
use cetos_core::{GRAMS_PER_KILOGRAM, OperationMode};
use tracing::debug;

pub(crate) fn stationary_fuel(
    ctx: &VesselContext<'_>,
    auxiliary_sfc: &AuxiliarySfc,
    mode: OperationMode,
    time_h: f64,
) -> Result<StationaryFuel> {
    let demand = ctx.auxiliary_demand(mode)?;

    let auxiliary_engines_kg = demand.auxiliary_engine_kw
        * (auxiliary_sfc.auxiliary_engine_g_per_kwh / GRAMS_PER_KILOGRAM)
        * time_h;
    let boilers_kg =
        demand.boiler_kw * (auxiliary_sfc.steam_boiler_g_per_kwh / GRAMS_PER_KILOGRAM) * time_h;

    let fuel = if ctx.settings.include_steam_boilers {
        StationaryFuel {
            auxiliary_engines_kg,
            steam_boilers_kg: Some(boilers_kg),
            subtotal_kg: auxiliary_engines_kg + boilers_kg,
        }
    } else {
        StationaryFuel {
            auxiliary_engines_kg,
            steam_boilers_kg: None,
            subtotal_kg: auxiliary_engines_kg,
        }
    };

    debug!("{mode} for {time_h} h, kg: {}", fuel.subtotal_kg);

    Ok(fuel)
}
