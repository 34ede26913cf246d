use super::{LegFuel, SailingFuel, VesselContext, breakdown::average_l_per_nm};
use crate::{AuxiliarySfc, Result, cross_check, resolve_engine_load, transit_time_h};
use cetos_core::{GRAMS_PER_KILOGRAM, OperationMode, VoyageLeg};
use tracing::debug;

pub(crate) fn leg_fuel(
    ctx: &VesselContext<'_>,
    mode: OperationMode,
    leg: &VoyageLeg,
) -> Result<LegFuel> {
    let transit_time_h = transit_time_h(leg)?;
    let propulsion_power_kw = ctx.power.required_power_kw(leg);
    let engine_load = resolve_engine_load(ctx.vessel, propulsion_power_kw, ctx.tables)?;
    cross_check(mode, &engine_load);

    let propulsion_engines_kg = if ctx.settings.limit_low_load && engine_load.below_cutoff() {
        0.
    } else {
        propulsion_power_kw * (engine_load.sfc_g_per_kwh / GRAMS_PER_KILOGRAM) * transit_time_h
    };

    debug!(
        "{mode} leg, load_factor: {}, sfc: {}, kg: {propulsion_engines_kg}",
        engine_load.load_factor, engine_load.sfc_g_per_kwh
    );

    Ok(LegFuel {
        transit_time_h,
        load_factor: engine_load.load_factor,
        propulsion_power_kw,
        sfc_g_per_kwh: engine_load.sfc_g_per_kwh,
        propulsion_engines_kg,
    })
}

pub(crate) fn sailing_fuel(
    ctx: &VesselContext<'_>,
    auxiliary_sfc: &AuxiliarySfc,
    mode: OperationMode,
    legs: &[VoyageLeg],
) -> Result<SailingFuel> {
    if legs.is_empty() {
        return Ok(SailingFuel {
            steam_boilers_kg: ctx.settings.include_steam_boilers.then_some(0.),
            ..Default::default()
        });
    }

    let demand = ctx.auxiliary_demand(mode)?;
    let legs = legs
        .iter()
        .map(|leg| leg_fuel(ctx, mode, leg).map(|fuel| (leg.distance_nm(), fuel)))
        .collect::<Result<Vec<_>>>()?;

    let total_time_h: f64 = legs.iter().map(|(_, l)| l.transit_time_h).sum();
    let total_distance_nm: f64 = legs.iter().map(|(d, _)| d).sum();
    let propulsion_engines_kg: f64 = legs.iter().map(|(_, l)| l.propulsion_engines_kg).sum();

    let auxiliary_engines_kg = demand.auxiliary_engine_kw
        * (auxiliary_sfc.auxiliary_engine_g_per_kwh / GRAMS_PER_KILOGRAM)
        * total_time_h;
    let steam_boilers_kg = ctx.settings.include_steam_boilers.then(|| {
        demand.boiler_kw * (auxiliary_sfc.steam_boiler_g_per_kwh / GRAMS_PER_KILOGRAM)
            * total_time_h
    });

    let subtotal_kg = match steam_boilers_kg {
        Some(boilers) => auxiliary_engines_kg + boilers + propulsion_engines_kg,
        None => auxiliary_engines_kg + propulsion_engines_kg,
    };
    let fuel_type = ctx.vessel.propulsion_engine_fuel_type();

    Ok(SailingFuel {
        propulsion_engines_kg,
        auxiliary_engines_kg,
        steam_boilers_kg,
        subtotal_kg,
        total_time_h,
        total_distance_nm,
        average_fuel_consumption_l_per_nm: average_l_per_nm(
            fuel_type,
            subtotal_kg,
            total_distance_nm,
        ),
        legs: legs.into_iter().map(|(_, l)| l).collect(),
    })
}
