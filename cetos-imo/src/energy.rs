use crate::{
    FuelEstimator, LOW_LOAD_CUTOFF, Result, fuel_estimation::VesselContext, transit_time_h,
};
use cetos_core::{OperationMode, VesselDescriptor, VoyageLeg, VoyageProfile};
use serde::Serialize;
use tracing::{info, instrument};

/// Energy delivered per operation mode, in kWh, with the peak power demand of each mode.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnergyBreakdown {
    pub at_sea: SailingEnergy,
    pub manoeuvring: SailingEnergy,
    #[serde(rename = "berth")]
    pub at_berth: StationaryEnergy,
    #[serde(rename = "anchor")]
    pub anchored: StationaryEnergy,
    pub total_kwh: f64,
    pub maximum_required_total_power_kw: f64,
    pub maximum_required_propulsion_power_kw: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SailingEnergy {
    pub propulsion_engines_kwh: f64,
    pub auxiliary_engines_kwh: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steam_boilers_kwh: Option<f64>,
    pub subtotal_kwh: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_energy_consumption_kwh_per_nm: Option<f64>,
    pub maximum_required_total_power_kw: f64,
    pub maximum_required_propulsion_power_kw: f64,
    /// Highest raw propulsion load of the mode, absent without legs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum_engine_load_percent: Option<f64>,
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Serialize)]
pub struct StationaryEnergy {
    pub auxiliary_engines_kwh: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steam_boilers_kwh: Option<f64>,
    pub subtotal_kwh: f64,
    pub maximum_required_total_power_kw: f64,
}

impl EnergyBreakdown {
    pub fn mode_kwh(&self, mode: OperationMode) -> f64 {
        match mode {
            OperationMode::AtSea => self.at_sea.subtotal_kwh,
            OperationMode::Manoeuvring => self.manoeuvring.subtotal_kwh,
            OperationMode::AtBerth => self.at_berth.subtotal_kwh,
            OperationMode::Anchored => self.anchored.subtotal_kwh,
        }
    }
}

impl FuelEstimator {
    #[instrument(skip_all, fields(vessel_type = %vessel.vessel_type()))]
    pub fn estimate_energy(
        &self,
        vessel: &VesselDescriptor,
        profile: &VoyageProfile,
    ) -> Result<EnergyBreakdown> {
        let ctx = VesselContext::new(vessel, self.tables(), self.settings())?;

        let sailing = |mode: OperationMode| sailing_energy(&ctx, mode, profile.legs(mode));
        let stationary = |mode: OperationMode| stationary_energy(&ctx, mode, profile.time_h(mode));

        let at_sea = sailing(OperationMode::AtSea)?;
        let manoeuvring = sailing(OperationMode::Manoeuvring)?;
        let at_berth = stationary(OperationMode::AtBerth)?;
        let anchored = stationary(OperationMode::Anchored)?;

        let total_kwh = at_berth.subtotal_kwh
            + anchored.subtotal_kwh
            + manoeuvring.subtotal_kwh
            + at_sea.subtotal_kwh;
        let maximum_required_total_power_kw = [
            at_berth.maximum_required_total_power_kw,
            anchored.maximum_required_total_power_kw,
            manoeuvring.maximum_required_total_power_kw,
            at_sea.maximum_required_total_power_kw,
        ]
        .into_iter()
        .fold(0., f64::max);
        let maximum_required_propulsion_power_kw = manoeuvring
            .maximum_required_propulsion_power_kw
            .max(at_sea.maximum_required_propulsion_power_kw);

        info!("estimated energy consumption, total_kwh: {total_kwh}");

        Ok(EnergyBreakdown {
            at_sea,
            manoeuvring,
            at_berth,
            anchored,
            total_kwh,
            maximum_required_total_power_kw,
            maximum_required_propulsion_power_kw,
        })
    }
}

fn sailing_energy(
    ctx: &VesselContext<'_>,
    mode: OperationMode,
    legs: &[VoyageLeg],
) -> Result<SailingEnergy> {
    let include_steam_boilers = ctx.settings.include_steam_boilers;
    if legs.is_empty() {
        return Ok(SailingEnergy {
            steam_boilers_kwh: include_steam_boilers.then_some(0.),
            ..Default::default()
        });
    }

    let demand = ctx.auxiliary_demand(mode)?;
    let installed_power_kw = ctx.power.installed_power_kw();

    let mut total_time_h = 0.;
    let mut total_distance_nm = 0.;
    let mut propulsion_engines_kwh = 0.;
    let mut maximum_propulsion_power_kw: f64 = 0.;
    let mut maximum_load: f64 = 0.;
    for leg in legs {
        let time_h = transit_time_h(leg)?;
        let load = ctx.power.engine_load(leg);
        total_time_h += time_h;
        total_distance_nm += leg.distance_nm();
        maximum_load = maximum_load.max(load);

        if !(ctx.settings.limit_low_load && load < LOW_LOAD_CUTOFF) {
            propulsion_engines_kwh += installed_power_kw * load * time_h;
            maximum_propulsion_power_kw =
                maximum_propulsion_power_kw.max(installed_power_kw * load);
        }
    }

    let auxiliary_engines_kwh = demand.auxiliary_engine_kw * total_time_h;
    let steam_boilers_kwh = include_steam_boilers.then(|| demand.boiler_kw * total_time_h);

    let (subtotal_kwh, auxiliary_power_kw) = match steam_boilers_kwh {
        Some(boilers) => (
            auxiliary_engines_kwh + boilers + propulsion_engines_kwh,
            demand.auxiliary_engine_kw + demand.boiler_kw,
        ),
        None => (
            auxiliary_engines_kwh + propulsion_engines_kwh,
            demand.auxiliary_engine_kw,
        ),
    };

    Ok(SailingEnergy {
        propulsion_engines_kwh,
        auxiliary_engines_kwh,
        steam_boilers_kwh,
        subtotal_kwh,
        average_energy_consumption_kwh_per_nm: (total_distance_nm > 0.)
            .then(|| subtotal_kwh / total_distance_nm),
        maximum_required_total_power_kw: auxiliary_power_kw + maximum_propulsion_power_kw,
        maximum_required_propulsion_power_kw: maximum_propulsion_power_kw,
        maximum_engine_load_percent: Some(maximum_load * 100.),
    })
}

fn stationary_energy(
    ctx: &VesselContext<'_>,
    mode: OperationMode,
    time_h: f64,
) -> Result<StationaryEnergy> {
    let demand = ctx.auxiliary_demand(mode)?;
    let auxiliary_engines_kwh = demand.auxiliary_engine_kw * time_h;

    let (steam_boilers_kwh, subtotal_kwh, power_kw) = if ctx.settings.include_steam_boilers {
        let boilers_kwh = demand.boiler_kw * time_h;
        (
            Some(boilers_kwh),
            auxiliary_engines_kwh + boilers_kwh,
            demand.auxiliary_engine_kw + demand.boiler_kw,
        )
    } else {
        (None, auxiliary_engines_kwh, demand.auxiliary_engine_kw)
    };

    Ok(StationaryEnergy {
        auxiliary_engines_kwh,
        steam_boilers_kwh,
        subtotal_kwh,
        maximum_required_total_power_kw: if time_h == 0. { 0. } else { power_kw },
    })
}
