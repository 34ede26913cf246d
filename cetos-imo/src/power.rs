use crate::{
    AdmiraltyCoefficients, EstimationSettings, ReferenceTables, Result, error::error::DomainSnafu,
};
use cetos_core::{VesselDescriptor, VoyageLeg};

/// Total rated propulsion power in kW, only half the engines propel a double-ended vessel.
pub fn installed_propulsion_power_kw(vessel: &VesselDescriptor) -> f64 {
    let installed =
        vessel.number_of_propulsion_engines() as f64 * vessel.propulsion_engine_power_kw();
    if vessel.double_ended() {
        installed / 2.
    } else {
        installed
    }
}

pub fn transit_time_h(leg: &VoyageLeg) -> Result<f64> {
    let speed_kn = leg.speed_kn();
    if !(speed_kn.is_finite() && speed_kn > 0.) {
        return DomainSnafu {
            quantity: "transit time",
            reason: format!("speed '{speed_kn}' kn must be positive"),
        }
        .fail();
    }
    Ok(leg.distance_nm() / speed_kn)
}

/// Admiralty formula for a single vessel, scaling the installed power by the cube of
/// the relative speed and the 2/3 power of the relative draft.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PowerModel {
    coefficients: AdmiraltyCoefficients,
    design_speed_kn: f64,
    design_draft_m: f64,
    installed_power_kw: f64,
}

impl PowerModel {
    pub fn new(
        vessel: &VesselDescriptor,
        tables: &ReferenceTables,
        settings: &EstimationSettings,
    ) -> Result<Self> {
        settings.validate()?;

        let mut coefficients = tables.admiralty(vessel.vessel_type(), vessel.size_or_smallest())?;
        if let Some(correction) = settings.speed_power_correction {
            coefficients.speed_power_correction = correction;
        }

        Ok(Self {
            coefficients,
            design_speed_kn: vessel.design_speed_kn(),
            design_draft_m: vessel.design_draft_m(),
            installed_power_kw: installed_propulsion_power_kw(vessel),
        })
    }

    pub fn coefficients(&self) -> &AdmiraltyCoefficients {
        &self.coefficients
    }

    pub fn installed_power_kw(&self) -> f64 {
        self.installed_power_kw
    }

    /// Share of the installed power required to sail `leg`, not bounded above by 1.
    pub fn engine_load(&self, leg: &VoyageLeg) -> f64 {
        let c = &self.coefficients;
        c.speed_power_correction
            * ((leg.draft_m() / self.design_draft_m).powf(c.draft_exponent)
                * (leg.speed_kn() / self.design_speed_kn).powf(c.speed_exponent))
            / (c.fouling_correction * c.weather_correction)
    }

    pub fn required_power_kw(&self, leg: &VoyageLeg) -> f64 {
        self.installed_power_kw * self.engine_load(leg)
    }
}

/// Propulsion power in kW required to sail `leg` with `vessel`.
pub fn required_power_kw(
    vessel: &VesselDescriptor,
    leg: &VoyageLeg,
    tables: &ReferenceTables,
    settings: &EstimationSettings,
) -> Result<f64> {
    Ok(PowerModel::new(vessel, tables, settings)?.required_power_kw(leg))
}
