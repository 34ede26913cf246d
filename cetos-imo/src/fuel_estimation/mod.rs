use crate::{
    AuxiliaryPower, AuxiliarySfc, EstimationSettings, PowerModel, ReferenceTables, Result,
    Settings, auxiliary_power_demand,
};
use cetos_core::{OperationMode, VesselDescriptor, VoyageLeg, VoyageProfile};
use std::sync::Arc;
use strum::IntoEnumIterator;
use tracing::{debug, info, instrument};

mod breakdown;
mod sailing;
mod stationary;

pub use breakdown::*;

use breakdown::average_l_per_nm;

/// Estimates fuel consumption of a vessel over a voyage profile with the
/// bottom-up method of the Fourth IMO GHG Study 2020.
#[derive(Debug, Clone)]
pub struct FuelEstimator {
    tables: Arc<ReferenceTables>,
    settings: EstimationSettings,
}

/// Vessel specific state resolved once per estimation.
pub(crate) struct VesselContext<'a> {
    pub vessel: &'a VesselDescriptor,
    pub tables: &'a ReferenceTables,
    pub settings: &'a EstimationSettings,
    pub power: PowerModel,
}

impl<'a> VesselContext<'a> {
    pub fn new(
        vessel: &'a VesselDescriptor,
        tables: &'a ReferenceTables,
        settings: &'a EstimationSettings,
    ) -> Result<Self> {
        Ok(Self {
            vessel,
            tables,
            settings,
            power: PowerModel::new(vessel, tables, settings)?,
        })
    }

    pub fn auxiliary_demand(&self, mode: OperationMode) -> Result<AuxiliaryPower> {
        auxiliary_power_demand(self.vessel, mode, self.tables)
    }

    /// Fails early on propulsion engine, fuel and age combinations without a baseline.
    fn ensure_propulsion_sfc(&self) -> Result<()> {
        self.tables.sfc(
            self.vessel.propulsion_engine_type().into(),
            self.vessel.propulsion_engine_age(),
            self.vessel.propulsion_engine_fuel_type(),
        )?;
        Ok(())
    }
}

impl Default for FuelEstimator {
    fn default() -> Self {
        Self::new(ReferenceTables::imo_2020(), EstimationSettings::default())
    }
}

impl FuelEstimator {
    pub fn new(tables: Arc<ReferenceTables>, settings: EstimationSettings) -> Self {
        Self { tables, settings }
    }

    /// Uses the reference tables file given in `settings`, or the built-in IMO 2020 tables.
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        settings.estimation.validate()?;
        let tables = match &settings.reference_tables {
            Some(path) => Arc::new(ReferenceTables::from_file(path)?),
            None => ReferenceTables::imo_2020(),
        };
        Ok(Self::new(tables, settings.estimation))
    }

    pub fn with_tables(self, tables: Arc<ReferenceTables>) -> Self {
        Self { tables, ..self }
    }

    pub fn with_settings(self, settings: EstimationSettings) -> Self {
        Self { settings, ..self }
    }

    pub fn tables(&self) -> &Arc<ReferenceTables> {
        &self.tables
    }

    pub fn settings(&self) -> &EstimationSettings {
        &self.settings
    }

    #[instrument(skip_all, fields(vessel_type = %vessel.vessel_type()))]
    pub fn estimate(
        &self,
        vessel: &VesselDescriptor,
        profile: &VoyageProfile,
    ) -> Result<FuelBreakdown> {
        let ctx = VesselContext::new(vessel, &self.tables, &self.settings)?;
        ctx.ensure_propulsion_sfc()?;
        let auxiliary_sfc = AuxiliarySfc::new(vessel, &self.tables)?;

        let at_sea = sailing::sailing_fuel(
            &ctx,
            &auxiliary_sfc,
            OperationMode::AtSea,
            profile.legs(OperationMode::AtSea),
        )?;
        let manoeuvring = sailing::sailing_fuel(
            &ctx,
            &auxiliary_sfc,
            OperationMode::Manoeuvring,
            profile.legs(OperationMode::Manoeuvring),
        )?;
        let at_berth = stationary::stationary_fuel(
            &ctx,
            &auxiliary_sfc,
            OperationMode::AtBerth,
            profile.time_h(OperationMode::AtBerth),
        )?;
        let anchored = stationary::stationary_fuel(
            &ctx,
            &auxiliary_sfc,
            OperationMode::Anchored,
            profile.time_h(OperationMode::Anchored),
        )?;

        let total_kg = at_berth.subtotal_kg
            + anchored.subtotal_kg
            + manoeuvring.subtotal_kg
            + at_sea.subtotal_kg;

        info!("estimated fuel consumption, total_kg: {total_kg}");

        Ok(FuelBreakdown {
            fuel_type: vessel.propulsion_engine_fuel_type(),
            at_sea,
            manoeuvring,
            at_berth,
            anchored,
            total_kg,
        })
    }

    /// Fuel burned by the propulsion engines over all legs, at-sea legs first.
    #[instrument(skip_all, fields(vessel_type = %vessel.vessel_type()))]
    pub fn estimate_propulsion(
        &self,
        vessel: &VesselDescriptor,
        profile: &VoyageProfile,
    ) -> Result<PropulsionFuel> {
        let ctx = VesselContext::new(vessel, &self.tables, &self.settings)?;
        ctx.ensure_propulsion_sfc()?;

        let mut propulsion_engines_kg = 0.;
        for mode in OperationMode::iter().filter(OperationMode::is_sailing) {
            for leg in profile.legs(mode) {
                propulsion_engines_kg += sailing::leg_fuel(&ctx, mode, leg)?.propulsion_engines_kg;
            }
        }
        let total_distance_nm: f64 = profile.all_legs().map(VoyageLeg::distance_nm).sum();

        let fuel_type = vessel.propulsion_engine_fuel_type();
        debug!("estimated propulsion fuel, kg: {propulsion_engines_kg}");

        Ok(PropulsionFuel {
            fuel_type,
            propulsion_engines_kg,
            total_distance_nm,
            average_fuel_consumption_l_per_nm: average_l_per_nm(
                fuel_type,
                propulsion_engines_kg,
                total_distance_nm,
            ),
        })
    }
}
