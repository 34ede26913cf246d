use super::validate::{at_least_one, non_negative, positive};
use crate::{EngineAge, EngineType, FuelType, Result, error::error::MissingFieldSnafu};
use serde::{Deserialize, Serialize};
use snafu::OptionExt;
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Vessel categories of the Fourth IMO GHG Study 2020.
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
pub enum VesselType {
    #[serde(rename = "bulk_carrier")]
    #[strum(serialize = "bulk_carrier")]
    BulkCarrier,
    #[serde(rename = "chemical_tanker")]
    #[strum(serialize = "chemical_tanker")]
    ChemicalTanker,
    #[serde(rename = "container")]
    #[strum(serialize = "container")]
    Container,
    #[serde(rename = "general_cargo")]
    #[strum(serialize = "general_cargo")]
    GeneralCargo,
    #[serde(rename = "liquified_gas_tanker")]
    #[strum(serialize = "liquified_gas_tanker")]
    LiquifiedGasTanker,
    #[serde(rename = "oil_tanker")]
    #[strum(serialize = "oil_tanker")]
    OilTanker,
    #[serde(rename = "other_liquids_tankers")]
    #[strum(serialize = "other_liquids_tankers")]
    OtherLiquidsTankers,
    #[serde(rename = "ferry-pax")]
    #[strum(serialize = "ferry-pax")]
    FerryPax,
    #[serde(rename = "cruise")]
    #[strum(serialize = "cruise")]
    Cruise,
    #[serde(rename = "ferry-ropax")]
    #[strum(serialize = "ferry-ropax")]
    FerryRopax,
    #[serde(rename = "refrigerated_bulk")]
    #[strum(serialize = "refrigerated_bulk")]
    RefrigeratedBulk,
    #[serde(rename = "roro")]
    #[strum(serialize = "roro")]
    Roro,
    #[serde(rename = "vehicle")]
    #[strum(serialize = "vehicle")]
    Vehicle,
    #[serde(rename = "yacht")]
    #[strum(serialize = "yacht")]
    Yacht,
    #[serde(rename = "service-tug")]
    #[strum(serialize = "service-tug")]
    ServiceTug,
    #[serde(rename = "miscellaneous-fishing")]
    #[strum(serialize = "miscellaneous-fishing")]
    MiscellaneousFishing,
    #[serde(rename = "offshore")]
    #[strum(serialize = "offshore")]
    Offshore,
    #[serde(rename = "service-other")]
    #[strum(serialize = "service-other")]
    ServiceOther,
    #[serde(rename = "miscellaneous-other")]
    #[strum(serialize = "miscellaneous-other")]
    MiscellaneousOther,
}

/// Unit of [`VesselDescriptor::size`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, AsRefStr)]
pub enum SizeUnit {
    /// Deadweight tonnage
    Dwt,
    /// Twenty-foot equivalent units
    Teu,
    /// Cubic meters of cargo capacity
    Cbm,
    /// Gross tonnage
    Gt,
    /// Number of vehicles
    Vehicles,
}

impl VesselType {
    // Size bins of Table 17, page 68 of the Fourth IMO GHG Study 2020.
    pub fn size_unit(&self) -> SizeUnit {
        use VesselType::*;
        match *self {
            BulkCarrier | ChemicalTanker | GeneralCargo | OilTanker | OtherLiquidsTankers
            | RefrigeratedBulk | Roro => SizeUnit::Dwt,
            Container => SizeUnit::Teu,
            LiquifiedGasTanker => SizeUnit::Cbm,
            Vehicle => SizeUnit::Vehicles,
            FerryPax | Cruise | FerryRopax | Yacht | ServiceTug | MiscellaneousFishing
            | Offshore | ServiceOther | MiscellaneousOther => SizeUnit::Gt,
        }
    }
}

/// Static description of a vessel, validated on construction.
///
/// `design_speed_kn` and `design_draft_m` form the reference operating point every voyage leg
/// is scaled against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "VesselBuilder")]
pub struct VesselDescriptor {
    length_m: f64,
    beam_m: f64,
    design_speed_kn: f64,
    design_draft_m: f64,
    double_ended: bool,
    number_of_propulsion_engines: u32,
    propulsion_engine_power_kw: f64,
    propulsion_engine_type: EngineType,
    propulsion_engine_age: EngineAge,
    propulsion_engine_fuel_type: FuelType,
    vessel_type: VesselType,
    size: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VesselBuilder {
    #[serde(alias = "type")]
    vessel_type: VesselType,
    propulsion_engine_type: EngineType,
    propulsion_engine_age: EngineAge,
    propulsion_engine_fuel_type: FuelType,
    #[serde(default)]
    length_m: Option<f64>,
    #[serde(default)]
    beam_m: Option<f64>,
    #[serde(default)]
    design_speed_kn: Option<f64>,
    #[serde(default)]
    design_draft_m: Option<f64>,
    #[serde(default)]
    propulsion_engine_power_kw: Option<f64>,
    #[serde(default)]
    number_of_propulsion_engines: Option<u32>,
    #[serde(default)]
    double_ended: bool,
    #[serde(default)]
    size: Option<f64>,
}

impl VesselBuilder {
    pub fn new(
        vessel_type: VesselType,
        propulsion_engine_type: EngineType,
        propulsion_engine_age: EngineAge,
        propulsion_engine_fuel_type: FuelType,
    ) -> Self {
        Self {
            vessel_type,
            propulsion_engine_type,
            propulsion_engine_age,
            propulsion_engine_fuel_type,
            length_m: None,
            beam_m: None,
            design_speed_kn: None,
            design_draft_m: None,
            propulsion_engine_power_kw: None,
            number_of_propulsion_engines: None,
            double_ended: false,
            size: None,
        }
    }
    pub fn length_m(self, length_m: f64) -> VesselBuilder {
        VesselBuilder {
            length_m: Some(length_m),
            ..self
        }
    }
    pub fn beam_m(self, beam_m: f64) -> VesselBuilder {
        VesselBuilder {
            beam_m: Some(beam_m),
            ..self
        }
    }
    pub fn design_speed_kn(self, design_speed_kn: f64) -> VesselBuilder {
        VesselBuilder {
            design_speed_kn: Some(design_speed_kn),
            ..self
        }
    }
    pub fn design_draft_m(self, design_draft_m: f64) -> VesselBuilder {
        VesselBuilder {
            design_draft_m: Some(design_draft_m),
            ..self
        }
    }
    /// Rated power of a single propulsion engine.
    pub fn propulsion_engine_power_kw(self, propulsion_engine_power_kw: f64) -> VesselBuilder {
        VesselBuilder {
            propulsion_engine_power_kw: Some(propulsion_engine_power_kw),
            ..self
        }
    }
    pub fn number_of_propulsion_engines(self, number_of_propulsion_engines: u32) -> VesselBuilder {
        VesselBuilder {
            number_of_propulsion_engines: Some(number_of_propulsion_engines),
            ..self
        }
    }
    pub fn double_ended(self, double_ended: bool) -> VesselBuilder {
        VesselBuilder {
            double_ended,
            ..self
        }
    }
    /// Size in the unit given by [`VesselType::size_unit`].
    pub fn size(self, size: f64) -> VesselBuilder {
        VesselBuilder {
            size: Some(size),
            ..self
        }
    }

    pub fn build(self) -> Result<VesselDescriptor> {
        let length_m = self.length_m.context(MissingFieldSnafu { field: "length_m" })?;
        let beam_m = self.beam_m.context(MissingFieldSnafu { field: "beam_m" })?;
        let design_speed_kn = self.design_speed_kn.context(MissingFieldSnafu {
            field: "design_speed_kn",
        })?;
        let design_draft_m = self.design_draft_m.context(MissingFieldSnafu {
            field: "design_draft_m",
        })?;
        let propulsion_engine_power_kw =
            self.propulsion_engine_power_kw.context(MissingFieldSnafu {
                field: "propulsion_engine_power_kw",
            })?;

        Ok(VesselDescriptor {
            length_m: positive("length_m", length_m)?,
            beam_m: positive("beam_m", beam_m)?,
            design_speed_kn: positive("design_speed_kn", design_speed_kn)?,
            design_draft_m: positive("design_draft_m", design_draft_m)?,
            double_ended: self.double_ended,
            number_of_propulsion_engines: at_least_one(
                "number_of_propulsion_engines",
                self.number_of_propulsion_engines.unwrap_or(1),
            )?,
            propulsion_engine_power_kw: positive(
                "propulsion_engine_power_kw",
                propulsion_engine_power_kw,
            )?,
            propulsion_engine_type: self.propulsion_engine_type,
            propulsion_engine_age: self.propulsion_engine_age,
            propulsion_engine_fuel_type: self.propulsion_engine_fuel_type,
            vessel_type: self.vessel_type,
            size: self.size.map(|v| non_negative("size", v)).transpose()?,
        })
    }
}

impl TryFrom<VesselBuilder> for VesselDescriptor {
    type Error = crate::Error;

    fn try_from(value: VesselBuilder) -> Result<Self> {
        value.build()
    }
}

impl VesselDescriptor {
    pub fn length_m(&self) -> f64 {
        self.length_m
    }
    pub fn beam_m(&self) -> f64 {
        self.beam_m
    }
    pub fn design_speed_kn(&self) -> f64 {
        self.design_speed_kn
    }
    pub fn design_draft_m(&self) -> f64 {
        self.design_draft_m
    }
    pub fn double_ended(&self) -> bool {
        self.double_ended
    }
    pub fn number_of_propulsion_engines(&self) -> u32 {
        self.number_of_propulsion_engines
    }
    pub fn propulsion_engine_power_kw(&self) -> f64 {
        self.propulsion_engine_power_kw
    }
    pub fn propulsion_engine_type(&self) -> EngineType {
        self.propulsion_engine_type
    }
    pub fn propulsion_engine_age(&self) -> EngineAge {
        self.propulsion_engine_age
    }
    pub fn propulsion_engine_fuel_type(&self) -> FuelType {
        self.propulsion_engine_fuel_type
    }
    pub fn vessel_type(&self) -> VesselType {
        self.vessel_type
    }
    pub fn size(&self) -> Option<f64> {
        self.size
    }
    /// Size used for table lookups, a missing size falls into the smallest size band.
    pub fn size_or_smallest(&self) -> f64 {
        self.size.unwrap_or(0.)
    }
}
