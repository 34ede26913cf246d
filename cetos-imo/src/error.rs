use crate::Machinery;
use cetos_core::{EngineAge, FuelType, VesselType};
use snafu::{Location, Snafu};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Snafu, strum::EnumDiscriminants)]
#[snafu(module, visibility(pub))]
pub enum Error {
    #[snafu(display(
        "No specific fuel consumption baseline found for '{machinery}', '{fuel_type}', '{engine_age}'"
    ))]
    SfcLookup {
        #[snafu(implicit)]
        location: Location,
        machinery: Machinery,
        fuel_type: FuelType,
        engine_age: EngineAge,
    },
    #[snafu(display(
        "No auxiliary power demand found for vessel type '{vessel_type}' of size '{size}'"
    ))]
    AuxiliaryPowerLookup {
        #[snafu(implicit)]
        location: Location,
        vessel_type: VesselType,
        size: f64,
    },
    #[snafu(display(
        "No speed-power reference coefficients found for vessel type '{vessel_type}'"
    ))]
    AdmiraltyLookup {
        #[snafu(implicit)]
        location: Location,
        vessel_type: VesselType,
    },
    #[snafu(display("Undefined {quantity}, {reason}"))]
    Domain {
        #[snafu(implicit)]
        location: Location,
        quantity: &'static str,
        reason: String,
    },
    #[snafu(display("Invalid setting '{name}', '{value}' is not within [{min}, {max}]"))]
    InvalidSetting {
        #[snafu(implicit)]
        location: Location,
        name: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
    #[snafu(display("Invalid reference tables, {reason}"))]
    InvalidTables {
        #[snafu(implicit)]
        location: Location,
        reason: String,
    },
    #[snafu(display("Failed to load configuration"))]
    Config {
        #[snafu(implicit)]
        location: Location,
        #[snafu(source)]
        error: config::ConfigError,
    },
}

impl Error {
    pub fn kind(&self) -> ErrorDiscriminants {
        self.into()
    }

    /// Lookup errors signal an incomplete reference table for the given vessel.
    pub fn is_lookup(&self) -> bool {
        match self.kind() {
            ErrorDiscriminants::SfcLookup
            | ErrorDiscriminants::AuxiliaryPowerLookup
            | ErrorDiscriminants::AdmiraltyLookup => true,
            ErrorDiscriminants::Domain
            | ErrorDiscriminants::InvalidSetting
            | ErrorDiscriminants::InvalidTables
            | ErrorDiscriminants::Config => false,
        }
    }
}
