#![deny(warnings)]
#![deny(rust_2018_idioms)]

mod auxiliary;
mod energy;
mod error;
mod fuel_estimation;
mod power;
mod settings;
mod sfc;
mod tables;

pub use auxiliary::*;
pub use energy::*;
pub use error::{Error, ErrorDiscriminants, Result};
pub use fuel_estimation::*;
pub use power::*;
pub use settings::*;
pub use sfc::*;
pub use tables::*;
