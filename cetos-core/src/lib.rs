#![deny(warnings)]
#![deny(rust_2018_idioms)]

mod domain;
mod error;
mod units;

pub use domain::*;
pub use error::{Constraint, Error, ErrorDiscriminants, Result};
pub use units::*;
