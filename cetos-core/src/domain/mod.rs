mod engine;
mod fuel;
mod operation_mode;
mod validate;
mod vessel;
mod voyage;

pub use engine::*;
pub use fuel::*;
pub use operation_mode::*;
pub use vessel::*;
pub use voyage::*;

use crate::{Result, error::error::UnknownVariantSnafu};
use snafu::ResultExt;
use std::str::FromStr;

/// Parses one of the recognized category names, e.g. `"MSD"` or `"ferry-pax"`.
///
/// `kind` names the category in the returned error.
pub fn parse_variant<T>(kind: &'static str, value: &str) -> Result<T>
where
    T: FromStr<Err = strum::ParseError>,
{
    value.parse::<T>().context(UnknownVariantSnafu { kind, value })
}
