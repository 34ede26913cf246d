use crate::{Constraint, Result, error::error::ValidationSnafu};

pub(crate) fn positive(field: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0. {
        Ok(value)
    } else {
        ValidationSnafu {
            field,
            value,
            constraint: Constraint::Positive,
        }
        .fail()
    }
}

pub(crate) fn non_negative(field: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value >= 0. {
        Ok(value)
    } else {
        ValidationSnafu {
            field,
            value,
            constraint: Constraint::NonNegative,
        }
        .fail()
    }
}

pub(crate) fn at_least_one(field: &'static str, value: u32) -> Result<u32> {
    if value >= 1 {
        Ok(value)
    } else {
        ValidationSnafu {
            field,
            value: value as f64,
            constraint: Constraint::AtLeastOne,
        }
        .fail()
    }
}
