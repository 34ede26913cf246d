use snafu::{Location, Snafu};
use strum::Display;

pub type Result<T> = std::result::Result<T, Error>;

/// The invariant a rejected value failed to uphold.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Display)]
pub enum Constraint {
    #[strum(serialize = "a finite number greater than zero")]
    Positive,
    #[strum(serialize = "a finite number greater than or equal to zero")]
    NonNegative,
    #[strum(serialize = "at least one")]
    AtLeastOne,
}

#[derive(Debug, Snafu, strum::EnumDiscriminants)]
#[snafu(module, visibility(pub))]
pub enum Error {
    #[snafu(display("Invalid value for '{field}', '{value}' is not {constraint}"))]
    Validation {
        #[snafu(implicit)]
        location: Location,
        field: &'static str,
        value: f64,
        constraint: Constraint,
    },
    #[snafu(display("Required field '{field}' was not set"))]
    MissingField {
        #[snafu(implicit)]
        location: Location,
        field: &'static str,
    },
    #[snafu(display("Encountered value that did not match any {kind} '{value}'"))]
    UnknownVariant {
        #[snafu(implicit)]
        location: Location,
        kind: &'static str,
        value: String,
        #[snafu(source)]
        error: strum::ParseError,
    },
}

impl Error {
    pub fn kind(&self) -> ErrorDiscriminants {
        self.into()
    }
}
