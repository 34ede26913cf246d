pub const METERS_PER_NAUTICAL_MILE: f64 = 1852.;
pub const SECONDS_PER_HOUR: f64 = 3600.;
pub const GRAMS_PER_KILOGRAM: f64 = 1000.;
pub const KILOGRAMS_PER_TONNE: f64 = 1000.;
pub const LITERS_PER_CUBIC_METER: f64 = 1000.;

pub fn knots_to_meters_per_second(knots: f64) -> f64 {
    knots * METERS_PER_NAUTICAL_MILE / SECONDS_PER_HOUR
}

pub fn meters_per_second_to_knots(meters_per_second: f64) -> f64 {
    meters_per_second * SECONDS_PER_HOUR / METERS_PER_NAUTICAL_MILE
}
