/// Newtonian constant of gravitation, m^3 kg^-1 s^-2
pub const GRAVITATIONAL_CONSTANT: f64 = 6.67430e-11;

/// Meters per astronomical unit
pub const ASTRONOMICAL_UNIT: f64 = 149_597_870_700.0;

/// Mass assumed for the gravitating parent of root bodies, kg
pub const SOLAR_MASS: f64 = 1.989e30;

pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Calendar length used when sampling in years. Not the sidereal year.
pub const DAYS_PER_YEAR: f64 = 365.0;

pub const PI: f64 = std::f64::consts::PI;
