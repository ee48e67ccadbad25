/// Planck constant [J s]
pub const H: f64 = 6.62606957e-34;
/// Speed of light in vacuum [m s^-1]
pub const C: f64 = 299792458.0;
/// Boltzmann constant [J K^-1]
pub const KB: f64 = 1.3806488e-23;

/// Wien's displacement constant [m K]
pub const WIEN_B: f64 = 2.8977721e-3;

pub const M_TO_MICROMETER: f64 = 1.0e6;
