use crate::constants::{C, H, KB, WIEN_B};

/// Black body spectral radiance in W sr^-1 m^-3.
///
/// `t` is the temperature in Kelvin and `lambda` the wavelength in meters.
/// Both must be positive; nothing is checked here.
pub fn spectral_radiance(t: f64, lambda: f64) -> f64 {
    let lambda5 = (lambda * lambda) * (lambda * lambda) * lambda;

    (2.0 * H * C * C) / lambda5 / ((H * C) / (lambda * KB * t)).exp_m1()
}

/// Wavelength in meters at which the radiance of a black body at `t` peaks.
pub fn peak_wavelength(t: f64) -> f64 {
    WIEN_B / t
}

/// Radiance scaled so that the peak given by Wien's displacement law is 1.0.
pub fn normalized_radiance(t: f64, lambda: f64) -> f64 {
    spectral_radiance(t, lambda) / spectral_radiance(t, peak_wavelength(t))
}
