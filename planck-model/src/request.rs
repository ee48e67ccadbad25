use thiserror::Error;

/// Fewer points than this give a visibly jagged curve.
pub const MIN_SAMPLE_COUNT: i64 = 100;
/// Upper bound on the grid size, so the sample buffer always fits in memory.
pub const MAX_SAMPLE_COUNT: i64 = 10_000_000;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RangeError {
    #[error("Invalid number of plot points input: {0}. Should have at least {} plot points for good visual results.", MIN_SAMPLE_COUNT)]
    InvalidSampleCount(i64),
    #[error("Invalid number of plot points input: {0}. Should have at most {} plot points.", MAX_SAMPLE_COUNT)]
    TooManySamples(i64),
    #[error("Invalid temperature input: {0}. Temperature needs to be a positive value [Kelvin].")]
    InvalidTemperature(f64),
    #[error("Invalid wavelength input: {lower} to {upper}. Lower wavelength needs to be smaller than upper wavelength.")]
    InvalidWavelengthOrder { lower: f64, upper: f64 },
    #[error("Invalid wavelength input: {0}. Wavelengths need to be positive values [m].")]
    NonPositiveWavelength(f64),
}

impl RangeError {
    /// Which of the three range rules was violated.
    pub fn rule(&self) -> &'static str {
        match self {
            RangeError::InvalidSampleCount(_) | RangeError::TooManySamples(_) => {
                "invalid sample count"
            }
            RangeError::InvalidTemperature(_) => "invalid temperature",
            RangeError::InvalidWavelengthOrder { .. } | RangeError::NonPositiveWavelength(_) => {
                "invalid wavelength range"
            }
        }
    }
}

/// A validated set of plot parameters. Wavelengths are in meters, the
/// temperature in Kelvin.
#[derive(Debug, Clone, Copy, PartialEq)]
// deny manual construct
#[non_exhaustive]
pub struct PlotRequest {
    pub temperature: f64,
    pub wavelength_lower: f64,
    pub wavelength_upper: f64,
    pub sample_count: usize,
}

impl PlotRequest {
    /// Checks the ranges in a fixed order and reports only the first violation.
    pub fn new(
        sample_count: i64,
        temperature: f64,
        wavelength_lower: f64,
        wavelength_upper: f64,
    ) -> Result<Self, RangeError> {
        if sample_count < MIN_SAMPLE_COUNT {
            return Err(RangeError::InvalidSampleCount(sample_count));
        }
        if sample_count > MAX_SAMPLE_COUNT {
            return Err(RangeError::TooManySamples(sample_count));
        }

        // Also rejects NaN.
        if !(temperature > 0.0) {
            return Err(RangeError::InvalidTemperature(temperature));
        }

        if !(wavelength_lower <= wavelength_upper) {
            return Err(RangeError::InvalidWavelengthOrder {
                lower: wavelength_lower,
                upper: wavelength_upper,
            });
        }

        if wavelength_lower <= 0.0 {
            return Err(RangeError::NonPositiveWavelength(wavelength_lower));
        }

        let sample_count = usize::try_from(sample_count)
            .map_err(|_| RangeError::InvalidSampleCount(sample_count))?;

        Ok(Self {
            temperature,
            wavelength_lower,
            wavelength_upper,
            sample_count,
        })
    }
}
