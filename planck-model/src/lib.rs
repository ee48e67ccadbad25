//! Planck's law for black-body spectral radiance, sampled over a wavelength range.

pub mod constants;
pub mod radiance;
pub mod request;
pub mod sample;
pub mod spectrum;

pub use radiance::{normalized_radiance, peak_wavelength, spectral_radiance};
pub use request::{PlotRequest, RangeError, MAX_SAMPLE_COUNT, MIN_SAMPLE_COUNT};
pub use sample::{generate, generate_normalized, linspace, Sample, SampleError, SampleSeries};
