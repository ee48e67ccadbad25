use thiserror::Error;

use crate::{
    constants::M_TO_MICROMETER,
    radiance::{normalized_radiance, spectral_radiance},
    request::PlotRequest,
};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SampleError {
    #[error("Sample is not representable at wavelength {wavelength} m and temperature {temperature} K")]
    NumericDomain { wavelength: f64, temperature: f64 },
}

/// One point of the curve. The wavelength is in micrometers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub wavelength: f64,
    pub radiance: f64,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SampleSeries {
    samples: Vec<Sample>,
}

impl SampleSeries {
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn first(&self) -> Option<&Sample> {
        self.samples.first()
    }

    pub fn last(&self) -> Option<&Sample> {
        self.samples.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Sample> {
        self.samples.iter()
    }

    pub fn as_slice(&self) -> &[Sample] {
        &self.samples
    }
}

impl<'a> IntoIterator for &'a SampleSeries {
    type Item = &'a Sample;
    type IntoIter = std::slice::Iter<'a, Sample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}

/// `n` evenly spaced values from `lower` to `upper`, both included exactly.
pub fn linspace(lower: f64, upper: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![lower],
        _ => {
            let step = (upper - lower) / (n - 1) as f64;
            (0..n)
                .map(|i| {
                    if i == n - 1 {
                        upper
                    } else {
                        lower + step * i as f64
                    }
                })
                .collect()
        }
    }
}

fn sample_with<F: Fn(f64, f64) -> f64>(
    request: &PlotRequest,
    radiance: F,
) -> Result<SampleSeries, SampleError> {
    let t = request.temperature;

    let samples = linspace(
        request.wavelength_lower,
        request.wavelength_upper,
        request.sample_count,
    )
    .into_iter()
    .map(|lambda| {
        let l = radiance(t, lambda);
        let wavelength = lambda * M_TO_MICROMETER;
        if l.is_finite() && wavelength.is_finite() {
            Ok(Sample {
                wavelength,
                radiance: l,
            })
        } else {
            Err(SampleError::NumericDomain {
                wavelength: lambda,
                temperature: t,
            })
        }
    })
    .collect::<Result<Vec<_>, _>>()?;

    Ok(SampleSeries { samples })
}

/// Evaluates Planck's law over the requested wavelength grid.
pub fn generate(request: &PlotRequest) -> Result<SampleSeries, SampleError> {
    sample_with(request, spectral_radiance)
}

/// Like [`generate`], but the radiance is relative to the peak of the curve.
pub fn generate_normalized(request: &PlotRequest) -> Result<SampleSeries, SampleError> {
    sample_with(request, normalized_radiance)
}
