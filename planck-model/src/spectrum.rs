use float_ord::FloatOrd;

use crate::sample::{Sample, SampleSeries};

/// The sample with the highest radiance. Ties go to the longer wavelength.
pub fn peak_sample(series: &SampleSeries) -> Option<&Sample> {
    series.iter().max_by_key(|s| FloatOrd(s.radiance))
}

/// `(min, max)` of the radiance values, or `None` for an empty series.
pub fn radiance_bounds(series: &SampleSeries) -> Option<(f64, f64)> {
    let min = series.iter().map(|s| FloatOrd(s.radiance)).min()?;
    let max = series.iter().map(|s| FloatOrd(s.radiance)).max()?;
    Some((min.0, max.0))
}
