use planck_model::{PlotRequest, RangeError};
use planck_parser::{request_file::RequestFile, FieldError, PlotInputs};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    #[error(transparent)]
    Parse(#[from] FieldError),
    #[error(transparent)]
    Range(#[from] RangeError),
}

impl InputError {
    pub fn category(&self) -> &'static str {
        match self {
            InputError::Parse(_) => "ParseError",
            InputError::Range(_) => "RangeError",
        }
    }
}

/// Values given on the command line. They win over the request file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Overrides {
    pub sample_count: Option<String>,
    pub temperature: Option<String>,
    pub wavelength_lower: Option<String>,
    pub wavelength_upper: Option<String>,
}

pub fn gather(overrides: &Overrides, file: Option<&RequestFile>) -> PlotInputs {
    let mut inputs = PlotInputs::default();

    if let Some(file) = file {
        file.apply(&mut inputs);
    }

    let fields = [
        (&overrides.sample_count, &mut inputs.sample_count),
        (&overrides.temperature, &mut inputs.temperature),
        (&overrides.wavelength_lower, &mut inputs.wavelength_lower),
        (&overrides.wavelength_upper, &mut inputs.wavelength_upper),
    ];
    for (value, field) in fields {
        if let Some(value) = value {
            *field = value.clone();
        }
    }

    inputs
}

/// Parses the text inputs, then checks sample count, temperature and
/// wavelength range in that order.
pub fn validate(inputs: &PlotInputs) -> Result<PlotRequest, InputError> {
    let parsed = inputs.parse()?;

    Ok(PlotRequest::new(
        parsed.sample_count,
        parsed.temperature,
        parsed.wavelength_lower,
        parsed.wavelength_upper,
    )?)
}
