use std::fmt;

use nom::{
    character::complete::{digit1, multispace0, one_of},
    combinator::{all_consuming, map_res, opt, recognize},
    number::complete::double,
    sequence::{delimited, pair},
    Finish, IResult,
};

pub mod request_file;

pub const DEFAULT_SAMPLE_COUNT: &str = "300";
pub const DEFAULT_TEMPERATURE: &str = "288.0";
pub const DEFAULT_WAVELENGTH_LOWER: &str = "5.0e-6";
pub const DEFAULT_WAVELENGTH_UPPER: &str = "20.0e-6";

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Field {
    SampleCount,
    Temperature,
    WavelengthLower,
    WavelengthUpper,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::SampleCount => "number of plot points",
            Field::Temperature => "temperature",
            Field::WavelengthLower => "lower wavelength",
            Field::WavelengthUpper => "upper wavelength",
        };
        f.write_str(name)
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum FieldError {
    #[error("Invalid {field} input: {text:?} is not an integer")]
    NotAnInteger { field: Field, text: String },
    #[error("Invalid {field} input: {text:?} is not a number")]
    NotANumber { field: Field, text: String },
    #[error("Invalid {field} input: {text:?} is not a finite number")]
    NotFinite { field: Field, text: String },
}

impl FieldError {
    pub fn field(&self) -> Field {
        match self {
            FieldError::NotAnInteger { field, .. }
            | FieldError::NotANumber { field, .. }
            | FieldError::NotFinite { field, .. } => *field,
        }
    }
}

/// The four plot parameters as the user typed them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlotInputs {
    pub sample_count: String,
    pub temperature: String,
    pub wavelength_lower: String,
    pub wavelength_upper: String,
}

impl Default for PlotInputs {
    fn default() -> Self {
        Self {
            sample_count: DEFAULT_SAMPLE_COUNT.to_string(),
            temperature: DEFAULT_TEMPERATURE.to_string(),
            wavelength_lower: DEFAULT_WAVELENGTH_LOWER.to_string(),
            wavelength_upper: DEFAULT_WAVELENGTH_UPPER.to_string(),
        }
    }
}

/// The four plot parameters as numbers, before any range check.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParsedInputs {
    pub sample_count: i64,
    pub temperature: f64,
    pub wavelength_lower: f64,
    pub wavelength_upper: f64,
}

impl PlotInputs {
    /// Parses every field in order and stops at the first one that fails.
    pub fn parse(&self) -> Result<ParsedInputs, FieldError> {
        Ok(ParsedInputs {
            sample_count: parse_integer(Field::SampleCount, &self.sample_count)?,
            temperature: parse_float(Field::Temperature, &self.temperature)?,
            wavelength_lower: parse_float(Field::WavelengthLower, &self.wavelength_lower)?,
            wavelength_upper: parse_float(Field::WavelengthUpper, &self.wavelength_upper)?,
        })
    }
}

fn integer(input: &str) -> IResult<&str, i64> {
    map_res(recognize(pair(opt(one_of("+-")), digit1)), str::parse::<i64>)(input)
}

fn padded_integer(input: &str) -> IResult<&str, i64> {
    all_consuming(delimited(multispace0, integer, multispace0))(input)
}

fn padded_float(input: &str) -> IResult<&str, f64> {
    all_consuming(delimited(multispace0, double, multispace0))(input)
}

pub fn parse_integer(field: Field, text: &str) -> Result<i64, FieldError> {
    padded_integer(text)
        .finish()
        .map(|(_, v)| v)
        .map_err(|_| FieldError::NotAnInteger {
            field,
            text: text.to_string(),
        })
}

pub fn parse_float(field: Field, text: &str) -> Result<f64, FieldError> {
    let (_, v) = padded_float(text)
        .finish()
        .map_err(|_| FieldError::NotANumber {
            field,
            text: text.to_string(),
        })?;

    if v.is_finite() {
        Ok(v)
    } else {
        Err(FieldError::NotFinite {
            field,
            text: text.to_string(),
        })
    }
}
