//! Plot request description files.
//!
//! ```text
//! # Earth surface
//! Temperature 288.0
//! Wavelength 5.0e-6 20.0e-6
//! Samples 300
//! ```
//!
//! Values are kept as text so they go through the same validation as values
//! typed on the command line.

use std::ops::Range;

use chumsky::prelude::*;

use crate::PlotInputs;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Statement {
    Samples(String),
    Temperature(String),
    Wavelength(String, String),
}

impl Statement {
    pub fn keyword(&self) -> &'static str {
        match self {
            Statement::Samples(_) => "Samples",
            Statement::Temperature(_) => "Temperature",
            Statement::Wavelength(_, _) => "Wavelength",
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum RequestFileError {
    #[error("{} syntax error(s) in plot request file", .0.len())]
    Syntax(Vec<Simple<char>>),
    #[error("{keyword} is given more than once")]
    Duplicate {
        keyword: &'static str,
        span: Range<usize>,
        first: Range<usize>,
    },
}

/// Values given in a request file. Missing statements are `None`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RequestFile {
    pub sample_count: Option<String>,
    pub temperature: Option<String>,
    pub wavelength: Option<(String, String)>,
}

impl RequestFile {
    /// Overwrites the fields of `inputs` that this file sets.
    pub fn apply(&self, inputs: &mut PlotInputs) {
        if let Some(s) = &self.sample_count {
            inputs.sample_count = s.clone();
        }
        if let Some(t) = &self.temperature {
            inputs.temperature = t.clone();
        }
        if let Some((lower, upper)) = &self.wavelength {
            inputs.wavelength_lower = lower.clone();
            inputs.wavelength_upper = upper.clone();
        }
    }
}

fn comment() -> impl Parser<char, (), Error = Simple<char>> + Clone {
    just('#')
        .then(take_until(text::newline().ignored().or(end())))
        .ignored()
        .labelled("comment")
}

fn sp() -> impl Parser<char, (), Error = Simple<char>> + Clone {
    comment()
        .padded()
        .repeated()
        .at_least(1)
        .ignored()
        .or(text::whitespace().ignored())
        .labelled("sp")
}

/// At least one whitespace character, then any further space or comments.
fn gap() -> impl Parser<char, (), Error = Simple<char>> + Clone {
    filter(|c: &char| c.is_whitespace())
        .repeated()
        .at_least(1)
        .ignore_then(sp())
        .labelled("separator")
}

fn value() -> impl Parser<char, String, Error = Simple<char>> + Clone {
    filter(|c: &char| !c.is_whitespace() && *c != '#')
        .repeated()
        .at_least(1)
        .collect::<String>()
        .labelled("value")
}

fn parse_statement() -> impl Parser<char, (Statement, Range<usize>), Error = Simple<char>> {
    choice((
        just("Samples")
            .then_ignore(gap())
            .ignore_then(value())
            .map(Statement::Samples),
        just("Temperature")
            .then_ignore(gap())
            .ignore_then(value())
            .map(Statement::Temperature),
        just("Wavelength")
            .then_ignore(gap())
            .ignore_then(value())
            .then_ignore(gap())
            .then(value())
            .map(|(lower, upper)| Statement::Wavelength(lower, upper)),
    ))
    .map_with_span(|statement, span| (statement, span))
    .labelled("statement")
}

pub fn parse_statements() -> impl Parser<char, Vec<(Statement, Range<usize>)>, Error = Simple<char>>
{
    parse_statement()
        .then_ignore(sp())
        .repeated()
        .padded_by(sp())
        .then_ignore(end())
}

pub fn parse_request_file(src: &str) -> Result<RequestFile, RequestFileError> {
    let statements = parse_statements()
        .parse(src)
        .map_err(RequestFileError::Syntax)?;

    let mut file = RequestFile::default();
    let mut seen: Vec<(&'static str, Range<usize>)> = Vec::new();

    for (statement, span) in statements {
        let keyword = statement.keyword();
        if let Some((_, first)) = seen.iter().find(|(k, _)| *k == keyword) {
            return Err(RequestFileError::Duplicate {
                keyword,
                span,
                first: first.clone(),
            });
        }
        seen.push((keyword, span));

        match statement {
            Statement::Samples(s) => file.sample_count = Some(s),
            Statement::Temperature(t) => file.temperature = Some(t),
            Statement::Wavelength(lower, upper) => file.wavelength = Some((lower, upper)),
        }
    }

    Ok(file)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_comment() {
        comment().parse("# Hello").unwrap();
    }

    #[test]
    fn test_sp() {
        sp().parse("# Hello\n   \n").unwrap();
        sp().parse("\n   \n").unwrap();
        sp().parse("").unwrap();
    }

    #[test]
    fn test_value() {
        assert_eq!(value().parse("5.0e-6").unwrap(), "5.0e-6");
        assert_eq!(value().parse("abc# tail").unwrap(), "abc");
        assert!(value().parse("").is_err());
    }

    #[test]
    fn test_parse_statement() {
        assert_eq!(
            parse_statement().parse("Temperature 288.0").unwrap().0,
            Statement::Temperature("288.0".to_string())
        );
        assert_eq!(
            parse_statement()
                .parse("Wavelength 5.0e-6   20.0e-6")
                .unwrap()
                .0,
            Statement::Wavelength("5.0e-6".to_string(), "20.0e-6".to_string())
        );
    }

    #[test]
    fn test_parse_request_file() {
        let src = r#"
# Earth surface, thermal infrared
Temperature 288.0
Wavelength 5.0e-6 20.0e-6 # meters
Samples 300
        "#;

        assert_eq!(
            parse_request_file(src).unwrap(),
            RequestFile {
                sample_count: Some("300".to_string()),
                temperature: Some("288.0".to_string()),
                wavelength: Some(("5.0e-6".to_string(), "20.0e-6".to_string())),
            }
        );
    }

    #[test]
    fn test_partial_file() {
        let file = parse_request_file("Temperature 5778").unwrap();
        let mut inputs = PlotInputs::default();
        file.apply(&mut inputs);

        assert_eq!(
            inputs,
            PlotInputs {
                temperature: "5778".to_string(),
                ..Default::default()
            }
        );
        assert_eq!(parse_request_file("").unwrap(), RequestFile::default());
    }

    #[test]
    fn test_values_are_not_checked() {
        // Numbers are validated later, together with command line input.
        let file = parse_request_file("Samples many").unwrap();
        assert_eq!(file.sample_count, Some("many".to_string()));
    }

    #[test]
    fn test_unknown_statement() {
        assert!(matches!(
            parse_request_file("Temperature 288.0\nColor red"),
            Err(RequestFileError::Syntax(_))
        ));
        assert!(matches!(
            parse_request_file("Wavelength 5.0e-6"),
            Err(RequestFileError::Syntax(_))
        ));
    }

    #[test]
    fn test_missing_separator() {
        for src in ["Temperature288", "Samples300", "Wavelength 5e-6#lower\n20e-6"] {
            assert!(
                matches!(parse_request_file(src), Err(RequestFileError::Syntax(_))),
                "{:?} was accepted",
                src
            );
        }
        assert!(parse_request_file("Wavelength 5e-6 # lower\n  20e-6").is_ok());
    }

    #[test]
    fn test_duplicate_statement() {
        assert_eq!(
            parse_request_file("Samples 300\nSamples 400"),
            Err(RequestFileError::Duplicate {
                keyword: "Samples",
                span: 12..23,
                first: 0..11,
            })
        );
    }
}
