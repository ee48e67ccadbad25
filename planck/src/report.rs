use std::io::{self, Write};

use ariadne::{Label, Report, ReportKind, Source};
use chumsky::error::Simple;
use planck_parser::request_file::RequestFileError;

fn syntax_report(e: &Simple<char>) -> Report {
    let message = match e.label() {
        Some(label) => format!("Invalid {}", label),
        None => "Invalid plot request".to_string(),
    };
    Report::build(ReportKind::Error, (), e.span().start)
        .with_message(message)
        .with_label(Label::new(e.span()).with_message(e.to_string()))
        .finish()
}

fn reports(error: &RequestFileError) -> Vec<Report> {
    match error {
        RequestFileError::Syntax(errors) => errors.iter().map(syntax_report).collect(),
        RequestFileError::Duplicate {
            keyword,
            span,
            first,
        } => vec![Report::build(ReportKind::Error, (), span.start)
            .with_message(error.to_string())
            .with_label(Label::new(first.clone()).with_message(format!("{} first given here", keyword)))
            .with_label(Label::new(span.clone()).with_message("given again here"))
            .finish()],
    }
}

/// Writes a request file error with the offending source lines.
pub fn write_request_file_error<W: Write>(
    src: &str,
    error: &RequestFileError,
    mut w: W,
) -> io::Result<()> {
    for report in reports(error) {
        report.write(Source::from(src), &mut w)?;
    }
    Ok(())
}

/// Prints a request file error to stderr.
pub fn eprint_request_file_error(src: &str, error: &RequestFileError) {
    if let Err(e) = write_request_file_error(src, error, io::stderr().lock()) {
        log::error!("Failed to print report: {}", e);
    }
}

#[cfg(test)]
mod test {
    use planck_parser::request_file::parse_request_file;

    use super::*;

    fn render(src: &str) -> String {
        let error = parse_request_file(src).unwrap_err();
        let mut out = Vec::new();
        write_request_file_error(src, &error, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_duplicate_report() {
        let out = render("Samples 300\nSamples 400\n");

        assert!(out.contains("Samples is given more than once"), "{}", out);
        assert!(out.contains("Samples first given here"), "{}", out);
        assert!(out.contains("given again here"), "{}", out);
    }

    #[test]
    fn test_syntax_report() {
        let src = "Temperature 288.0\nColor red\n";
        let error = parse_request_file(src).unwrap_err();
        assert!(matches!(error, RequestFileError::Syntax(_)));
        assert!(!reports(&error).is_empty());

        let out = render(src);
        assert!(out.contains("Invalid"), "{}", out);
    }
}
