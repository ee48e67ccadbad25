use std::{
    fs::File,
    io::{self, BufWriter, Read, Write},
    path::{Path, PathBuf},
};

use clap::Parser;
use log::LevelFilter;
use planck_model::{
    generate, generate_normalized, peak_wavelength, spectrum::peak_sample, SampleError,
};
use planck_parser::request_file::{parse_request_file, RequestFile, RequestFileError};
use simple_logger::SimpleLogger;
use thiserror::Error;

use input::{InputError, Overrides};

mod input;
mod output;
mod plot;
mod report;

#[derive(Parser)]
#[clap(about = "Plot black body radiation using Planck's law")]
struct Opts {
    #[clap(short = 'n', long, allow_hyphen_values = true, help = "Number of plot points [int]")]
    samples: Option<String>,
    #[clap(short, long, allow_hyphen_values = true, help = "Temperature [K]")]
    temperature: Option<String>,
    #[clap(long, allow_hyphen_values = true, help = "Wavelength [m] from")]
    lower: Option<String>,
    #[clap(long, allow_hyphen_values = true, help = "Wavelength [m] to")]
    upper: Option<String>,
    #[clap(short, long, help = "Plot request file")]
    request: Option<PathBuf>,
    #[clap(short, long, help = "CSV output file. Defaults to stdout")]
    output: Option<PathBuf>,
    #[clap(short, long, help = "PNG plot output file")]
    plot: Option<PathBuf>,
    #[clap(long, default_value_t = 800, help = "Plot width in pixels")]
    width: u32,
    #[clap(long, default_value_t = 600, help = "Plot height in pixels")]
    height: u32,
    #[clap(long, help = "Radiance relative to the peak of the curve")]
    normalize: bool,
}

impl Opts {
    fn overrides(&self) -> Overrides {
        Overrides {
            sample_count: self.samples.clone(),
            temperature: self.temperature.clone(),
            wavelength_lower: self.lower.clone(),
            wavelength_upper: self.upper.clone(),
        }
    }
}

#[derive(Error, Debug)]
enum AppError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Sample(#[from] SampleError),
    #[error("Failed to read {}: {source}", .path.display())]
    ReadRequest { path: PathBuf, source: io::Error },
    #[error("Failed to parse {}: {error}", .path.display())]
    RequestFile {
        path: PathBuf,
        src: String,
        error: RequestFileError,
    },
    #[error("Failed to write output: {0}")]
    Io(#[from] io::Error),
    #[error("Failed to write plot: {0}")]
    Image(#[from] image::ImageError),
}

impl AppError {
    fn category(&self) -> &'static str {
        match self {
            AppError::Input(e) => e.category(),
            AppError::Sample(_) => "NumericDomainError",
            AppError::ReadRequest { .. } | AppError::RequestFile { .. } => "ConfigError",
            AppError::Io(_) | AppError::Image(_) => "OutputError",
        }
    }
}

fn load_request_file(path: &Path) -> Result<RequestFile, AppError> {
    let mut src = String::new();
    File::open(path)
        .and_then(|mut f| f.read_to_string(&mut src))
        .map_err(|source| AppError::ReadRequest {
            path: path.to_owned(),
            source,
        })?;

    parse_request_file(&src).map_err(|error| AppError::RequestFile {
        path: path.to_owned(),
        src,
        error,
    })
}

/// Writes the CSV to `stdout` unless an output file is given.
fn run<W: Write>(opts: &Opts, stdout: W) -> Result<(), AppError> {
    let file = opts
        .request
        .as_deref()
        .map(load_request_file)
        .transpose()?;

    let inputs = input::gather(&opts.overrides(), file.as_ref());
    let request = input::validate(&inputs)?;

    log::info!(
        "Plotting {} points at {} K from {} m to {} m",
        request.sample_count,
        request.temperature,
        request.wavelength_lower,
        request.wavelength_upper
    );

    let series = if opts.normalize {
        generate_normalized(&request)?
    } else {
        generate(&request)?
    };

    if let Some(peak) = peak_sample(&series) {
        log::info!(
            "Maximum {} at {} μm. Wien peak is at {} μm",
            peak.radiance,
            peak.wavelength,
            peak_wavelength(request.temperature) * planck_model::constants::M_TO_MICROMETER
        );
    }

    match &opts.output {
        Some(path) => {
            output::write_csv(BufWriter::new(File::create(path)?), &series, opts.normalize)?;
            log::info!("Wrote {}", path.display());
        }
        None => output::write_csv(stdout, &series, opts.normalize)?,
    }

    if let Some(path) = &opts.plot {
        plot::render(&series, request.temperature, opts.width, opts.height).save(path)?;
        log::info!(
            "Wrote {} ({} vs {})",
            path.display(),
            output::Y_LABEL,
            output::X_LABEL
        );
    }

    Ok(())
}

fn main() {
    if let Err(e) = SimpleLogger::new()
        .with_level(LevelFilter::Info)
        .env()
        .init()
    {
        eprintln!("Failed to initialize logger: {}", e);
    }

    let opts: Opts = Opts::parse();

    if let Err(e) = run(&opts, io::stdout().lock()) {
        if let AppError::RequestFile { src, error, .. } = &e {
            report::eprint_request_file_error(src, error);
        }
        log::error!("{}: {}", e.category(), e);
        std::process::exit(1);
    }
}
