use std::io::{self, Write};

use planck_model::SampleSeries;

pub const X_LABEL: &str = "Wavelength μm";
pub const Y_LABEL: &str = "Black body radiation W·sr⁻¹·m⁻³";
pub const Y_LABEL_NORMALIZED: &str = "Black body radiation (relative to peak)";

pub fn write_csv<W: Write>(mut w: W, series: &SampleSeries, normalized: bool) -> io::Result<()> {
    let y_label = if normalized { Y_LABEL_NORMALIZED } else { Y_LABEL };

    writeln!(w, "{},{}", X_LABEL, y_label)?;
    for s in series {
        writeln!(w, "{},{}", s.wavelength, s.radiance)?;
    }

    w.flush()
}

#[cfg(test)]
mod test {
    use planck_model::{generate, PlotRequest};

    use super::*;

    #[test]
    fn test_write_csv() {
        let request = PlotRequest::new(100, 288.0, 5.0e-6, 20.0e-6).unwrap();
        let series = generate(&request).unwrap();

        let mut buf = Vec::new();
        write_csv(&mut buf, &series, false).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 101);
        assert_eq!(lines[0], "Wavelength μm,Black body radiation W·sr⁻¹·m⁻³");

        let (x, y) = lines[1].split_once(',').unwrap();
        assert_eq!(x.parse::<f64>().unwrap(), series.first().unwrap().wavelength);
        assert_eq!(y.parse::<f64>().unwrap(), series.first().unwrap().radiance);
    }
}
