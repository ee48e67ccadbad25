use glam::{dvec2, DVec2};
use image::{Rgb, RgbImage};
use planck_model::{spectrum::radiance_bounds, SampleSeries};

// Dark, so that every curve color, white included, stands out.
const BACKGROUND: Rgb<u8> = Rgb([16, 16, 20]);
const AXIS: Rgb<u8> = Rgb([200, 200, 200]);
const GRID: Rgb<u8> = Rgb([48, 48, 56]);
const GRID_LINES: u32 = 5;

/// Approximate display color of a black body (Tanner Helland's fit).
///
/// The temperature is clamped to 1000-40000 K.
pub fn blackbody_color(t: f64) -> Rgb<u8> {
    let t = t.clamp(1000.0, 40000.0) / 100.0;

    let red = if t < 66.0 {
        255.0
    } else {
        329.698727446 * (t - 60.0).powf(-0.1332047592)
    };

    let green = if t <= 66.0 {
        99.4708025861 * t.ln() - 161.1195681661
    } else {
        288.1221695283 * (t - 60.0).powf(-0.0755148492)
    };

    let blue = if t >= 66.0 {
        255.0
    } else if t <= 19.0 {
        0.0
    } else {
        138.5177312231 * (t - 10.0).ln() - 305.0447927307
    };

    Rgb([red, green, blue].map(|c: f64| c.clamp(0.0, 255.0) as u8))
}

/// Maps data coordinates (wavelength, radiance) into the pixel frame
/// inside the margins. Pixel y grows downwards.
struct Frame {
    min: DVec2,
    extent: DVec2,
    origin: DVec2,
    size: DVec2,
}

impl Frame {
    fn new(series: &SampleSeries, width: u32, height: u32, margin: u32) -> Self {
        let x_min = series.first().map_or(0.0, |s| s.wavelength);
        let x_max = series.last().map_or(1.0, |s| s.wavelength);
        let y_max = radiance_bounds(series).map_or(1.0, |(_, max)| max);

        let min = dvec2(x_min, 0.0);
        let mut extent = dvec2(x_max - x_min, y_max);
        // A single wavelength or an all-zero curve would collapse an axis.
        if extent.x <= 0.0 {
            extent.x = 1.0;
        }
        if extent.y <= 0.0 {
            extent.y = 1.0;
        }

        Self {
            min,
            extent,
            origin: dvec2(margin as f64, height.saturating_sub(margin) as f64),
            size: dvec2(
                width.saturating_sub(2 * margin) as f64,
                height.saturating_sub(2 * margin) as f64,
            ),
        }
    }

    fn to_pixel(&self, p: DVec2) -> (i64, i64) {
        let unit = (p - self.min) / self.extent;
        let pixel = self.origin + dvec2(unit.x, -unit.y) * self.size;
        (pixel.x.round() as i64, pixel.y.round() as i64)
    }
}

fn put(image: &mut RgbImage, x: i64, y: i64, color: Rgb<u8>) {
    if x >= 0 && y >= 0 && (x as u32) < image.width() && (y as u32) < image.height() {
        image.put_pixel(x as u32, y as u32, color);
    }
}

fn draw_line(image: &mut RgbImage, from: (i64, i64), to: (i64, i64), color: Rgb<u8>) {
    let (mut x, mut y) = from;
    let dx = (to.0 - x).abs();
    let dy = -(to.1 - y).abs();
    let sx = if x < to.0 { 1 } else { -1 };
    let sy = if y < to.1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        put(image, x, y, color);
        if x == to.0 && y == to.1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}

/// Draws the series as a line plot, wavelength on x and radiance on y.
pub fn render(series: &SampleSeries, temperature: f64, width: u32, height: u32) -> RgbImage {
    let margin = (width.min(height) / 10).max(1);
    let mut image = RgbImage::from_pixel(width, height, BACKGROUND);
    let frame = Frame::new(series, width, height, margin);

    let left = margin as i64;
    let right = width.saturating_sub(margin) as i64;
    let top = margin as i64;
    let bottom = height.saturating_sub(margin) as i64;

    for i in 1..=GRID_LINES {
        let x = left + (right - left) * i as i64 / GRID_LINES as i64;
        let y = bottom - (bottom - top) * i as i64 / GRID_LINES as i64;
        draw_line(&mut image, (x, top), (x, bottom), GRID);
        draw_line(&mut image, (left, y), (right, y), GRID);
    }
    draw_line(&mut image, (left, top), (left, bottom), AXIS);
    draw_line(&mut image, (left, bottom), (right, bottom), AXIS);

    let color = blackbody_color(temperature);
    let points: Vec<(i64, i64)> = series
        .iter()
        .map(|s| frame.to_pixel(dvec2(s.wavelength, s.radiance)))
        .collect();

    match points.as_slice() {
        [single] => put(&mut image, single.0, single.1, color),
        _ => {
            for w in points.windows(2) {
                draw_line(&mut image, w[0], w[1], color);
            }
        }
    }

    image
}

#[cfg(test)]
mod test {
    use planck_model::{generate, PlotRequest};

    use super::*;

    #[test]
    fn test_blackbody_color() {
        // Candle light is orange, daylight white, a blue giant blue.
        assert_eq!(blackbody_color(1900.0).0[0], 255);
        assert!(blackbody_color(1900.0).0[2] < blackbody_color(1900.0).0[1]);
        assert_eq!(blackbody_color(6600.0), Rgb([255, 255, 255]));
        assert!(blackbody_color(20000.0).0[0] < 255);
        assert_eq!(blackbody_color(20000.0).0[2], 255);
        // Everything below 1000 K shares one color.
        assert_eq!(blackbody_color(288.0), blackbody_color(1000.0));
    }

    #[test]
    fn test_curve_visible_on_background() {
        for t in [288.0, 1900.0, 5778.0, 6600.0, 20000.0, 40000.0] {
            let color = blackbody_color(t);
            assert_ne!(color, BACKGROUND, "{} K", t);
            assert_ne!(color, GRID, "{} K", t);
        }
    }

    #[test]
    fn test_frame() {
        let request = PlotRequest::new(300, 288.0, 5.0e-6, 20.0e-6).unwrap();
        let series = generate(&request).unwrap();
        let frame = Frame::new(&series, 800, 600, 60);

        let first = series.first().unwrap();
        assert_eq!(frame.to_pixel(dvec2(first.wavelength, 0.0)), (60, 540));
        assert_eq!(frame.to_pixel(dvec2(20.0, 0.0)), (740, 540));
    }

    #[test]
    fn test_render() {
        let request = PlotRequest::new(300, 288.0, 5.0e-6, 20.0e-6).unwrap();
        let series = generate(&request).unwrap();
        let image = render(&series, request.temperature, 800, 600);

        assert_eq!(image.dimensions(), (800, 600));
        assert_eq!(*image.get_pixel(0, 0), BACKGROUND);

        let color = blackbody_color(288.0);
        let curve = image.pixels().filter(|p| **p == color).count();
        assert!(curve >= 680, "only {} curve pixels", curve);

        // The peak touches the top edge of the frame.
        assert!((0..800).any(|x| *image.get_pixel(x, 60) == color));
    }

    #[test]
    fn test_render_flat_range() {
        let request = PlotRequest::new(100, 288.0, 10.0e-6, 10.0e-6).unwrap();
        let series = generate(&request).unwrap();
        let image = render(&series, request.temperature, 200, 100);

        assert_eq!(image.dimensions(), (200, 100));
    }
}
