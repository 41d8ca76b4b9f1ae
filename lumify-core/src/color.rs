/// An opaque sRGB color, one byte per channel. The recolorer never emits
/// translucent pixels, so alpha is implied fully opaque and only appears
/// when converting to the codec's pixel type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl From<Rgb> for image::Rgba<u8> {
    fn from(c: Rgb) -> Self {
        image::Rgba([c.r, c.g, c.b, 255])
    }
}

/// Relative luminance of a pixel as a percentage in [0, 100].
///
/// Each channel is normalized to a 0-100 percentage of its maximum and the
/// three are combined with the ITU-R BT.709 weights. Alpha is ignored.
pub fn luminance_percent(pixel: image::Rgba<u8>) -> f64 {
    let [r, g, b, _] = pixel.0;

    let red_percent = r as f64 / 255.0 * 100.0;
    let green_percent = g as f64 / 255.0 * 100.0;
    let blue_percent = b as f64 / 255.0 * 100.0;

    red_percent * 0.2126 + green_percent * 0.7152 + blue_percent * 0.0722
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn assert_in_delta(expected: f64, got: f64, delta: f64) {
        assert!(
            (expected - got).abs() <= delta,
            "expected {} within {} of {}",
            got,
            delta,
            expected
        );
    }

    #[test]
    fn test_black_is_zero() {
        assert_in_delta(0.0, luminance_percent(Rgba([0, 0, 0, 255])), 0.01);
    }

    #[test]
    fn test_white_is_one_hundred() {
        assert_in_delta(100.0, luminance_percent(Rgba([255, 255, 255, 255])), 0.01);
    }

    #[test]
    fn test_violet() {
        assert_in_delta(28.48, luminance_percent(Rgba([255, 0, 255, 255])), 0.01);
    }

    #[test]
    fn test_alpha_is_ignored() {
        let opaque = luminance_percent(Rgba([40, 80, 120, 255]));
        let transparent = luminance_percent(Rgba([40, 80, 120, 0]));
        assert_eq!(opaque, transparent);
    }

    #[test]
    fn test_grayscale_is_monotonic() {
        let mut previous = -1.0;
        for v in 0..=255u8 {
            let lum = luminance_percent(Rgba([v, v, v, 255]));
            assert!(
                lum > previous,
                "luminance {} at gray {} not above previous {}",
                lum,
                v,
                previous
            );
            previous = lum;
        }
    }

    #[test]
    fn test_rgba_conversion_is_opaque() {
        let rgba: Rgba<u8> = Rgb::new(128, 201, 172).into();
        assert_eq!(rgba, Rgba([128, 201, 172, 255]));
    }
}
