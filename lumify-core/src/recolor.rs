//! Map every pixel of an image to a band color by relative luminance.

use image::{DynamicImage, RgbaImage};
use rayon::prelude::*;

use crate::color::{luminance_percent, Rgb};
use crate::thresholds::BandList;

/// Pick the highest band whose threshold the luminance meets or exceeds.
///
/// Panics if no band matches: [`parse_thresholds`] guarantees a 0-percent
/// catch-all, so reaching the panic means the band list bypassed the parser
/// and broke the contract between it and the recolorer.
///
/// [`parse_thresholds`]: crate::thresholds::parse_thresholds
fn pick_band(bands: &BandList, luminance: f64) -> Rgb {
    for band in bands.bands().iter().rev() {
        if luminance >= band.threshold as f64 {
            return band.color;
        }
    }
    panic!(
        "luminance {} below all thresholds in {:?}; band list is missing its 0-percent catch-all",
        luminance, bands
    );
}

/// Recolor an image: each pixel takes the color of the highest band whose
/// threshold its luminance meets. The output has the same dimensions as the
/// input and is fully opaque regardless of input alpha.
///
/// Pixels are independent, so rows are processed in parallel; each worker
/// writes a disjoint output row.
pub fn recolor(img: &DynamicImage, bands: &BandList) -> RgbaImage {
    let src = img.to_rgba8();
    let (width, height) = src.dimensions();

    let stride = width as usize * 4;
    if stride == 0 || height == 0 {
        return RgbaImage::new(width, height);
    }
    let mut out = vec![0u8; src.as_raw().len()];

    out.par_chunks_exact_mut(stride)
        .zip(src.as_raw().par_chunks_exact(stride))
        .for_each(|(out_row, src_row)| {
            for (out_px, src_px) in out_row.chunks_exact_mut(4).zip(src_row.chunks_exact(4)) {
                let pixel = image::Rgba([src_px[0], src_px[1], src_px[2], src_px[3]]);
                let color = pick_band(bands, luminance_percent(pixel));
                out_px[0] = color.r;
                out_px[1] = color.g;
                out_px[2] = color.b;
                out_px[3] = 255;
            }
        });

    RgbaImage::from_raw(width, height, out).expect("output buffer sized to input dimensions")
}
