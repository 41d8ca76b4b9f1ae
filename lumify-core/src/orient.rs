//! EXIF orientation correction.
//!
//! JPEG photos frequently store their rotation as an EXIF tag instead of
//! rotating the pixel data. Applied before recoloring so the output is
//! upright.

use image::DynamicImage;
use std::io::Cursor;

/// Read the EXIF orientation tag from encoded image bytes. Returns None if
/// the container has no readable tag.
fn read_orientation(bytes: &[u8]) -> Option<u32> {
    let mut cursor = Cursor::new(bytes);
    let exif = exif::Reader::new().read_from_container(&mut cursor).ok()?;
    let field = exif.get_field(exif::Tag::Orientation, exif::In::PRIMARY)?;
    field.value.get_uint(0)
}

/// Rotate/flip a decoded image according to the EXIF orientation tag in its
/// original encoded bytes. Images without a readable tag, or with the
/// "normal" orientation, are returned unchanged.
pub fn apply_exif_orientation(img: DynamicImage, bytes: &[u8]) -> DynamicImage {
    match read_orientation(bytes) {
        Some(2) => img.fliph(),
        Some(3) => img.rotate180(),
        Some(4) => img.flipv(),
        Some(5) => img.rotate270().fliph(),
        Some(6) => img.rotate90(),
        Some(7) => img.rotate90().fliph(),
        Some(8) => img.rotate270(),
        _ => img,
    }
}
