use clap::Parser;
use image::{DynamicImage, ImageFormat, ImageReader};
use std::fs::File;
use std::io::{BufWriter, Cursor, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

use lumify_core::orient::apply_exif_orientation;
use lumify_core::recolor::recolor;
use lumify_core::thresholds::{parse_thresholds, ThresholdSpecError};

#[derive(Parser)]
#[command(
    name = "lumify",
    about = "Recolor an image by mapping each pixel's luminance to a band color"
)]
struct Cli {
    /// Input image path (JPEG, PNG, GIF, ...)
    input: PathBuf,

    /// Output path; always written as JPEG
    #[arg(long, short, default_value = "recolored.jpg")]
    output: PathBuf,

    /// Luminance bands as "percent,hexcolor,..." pairs, e.g. "0,80C9AC,50,221F20"
    #[arg(long, short, default_value = "0,000000,50,FFFFFF")]
    thresholds: String,
}

#[derive(Debug, Error)]
enum AppError {
    #[error("could not read {path}: {source}")]
    InputIo {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("could not decode {path}: {source}")]
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error(transparent)]
    ThresholdSpec(#[from] ThresholdSpecError),

    #[error("could not write {path}: {source}")]
    OutputIo {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("could not encode JPEG to {path}: {source}")]
    Encode {
        path: PathBuf,
        source: image::ImageError,
    },
}

/// Decode the input file, reporting the detected format on stderr.
fn load_image(path: &Path) -> Result<DynamicImage, AppError> {
    let bytes = std::fs::read(path).map_err(|source| AppError::InputIo {
        path: path.to_path_buf(),
        source,
    })?;

    let reader = ImageReader::new(Cursor::new(&bytes))
        .with_guessed_format()
        .map_err(|source| AppError::InputIo {
            path: path.to_path_buf(),
            source,
        })?;
    let format = reader.format();

    let img = reader.decode().map_err(|source| AppError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    if let Some(format) = format {
        eprintln!(
            "Decoded {} ({:?}, {}x{})",
            path.display(),
            format,
            img.width(),
            img.height()
        );
    }

    Ok(apply_exif_orientation(img, &bytes))
}

/// Ask before replacing an existing output file. Anything other than a "y"
/// answer declines.
fn confirm_overwrite(path: &Path) -> Result<bool, AppError> {
    if !path.exists() {
        return Ok(true);
    }

    eprint!("{} already exists. Replace it? (y/n) ", path.display());
    std::io::stderr().flush().ok();

    let mut answer = String::new();
    std::io::stdin()
        .read_line(&mut answer)
        .map_err(|source| AppError::OutputIo {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(answer.trim().eq_ignore_ascii_case("y"))
}

fn run(cli: &Cli) -> Result<(), AppError> {
    let bands = parse_thresholds(&cli.thresholds)?;

    let img = load_image(&cli.input)?;

    if !confirm_overwrite(&cli.output)? {
        eprintln!("Leaving {} untouched", cli.output.display());
        return Ok(());
    }

    eprintln!(
        "Processing: {} -> {}",
        cli.input.display(),
        cli.output.display()
    );

    let recolored = recolor(&img, &bands);

    // JPEG has no alpha channel; the recolorer only emits opaque pixels, so
    // dropping it is lossless.
    let rgb = DynamicImage::ImageRgba8(recolored).to_rgb8();

    let file = File::create(&cli.output).map_err(|source| AppError::OutputIo {
        path: cli.output.clone(),
        source,
    })?;
    let mut writer = BufWriter::new(file);
    rgb.write_to(&mut writer, ImageFormat::Jpeg)
        .map_err(|source| AppError::Encode {
            path: cli.output.clone(),
            source,
        })?;

    eprintln!("Done: {}", cli.output.display());
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
