//! Single image processing.

use std::path::{Path, PathBuf};
use std::time::Instant;

use shadowlift_core::decoders::decode_image;
use shadowlift_core::exporters::{export_png, export_tiff8, OutputFormat};
use shadowlift_core::process_image;
use shadowlift_core::verbose_println;

use crate::types::ProcessingParams;

/// Decode, tone and export one image.
///
/// The output format comes from `params.format`, not from the output
/// file extension. Missing parent directories are created.
pub fn process_single_image(
    input: &Path,
    output_path: &Path,
    params: &ProcessingParams,
) -> Result<PathBuf, String> {
    let start = Instant::now();
    let image = decode_image(input)?;
    verbose_println!(
        "[CLI] decoded {} ({}x{}) in {:.1}ms",
        input.display(),
        image.width(),
        image.height(),
        start.elapsed().as_secs_f64() * 1000.0
    );

    let result = process_image(&image, &params.tone, params.algorithm, &params.options)?;

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create output directory: {}", e))?;
        }
    }

    match params.format {
        OutputFormat::Png => export_png(&result, output_path)?,
        OutputFormat::Tiff8 => export_tiff8(&result, output_path)?,
    }

    Ok(output_path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use shadowlift_core::{RgbaImage, ToneParams};
    use tempfile::tempdir;

    fn write_gradient(path: &Path) {
        let mut data = Vec::new();
        for y in 0..8u32 {
            for x in 0..8u32 {
                let v = ((x + y) * 4) as u8;
                data.extend_from_slice(&[v, v, v, 255]);
            }
        }
        let image = RgbaImage::new(8, 8, data).unwrap();
        export_png(&image, path).unwrap();
    }

    #[test]
    fn test_process_single_image_lifts_shadows() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("dark.png");
        write_gradient(&input);
        let output = dir.path().join("out").join("dark_lifted.tif");

        let params = ProcessingParams {
            format: OutputFormat::Tiff8,
            ..ProcessingParams::default()
        };
        let written = process_single_image(&input, &output, &params).unwrap();
        assert_eq!(written, output);

        let before = decode_image(&input).unwrap();
        let after = decode_image(&output).unwrap();
        assert_eq!(after.width(), 8);
        assert_eq!(after.height(), 8);
        let mean = |img: &RgbaImage| -> f64 {
            img.as_bytes()
                .chunks_exact(4)
                .map(|px| px[1] as f64)
                .sum::<f64>()
                / img.pixel_count() as f64
        };
        assert!(mean(&after) > mean(&before));
    }

    #[test]
    fn test_process_single_image_neutral_keeps_pixels() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("flat.png");
        write_gradient(&input);
        let output = dir.path().join("flat_lifted.png");

        let params = ProcessingParams {
            tone: ToneParams::neutral(),
            ..ProcessingParams::default()
        };
        process_single_image(&input, &output, &params).unwrap();

        let before = decode_image(&input).unwrap();
        let after = decode_image(&output).unwrap();
        for (a, b) in before.as_bytes().iter().zip(after.as_bytes()) {
            assert!((*a as i16 - *b as i16).abs() <= 1);
        }
    }

    #[test]
    fn test_process_single_image_missing_input() {
        let dir = tempdir().unwrap();
        let result = process_single_image(
            &dir.path().join("missing.png"),
            &dir.path().join("out.png"),
            &ProcessingParams::default(),
        );
        assert!(result.is_err());
    }
}
