//! Input file handling and path utilities.

use std::path::{Path, PathBuf};

use shadowlift_core::exporters::OutputFormat;

/// Supported image extensions for batch processing
pub const SUPPORTED_EXTENSIONS: &[&str] = &["png", "tif", "tiff"];

/// Suffix appended to the input file stem for derived output names
const OUTPUT_SUFFIX: &str = "_lifted";

/// Determine output path based on input, output dir, and output format
///
/// # Arguments
/// * `input` - Input file path
/// * `out` - Optional output directory or file path
/// * `format` - Output format, which picks the extension of derived names
///
/// # Returns
/// The full output path for the processed image
pub fn determine_output_path(
    input: &Path,
    out: &Option<PathBuf>,
    format: OutputFormat,
) -> Result<PathBuf, String> {
    let derived_name = || -> Result<String, String> {
        let stem = input
            .file_stem()
            .ok_or("Invalid input filename")?
            .to_string_lossy();
        Ok(format!("{}{}.{}", stem, OUTPUT_SUFFIX, format.extension()))
    };

    match out {
        // A directory receives the derived file name
        Some(out_path) if out_path.is_dir() => Ok(out_path.join(derived_name()?)),
        Some(out_path) => Ok(out_path.clone()),
        None => {
            let parent = input.parent().unwrap_or(Path::new("."));
            Ok(parent.join(derived_name()?))
        }
    }
}

/// Expand a list of inputs (files and directories) into a list of image files.
///
/// Directories are scanned for supported image files (.png, .tif, .tiff).
/// If `recursive` is true, subdirectories are also scanned.
pub fn expand_inputs(inputs: &[PathBuf], recursive: bool) -> Result<Vec<PathBuf>, String> {
    let mut files = Vec::new();

    for input in inputs {
        if input.is_dir() {
            collect_images_from_dir(input, recursive, &mut files)?;
        } else if input.is_file() {
            files.push(input.clone());
        } else {
            return Err(format!("Path not found: {}", input.display()));
        }
    }

    // Sort for consistent ordering
    files.sort();
    Ok(files)
}

fn is_supported(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|ext| SUPPORTED_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// Recursively collect image files from a directory.
fn collect_images_from_dir(
    dir: &Path,
    recursive: bool,
    files: &mut Vec<PathBuf>,
) -> Result<(), String> {
    let entries = std::fs::read_dir(dir)
        .map_err(|e| format!("Failed to read directory {}: {}", dir.display(), e))?;

    for entry in entries {
        let entry = entry.map_err(|e| format!("Error reading directory entry: {}", e))?;
        let path = entry.path();

        if path.is_dir() && recursive {
            collect_images_from_dir(&path, recursive, files)?;
        } else if path.is_file() && is_supported(&path) {
            files.push(path);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_output_next_to_input_by_default() {
        let path = determine_output_path(Path::new("/scans/roll1/frame.tif"), &None, OutputFormat::Png)
            .unwrap();
        assert_eq!(path, PathBuf::from("/scans/roll1/frame_lifted.png"));
    }

    #[test]
    fn test_output_into_directory() {
        let dir = tempdir().unwrap();
        let out = Some(dir.path().to_path_buf());
        let path = determine_output_path(Path::new("frame.png"), &out, OutputFormat::Tiff8).unwrap();
        assert_eq!(path, dir.path().join("frame_lifted.tif"));
    }

    #[test]
    fn test_explicit_output_file_kept() {
        let out = Some(PathBuf::from("/tmp/does-not-exist/result.png"));
        let path = determine_output_path(Path::new("frame.tif"), &out, OutputFormat::Tiff8).unwrap();
        assert_eq!(path, PathBuf::from("/tmp/does-not-exist/result.png"));
    }

    #[test]
    fn test_expand_inputs_filters_and_sorts() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("b.png"), b"").unwrap();
        fs::write(dir.path().join("a.TIF"), b"").unwrap();
        fs::write(dir.path().join("notes.txt"), b"").unwrap();
        let nested = dir.path().join("nested");
        fs::create_dir(&nested).unwrap();
        fs::write(nested.join("c.tiff"), b"").unwrap();

        let flat = expand_inputs(&[dir.path().to_path_buf()], false).unwrap();
        assert_eq!(
            flat,
            vec![dir.path().join("a.TIF"), dir.path().join("b.png")]
        );

        let deep = expand_inputs(&[dir.path().to_path_buf()], true).unwrap();
        assert_eq!(deep.len(), 3);
        assert!(deep.contains(&nested.join("c.tiff")));
    }

    #[test]
    fn test_expand_inputs_missing_path() {
        let dir = tempdir().unwrap();
        let err = expand_inputs(&[dir.path().join("gone.png")], false).unwrap_err();
        assert!(err.contains("Path not found"));
    }
}
