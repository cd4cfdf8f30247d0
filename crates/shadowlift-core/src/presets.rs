//! Tone preset management
//!
//! Load, save, list and resolve tone presets stored as YAML.

use std::path::{Path, PathBuf};

use crate::models::{TonePreset, ToneParams};
use crate::tone::ToneAlgorithm;

/// Names of the presets compiled into the library
pub const BUILTIN_PRESETS: &[&str] = &["default", "neutral"];

/// Validate a preset name before it is joined onto a directory.
/// Rejects names containing path separators, "..", or other dangerous patterns.
pub fn validate_preset_name(name: &str) -> Result<(), String> {
    if name.is_empty() {
        return Err("Preset name cannot be empty".to_string());
    }

    if name.contains('/') || name.contains('\\') {
        return Err(format!("Preset name '{}' cannot contain path separators", name));
    }

    if name.contains("..") {
        return Err(format!("Preset name '{}' cannot contain '..'", name));
    }

    // Hidden files
    if name.starts_with('.') {
        return Err(format!("Preset name '{}' cannot start with '.'", name));
    }

    if name.contains('\0') {
        return Err("Preset name cannot contain null bytes".to_string());
    }

    Ok(())
}

/// Built-in preset by name: `default` (shadows +70) or `neutral`
pub fn builtin_preset(name: &str) -> Option<TonePreset> {
    let params = match name.trim().to_ascii_lowercase().as_str() {
        "default" => ToneParams::default_preset(),
        "neutral" => ToneParams::neutral(),
        _ => return None,
    };
    Some(TonePreset::new(name.trim(), ToneAlgorithm::Classic, params))
}

/// Load a tone preset from a YAML file
pub fn load_tone_preset<P: AsRef<Path>>(path: P) -> Result<TonePreset, String> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read preset file {}: {}", path.display(), e))?;

    let mut preset: TonePreset = serde_yaml::from_str(&contents)
        .map_err(|e| format!("Failed to parse preset YAML {}: {}", path.display(), e))?;
    preset.params.sanitize();
    Ok(preset)
}

/// Save a tone preset to a YAML file
pub fn save_tone_preset<P: AsRef<Path>>(preset: &TonePreset, path: P) -> Result<(), String> {
    let path = path.as_ref();
    let yaml =
        serde_yaml::to_string(preset).map_err(|e| format!("Failed to serialize preset: {}", e))?;

    std::fs::write(path, yaml)
        .map_err(|e| format!("Failed to write preset file {}: {}", path.display(), e))
}

/// List preset names (file stems of `.yml`/`.yaml` files) in a directory, sorted
pub fn list_tone_presets<P: AsRef<Path>>(dir: P) -> Result<Vec<String>, String> {
    let dir = dir.as_ref();
    let mut presets = Vec::new();

    let entries =
        std::fs::read_dir(dir).map_err(|e| format!("Failed to read presets directory: {}", e))?;

    for entry in entries {
        let entry = entry.map_err(|e| format!("Failed to read directory entry: {}", e))?;
        let path = entry.path();

        if is_yaml(&path) {
            if let Some(name) = path.file_stem().and_then(|n| n.to_str()) {
                presets.push(name.to_string());
            }
        }
    }

    presets.sort();
    Ok(presets)
}

fn is_yaml(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yml") | Some("yaml")
    )
}

/// Get the default presets directory (`~/shadowlift/presets`), creating it on demand
pub fn get_presets_dir() -> Result<PathBuf, String> {
    let home_dir =
        dirs::home_dir().ok_or_else(|| "Could not determine home directory".to_string())?;

    let presets_dir = home_dir.join("shadowlift").join("presets");

    if !presets_dir.exists() {
        std::fs::create_dir_all(&presets_dir)
            .map_err(|e| format!("Failed to create presets directory: {}", e))?;
    }

    Ok(presets_dir)
}

/// Path of a named preset inside a presets directory
pub fn preset_path(dir: &Path, name: &str) -> Result<PathBuf, String> {
    validate_preset_name(name)?;
    Ok(dir.join(format!("{}.yml", name)))
}

/// Resolve a preset reference.
///
/// A reference that names an existing file is loaded from that file. A
/// built-in name wins next; otherwise `<dir>/<name>.yml` (or `.yaml`) is
/// loaded.
pub fn resolve_preset(reference: &str, dir: &Path) -> Result<TonePreset, String> {
    let as_path = Path::new(reference);
    if is_yaml(as_path) && as_path.is_file() {
        return load_tone_preset(as_path);
    }

    if let Some(preset) = builtin_preset(reference) {
        return Ok(preset);
    }

    let path = preset_path(dir, reference)?;
    if path.is_file() {
        return load_tone_preset(path);
    }

    let alternate = dir.join(format!("{}.yaml", reference));
    if alternate.is_file() {
        return load_tone_preset(alternate);
    }

    Err(format!(
        "Preset '{}' not found in {} (built-in presets: {})",
        reference,
        dir.display(),
        BUILTIN_PRESETS.join(", ")
    ))
}
