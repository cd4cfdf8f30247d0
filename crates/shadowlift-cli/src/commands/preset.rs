use std::path::PathBuf;

use shadowlift_core::presets::{
    builtin_preset, get_presets_dir, list_tone_presets, resolve_preset, save_tone_preset,
    BUILTIN_PRESETS,
};
use shadowlift_core::{ToneParams, TonePreset};

fn presets_dir_or_default(dir: Option<PathBuf>) -> PathBuf {
    dir.unwrap_or_else(|| get_presets_dir().unwrap_or_else(|_| PathBuf::from("presets")))
}

/// List built-in presets and the presets in the specified or default directory.
pub fn cmd_preset_list(dir: Option<PathBuf>) -> Result<(), String> {
    let dir = presets_dir_or_default(dir);

    println!("Built-in presets:");
    for name in BUILTIN_PRESETS {
        println!("  {}", name);
    }

    println!("\nListing presets in: {}", dir.display());
    match list_tone_presets(&dir) {
        Ok(presets) => {
            if presets.is_empty() {
                println!("No presets found.");
            } else {
                for preset in presets {
                    println!("  {}", preset);
                }
            }
            Ok(())
        }
        Err(e) => Err(format!("Failed to list presets: {}", e)),
    }
}

fn print_params(params: &ToneParams) {
    println!("  Exposure:   {:+.2} EV", params.exposure);
    println!("  Contrast:   {:+.0}", params.contrast);
    println!("  Highlights: {:+.0}", params.highlights);
    println!("  Shadows:    {:+.0}", params.shadows);
    println!("  Whites:     {:+.0}", params.whites);
    println!("  Blacks:     {:+.0}", params.blacks);
}

/// Display the algorithm and tone controls of a preset.
pub fn cmd_preset_show(preset: String, dir: Option<PathBuf>) -> Result<(), String> {
    println!("Loading preset: {}", preset);

    let dir = presets_dir_or_default(dir);
    let preset_obj = resolve_preset(&preset, &dir)?;

    println!("\nPreset: {}", preset_obj.name);
    println!("Algorithm: {}", preset_obj.algorithm);
    println!("\nTone Controls:");
    print_params(&preset_obj.params);

    if let Some(notes) = &preset_obj.notes {
        println!("\nNotes: {}", notes);
    }

    println!();
    Ok(())
}

/// Create a new preset file, starting from a built-in or existing preset.
pub fn cmd_preset_create(
    output: PathBuf,
    name: String,
    from: Option<String>,
    dir: Option<PathBuf>,
) -> Result<(), String> {
    println!("Creating new preset: {}", name);

    let source = match from {
        Some(reference) => resolve_preset(&reference, &presets_dir_or_default(dir))?,
        None => builtin_preset("default")
            .ok_or_else(|| "Built-in default preset is missing".to_string())?,
    };

    let preset = TonePreset {
        name: name.clone(),
        notes: Some(format!("Tone preset: {}", name)),
        ..source
    };

    save_tone_preset(&preset, &output)?;

    println!("Preset created: {}", output.display());
    println!("You can now edit this file to customize the parameters.");
    println!();

    Ok(())
}
