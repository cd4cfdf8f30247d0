use clap::{Parser, Subcommand};
use std::path::PathBuf;

use shadowlift_cli::ToneArgs;

mod commands;

use commands::{
    cmd_analyze, cmd_batch, cmd_convert, cmd_preset_create, cmd_preset_list, cmd_preset_show,
};

#[derive(Parser)]
#[command(name = "shadowlift")]
#[command(version, about = "Shadow recovery tone mapping for photos", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Tone a single image
    Convert {
        /// Input image (PNG or TIFF)
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Output file or directory
        #[arg(short, long, value_name = "PATH")]
        out: Option<PathBuf>,

        #[command(flatten)]
        tone: ToneArgs,

        /// Output format (png or tiff)
        #[arg(long, value_name = "FORMAT", default_value = "png")]
        format: String,

        /// Only print the output path
        #[arg(short, long)]
        silent: bool,

        /// Print engine diagnostics to stderr
        #[arg(short, long)]
        verbose: bool,
    },

    /// Tone many images with shared settings
    Batch {
        /// Input files or directories
        #[arg(value_name = "INPUTS")]
        inputs: Vec<PathBuf>,

        /// Scan directories recursively
        #[arg(short, long)]
        recursive: bool,

        /// Output directory
        #[arg(short, long, value_name = "DIR")]
        out: Option<PathBuf>,

        /// Number of parallel threads
        #[arg(short = 'j', long, value_name = "N")]
        threads: Option<usize>,

        #[command(flatten)]
        tone: ToneArgs,

        /// Output format (png or tiff)
        #[arg(long, value_name = "FORMAT", default_value = "png")]
        format: String,

        /// Only print output paths
        #[arg(short, long)]
        silent: bool,

        /// Print engine diagnostics to stderr
        #[arg(short, long)]
        verbose: bool,
    },

    /// Show the base-layer statistics and shadow tuning of an image
    Analyze {
        /// Input image
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Print JSON instead of a report
        #[arg(long)]
        json: bool,

        /// Fixed base-layer radius in pixels
        #[arg(long, value_name = "PIXELS")]
        radius: Option<usize>,

        /// Engine config file
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Print engine diagnostics to stderr
        #[arg(short, long)]
        verbose: bool,
    },

    /// Manage tone presets
    Preset {
        #[command(subcommand)]
        action: PresetAction,
    },
}

#[derive(Subcommand)]
enum PresetAction {
    /// List available presets
    List {
        /// Preset directory
        #[arg(short, long, value_name = "DIR")]
        dir: Option<PathBuf>,
    },

    /// Show preset details
    Show {
        /// Preset name or file
        preset: String,

        /// Preset directory
        #[arg(short, long, value_name = "DIR")]
        dir: Option<PathBuf>,
    },

    /// Create a new preset file
    Create {
        /// Output file
        output: PathBuf,

        /// Preset name
        #[arg(short, long)]
        name: String,

        /// Preset to start from (defaults to the built-in "default")
        #[arg(long, value_name = "NAME|FILE")]
        from: Option<String>,

        /// Preset directory used to resolve --from
        #[arg(short, long, value_name = "DIR")]
        dir: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Convert {
            input,
            out,
            tone,
            format,
            silent,
            verbose,
        } => cmd_convert(input, out, tone, format, silent, verbose),

        Commands::Batch {
            inputs,
            recursive,
            out,
            threads,
            tone,
            format,
            silent,
            verbose,
        } => cmd_batch(inputs, recursive, out, threads, tone, format, silent, verbose),

        Commands::Analyze {
            input,
            json,
            radius,
            config,
            verbose,
        } => cmd_analyze(input, json, radius, config, verbose),

        Commands::Preset { action } => match action {
            PresetAction::List { dir } => cmd_preset_list(dir),
            PresetAction::Show { preset, dir } => cmd_preset_show(preset, dir),
            PresetAction::Create {
                output,
                name,
                from,
                dir,
            } => cmd_preset_create(output, name, from, dir),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_convert_parses_negative_sliders() {
        let cli = Cli::try_parse_from([
            "shadowlift",
            "convert",
            "in.png",
            "--shadows",
            "60",
            "--blacks",
            "-15",
            "--algorithm",
            "review",
        ])
        .unwrap();
        match cli.command {
            Commands::Convert { tone, format, .. } => {
                assert_eq!(tone.shadows, Some(60.0));
                assert_eq!(tone.blacks, Some(-15.0));
                assert_eq!(tone.algorithm.as_deref(), Some("review"));
                assert_eq!(format, "png");
            }
            _ => panic!("expected convert"),
        }
    }

    #[test]
    fn test_neutral_conflicts_with_preset() {
        let result = Cli::try_parse_from([
            "shadowlift",
            "convert",
            "in.png",
            "--neutral",
            "--preset",
            "default",
        ]);
        assert!(result.is_err());
    }
}
