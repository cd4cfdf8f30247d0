use rayon::prelude::*;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

use shadowlift_cli::{
    build_processing_params, determine_output_path, expand_inputs, parse_output_format,
    process_single_image, ToneArgs,
};

/// Tone many images with shared settings, in parallel.
///
/// Every file is attempted; failures are collected and reported in the
/// summary, and the command fails if any file failed.
#[allow(clippy::too_many_arguments)]
pub fn cmd_batch(
    inputs: Vec<PathBuf>,
    recursive: bool,
    out: Option<PathBuf>,
    threads: Option<usize>,
    tone: ToneArgs,
    format: String,
    silent: bool,
    verbose: bool,
) -> Result<(), String> {
    let batch_start = Instant::now();

    // Set verbose mode for core library
    shadowlift_core::config::set_verbose(verbose);

    if inputs.is_empty() {
        return Err("No input files or directories specified".to_string());
    }

    let format = parse_output_format(&format)?;
    let params = build_processing_params(&tone, format, silent, verbose)?;
    if verbose {
        shadowlift_core::config::log_config_usage();
    }

    // Expand directories to file lists
    let inputs = expand_inputs(&inputs, recursive)?;

    if inputs.is_empty() {
        return Err("No supported image files found (supported: .png, .tif, .tiff)".to_string());
    }

    if !silent {
        println!("Found {} image files to process", inputs.len());
        println!("Algorithm: {}", params.algorithm);
    }

    // Configure thread pool if specified
    if let Some(num_threads) = threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build_global()
            .map_err(|e| format!("Failed to configure thread pool: {}", e))?;
        if !silent {
            println!("Using {} threads for parallel processing", num_threads);
        }
    }

    // Batch output always goes into a directory, created up front
    let output_dir = out.unwrap_or_else(|| PathBuf::from("."));
    std::fs::create_dir_all(&output_dir)
        .map_err(|e| format!("Failed to create output directory: {}", e))?;
    let out = Some(output_dir.clone());

    let total_files = inputs.len();
    let processed_count = AtomicUsize::new(0);

    let results: Vec<Result<(PathBuf, f64), String>> = inputs
        .par_iter()
        .map(|input| {
            let file_start = Instant::now();

            let output_path = determine_output_path(input, &out, params.format)?;
            process_single_image(input, &output_path, &params)?;

            let file_elapsed = file_start.elapsed().as_secs_f64();
            let count = processed_count.fetch_add(1, Ordering::Relaxed) + 1;
            if !silent {
                println!(
                    "[{}/{}] {} -> {} ({:.2}s)",
                    count,
                    total_files,
                    input.display(),
                    output_path.display(),
                    file_elapsed
                );
            } else {
                println!("{}", output_path.display());
            }

            Ok((output_path, file_elapsed))
        })
        .collect();

    let summary = BatchSummary::collect(&inputs, results, output_dir);
    if !silent {
        summary.print(batch_start.elapsed().as_secs_f64());
    }
    summary.into_result()
}

/// Outcome of a batch run, in input order.
struct BatchSummary {
    succeeded: usize,
    failures: Vec<(PathBuf, String)>,
    output_dir: PathBuf,
}

impl BatchSummary {
    fn collect(
        inputs: &[PathBuf],
        results: Vec<Result<(PathBuf, f64), String>>,
        output_dir: PathBuf,
    ) -> Self {
        let mut succeeded = 0;
        let mut failures = Vec::new();
        for (input, result) in inputs.iter().zip(results) {
            match result {
                Ok(_) => succeeded += 1,
                Err(e) => failures.push((input.clone(), e)),
            }
        }
        Self {
            succeeded,
            failures,
            output_dir,
        }
    }

    fn print(&self, elapsed_secs: f64) {
        println!("\n========================================");
        println!("BATCH PROCESSING COMPLETE");
        println!("========================================");
        println!("  Successful: {}", self.succeeded);
        println!("  Failed:     {}", self.failures.len());
        println!("  Output dir: {}", self.output_dir.display());
        println!("  Total time: {:.2}s", elapsed_secs);
        if self.succeeded > 0 {
            println!(
                "  Avg time:   {:.2}s per file",
                elapsed_secs / self.succeeded as f64
            );
        }
    }

    fn into_result(self) -> Result<(), String> {
        if self.failures.is_empty() {
            return Ok(());
        }
        eprintln!("\nErrors:");
        for (path, error) in &self.failures {
            eprintln!("  {}: {}", path.display(), error);
        }
        Err(format!("{} files failed to process", self.failures.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_counts_failures_in_order() {
        let inputs = vec![
            PathBuf::from("a.png"),
            PathBuf::from("b.png"),
            PathBuf::from("c.png"),
        ];
        let results = vec![
            Ok((PathBuf::from("a_lifted.png"), 0.1)),
            Err("Failed to open PNG file".to_string()),
            Ok((PathBuf::from("c_lifted.png"), 0.2)),
        ];
        let summary = BatchSummary::collect(&inputs, results, PathBuf::from("."));
        assert_eq!(summary.succeeded, 2);
        assert_eq!(summary.failures.len(), 1);
        assert_eq!(summary.failures[0].0, PathBuf::from("b.png"));
        assert_eq!(summary.into_result().unwrap_err(), "1 files failed to process");
    }

    #[test]
    fn test_summary_all_successful() {
        let inputs = vec![PathBuf::from("a.png")];
        let results = vec![Ok((PathBuf::from("a_lifted.png"), 0.1))];
        let summary = BatchSummary::collect(&inputs, results, PathBuf::from("out"));
        assert!(summary.into_result().is_ok());
    }
}
