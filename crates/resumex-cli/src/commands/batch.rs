//! Batch command for analyzing multiple resume files.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, error, warn};

use resumex_core::resume::rules::CalendarPoint;
use resumex_core::{AnalysisResult, ResumeAnalyzer, ResumeInput};

use super::analyze::{format_result, OutputFormat};
use super::{build_analyzer, load_config, parse_month};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Glob pattern matching .pdf or .txt resumes
    #[arg(required = true)]
    input: String,

    /// Output directory
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Output format for each file
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Also generate a summary CSV
    #[arg(long)]
    summary: bool,

    /// Continue on error
    #[arg(long)]
    continue_on_error: bool,

    /// Month "present" resolves to, as YYYY-MM (default: current month)
    #[arg(long, value_parser = parse_month)]
    now: Option<CalendarPoint>,
}

/// Result of analyzing a single file.
struct FileResult {
    path: PathBuf,
    analysis: Option<AnalysisResult>,
    error: Option<String>,
    processing_time_ms: u64,
}

pub async fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;

    let files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter(|p| {
            let ext = p.extension().and_then(|e| e.to_str()).unwrap_or("");
            matches!(ext.to_lowercase().as_str(), "pdf" | "txt")
        })
        .collect();

    if files.is_empty() {
        anyhow::bail!("No matching files found for pattern: {}", args.input);
    }

    println!(
        "{} Found {} files to analyze",
        style("ℹ").blue(),
        files.len()
    );

    if let Some(ref output_dir) = args.output_dir {
        fs::create_dir_all(output_dir)?;
    }

    // One model load for the whole batch
    let analyzer = build_analyzer(&config, args.now)?;

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")?
            .progress_chars("=>-"),
    );

    let mut results = Vec::with_capacity(files.len());

    for path in files {
        let file_start = Instant::now();
        let result = analyze_file(&path, &analyzer);
        let processing_time_ms = file_start.elapsed().as_millis() as u64;

        match result {
            Ok(analysis) => {
                results.push(FileResult {
                    path,
                    analysis: Some(analysis),
                    error: None,
                    processing_time_ms,
                });
            }
            Err(e) => {
                let error_msg = e.to_string();
                if args.continue_on_error {
                    warn!("Failed to analyze {}: {}", path.display(), error_msg);
                    results.push(FileResult {
                        path,
                        analysis: None,
                        error: Some(error_msg),
                        processing_time_ms,
                    });
                } else {
                    pb.abandon();
                    error!("Failed to analyze {}: {}", path.display(), error_msg);
                    anyhow::bail!("Analysis of {} failed: {}", path.display(), error_msg);
                }
            }
        }

        pb.inc(1);
    }

    pb.finish_with_message("Complete");

    let successful: Vec<_> = results.iter().filter(|r| r.analysis.is_some()).collect();
    let failed: Vec<_> = results.iter().filter(|r| r.error.is_some()).collect();

    if let Some(output_dir) = &args.output_dir {
        for result in &successful {
            if let Some(analysis) = &result.analysis {
                let output_name = result
                    .path
                    .file_stem()
                    .and_then(|s| s.to_str())
                    .unwrap_or("resume");

                let output_path =
                    output_dir.join(format!("{}.{}", output_name, args.format.extension()));

                fs::write(&output_path, format_result(analysis, args.format)?)?;
                debug!("Wrote output to {}", output_path.display());
            }
        }
    }

    if args.summary {
        let summary_path = args
            .output_dir
            .as_ref()
            .map(|d| d.join("summary.csv"))
            .unwrap_or_else(|| PathBuf::from("summary.csv"));

        write_summary(&summary_path, &results)?;
        println!(
            "{} Summary written to {}",
            style("✓").green(),
            summary_path.display()
        );
    }

    println!();
    println!(
        "{} Analyzed {} files in {:?}",
        style("✓").green(),
        results.len(),
        start.elapsed()
    );
    println!(
        "   {} successful, {} failed",
        style(successful.len()).green(),
        style(failed.len()).red()
    );

    if !failed.is_empty() {
        println!();
        println!("{}", style("Failed files:").red());
        for result in &failed {
            println!(
                "  - {}: {}",
                result.path.display(),
                result.error.as_deref().unwrap_or("unknown error")
            );
        }
    }

    Ok(())
}

fn analyze_file(path: &Path, analyzer: &ResumeAnalyzer) -> anyhow::Result<AnalysisResult> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    let input = match extension.as_str() {
        "pdf" => {
            let filename = path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or_default()
                .to_string();
            ResumeInput::from_parts(Some((filename, fs::read(path)?)), None)?
        }
        "txt" => ResumeInput::from_parts(None, Some(fs::read_to_string(path)?))?,
        _ => anyhow::bail!("Unsupported file format: {}", extension),
    };

    Ok(analyzer.analyze(&input)?)
}

fn write_summary(path: &Path, results: &[FileResult]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "filename",
        "status",
        "name",
        "email",
        "experience_years",
        "experience_level",
        "classification",
        "confidence",
        "processing_time_ms",
        "error",
    ])?;

    for result in results {
        let filename = result
            .path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("");
        let processing_time_ms = result.processing_time_ms.to_string();

        if let Some(analysis) = &result.analysis {
            let experience_years = format!("{:.1}", analysis.experience_years);
            let confidence = format!("{:.4}", analysis.confidence);

            wtr.write_record([
                filename,
                "success",
                analysis.name.as_deref().unwrap_or_default(),
                analysis.email.as_deref().unwrap_or_default(),
                experience_years.as_str(),
                analysis.experience_level.as_str(),
                analysis.classification.as_str(),
                confidence.as_str(),
                processing_time_ms.as_str(),
                "",
            ])?;
        } else {
            wtr.write_record([
                filename,
                "error",
                "",
                "",
                "",
                "",
                "",
                "",
                processing_time_ms.as_str(),
                result.error.as_deref().unwrap_or(""),
            ])?;
        }
    }

    wtr.flush()?;
    Ok(())
}
