//! Analyze command - extract candidate data from a single resume.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

use resumex_core::resume::rules::CalendarPoint;
use resumex_core::{AnalysisResult, ResumeInput};

use super::{build_analyzer, load_config, parse_month};

/// Arguments for the analyze command.
#[derive(Args)]
pub struct AnalyzeArgs {
    /// Resume PDF
    input: Option<PathBuf>,

    /// Resume text, used when no file is given
    #[arg(short, long)]
    text: Option<String>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Month "present" resolves to, as YYYY-MM (default: current month)
    #[arg(long, value_parser = parse_month)]
    now: Option<CalendarPoint>,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text summary
    Text,
}

impl OutputFormat {
    /// File extension for outputs in this format.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
            OutputFormat::Text => "txt",
        }
    }
}

pub async fn run(args: AnalyzeArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;

    let file = match &args.input {
        Some(path) => {
            if !path.exists() {
                anyhow::bail!("Input file not found: {}", path.display());
            }
            let filename = path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or_default()
                .to_string();
            Some((filename, fs::read(path)?))
        }
        None => None,
    };

    // Reject bad input before paying for the model load
    let input = ResumeInput::from_parts(file, args.text.clone())
        .map_err(|e| anyhow::anyhow!("Invalid input: {}", e))?;

    info!("Analyzing {}", input.describe());

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {msg}")?,
    );

    pb.set_message("Loading model...");
    let analyzer = build_analyzer(&config, args.now)?;

    pb.set_message("Analyzing resume...");
    let result = analyzer.analyze(&input);
    pb.finish_and_clear();

    let result = result.map_err(|e| {
        if e.is_client_error() {
            anyhow::anyhow!("Invalid input: {}", e)
        } else {
            anyhow::anyhow!("Analysis failed: {}", e)
        }
    })?;

    let output = format_result(&result, args.format)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}

pub fn format_result(result: &AnalysisResult, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(result)?),
        OutputFormat::Csv => format_csv(result),
        OutputFormat::Text => Ok(format_text(result)),
    }
}

fn format_csv(result: &AnalysisResult) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record([
        "name",
        "email",
        "phone",
        "skills",
        "education",
        "experience_years",
        "experience_level",
        "classification",
        "confidence",
    ])?;

    let skills: Vec<&str> = result.skills.iter().map(String::as_str).collect();
    let skills = skills.join(";");
    let education = result.education.join(" | ");
    let experience_years = format!("{:.1}", result.experience_years);
    let confidence = format!("{:.4}", result.confidence);

    wtr.write_record([
        result.name.as_deref().unwrap_or_default(),
        result.email.as_deref().unwrap_or_default(),
        result.phone.as_deref().unwrap_or_default(),
        skills.as_str(),
        education.as_str(),
        experience_years.as_str(),
        result.experience_level.as_str(),
        result.classification.as_str(),
        confidence.as_str(),
    ])?;

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_text(result: &AnalysisResult) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Name: {}\n",
        result.name.as_deref().unwrap_or("(not found)")
    ));
    output.push_str(&format!(
        "Email: {}\n",
        result.email.as_deref().unwrap_or("(not found)")
    ));
    output.push_str(&format!(
        "Phone: {}\n",
        result.phone.as_deref().unwrap_or("(not found)")
    ));
    output.push('\n');

    output.push_str(&format!(
        "Experience: {:.1} years ({})\n",
        result.experience_years, result.experience_level
    ));
    output.push_str(&format!(
        "Classification: {} ({:.1}%)\n",
        result.classification,
        result.confidence * 100.0
    ));
    output.push('\n');

    if !result.skills.is_empty() {
        let skills: Vec<&str> = result.skills.iter().map(String::as_str).collect();
        output.push_str(&format!("Skills: {}\n", skills.join(", ")));
    }

    if !result.education.is_empty() {
        output.push_str("Education:\n");
        for sentence in &result.education {
            output.push_str(&format!("  - {}\n", sentence));
        }
    }

    output
}
