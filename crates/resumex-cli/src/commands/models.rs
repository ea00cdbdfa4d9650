//! Models command - inspect classification model artifacts.

use clap::{Args, Subcommand};
use console::style;

use resumex_core::classify::model_exists;
use resumex_core::{DocumentClassifier, TfidfClassifier};

use super::load_config;

/// Arguments for the models command.
#[derive(Args)]
pub struct ModelsArgs {
    #[command(subcommand)]
    command: ModelsCommand,
}

#[derive(Subcommand)]
enum ModelsCommand {
    /// Check that every model artifact is present and loadable
    Status,

    /// List the labels the classifier can predict
    Labels,
}

pub async fn run(args: ModelsArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;

    match args.command {
        ModelsCommand::Status => check_status(&config),
        ModelsCommand::Labels => list_labels(&config),
    }
}

fn check_status(config: &resumex_core::ResumexConfig) -> anyhow::Result<()> {
    let models = &config.models;

    println!("{}", style("Model Status").bold());
    println!("Model directory: {}", style(models.model_dir.display()).cyan());
    println!();

    for name in [&models.vectorizer, &models.classifier, &models.label_encoder] {
        let path = models.model_dir.join(name);
        let status = if path.is_file() {
            style("✓").green()
        } else {
            style("✗").red()
        };
        println!("    {} {}", status, name);
    }
    println!();

    if !model_exists(models) {
        println!(
            "    {} Model artifacts missing from {}",
            style("⚠").yellow(),
            models.model_dir.display()
        );
        anyhow::bail!("Model not ready");
    }

    let classifier = TfidfClassifier::from_dir(models)?;
    println!(
        "    {} Ready ({} labels)",
        style("✓").green(),
        classifier.labels().len()
    );

    Ok(())
}

fn list_labels(config: &resumex_core::ResumexConfig) -> anyhow::Result<()> {
    let classifier = TfidfClassifier::from_dir(&config.models)?;

    for label in classifier.labels() {
        println!("{}", label);
    }

    Ok(())
}
