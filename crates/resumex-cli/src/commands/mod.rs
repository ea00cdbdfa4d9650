//! Subcommands and the helpers they share.

pub mod analyze;
pub mod batch;
pub mod config;
pub mod models;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use resumex_core::models::config::ResumexConfig;
use resumex_core::resume::rules::CalendarPoint;
use resumex_core::{ResumeAnalyzer, TfidfClassifier};
use tracing::debug;

/// Default configuration file location.
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("resumex")
        .join("config.json")
}

/// Resolve which configuration file a command should use.
pub fn config_file(config_path: Option<&str>) -> PathBuf {
    config_path
        .map(PathBuf::from)
        .unwrap_or_else(default_config_path)
}

/// Load configuration: an explicit path must exist, the default path may not.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<ResumexConfig> {
    if let Some(path) = config_path {
        let path = Path::new(path);
        if !path.exists() {
            anyhow::bail!("Config file not found: {}", path.display());
        }
        return Ok(ResumexConfig::from_file(path)?);
    }

    let path = default_config_path();
    if path.exists() {
        debug!("Using config file {}", path.display());
        Ok(ResumexConfig::from_file(&path)?)
    } else {
        Ok(ResumexConfig::default())
    }
}

/// Load the classifier once and wrap it in an analyzer.
pub fn build_analyzer(
    config: &ResumexConfig,
    now: Option<CalendarPoint>,
) -> anyhow::Result<ResumeAnalyzer> {
    let classifier = TfidfClassifier::from_dir(&config.models).map_err(|e| {
        anyhow::anyhow!(
            "Failed to load classification model from {}: {}",
            config.models.model_dir.display(),
            e
        )
    })?;

    let analyzer = ResumeAnalyzer::from_config(Arc::new(classifier), &config.extraction);
    Ok(match now {
        Some(now) => analyzer.with_now(now),
        None => analyzer,
    })
}

/// Parse a `YYYY-MM` evaluation month.
pub fn parse_month(value: &str) -> Result<CalendarPoint, String> {
    let (year, month) = value
        .split_once('-')
        .ok_or_else(|| format!("expected YYYY-MM, got {:?}", value))?;

    let year: i32 = year
        .parse()
        .map_err(|_| format!("invalid year in {:?}", value))?;
    let month: u32 = month
        .parse()
        .map_err(|_| format!("invalid month in {:?}", value))?;

    CalendarPoint::new(year, month).ok_or_else(|| format!("month out of range in {:?}", value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_month() {
        assert_eq!(parse_month("2023-03"), Ok(CalendarPoint::new(2023, 3).unwrap()));
        assert!(parse_month("2023").is_err());
        assert!(parse_month("2023-13").is_err());
        assert!(parse_month("March-2023").is_err());
    }
}
