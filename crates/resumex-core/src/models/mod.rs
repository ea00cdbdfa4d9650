//! Data models for analysis results and configuration.

pub mod analysis;
pub mod config;
