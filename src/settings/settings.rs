use crate::domain_model::Level;
use anyhow::{Result, anyhow};
use config::{Config, File};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub log: Log,
    pub writer: WriterSettings,
    pub demo: Demo,
}

#[derive(Debug, Deserialize)]
pub struct Log {
    pub filter: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WriterKind {
    Console,
    File,
    Memory,
}

#[derive(Debug, Deserialize)]
pub struct WriterSettings {
    pub kind: WriterKind,
    pub path: Option<String>, // required when kind = "file"
    pub min_level: Level,
}

#[derive(Debug, Deserialize)]
pub struct Demo {
    pub entries: u32,
    pub thread_name: String,
}

#[cfg(debug_assertions)]
const SETTINGS_PATH: &str = "settings/dev.toml";
#[cfg(not(debug_assertions))]
const SETTINGS_PATH: &str = "settings/release.toml";

pub fn parse_settings(path: Option<&str>) -> Result<Settings> {
    let path = path.unwrap_or(SETTINGS_PATH);
    if path.is_empty() {
        return Err(anyhow!("settings path is empty"));
    }

    let settings: Settings = Config::builder()
        .add_source(File::with_name(path))
        .build()
        .map_err(|e| anyhow!(e))?
        .try_deserialize()
        .map_err(|e| anyhow!(e))?;

    Ok(settings)
}
