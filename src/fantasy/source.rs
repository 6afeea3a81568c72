//! Player stat data sources.

use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
    time::UNIX_EPOCH,
};
use tracing::debug;

use super::{
    sample::sample_players,
    types::{validate_records, PlayerStatRecord},
};
use crate::{core::cache::try_read_to_string, KickoffError, Result};

/// Something that yields a season's raw player stats.
pub trait DataSource {
    /// Stable identity, used in cache keys.
    fn id(&self) -> String;

    /// Changes whenever the underlying data changes.
    fn version(&self) -> u64;

    fn fetch(&self) -> Result<Vec<PlayerStatRecord>>;
}

/// The built-in sample season.
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleDataSource;

impl DataSource for SampleDataSource {
    fn id(&self) -> String {
        "sample".to_string()
    }

    fn version(&self) -> u64 {
        1
    }

    fn fetch(&self) -> Result<Vec<PlayerStatRecord>> {
        Ok(sample_players())
    }
}

/// Accepts a bare array of records or an envelope with a `players` array.
#[derive(Deserialize)]
#[serde(untagged)]
enum StatsFile {
    Envelope { players: Vec<PlayerStatRecord> },
    Records(Vec<PlayerStatRecord>),
}

/// Player stats read from a JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DataSource for JsonFileSource {
    fn id(&self) -> String {
        format!("file:{}", self.path.display())
    }

    /// Modification time in nanoseconds mixed with the file length; 0 when
    /// the file cannot be read.
    fn version(&self) -> u64 {
        let Ok(meta) = fs::metadata(&self.path) else {
            return 0;
        };
        let modified = meta
            .modified()
            .ok()
            .and_then(|t| t.duration_since(UNIX_EPOCH).ok())
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0);
        modified ^ meta.len().rotate_left(48)
    }

    fn fetch(&self) -> Result<Vec<PlayerStatRecord>> {
        let contents = try_read_to_string(&self.path).ok_or_else(|| {
            KickoffError::invalid_argument(format!(
                "cannot read stats file {}",
                self.path.display()
            ))
        })?;

        let records = match serde_json::from_str::<StatsFile>(&contents)? {
            StatsFile::Envelope { players } => players,
            StatsFile::Records(records) => records,
        };
        validate_records(&records)?;
        debug!(path = %self.path.display(), players = records.len(), "loaded stats file");
        Ok(records)
    }
}

/// Source for an optional `--input` path: the file when given, else the sample.
pub fn source_for(input: Option<&Path>) -> Box<dyn DataSource> {
    match input {
        Some(path) => Box::new(JsonFileSource::new(path)),
        None => Box::new(SampleDataSource),
    }
}
