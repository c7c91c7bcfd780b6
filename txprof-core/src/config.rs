use std::ffi::OsStr;
use std::fs::read_to_string;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_BINS, DEFAULT_RESOLUTION};
use crate::errors::{ConfigError, ConfigResult};

///
/// How a transcript is cut into 5'UTR, CDS and 3'UTR.
///
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SegmentStrategy {
    /// Lowercase UTRs flanking an uppercase CDS.
    #[default]
    CasePattern,
    /// 1-based inclusive `CDS=start-end` token in the descriptor.
    Coordinates,
}

impl FromStr for SegmentStrategy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "case-pattern" | "case" => Ok(SegmentStrategy::CasePattern),
            "coordinates" | "coords" => Ok(SegmentStrategy::Coordinates),
            _ => Err(ConfigError::InvalidValue {
                field: "strategy",
                value: s.to_string(),
            }),
        }
    }
}

///
/// What a zero base count becomes in a non-empty region.
///
/// `Na` reproduces the historical tables, where a base that never occurs is
/// reported exactly like an absent region. `Zero` keeps the real zero.
/// Empty regions are NA under both policies.
///
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ZeroCountPolicy {
    #[default]
    Na,
    Zero,
}

impl FromStr for ZeroCountPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "na" => Ok(ZeroCountPolicy::Na),
            "zero" => Ok(ZeroCountPolicy::Zero),
            _ => Err(ConfigError::InvalidValue {
                field: "zero_policy",
                value: s.to_string(),
            }),
        }
    }
}

///
/// Interval partitioned into histogram bins.
///
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum BinRange {
    /// `[min(rel), max(rel)]` of the observed relative positions.
    #[default]
    Observed,
    /// Fixed `[0, 1]`.
    Unit,
}

impl FromStr for BinRange {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "observed" => Ok(BinRange::Observed),
            "unit" => Ok(BinRange::Unit),
            _ => Err(ConfigError::InvalidValue {
                field: "bin_range",
                value: s.to_string(),
            }),
        }
    }
}

fn default_bins() -> u32 {
    DEFAULT_BINS
}

fn default_resolution() -> usize {
    DEFAULT_RESOLUTION
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct SmoothingConfig {
    #[serde(default = "default_resolution")]
    pub resolution: usize,
    pub output: Option<PathBuf>,
}

impl Default for SmoothingConfig {
    fn default() -> Self {
        Self {
            resolution: DEFAULT_RESOLUTION,
            output: None,
        }
    }
}

/// Parameters of one per-gene composition run.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct CompositionConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    #[serde(default)]
    pub strategy: SegmentStrategy,
    #[serde(default)]
    pub zero_policy: ZeroCountPolicy,
    /// Also write a `GeneID,5'UTR,CDS,3'UTR` length table here
    pub lengths_output: Option<PathBuf>,
}

/// Parameters of one positional distribution run.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct DistributionConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    #[serde(default = "default_bins")]
    pub bins: u32,
    #[serde(default)]
    pub bin_range: BinRange,
    pub smoothing: Option<SmoothingConfig>,
}

impl DistributionConfig {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            bins: DEFAULT_BINS,
            bin_range: BinRange::default(),
            smoothing: None,
        }
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.bins == 0 {
            return Err(ConfigError::InvalidBinCount(self.bins));
        }
        if let Some(smoothing) = &self.smoothing {
            if smoothing.resolution < 2 {
                return Err(ConfigError::InvalidResolution(smoothing.resolution));
            }
        }
        Ok(())
    }
}

///
/// A full run description, usually read from a TOML file.
///
/// Either section may be left out; only the present ones are executed.
///
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
pub struct RunConfig {
    pub composition: Option<CompositionConfig>,
    pub distribution: Option<DistributionConfig>,
}

impl RunConfig {
    pub fn validate(&self) -> ConfigResult<()> {
        if let Some(distribution) = &self.distribution {
            distribution.validate()?;
        }
        Ok(())
    }
}

impl TryFrom<&Path> for RunConfig {
    type Error = ConfigError;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        match path.extension().and_then(OsStr::to_str) {
            Some("toml") => {}
            _ => return Err(ConfigError::InvalidFileType(path.display().to_string())),
        }
        let toml_str = read_to_string(path)?;
        let config: RunConfig = toml::from_str(&toml_str)?;
        config.validate()?;
        Ok(config)
    }
}
