use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileError(#[from] std::io::Error),
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),
    #[error("Engine rejected {kind} path '{}'", .path.display())]
    PathRejected { kind: PathKind, path: PathBuf },
}

/// Which of the engine's search paths a setting targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathKind {
    Engine,
    Aircraft,
    Systems,
    Output,
}

impl std::fmt::Display for PathKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PathKind::Engine => "engine",
            PathKind::Aircraft => "aircraft",
            PathKind::Systems => "systems",
            PathKind::Output => "output",
        };
        f.write_str(name)
    }
}

/// Settings applied to a freshly created engine by
/// [`FdmExec::from_config`](crate::FdmExec::from_config).
///
/// Every field is optional; anything left unset keeps the engine's own default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExecConfig {
    pub root_dir: Option<PathBuf>,
    pub engine_path: Option<PathBuf>,
    pub aircraft_path: Option<PathBuf>,
    pub systems_path: Option<PathBuf>,
    pub output_path: Option<PathBuf>,
    pub debug_level: Option<i32>,
    /// Integration timestep (s).
    pub delta_t: Option<f64>,
    /// Output logging rate (Hz).
    pub logging_rate: Option<f64>,
    pub output_enabled: bool,
    pub highlighting: bool,
}

impl Default for ExecConfig {
    fn default() -> Self {
        Self {
            root_dir: None,
            engine_path: None,
            aircraft_path: None,
            systems_path: None,
            output_path: None,
            debug_level: None,
            delta_t: None,
            logging_rate: None,
            output_enabled: true,
            highlighting: true,
        }
    }
}

impl ExecConfig {
    pub fn load(path: &str) -> Result<Self, ConfigError> {
        let file = std::fs::File::open(path)?;
        let config = serde_yaml::from_reader(file)?;
        Ok(config)
    }

    pub fn save(&self, path: &str) -> Result<(), ConfigError> {
        let file = std::fs::File::create(path)?;
        serde_yaml::to_writer(file, self)?;
        Ok(())
    }

    /// The search paths that are set, in the order the engine should receive them.
    pub fn search_paths(&self) -> Vec<(PathKind, &PathBuf)> {
        [
            (PathKind::Engine, &self.engine_path),
            (PathKind::Aircraft, &self.aircraft_path),
            (PathKind::Systems, &self.systems_path),
            (PathKind::Output, &self.output_path),
        ]
        .into_iter()
        .filter_map(|(kind, path)| path.as_ref().map(|p| (kind, p)))
        .collect()
    }
}
