use std::fmt;
use std::path::{Path, PathBuf};

use log::{debug, info};
use mos6502_opcodes::opcode::{validate_table, Legality, Opcode, TableError, ILLEGAL_OPCODES};
use thiserror::Error;

use crate::index::build_index;
use crate::render::render;
use crate::template::{ConfigError, StubConfig};
use crate::workspace::{Workspace, WorkspaceError};

/// Default scratch directory that output is generated into.
pub const DEFAULT_OUTPUT: &str = "/tmp/opcodes/generated";

/// Stages of a generation run. Each stage finishes completely before the next begins, and
/// a run never goes back to an earlier stage.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Stage {
    /// Wipe and recreate the workspace.
    Clean,
    /// Write one stub module per opcode.
    GenerateStubs,
    /// Write the index of the legal bucket.
    GenerateLegalIndex,
    /// Write the index of the illegal bucket.
    GenerateIllegalIndex,
    /// All output has been written.
    Done,
}

impl Stage {
    /// The stage which writes the index for the given bucket.
    fn index(bucket: Legality) -> Self {
        match bucket {
            Legality::Legal => Self::GenerateLegalIndex,
            Legality::Illegal => Self::GenerateIllegalIndex,
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Self::Clean => f.write_str("clean"),
            Self::GenerateStubs => f.write_str("generate stubs"),
            Self::GenerateLegalIndex => f.write_str("generate legal index"),
            Self::GenerateIllegalIndex => f.write_str("generate illegal index"),
            Self::Done => f.write_str("done"),
        }
    }
}

/// Errors which abort a generation run.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The illegal opcode table is defective.
    #[error("Illegal opcode table is invalid: {0}")]
    Table(#[from] TableError),
    /// The options for the run would not produce valid Rust.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// The filesystem failed during a stage. Whatever was already written is left in place
    /// and removed by the next run.
    #[error("Failed to {stage}: {source}")]
    Workspace {
        stage: Stage,
        #[source]
        source: WorkspaceError,
    },
}

/// Summary of a completed run.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct GenerationReport {
    /// Root of the workspace the output was written to.
    pub root: PathBuf,
    /// Number of modules written to the legal bucket.
    pub legal: usize,
    /// Number of modules written to the illegal bucket.
    pub illegal: usize,
}

impl GenerationReport {
    fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
            legal: 0,
            illegal: 0,
        }
    }

    /// Number of modules written to the given bucket.
    pub fn count(&self, bucket: Legality) -> usize {
        match bucket {
            Legality::Legal => self.legal,
            Legality::Illegal => self.illegal,
        }
    }

    /// Total number of modules written.
    pub fn total(&self) -> usize {
        self.legal + self.illegal
    }

    fn record(&mut self, bucket: Legality) {
        match bucket {
            Legality::Legal => self.legal += 1,
            Legality::Illegal => self.illegal += 1,
        }
    }
}

/// Generates the stub modules and indexes for all 256 opcodes into a scratch directory.
#[derive(Debug, Clone)]
pub struct Generator {
    root: PathBuf,
    config: StubConfig,
}

impl Generator {
    /// Construct a generator which writes into `root`. Everything at `root` is deleted
    /// when the generator runs.
    pub fn new(root: impl Into<PathBuf>, config: StubConfig) -> Self {
        Self {
            root: root.into(),
            config,
        }
    }

    /// Directory this generator writes into.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Options used to render every file.
    pub fn config(&self) -> &StubConfig {
        &self.config
    }

    /// Run every stage in order. The opcode table and options are checked before anything
    /// on disk is touched.
    pub fn run(&self) -> Result<GenerationReport, GenerateError> {
        validate_table(&ILLEGAL_OPCODES)?;
        self.config.validate()?;
        info!("Generating opcode stubs into {}", self.root.display());

        let workspace = Workspace::prepare(&self.root).map_err(failed(Stage::Clean))?;

        let mut report = GenerationReport::new(workspace.root());
        for opcode in Opcode::all() {
            let path = workspace
                .write_module(opcode, &render(opcode, &self.config))
                .map_err(failed(Stage::GenerateStubs))?;
            debug!("Generated {} at {}", opcode, path.display());
            report.record(opcode.legality());
        }

        for bucket in Legality::ALL {
            let stage = Stage::index(bucket);
            workspace
                .write_index(bucket, &build_index(bucket, &self.config))
                .map_err(failed(stage))?;
            info!("{} {} modules", report.count(bucket), bucket);
        }

        debug!("Reached stage: {}", Stage::Done);
        Ok(report)
    }
}

/// Attach the stage that was running to a workspace error.
fn failed(stage: Stage) -> impl Fn(WorkspaceError) -> GenerateError {
    move |source| GenerateError::Workspace { stage, source }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn index_stages_follow_bucket_order() {
        let stages: Vec<_> = Legality::ALL.into_iter().map(Stage::index).collect();
        assert_eq!(
            stages,
            [Stage::GenerateLegalIndex, Stage::GenerateIllegalIndex]
        );
    }

    #[test]
    fn reports_bucket_counts() {
        let temp = TempDir::new().unwrap();
        let report = Generator::new(temp.path().join("out"), StubConfig::default())
            .run()
            .unwrap();
        assert_eq!(report.count(Legality::Legal), 151);
        assert_eq!(report.count(Legality::Illegal), 105);
        assert_eq!(report.total(), 256);
        assert_eq!(report.root, temp.path().join("out"));
    }

    #[test]
    fn invalid_config_touches_nothing() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("out");
        let config = StubConfig {
            interface: "not a path".to_string(),
            ..StubConfig::default()
        };
        let err = Generator::new(&root, config).run().unwrap_err();
        assert!(matches!(
            err,
            GenerateError::Config(ConfigError::InvalidInterface(_))
        ));
        assert!(!root.exists());
    }

    #[test]
    fn unreachable_root_aborts_in_clean() {
        let temp = TempDir::new().unwrap();
        let blocker = temp.path().join("blocker");
        std::fs::write(&blocker, "not a directory").unwrap();
        let root = blocker.join("out");

        let err = Generator::new(&root, StubConfig::default())
            .run()
            .unwrap_err();
        assert!(
            matches!(
                err,
                GenerateError::Workspace {
                    stage: Stage::Clean,
                    source: WorkspaceError::CreateDir { .. },
                }
            ),
            "{}",
            err
        );
        assert!(blocker.is_file());
        assert_eq!(std::fs::read_to_string(&blocker).unwrap(), "not a directory");
        assert_eq!(std::fs::read_dir(temp.path()).unwrap().count(), 1);
    }

    #[test]
    fn error_names_stage() {
        let err = GenerateError::Workspace {
            stage: Stage::GenerateLegalIndex,
            source: WorkspaceError::Write {
                path: PathBuf::from("/out/legal/mod.rs"),
                source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
            },
        };
        assert!(err
            .to_string()
            .starts_with("Failed to generate legal index: Unable to write /out/legal/mod.rs"));
    }
}
