use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use mos6502_opcodes::opcode::{Legality, Opcode};
use thiserror::Error;

use crate::render::file_name;

/// Name of the index file written into each bucket directory.
pub const INDEX_FILE: &str = "mod.rs";

/// Errors from reading or writing the workspace directory.
#[derive(Debug, Error)]
pub enum WorkspaceError {
    /// Output from a previous run could not be removed.
    #[error("Unable to remove {}: {source}", .path.display())]
    Clean {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// A workspace directory could not be created.
    #[error("Unable to create directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// A generated file could not be written.
    #[error("Unable to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// A scratch directory with one empty subdirectory per legality bucket.
///
/// The only way to get a `Workspace` is [`Workspace::prepare`], which destroys whatever
/// was at the root before, so nothing from an earlier run can survive into the output.
/// The directory must be a disposable location; never point it at a source tree.
#[derive(Debug)]
pub struct Workspace {
    root: PathBuf,
}

impl Workspace {
    /// Remove anything at `root` and recreate it with an empty `legal` and `illegal`
    /// directory.
    ///
    /// A root that cannot be looked up is treated as absent, so a parent which is not a
    /// directory fails with [`WorkspaceError::CreateDir`].
    pub fn prepare(root: impl Into<PathBuf>) -> Result<Self, WorkspaceError> {
        let root = root.into();
        if let Ok(meta) = fs::symlink_metadata(&root) {
            warn!("Removing existing output at {}", root.display());
            let removed = if meta.is_dir() {
                fs::remove_dir_all(&root)
            } else {
                fs::remove_file(&root)
            };
            removed.map_err(|source| WorkspaceError::Clean {
                path: root.clone(),
                source,
            })?;
        }

        create_dir(&root)?;
        let workspace = Self { root };
        for bucket in Legality::ALL {
            create_dir(&workspace.bucket_dir(bucket))?;
        }
        info!("Prepared workspace at {}", workspace.root.display());
        Ok(workspace)
    }

    /// Root directory of the workspace.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory that modules of the given bucket are written into.
    pub fn bucket_dir(&self, bucket: Legality) -> PathBuf {
        self.root.join(bucket.name())
    }

    /// Path the module for `opcode` is written to.
    pub fn module_path(&self, opcode: Opcode) -> PathBuf {
        self.bucket_dir(opcode.legality()).join(file_name(opcode))
    }

    /// Path the index of the given bucket is written to.
    pub fn index_path(&self, bucket: Legality) -> PathBuf {
        self.bucket_dir(bucket).join(INDEX_FILE)
    }

    /// Write the module for `opcode` into the directory for its bucket.
    pub fn write_module(&self, opcode: Opcode, contents: &str) -> Result<PathBuf, WorkspaceError> {
        let path = self.module_path(opcode);
        write_file(&path, contents)?;
        Ok(path)
    }

    /// Write the index of the given bucket.
    pub fn write_index(&self, bucket: Legality, contents: &str) -> Result<PathBuf, WorkspaceError> {
        let path = self.index_path(bucket);
        write_file(&path, contents)?;
        Ok(path)
    }
}

fn create_dir(path: &Path) -> Result<(), WorkspaceError> {
    fs::create_dir_all(path).map_err(|source| WorkspaceError::CreateDir {
        path: path.to_path_buf(),
        source,
    })
}

fn write_file(path: &Path, contents: &str) -> Result<(), WorkspaceError> {
    debug!("Writing {}", path.display());
    fs::write(path, contents).map_err(|source| WorkspaceError::Write {
        path: path.to_path_buf(),
        source,
    })
}
