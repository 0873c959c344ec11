//! Module driver: directory processing and catalog serialization.
//!
//! One-shot batch flow: iterate the `.yang` files of a directory, compile
//! each, run the three extractors, and accumulate the records. A file
//! that fails to read or compile is logged and skipped; it contributes to
//! none of the catalogs while every other file's records stay intact.
//! Output write failures are fatal for the run.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::extract::{CatalogSet, Record, node_catalog, notification_catalog, rpc_catalog};
use crate::parser::parse_module;

/// File extension selecting module sources in a directory.
pub const MODULE_EXTENSION: &str = "yang";

/// Errors that abort a driver run.
///
/// Per-file compile failures are not errors at this level; they are
/// logged and skipped inside [`process_directory`].
#[derive(Debug, Error)]
pub enum DriverError {
    /// The configured module directory does not exist or is not a
    /// directory.
    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),

    /// IO error while scanning the directory or writing an output file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Destination files for the three catalogs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub nodes: PathBuf,
    pub rpcs: PathBuf,
    pub notifications: PathBuf,
}

impl Default for OutputPaths {
    fn default() -> Self {
        Self {
            nodes: PathBuf::from("yang_output.txt"),
            rpcs: PathBuf::from("yang_rpc.txt"),
            notifications: PathBuf::from("yang_notification.txt"),
        }
    }
}

impl OutputPaths {
    /// The default filenames, placed under `dir`.
    pub fn in_dir(dir: &Path) -> Self {
        let defaults = Self::default();
        Self {
            nodes: dir.join(defaults.nodes),
            rpcs: dir.join(defaults.rpcs),
            notifications: dir.join(defaults.notifications),
        }
    }
}

/// Process every `.yang` file in `dir` and accumulate the three catalogs.
///
/// Files are taken in directory iteration order; each record is tagged
/// with the module's declared name and its source filename. A file that
/// fails to read or compile is reported at warn level and skipped.
pub fn process_directory(dir: &Path) -> Result<CatalogSet, DriverError> {
    if !dir.is_dir() {
        return Err(DriverError::NotADirectory(dir.to_path_buf()));
    }

    let mut catalogs = CatalogSet::default();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() || path.extension().and_then(|e| e.to_str()) != Some(MODULE_EXTENSION)
        {
            continue;
        }
        let filename = entry.file_name().to_string_lossy().into_owned();

        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(error) => {
                tracing::warn!(file = %filename, %error, "failed to read module file; skipping");
                continue;
            }
        };

        match parse_module(&text) {
            Ok(module) => {
                let nodes = node_catalog(&module, &filename);
                let rpcs = rpc_catalog(&module, &filename);
                let notifications = notification_catalog(&module, &filename);
                tracing::debug!(
                    module = %module.name,
                    file = %filename,
                    nodes = nodes.len(),
                    rpcs = rpcs.len(),
                    notifications = notifications.len(),
                    "processed module"
                );
                catalogs.nodes.extend(nodes);
                catalogs.rpcs.extend(rpcs);
                catalogs.notifications.extend(notifications);
            }
            Err(error) => {
                tracing::warn!(file = %filename, %error, "module failed to compile; skipping");
            }
        }
    }

    Ok(catalogs)
}

/// Serialize the three catalogs to their destination files.
///
/// Each record is followed by a `---` separator line. Any write failure
/// aborts the run; a truncated catalog must not pass silently.
pub fn write_catalogs(catalogs: &CatalogSet, outputs: &OutputPaths) -> Result<(), DriverError> {
    write_catalog(&outputs.nodes, &catalogs.nodes)?;
    write_catalog(&outputs.rpcs, &catalogs.rpcs)?;
    write_catalog(&outputs.notifications, &catalogs.notifications)?;
    Ok(())
}

fn write_catalog(path: &Path, records: &[Record]) -> Result<(), DriverError> {
    let mut out = String::new();
    for record in records {
        out.push_str(&record.to_string());
        out.push_str("\n---\n");
    }
    fs::write(path, out)?;
    Ok(())
}

/// Process a directory and write the catalogs in one call.
pub fn run(dir: &Path, outputs: &OutputPaths) -> Result<CatalogSet, DriverError> {
    let catalogs = process_directory(dir)?;
    write_catalogs(&catalogs, outputs)?;
    Ok(catalogs)
}
