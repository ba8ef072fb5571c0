//! Error type shared by all packer stages.

use std::{io, path::PathBuf};

/// Error returned by packer operations.
///
/// Every variant is terminal for a generation run, there is no partial or
/// degraded output.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Source tree could not be walked or a file could not be read.
    #[error("cannot read source {}", .path.display())]
    Traversal {
        /// Path that failed, the source root if failure was not related to a
        /// single entry.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: io::Error,
    },

    /// Entry could not be written into the archive, eg. duplicated or invalid
    /// key.
    #[error("cannot write archive entry {archive_path:?}")]
    ArchiveWrite {
        /// Key of the failed entry, lossy converted if not valid utf-8.
        archive_path: String,
        /// Underlying error.
        #[source]
        source: io::Error,
    },

    /// Destination directory or generated file could not be written.
    #[error("cannot write destination {}", .path.display())]
    Destination {
        /// Path that failed.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: io::Error,
    },
}
