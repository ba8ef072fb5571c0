//! Directory helpers. Contains [build_archive] function, used to gather files
//! from directory recursively into an [Archive].

use crate::{
    Error,
    archive::{self, Archive},
    file::ArchiveFile,
};
use std::{fs, io, path::Path};
use walkdir::{DirEntry, WalkDir};

/// What to do with an entry that is listed, but cannot be read.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum UnreadablePolicy {
    /// Fail the whole run on first unreadable entry.
    #[default]
    Abort,
    /// Log a warning and continue without the entry.
    Skip,
}

/// Settings for [build_archive] function.
///
/// If not sure what to set here, use [Default].
#[derive(Debug)]
pub struct SearchOptions {
    /// Visit directory entries in file name order. Makes output independent
    /// of fs listing order.
    pub sort_by_file_name: bool,
    /// Whether to look for files inside hidden (dot-prefixed) directories.
    /// Hidden directories and hidden files themselves are never archived.
    pub descend_hidden_directories: bool,
    /// Handling of entries that cannot be read. Source root failing is always
    /// fatal.
    pub unreadable: UnreadablePolicy,
}
impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            sort_by_file_name: true,
            descend_hidden_directories: true,
            unreadable: UnreadablePolicy::Abort,
        }
    }
}

/// Searches fs recursively and archives each regular, non hidden file.
///
/// Traverses directory specified in `path` depth first using
/// [SearchOptions]. Directories, hidden (dot-prefixed) entries, symlinks and
/// other special files are skipped. Archive paths are created by stripping
/// `path` from full file path.
///
/// No partial [Archive] is returned, any error aborts the search.
///
/// # Examples
///
/// ```
/// # use anyhow::Error;
/// # use statik_packer::directory::{build_archive, SearchOptions};
/// # use std::fs;
/// #
/// # fn main() -> Result<(), Error> {
/// #
/// let directory = tempfile::tempdir()?;
/// fs::write(directory.path().join("index.html"), "<html></html>")?;
/// fs::write(directory.path().join(".gitignore"), "*")?;
///
/// let archive = build_archive(directory.path(), &SearchOptions::default())?;
///
/// // .gitignore is hidden
/// assert_eq!(archive.entries, 1);
/// #
/// # Ok(())
/// # }
/// ```
pub fn build_archive(
    path: &Path,
    options: &SearchOptions,
) -> Result<Archive, Error> {
    let traversal = |source: io::Error| Error::Traversal {
        path: path.to_owned(),
        source,
    };

    // root must exist and be a directory, otherwise nothing makes sense
    let metadata = fs::metadata(path).map_err(traversal)?;
    if !metadata.is_dir() {
        return Err(traversal(io::Error::new(
            io::ErrorKind::NotADirectory,
            "source path is not a directory",
        )));
    }

    let mut walk_dir = WalkDir::new(path).follow_links(false);
    if options.sort_by_file_name {
        walk_dir = walk_dir.sort_by_file_name();
    }
    let descend_hidden_directories = options.descend_hidden_directories;
    let entries = walk_dir.into_iter().filter_entry(move |entry| {
        descend_hidden_directories
            || entry.depth() == 0
            || !(entry.file_type().is_dir() && is_hidden(entry))
    });

    let mut builder = archive::Builder::new();
    for entry in entries {
        // detect search errors
        let entry = match entry {
            Ok(entry) => entry,
            Err(error) => {
                let depth = error.depth();
                let error = Error::Traversal {
                    path: error.path().unwrap_or(path).to_owned(),
                    source: error.into(),
                };

                // failing on root is never skippable
                if depth == 0 {
                    return Err(error);
                }
                unreadable_resolve(options.unreadable, error)?;
                continue;
            }
        };

        // we are interested in regular files only
        if !entry.file_type().is_file() {
            if !entry.file_type().is_dir() {
                log::debug!("skipping special file {}", entry.path().display());
            }
            continue;
        }
        if is_hidden(&entry) {
            log::debug!("skipping hidden file {}", entry.path().display());
            continue;
        }

        let file = match ArchiveFile::build_from_path(entry.path(), path) {
            Ok(file) => file,
            Err(error @ Error::Traversal { .. }) => {
                unreadable_resolve(options.unreadable, error)?;
                continue;
            }
            Err(error) => return Err(error),
        };

        builder.file_add(file)?;
    }

    let archive = builder.finalize()?;

    log::info!(
        "archived {} files from {} ({} bytes)",
        archive.entries,
        path.display(),
        archive.content.len()
    );

    Ok(archive)
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.file_name().as_encoded_bytes().first() == Some(&b'.')
}

/// Either swallows `error` (with a warning) or returns it, according to
/// `policy`.
fn unreadable_resolve(
    policy: UnreadablePolicy,
    error: Error,
) -> Result<(), Error> {
    match policy {
        UnreadablePolicy::Abort => Err(error),
        UnreadablePolicy::Skip => {
            log::warn!("skipping unreadable entry: {error}");
            Ok(())
        }
    }
}
