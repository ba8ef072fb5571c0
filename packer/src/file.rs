//! File helpers. Contains [ArchiveFile], a single file read from fs together
//! with its [ArchivePath].

use crate::{Error, archive_path, common::archive_path::ArchivePath};
use std::{fs, io, path::Path, time::SystemTime};

/// File content + its [ArchivePath] (the name shim will serve it under) + its
/// modification time.
///
/// This is the main item added to the archive [crate::archive::Builder].
#[derive(Debug)]
pub struct ArchiveFile {
    /// The path inside the archive.
    pub archive_path: ArchivePath,

    /// Raw file content, stored as read from disk.
    pub content: Box<[u8]>,

    /// Modification time reported by fs.
    pub modified: SystemTime,
}
impl ArchiveFile {
    /// Creates [self] by reading file relative to given base directory.
    ///
    /// [ArchivePath] is built with [archive_path::from_file_base_relative_path]
    /// from relative path between `path` and `base_directory_path`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use anyhow::Error;
    /// # use statik_packer::file::ArchiveFile;
    /// # use std::fs;
    /// #
    /// # fn main() -> Result<(), Error> {
    /// #
    /// let base_directory = tempfile::tempdir()?;
    /// fs::create_dir(base_directory.path().join("css"))?;
    /// fs::write(base_directory.path().join("css").join("style.css"), "body {}")?;
    ///
    /// let file = ArchiveFile::build_from_path(
    ///     &base_directory.path().join("css").join("style.css"),
    ///     base_directory.path(),
    /// )?;
    /// assert_eq!(&*file.archive_path, "css/style.css");
    /// assert_eq!(&*file.content, b"body {}");
    /// #
    /// # Ok(())
    /// # }
    /// ```
    pub fn build_from_path(
        path: &Path,
        base_directory_path: &Path,
    ) -> Result<Self, Error> {
        // strip prefix, so path is relative to search root
        let file_base_relative_path = path
            .strip_prefix(base_directory_path)
            .map_err(|error| Error::Traversal {
                path: path.to_owned(),
                source: io::Error::new(io::ErrorKind::InvalidInput, error),
            })?;

        let archive_path = archive_path::from_file_base_relative_path(file_base_relative_path)?;

        let traversal = |source: io::Error| Error::Traversal {
            path: path.to_owned(),
            source,
        };
        let modified = fs::metadata(path)
            .and_then(|metadata| metadata.modified())
            .map_err(traversal)?;
        let content = fs::read(path).map_err(traversal)?.into_boxed_slice();

        Ok(Self {
            archive_path,
            content,
            modified,
        })
    }
}
