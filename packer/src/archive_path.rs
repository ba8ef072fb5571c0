//! Archive path helpers. Contains [from_file_base_relative_path] that creates
//! archive paths from fs paths.

use crate::{Error, common::archive_path::ArchivePath};
use std::{
    io,
    path::{Component, Path},
};

/// Creates archive path (eg. "dir1/dir2/file.html") from relative fs path (eg.
/// "dir1\\dir2\\file.html").
///
/// Fails with [Error::ArchiveWrite] if path is empty, contains anything else
/// than normal components (root, prefix, `.`, `..`) or is not valid utf-8.
///
/// # Examples
///
/// ```
/// # use std::path::PathBuf;
/// # use statik_packer::{
/// #    Error, common::archive_path::ArchivePath, archive_path::from_file_base_relative_path,
/// # };
/// #
/// # fn main() -> Result<(), Error> {
/// #
/// assert_eq!(
///     from_file_base_relative_path(&PathBuf::from("path/to/file.txt"))?,
///     ArchivePath::from_string("path/to/file.txt".to_owned()),
/// );
/// #
/// # Ok(())
/// # }
/// ```
pub fn from_file_base_relative_path(file_base_relative_path: &Path) -> Result<ArchivePath, Error> {
    let invalid = |message: String| Error::ArchiveWrite {
        archive_path: file_base_relative_path.to_string_lossy().into_owned(),
        source: io::Error::new(io::ErrorKind::InvalidInput, message),
    };

    // list of path components, eg. ["dir1", "dir2", "file.bin"]
    let file_base_relative_path_components = file_base_relative_path
        .components()
        .map(|component| {
            // we cannot handle things like '/' or '.' or '..' here
            let Component::Normal(component) = component else {
                return Err(invalid(format!(
                    "relative path must contain only standard path items, got {component:?}"
                )));
            };

            component
                .to_str()
                .ok_or_else(|| invalid("cannot convert path component to string".to_owned()))
        })
        .collect::<Result<Vec<_>, Error>>()?;

    if file_base_relative_path_components.is_empty() {
        return Err(invalid("relative path must not be empty".to_owned()));
    }

    let archive_path_string = itertools::join(file_base_relative_path_components, "/");

    Ok(ArchivePath::from_string(archive_path_string))
}
