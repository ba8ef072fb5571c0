//! Generation orchestrator. Contains [generate], combining archive building,
//! escaping and source rendering into one atomic run.

use crate::{
    Error,
    common::{PACKAGE_NAME, SOURCE_FILE_NAME},
    directory::{self, SearchOptions},
    escape,
    source::{self, SourceOptions},
};
use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};
use tempfile::NamedTempFile;

/// Options for [generate].
///
/// If not sure what to set here, use [Default].
#[derive(Default, Debug)]
pub struct GenerateOptions {
    /// Source directory traversal options.
    pub search: SearchOptions,
    /// Generated source options.
    pub source: SourceOptions,
}

/// Packs `source_path` directory into `<destination_path>/statik/statik.go`.
///
/// Archive, literal and source text are built in memory first, nothing is
/// written to destination if any of these steps fail. Generated source is
/// then written to a temporary file next to the target and renamed into
/// place, so the target is either the previous version or the complete new
/// one. The temporary file is removed on every failure.
///
/// Returns path of the generated file.
///
/// # Examples
///
/// ```
/// # use anyhow::Error;
/// # use statik_packer::generate::{generate, GenerateOptions};
/// # use std::fs;
/// #
/// # fn main() -> Result<(), Error> {
/// #
/// let source = tempfile::tempdir()?;
/// fs::write(source.path().join("index.html"), "<html></html>")?;
/// let destination = tempfile::tempdir()?;
///
/// let path = generate(source.path(), destination.path(), &GenerateOptions::default())?;
///
/// assert_eq!(path, destination.path().join("statik").join("statik.go"));
/// assert!(fs::read_to_string(&path)?.starts_with("// Code generated by statik."));
/// #
/// # Ok(())
/// # }
/// ```
pub fn generate(
    source_path: &Path,
    destination_path: &Path,
    options: &GenerateOptions,
) -> Result<PathBuf, Error> {
    let archive = directory::build_archive(source_path, &options.search)?;

    let literal = escape::quote(&archive.content);
    drop(archive.content);

    let source = source::render(&literal, archive.mod_time, &options.source);
    drop(literal);

    let package_path = destination_path.join(PACKAGE_NAME);
    let source_file_path = package_path.join(SOURCE_FILE_NAME);
    source_file_store(&source, &package_path, &source_file_path)?;

    log::info!(
        "generated {} ({} files, {} bytes)",
        source_file_path.display(),
        archive.entries,
        source.len()
    );

    Ok(source_file_path)
}

/// Writes `source` to temporary file in `package_path` and renames it to
/// `source_file_path`.
fn source_file_store(
    source: &str,
    package_path: &Path,
    source_file_path: &Path,
) -> Result<(), Error> {
    let destination = |path: &Path| {
        let path = path.to_owned();
        move |source: io::Error| Error::Destination { path, source }
    };

    fs::create_dir_all(package_path).map_err(destination(package_path))?;

    // temporary file lives in target directory, so rename never crosses
    // devices. dropped handle removes the file.
    let mut temp_file = tempfile::Builder::new()
        .prefix(".statik")
        .suffix(".go.tmp")
        .tempfile_in(package_path)
        .map_err(destination(package_path))?;
    temp_file_write(&mut temp_file, source).map_err(destination(temp_file.path()))?;

    temp_file
        .persist(source_file_path)
        .map_err(|error| destination(source_file_path)(error.error))?;

    Ok(())
}

fn temp_file_write(
    temp_file: &mut NamedTempFile,
    source: &str,
) -> Result<(), io::Error> {
    temp_file.write_all(source.as_bytes())?;
    temp_file.as_file().sync_all()?;
    Ok(())
}
