//! Common crate, containing names and types shared between
//! `statik-packer` and its integration tests.
//!
//! The packer turns a directory into a single Go source file. That file lives
//! in package [PACKAGE_NAME], is named [SOURCE_FILE_NAME] and, when linked into
//! a Go program, registers the embedded zip archive with the runtime shim
//! imported from [SHIM_IMPORT_PATH].
//!
//! Entries inside the archive are keyed by [archive_path::ArchivePath], a
//! forward-slash relative path. The shape of the registration call is selected
//! with [shim::ShimVersion].

#![warn(missing_docs)]

pub mod archive_path;
pub mod shim;

/// Name of the generated Go package. It is also the name of the subdirectory
/// created inside destination directory.
pub const PACKAGE_NAME: &str = "statik";
/// Name of the generated Go source file, placed in [PACKAGE_NAME] directory.
pub const SOURCE_FILE_NAME: &str = "statik.go";
/// Go import path of the runtime file system shim.
pub const SHIM_IMPORT_PATH: &str = "github.com/rakyll/statik/fs";
