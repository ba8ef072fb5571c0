//! statik-packer is the "generator" part of a `statik` setup. It turns a
//! directory of static resources (GUI, assets, templates, images) into a
//! single Go source file, so they can be compiled into a Go executable and
//! served from memory by the `github.com/rakyll/statik/fs` shim.
//!
//! One generation run:
//! - walks the source directory ([directory::build_archive]) and stores every
//!   regular, non hidden file in an in-memory zip [archive::Archive], keyed by
//!   forward-slash relative path. The latest modification time is tracked
//!   along ([mod_time::ModTime]),
//! - escapes archive bytes into a Go string literal ([escape::quote]),
//! - renders the Go source, calling shim registration from `func init()`
//!   ([source::render]),
//! - writes it to a temporary file and atomically renames it to
//!   `<destination>/statik/statik.go` ([generate::generate]).
//!
//! This crate can be used in two ways:
//! - As a standalone application, `statik`, installed with `cargo install`.
//!   This is the preferred way in build scripts, `go generate` directives, CI
//!   pipelines etc.
//! - As a library, for custom pipelines.
//!
//! # Using as a standalone application
//!
//! `statik` provides up to date documentation with `$ statik --help`. For a
//! `public` directory:
//! ```text
//! public
//! |   index.html
//! |   .DS_Store
//! \---css
//!         style.css
//! ```
//! running:
//! ```text
//! $ statik --src ./public --dest .
//! ```
//! creates `./statik/statik.go`, serving `index.html` and `css/style.css`
//! (`.DS_Store` is hidden, so it is skipped).
//!
//! # Using as a library
//!
//! ```no_run
//! # use anyhow::Error;
//! # use std::path::PathBuf;
//! # use statik_packer::{
//! #     common::shim::ShimVersion,
//! #     generate::{generate, GenerateOptions},
//! #     source::SourceOptions,
//! # };
//! # fn main() -> Result<(), Error> {
//! generate(
//!     &PathBuf::from("public"),
//!     &PathBuf::from("."),
//!     &GenerateOptions {
//!         source: SourceOptions {
//!             shim_version: ShimVersion::Legacy,
//!         },
//!         ..GenerateOptions::default()
//!     },
//! )?;
//! # Ok(())
//! # }
//! ```
//!
//! Individual stages are public as well, see modules of this crate.

#![allow(clippy::new_without_default)]
#![warn(missing_docs)]

pub use statik_common as common;

pub mod archive;
pub mod archive_path;
pub mod directory;
pub mod error;
pub mod escape;
pub mod file;
pub mod generate;
pub mod mod_time;
pub mod source;

pub use error::Error;
