//! Source emitter. Assembles generated Go source registering the embedded
//! archive with the runtime shim.

use crate::{
    common::{PACKAGE_NAME, SHIM_IMPORT_PATH, shim::ShimVersion},
    mod_time::ModTime,
};
use std::fmt::{self, Write};

/// Options for [render].
///
/// If not sure what to set here, use [Default].
#[derive(Default, Debug)]
pub struct SourceOptions {
    /// Registration call shape, must match shim used by the target program.
    pub shim_version: ShimVersion,
}

/// Renders complete Go source file.
///
/// `literal` must be a valid, quoted Go string literal (as produced by
/// [crate::escape::quote]), it is inserted verbatim. `mod_time` is used only
/// if [ShimVersion] registers it.
///
/// # Examples
///
/// ```
/// # use statik_packer::{
/// #     common::shim::ShimVersion,
/// #     mod_time::ModTime,
/// #     source::{render, SourceOptions},
/// # };
/// let source = render(
///     "\"PK\"",
///     ModTime::zero(),
///     &SourceOptions {
///         shim_version: ShimVersion::Legacy,
///     },
/// );
/// assert!(source.contains("\tfs.Register(data)\n"));
/// ```
pub fn render(
    literal: &str,
    mod_time: ModTime,
    options: &SourceOptions,
) -> String {
    let mut source = String::with_capacity(literal.len() + 256);
    // writing into String never fails
    render_into(&mut source, literal, mod_time, options).unwrap();
    source
}

/// Same as [render], but writes into any [fmt::Write].
pub fn render_into(
    source: &mut impl fmt::Write,
    literal: &str,
    mod_time: ModTime,
    options: &SourceOptions,
) -> fmt::Result {
    let registers_mod_time = options.shim_version.registers_mod_time();

    writeln!(source, "// Code generated by statik. DO NOT EDIT.")?;
    writeln!(source)?;
    writeln!(source, "package {PACKAGE_NAME}")?;
    writeln!(source)?;

    // imports
    writeln!(source, "import (")?;
    if registers_mod_time {
        writeln!(source, "\t\"time\"")?;
        writeln!(source)?;
    }
    writeln!(source, "\t\"{SHIM_IMPORT_PATH}\"")?;
    writeln!(source, ")")?;
    writeln!(source)?;

    // func init
    writeln!(source, "func init() {{")?;
    if registers_mod_time {
        writeln!(
            source,
            "\tmodTime := time.Unix({}, 0)",
            mod_time.unix_seconds()
        )?;
    }
    writeln!(source, "\tdata := {literal}")?;
    if registers_mod_time {
        writeln!(source, "\tfs.Register(modTime, data)")?;
    } else {
        writeln!(source, "\tfs.Register(data)")?;
    }
    writeln!(source, "}}")?;

    Ok(())
}
