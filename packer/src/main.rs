//! Main statik executable, to be used as cli tool. For help run this command
//! with `-h`.

#![warn(missing_docs)]

use anyhow::Error;
use clap::{Parser, ValueEnum};
use log::LevelFilter;
use simple_logger::SimpleLogger;
use statik_packer::{
    common::shim::ShimVersion,
    directory::{SearchOptions, UnreadablePolicy},
    generate::{self, GenerateOptions},
    source::SourceOptions,
};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about)]
struct Arguments {
    /// The path of the source directory.
    #[arg(long, default_value = ".")]
    pub src: PathBuf,

    /// The destination path of the generated package.
    #[arg(long, default_value = ".")]
    pub dest: PathBuf,

    /// Registration call of the shim used by the target program.
    #[arg(long, value_enum, default_value_t = ShimVersionArgument::Current)]
    pub shim_version: ShimVersionArgument,

    /// What to do with files that are listed, but cannot be read.
    #[arg(long, value_enum, default_value_t = UnreadablePolicyArgument::Abort)]
    pub on_unreadable: UnreadablePolicyArgument,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum ShimVersionArgument {
    /// `fs.Register(data)`
    Legacy,
    /// `fs.Register(modTime, data)`
    Current,
}
impl From<ShimVersionArgument> for ShimVersion {
    fn from(value: ShimVersionArgument) -> Self {
        match value {
            ShimVersionArgument::Legacy => ShimVersion::Legacy,
            ShimVersionArgument::Current => ShimVersion::Current,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum UnreadablePolicyArgument {
    /// Fail on first unreadable file.
    Abort,
    /// Warn and leave unreadable file out.
    Skip,
}
impl From<UnreadablePolicyArgument> for UnreadablePolicy {
    fn from(value: UnreadablePolicyArgument) -> Self {
        match value {
            UnreadablePolicyArgument::Abort => UnreadablePolicy::Abort,
            UnreadablePolicyArgument::Skip => UnreadablePolicy::Skip,
        }
    }
}

fn main() -> Result<(), Error> {
    SimpleLogger::new()
        .with_level(LevelFilter::Warn)
        .env()
        .init()?;

    let arguments = Arguments::parse();

    let options = GenerateOptions {
        search: SearchOptions {
            unreadable: arguments.on_unreadable.into(),
            ..SearchOptions::default()
        },
        source: SourceOptions {
            shim_version: arguments.shim_version.into(),
        },
    };

    generate::generate(&arguments.src, &arguments.dest, &options)?;

    Ok(())
}
