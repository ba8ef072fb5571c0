//! Archive helpers. Contains [Builder], builder for in-memory zip [Archive].

use crate::{Error, common::archive_path::ArchivePath, file::ArchiveFile, mod_time::ModTime};
use std::{
    collections::HashSet,
    io::{self, Cursor, Write},
};
use zip::{CompressionMethod, DateTime, ZipWriter, write::SimpleFileOptions};

/// Finished archive, ready to be escaped and embedded.
#[derive(Debug)]
pub struct Archive {
    /// Complete zip container bytes.
    pub content: Box<[u8]>,
    /// Latest modification time of archived files.
    pub mod_time: ModTime,
    /// Number of archived files.
    pub entries: usize,
}

/// Main builder for the archive. Writes each added file as zip entry in
/// memory, keeping track of used [ArchivePath]s and latest modification time.
pub struct Builder {
    writer: ZipWriter<Cursor<Vec<u8>>>,
    archive_paths: HashSet<ArchivePath>,
    mod_time: ModTime,
}
impl Builder {
    /// Creates empty [self] to be filled with files.
    pub fn new() -> Self {
        let writer = ZipWriter::new(Cursor::new(Vec::new()));
        let archive_paths = HashSet::<ArchivePath>::new();
        let mod_time = ModTime::zero();

        Self {
            writer,
            archive_paths,
            mod_time,
        }
    }

    /// Entry options. Fixed zip timestamp keeps output independent of build
    /// time, real modification time is carried separately in [ModTime].
    fn file_options() -> SimpleFileOptions {
        SimpleFileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .last_modified_time(DateTime::default())
    }

    /// Adds file to the archive.
    pub fn file_add(
        &mut self,
        file: ArchiveFile,
    ) -> Result<(), Error> {
        let ArchiveFile {
            archive_path,
            content,
            modified,
        } = file;

        let archive_write = |source: io::Error| Error::ArchiveWrite {
            archive_path: archive_path.to_string(),
            source,
        };

        if self.archive_paths.contains(&*archive_path) {
            return Err(archive_write(io::Error::new(
                io::ErrorKind::AlreadyExists,
                "file on specified path already exist",
            )));
        }

        self.writer
            .start_file(&*archive_path, Self::file_options())
            .map_err(|error| archive_write(error.into()))?;
        self.writer.write_all(&content).map_err(archive_write)?;

        log::debug!("archived {} ({} bytes)", archive_path, content.len());

        self.mod_time.observe(modified);
        self.archive_paths.insert(archive_path);

        Ok(())
    }

    /// Adds collection of files to the archive.
    pub fn files_add(
        &mut self,
        files: impl IntoIterator<Item = ArchiveFile>,
    ) -> Result<(), Error> {
        files
            .into_iter()
            .try_for_each(|file| self.file_add(file))?;

        Ok(())
    }

    /// Finalizes the builder, writing zip central directory and returning
    /// built [Archive].
    pub fn finalize(self) -> Result<Archive, Error> {
        let entries = self.archive_paths.len();
        let content = self
            .writer
            .finish()
            .map_err(|error| Error::ArchiveWrite {
                archive_path: String::new(),
                source: error.into(),
            })?
            .into_inner()
            .into_boxed_slice();

        Ok(Archive {
            content,
            mod_time: self.mod_time,
            entries,
        })
    }
}
