//! Archive path contains custom type for representing path of an entry inside
//! the embedded archive.

use std::{borrow::Borrow, fmt, ops::Deref};

/// [ArchivePath] represents path of a file inside the archive, eg.
/// `css/style.css`. This is exactly the name the shim will resolve the file
/// by.
///
/// Custom type is used to enforce some rules: components are separated with
/// `/` regardless of host conventions, there is no leading `/`, no `.` or `..`
/// components.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Debug)]
pub struct ArchivePath {
    inner: String,
}
impl ArchivePath {
    /// Construct path from string representation. Refer to [self] for details.
    /// No validation is performed here, use packer helpers to build it from fs
    /// path.
    pub fn from_string(inner: String) -> Self {
        Self { inner }
    }
}

// to allow searching sets / maps of paths directly by str
impl Deref for ArchivePath {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}
impl Borrow<str> for ArchivePath {
    fn borrow(&self) -> &str {
        self.inner.as_str()
    }
}
impl fmt::Display for ArchivePath {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(&self.inner)
    }
}
