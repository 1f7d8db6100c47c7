use std::{
    fs::File,
    io::{self, Read},
    path::Path,
};

use crate::{read_orientation, Orientation};

/// Where files are opened from.
///
/// Passed explicitly to [`open_orientation`], so tests (or callers reading
/// from an archive, a network share, ...) can substitute their own source.
pub trait FileSystem {
    type File: Read;

    fn open(&self, path: &Path) -> io::Result<Self::File>;
}

/// The local file system, via [`std::fs::File`].
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalFileSystem;

impl FileSystem for LocalFileSystem {
    type File = File;

    fn open(&self, path: &Path) -> io::Result<Self::File> {
        File::open(path)
    }
}

/// Open `path` in `fs` and read its Exif orientation.
///
/// Only failing to open the file is reported as an error; once the file is
/// open, every parse failure is [`Orientation::Unspecified`].
///
/// ```rust,no_run
/// use exif_orientation::*;
///
/// fn main() -> Result<()> {
///     let orientation = open_orientation(&LocalFileSystem, "./photo.jpg")?;
///     if orientation.swaps_dimensions() {
///         println!("portrait");
///     }
///     Ok(())
/// }
/// ```
#[tracing::instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn open_orientation<F: FileSystem>(
    fs: &F,
    path: impl AsRef<Path>,
) -> crate::Result<Orientation> {
    let file = fs.open(path.as_ref())?;
    Ok(read_orientation(file))
}
