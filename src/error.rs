use std::io;
use thiserror::Error;

/// Errors returned by the I/O wrappers around the parser, such as
/// [`open_orientation`](crate::open_orientation).
///
/// Parsing itself never fails from the caller's point of view: every
/// malformed or missing Exif block is reported as
/// [`Orientation::Unspecified`](crate::Orientation::Unspecified).
#[derive(Debug, Error)]
pub enum Error {
    #[error("io error; {0}")]
    Io(#[from] io::Error),
}

/// Failure sites of a single orientation parse.
///
/// These never leave the crate; [`crate::parser`] collapses all of them into
/// `Orientation::Unspecified` after logging.
#[derive(Debug, Error)]
pub(crate) enum ParseError {
    #[error("read failed; {0}")]
    Io(#[from] io::Error),

    #[error("invalid JPEG file; SOI marker not found (got {0:#06x})")]
    NotJpeg(u16),

    #[error("invalid JPEG marker {0:#06x}")]
    InvalidMarker(u16),

    #[error("invalid size {size} for JPEG segment {marker:#06x}")]
    InvalidSegmentSize { marker: u16, size: u16 },

    #[error("APP1 segment is not Exif (got identifier {0:#010x})")]
    MissingExifIdent(u32),

    #[error("unrecognized TIFF byte order {0:#06x}")]
    UnknownByteOrder(u16),

    #[error("invalid IFD0 offset {0}")]
    InvalidIfdOffset(u32),

    #[error("orientation value {0} is out of range")]
    InvalidOrientation(u16),

    #[error("orientation tag not found in IFD0")]
    OrientationNotFound,
}

impl ParseError {
    /// Returns true if the stream ended before the parse could finish.
    pub(crate) fn is_truncated(&self) -> bool {
        matches!(self, ParseError::Io(e) if e.kind() == io::ErrorKind::UnexpectedEof)
    }
}
