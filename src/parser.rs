use std::io::{Read, Seek};

use crate::{
    error::ParseError,
    ifd, jpeg,
    skip::{Skip, SkipRead, SkipSeek},
    stream::ByteStream,
    tiff::TiffHeader,
    Orientation,
};

/// Read the Exif orientation of the JPEG stream in `reader`.
///
/// The stream is consumed strictly forward and only as far as needed: the
/// JPEG segments in front of APP1 are skipped, the TIFF header is validated,
/// and IFD0 is walked until the orientation entry is found. No pixel data is
/// touched and nothing is buffered, so the `reader` does not need to be
/// wrapped with `BufRead`.
///
/// Any problem (not a JPEG, no Exif segment, truncated or malformed data, an
/// out-of-range value, no orientation entry) yields
/// [`Orientation::Unspecified`]; a reader error is treated the same way.
///
/// # Usage
///
/// ```rust
/// use exif_orientation::*;
///
/// // SOI, APP1 holding a big-endian TIFF header and a one-entry IFD0
/// let data = [
///     0xFF, 0xD8, 0xFF, 0xE1, 0x00, 0x1E,
///     b'E', b'x', b'i', b'f', 0x00, 0x00,
///     b'M', b'M', 0x00, 0x2A, 0x00, 0x00, 0x00, 0x08,
///     0x00, 0x01,
///     0x01, 0x12, 0x00, 0x03, 0x00, 0x00, 0x00, 0x01, 0x00, 0x03, 0x00, 0x00,
/// ];
/// assert_eq!(read_orientation(&data[..]), Orientation::Rotate180);
///
/// assert_eq!(read_orientation(&[0u8; 4][..]), Orientation::Unspecified);
/// ```
pub fn read_orientation<R: Read>(reader: R) -> Orientation {
    let mut stream = ByteStream::<R, SkipRead>::new(reader);
    collapse(try_read_orientation(&mut stream), stream.consumed())
}

/// Same as [`read_orientation`], but skips unneeded segments by seeking
/// forward instead of reading them.
///
/// The results of the two functions are identical for any input.
///
/// ```rust,no_run
/// use exif_orientation::*;
/// use std::fs::File;
///
/// let f = File::open("photo.jpg").unwrap();
/// let orientation = read_orientation_seekable(f);
/// println!("{orientation}");
/// ```
pub fn read_orientation_seekable<R: Read + Seek>(reader: R) -> Orientation {
    let mut stream = ByteStream::<R, SkipSeek>::new(reader);
    collapse(try_read_orientation(&mut stream), stream.consumed())
}

#[tracing::instrument(skip_all)]
pub(crate) fn try_read_orientation<R: Read, S: Skip<R>>(
    stream: &mut ByteStream<R, S>,
) -> Result<Orientation, ParseError> {
    jpeg::seek_app1(stream)?;
    let header = TiffHeader::read(stream)?;
    ifd::find_orientation(stream, header.endian)
}

fn collapse(res: Result<Orientation, ParseError>, consumed: u64) -> Orientation {
    match res {
        Ok(orientation) => {
            tracing::debug!(%orientation, consumed, "Got orientation.");
            orientation
        }
        Err(e) => {
            tracing::debug!(
                error = %e,
                truncated = e.is_truncated(),
                consumed,
                "Orientation unspecified."
            );
            Orientation::Unspecified
        }
    }
}
