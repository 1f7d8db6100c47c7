use std::io::Read;

use nom::number::Endianness;

use crate::{error::ParseError, skip::Skip, stream::ByteStream, Orientation};

/// Exif tag id of the orientation entry.
const ORIENTATION_TAG: u16 = 0x0112;

/// tag (2) + data format (2) + components num (4) + value or offset (4)
const IFD_ENTRY_SIZE: u64 = 12;

/// Walk the entries of the directory the stream is positioned at, and return
/// the value of the first orientation entry.
///
/// The tag id of every entry is compared as a big-endian u16, independently
/// of `endian`; the entry count and the value use `endian`.
///
/// An out-of-range value ends the walk immediately, later orientation entries
/// are never consulted.
#[tracing::instrument(skip(stream))]
pub(crate) fn find_orientation<R: Read, S: Skip<R>>(
    stream: &mut ByteStream<R, S>,
    endian: Endianness,
) -> Result<Orientation, ParseError> {
    let entry_num = stream.u16(endian)?;
    tracing::debug!(entry_num, "Got IFD0.");

    for _ in 0..entry_num {
        let tag = stream.be_u16()?;
        if tag != ORIENTATION_TAG {
            stream.skip(IFD_ENTRY_SIZE - 2)?;
            continue;
        }

        // data format (2) + components num (4); always SHORT x 1 for this tag
        stream.skip(6)?;
        // SHORT values are left-justified in the 4-byte value slot, the
        // trailing two bytes are left unread.
        let value = stream.u16(endian)?;

        return Orientation::try_from(value).map_err(|e| ParseError::InvalidOrientation(e.0));
    }

    Err(ParseError::OrientationNotFound)
}
