use std::{fmt::Debug, io::Read};

use nom::{branch::alt, bytes::complete::tag, combinator, number::Endianness, IResult};

use crate::{error::ParseError, skip::Skip, stream::ByteStream};

/// "Exif", read as a big-endian u32.
const EXIF_IDENT: u32 = 0x4578_6966;

/// Byte order tag + magic + IFD0 offset.
const TIFF_HEADER_LEN: u32 = 8;

/// TIFF Header
#[derive(Clone, PartialEq, Eq)]
pub(crate) struct TiffHeader {
    pub endian: Endianness,
    pub ifd0_offset: u32,
}

impl Debug for TiffHeader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let endian_str = match self.endian {
            Endianness::Big => "Big",
            Endianness::Little => "Little",
            Endianness::Native => "Native",
        };
        f.debug_struct("TiffHeader")
            .field("endian", &endian_str)
            .field("ifd0_offset", &format!("{:#x}", self.ifd0_offset))
            .finish()
    }
}

impl TiffHeader {
    /// Validate the Exif framing at the start of an APP1 payload and read
    /// the TIFF header that follows it.
    ///
    /// On success the stream is positioned at the first byte of IFD0.
    #[tracing::instrument(skip_all)]
    pub fn read<R: Read, S: Skip<R>>(stream: &mut ByteStream<R, S>) -> Result<Self, ParseError> {
        let ident = stream.be_u32()?;
        if ident != EXIF_IDENT {
            return Err(ParseError::MissingExifIdent(ident));
        }
        // two padding bytes after "Exif"
        stream.skip(2)?;

        let byte_order = stream.read_array::<2>()?;
        let endian = match Self::parse_endian(&byte_order) {
            Ok((_, endian)) => endian,
            Err(_) => return Err(ParseError::UnknownByteOrder(u16::from_be_bytes(byte_order))),
        };

        // TIFF magic (0x2a) is not checked
        stream.skip(2)?;

        let ifd0_offset = stream.u32(endian)?;
        // The offset counts from the byte order tag, so it can't point back
        // into the header itself.
        let Some(gap) = ifd0_offset.checked_sub(TIFF_HEADER_LEN) else {
            return Err(ParseError::InvalidIfdOffset(ifd0_offset));
        };
        stream.skip(gap.into())?;

        let header = Self {
            endian,
            ifd0_offset,
        };
        tracing::debug!(?header, "Got TIFF header.");
        Ok(header)
    }

    fn parse_endian(input: &[u8]) -> IResult<&[u8], Endianness> {
        combinator::map(alt((tag("MM"), tag("II"))), |endian_marker| {
            if endian_marker == b"MM" {
                Endianness::Big
            } else {
                Endianness::Little
            }
        })(input)
    }
}
