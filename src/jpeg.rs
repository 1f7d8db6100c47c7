use std::io::Read;

use crate::{error::ParseError, skip::Skip, stream::ByteStream};

/// Walk the JPEG marker segments until an APP1 segment is reached.
///
/// On success the stream is positioned right after the APP1 size field, i.e.
/// at the start of the segment payload. Every other segment is skipped
/// without being buffered. There is no upper bound on the number of segments
/// other than the length of the stream.
#[tracing::instrument(skip_all)]
pub(crate) fn seek_app1<R: Read, S: Skip<R>>(
    stream: &mut ByteStream<R, S>,
) -> Result<(), ParseError> {
    // SOI has no size field
    let soi = stream.be_u16()?;
    if soi != MarkerCode::Soi.marker() {
        return Err(ParseError::NotJpeg(soi));
    }

    loop {
        let marker = stream.be_u16()?;
        let size = stream.be_u16()?;

        if marker >> 8 != 0xFF {
            return Err(ParseError::InvalidMarker(marker));
        }
        if marker == MarkerCode::App1.marker() {
            tracing::debug!(size, offset = stream.consumed(), "Got APP1 segment.");
            return Ok(());
        }

        // size contains the two bytes of `size` itself
        let Some(payload) = size.checked_sub(2) else {
            return Err(ParseError::InvalidSegmentSize { marker, size });
        };
        tracing::debug!("Skip segment: 0x{:04x}, {} bytes", marker, payload);
        stream.skip(payload.into())?;
    }
}

/// A marker code is a byte following 0xFF that indicates the kind of marker.
enum MarkerCode {
    // Start of Image
    Soi = 0xD8,

    // APP1 marker
    App1 = 0xE1,
}

impl MarkerCode {
    fn marker(self) -> u16 {
        0xFF00 | self as u16
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::skip::SkipRead;
    use crate::testkit::*;
    use test_case::test_case;

    fn scan(data: &[u8]) -> Result<u64, ParseError> {
        let mut stream = ByteStream::<_, SkipRead>::new(Cursor::new(data));
        seek_app1(&mut stream)?;
        Ok(stream.consumed())
    }

    #[test]
    fn app1_first() {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();

        let data = JpegBuilder::new().app1(b"Exif\0\0").build();
        // SOI + marker + size
        assert_eq!(scan(&data).unwrap(), 6);
    }

    #[test]
    fn skip_segments_before_app1() {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();

        let data = JpegBuilder::new()
            .segment(0xFFE0, b"JFIF\0\x01\x02\0\0\x01\0\x01\0\0")
            .segment(0xFFDB, &[0u8; 65])
            .segment(0xFFFE, b"")
            .app1(b"Exif\0\0")
            .build();
        assert_eq!(scan(&data).unwrap(), 2 + (4 + 14) + (4 + 65) + 4 + 4);
    }

    #[test_case(&[0x00, 0x00, 0x00, 0x00] ; "zeros")]
    #[test_case(&[0x89, b'P', b'N', b'G'] ; "png")]
    #[test_case(&[0xFF, 0xD9, 0xFF, 0xE1] ; "eoi first")]
    fn not_jpeg(data: &[u8]) {
        assert!(matches!(scan(data), Err(ParseError::NotJpeg(_))));
    }

    #[test]
    fn invalid_marker() {
        let mut data = vec![0xFF, 0xD8];
        data.extend_from_slice(&[0x12, 0xE1, 0x00, 0x08]);
        assert!(matches!(scan(&data), Err(ParseError::InvalidMarker(0x12E1))));
    }

    #[test_case(0 ; "zero")]
    #[test_case(1 ; "one")]
    fn invalid_size(size: u16) {
        let mut data = vec![0xFF, 0xD8, 0xFF, 0xE0];
        data.extend_from_slice(&size.to_be_bytes());
        data.extend_from_slice(&[0u8; 16]);
        assert!(matches!(
            scan(&data),
            Err(ParseError::InvalidSegmentSize { marker: 0xFFE0, .. })
        ));
    }

    #[test]
    fn no_app1() {
        let data = JpegBuilder::new()
            .segment(0xFFE0, b"JFIF\0")
            .segment(0xFFDB, &[0u8; 4])
            .build();
        let e = scan(&data).unwrap_err();
        assert!(e.is_truncated());
    }

    #[test]
    fn segment_longer_than_stream() {
        let mut data = vec![0xFF, 0xD8, 0xFF, 0xE0, 0x10, 0x00];
        data.extend_from_slice(&[0u8; 10]);
        assert!(scan(&data).unwrap_err().is_truncated());
    }
}
