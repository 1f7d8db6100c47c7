use std::{io::Read, marker::PhantomData};

use nom::number::{complete, Endianness};

use crate::{error::ParseError, skip::Skip};

/// A forward-only cursor over a byte stream.
///
/// The only two primitives are "read exactly N bytes or fail" and "skip N
/// bytes or fail". Nothing that has been read is kept around, so the cursor
/// composes with a tee'd or piped reader.
pub(crate) struct ByteStream<R, S> {
    reader: R,
    consumed: u64,
    phantom: PhantomData<S>,
}

impl<R: Read, S: Skip<R>> ByteStream<R, S> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            consumed: 0,
            phantom: PhantomData,
        }
    }

    /// Number of bytes read or skipped so far.
    pub fn consumed(&self) -> u64 {
        self.consumed
    }

    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N], ParseError> {
        let mut buf = [0u8; N];
        self.reader.read_exact(&mut buf)?;
        self.consumed = self.consumed.saturating_add(N as u64);
        Ok(buf)
    }

    pub fn skip(&mut self, n: u64) -> Result<(), ParseError> {
        if n == 0 {
            return Ok(());
        }
        S::skip(&mut self.reader, n)?;
        self.consumed = self.consumed.saturating_add(n);
        Ok(())
    }

    /// JPEG marker and size fields are always big-endian.
    #[inline]
    pub fn be_u16(&mut self) -> Result<u16, ParseError> {
        self.u16(Endianness::Big)
    }

    #[inline]
    pub fn be_u32(&mut self) -> Result<u32, ParseError> {
        self.u32(Endianness::Big)
    }

    pub fn u16(&mut self, endian: Endianness) -> Result<u16, ParseError> {
        let buf = self.read_array::<2>()?;
        let (_, v) = complete::u16::<_, nom::error::Error<&[u8]>>(endian)(&buf[..])
            .map_err(|_| truncated())?;
        Ok(v)
    }

    pub fn u32(&mut self, endian: Endianness) -> Result<u32, ParseError> {
        let buf = self.read_array::<4>()?;
        let (_, v) = complete::u32::<_, nom::error::Error<&[u8]>>(endian)(&buf[..])
            .map_err(|_| truncated())?;
        Ok(v)
    }
}

// Only reachable if nom rejects a full-length array, which it doesn't.
fn truncated() -> ParseError {
    ParseError::Io(std::io::ErrorKind::UnexpectedEof.into())
}
