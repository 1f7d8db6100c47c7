use std::io::{self, Read, Seek};

/// Strategy used by [`ByteStream`](crate::stream::ByteStream) to discard
/// bytes the parser is not interested in.
///
/// Both strategies only ever move forward.
pub(crate) trait Skip<R> {
    /// Skip the given number of bytes.
    fn skip(reader: &mut R, skip: u64) -> io::Result<()>;
}

/// Skips by reading and discarding, works for any [`Read`].
pub(crate) struct SkipRead;

/// Skips with a relative forward seek, avoiding the copy for readers that
/// implement [`Seek`].
///
/// Seeking past the end of a file is allowed by most readers, so a skip that
/// overshoots is only detected by the read that follows it.
pub(crate) struct SkipSeek;

impl<R: Read> Skip<R> for SkipRead {
    #[inline]
    fn skip(reader: &mut R, skip: u64) -> io::Result<()> {
        match io::copy(&mut reader.by_ref().take(skip), &mut io::sink()) {
            Ok(x) => {
                if x == skip {
                    Ok(())
                } else {
                    Err(io::ErrorKind::UnexpectedEof.into())
                }
            }
            Err(e) => Err(e),
        }
    }
}

impl<R: Seek> Skip<R> for SkipSeek {
    #[inline]
    fn skip(reader: &mut R, skip: u64) -> io::Result<()> {
        let skip = i64::try_from(skip)
            .map_err(|_| io::Error::new(io::ErrorKind::InvalidInput, "skip too large"))?;
        reader.seek_relative(skip)
    }
}
