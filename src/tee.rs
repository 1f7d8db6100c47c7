use std::{
    io::{self, Read},
    sync::mpsc::{channel, Receiver, Sender},
    thread,
};

use bytes::{Buf, Bytes};

use crate::{read_orientation, Orientation};

/// Run an image decoder over `reader` and, concurrently, read the Exif
/// orientation from the very same bytes.
///
/// Everything `decode` reads is forwarded to a parser running on its own
/// thread, so the source is read once and neither consumer has to seek. The
/// parser gets its own view of the stream and never advances the decoder's.
///
/// The orientation only sees the bytes the decoder actually read: a decoder
/// that stops before the orientation entry yields
/// [`Orientation::Unspecified`].
///
/// ```rust
/// use exif_orientation::*;
/// use std::io::Read;
///
/// let data = std::fs::read("./Cargo.toml").unwrap();
/// let (res, orientation) = decode_with_orientation(&data[..], |r| {
///     let mut buf = Vec::new();
///     r.read_to_end(&mut buf).map(|_| buf.len())
/// });
/// assert_eq!(res.unwrap(), data.len());
/// assert_eq!(orientation, Orientation::Unspecified);
/// ```
pub fn decode_with_orientation<R, T, E, F>(reader: R, decode: F) -> (Result<T, E>, Orientation)
where
    R: Read,
    F: FnOnce(&mut dyn Read) -> Result<T, E>,
{
    let (tx, rx) = channel();
    let parser = thread::spawn(move || read_orientation(PipeReader::new(rx)));

    let res = {
        let mut tee = TeeReader {
            inner: reader,
            tx: Some(tx),
        };
        decode(&mut tee)
    };

    // The tee (and its sender) is gone, the parser sees EOF from here on.
    let orientation = parser.join().unwrap_or_else(|_| {
        tracing::warn!("orientation parser panicked");
        Orientation::Unspecified
    });
    (res, orientation)
}

/// Forwards a copy of every chunk read from `inner` to the parser thread.
struct TeeReader<R> {
    inner: R,
    // None once the parser has hung up
    tx: Option<Sender<Bytes>>,
}

impl<R: Read> Read for TeeReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.inner.read(buf)?;
        if n > 0 {
            if let Some(tx) = &self.tx {
                if tx.send(Bytes::copy_from_slice(&buf[..n])).is_err() {
                    tracing::debug!("orientation parser finished, stop forwarding");
                    self.tx = None;
                }
            }
        }
        Ok(n)
    }
}

/// Read half of the pipe; end of stream once the sender is dropped.
struct PipeReader {
    rx: Receiver<Bytes>,
    chunk: Bytes,
}

impl PipeReader {
    fn new(rx: Receiver<Bytes>) -> Self {
        Self {
            rx,
            chunk: Bytes::new(),
        }
    }
}

impl Read for PipeReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if buf.is_empty() {
            return Ok(0);
        }
        while !self.chunk.has_remaining() {
            match self.rx.recv() {
                Ok(chunk) => self.chunk = chunk,
                Err(_) => return Ok(0),
            }
        }
        let n = buf.len().min(self.chunk.remaining());
        self.chunk.copy_to_slice(&mut buf[..n]);
        Ok(n)
    }
}
