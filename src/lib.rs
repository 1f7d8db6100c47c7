//! exif-orientation reads the Exif orientation tag of JPEG files without
//! decoding the image. It is a small streaming parser built on
//! [nom](https://github.com/rust-bakery/nom)'s number parsers.
//!
//! ## Key Features
//!
//! - Single pass, forward only: JPEG segments in front of the Exif APP1
//!   segment are skipped, never buffered; the parser stops as soon as the
//!   orientation entry of IFD0 has been read. Any [`std::io::Read`] works,
//!   readers that also implement [`std::io::Seek`] can skip by seeking (see
//!   [`read_orientation_seekable`]).
//!
//! - Never fails, never misreports: every problem (not a JPEG, no Exif,
//!   truncated data, unknown byte order, out-of-range value, ...) collapses
//!   into [`Orientation::Unspecified`], which is always a safe default for
//!   display. A returned value other than `Unspecified` has been verified to
//!   lie in `1..=8`.
//!
//! - Plays well with decoders: [`decode_with_orientation`] tees the input of
//!   an image decoder into a parser running on its own thread, so the source
//!   is read only once.
//!
//! ## Usage
//!
//! ```rust
//! use exif_orientation::*;
//!
//! fn main() -> Result<()> {
//!     let orientation = open_orientation(&LocalFileSystem, "./Cargo.toml")?;
//!     assert_eq!(orientation, Orientation::Unspecified);
//!
//!     let orientation = read_orientation(&b"\xFF\xD8\xFF\xE1"[..]);
//!     assert!(!orientation.is_specified());
//!     Ok(())
//! }
//! ```
//!
//! Set `RUST_LOG=exif_orientation=debug` (with a `tracing` subscriber
//! installed) to see why a file came back as `Unspecified`.

pub use error::Error;
pub type Result<T> = std::result::Result<T, Error>;

pub use fs::{open_orientation, FileSystem, LocalFileSystem};
pub use orientation::{InvalidOrientation, Orientation};
pub use parser::{read_orientation, read_orientation_seekable};
pub use tee::decode_with_orientation;

mod error;
mod fs;
mod ifd;
mod jpeg;
mod orientation;
mod parser;
mod skip;
mod stream;
mod tee;
mod tiff;

#[cfg(test)]
mod testkit;
