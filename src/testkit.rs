//! Builders for synthetic JPEG/Exif byte streams.

use nom::number::Endianness;

/// Builds a JPEG stream: SOI followed by the configured segments. No image
/// data is emitted, the parser never gets that far.
#[derive(Default)]
pub struct JpegBuilder {
    segments: Vec<(u16, Vec<u8>)>,
}

impl JpegBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn segment(mut self, marker: u16, payload: &[u8]) -> Self {
        self.segments.push((marker, payload.to_vec()));
        self
    }

    pub fn app1(self, payload: &[u8]) -> Self {
        self.segment(0xFFE1, payload)
    }

    pub fn build(self) -> Vec<u8> {
        let mut out = vec![0xFF, 0xD8];
        for (marker, payload) in self.segments {
            let size = u16::try_from(payload.len() + 2).expect("segment too large");
            out.extend_from_slice(&marker.to_be_bytes());
            out.extend_from_slice(&size.to_be_bytes());
            out.extend_from_slice(&payload);
        }
        out
    }
}

/// One raw IFD entry. The tag id is always written big-endian, matching the
/// way the parser reads it.
#[derive(Clone)]
pub struct Entry {
    pub tag: u16,
    pub format: u16,
    pub count: u32,
    pub value: [u8; 4],
}

impl Entry {
    /// A SHORT entry holding `v` left-justified in the value slot.
    pub fn short(tag: u16, v: u16, endian: Endianness) -> Self {
        let b = write_u16(v, endian);
        Self {
            tag,
            format: 3,
            count: 1,
            value: [b[0], b[1], 0, 0],
        }
    }

    pub fn orientation(v: u16, endian: Endianness) -> Self {
        Self::short(0x0112, v, endian)
    }
}

/// Builds the APP1 payload: "Exif\0\0", the TIFF header, and IFD0.
pub struct ExifBuilder {
    endian: Endianness,
    byte_order: [u8; 2],
    ident: [u8; 6],
    ifd0_offset: u32,
    entries: Vec<Entry>,
    entry_num: Option<u16>,
}

impl ExifBuilder {
    pub fn new(endian: Endianness) -> Self {
        let byte_order = match endian {
            Endianness::Little => *b"II",
            _ => *b"MM",
        };
        Self {
            endian,
            byte_order,
            ident: *b"Exif\0\0",
            ifd0_offset: 8,
            entries: Vec::new(),
            entry_num: None,
        }
    }

    pub fn byte_order(mut self, tag: [u8; 2]) -> Self {
        self.byte_order = tag;
        self
    }

    pub fn ident(mut self, ident: [u8; 6]) -> Self {
        self.ident = ident;
        self
    }

    /// Offset of IFD0 from the start of the TIFF header. Offsets larger than
    /// 8 are padded with zeros.
    pub fn ifd0_offset(mut self, offset: u32) -> Self {
        self.ifd0_offset = offset;
        self
    }

    pub fn entry(mut self, entry: Entry) -> Self {
        self.entries.push(entry);
        self
    }

    /// Override the entry count written in front of the entries.
    pub fn entry_num(mut self, n: u16) -> Self {
        self.entry_num = Some(n);
        self
    }

    pub fn build(self) -> Vec<u8> {
        let endian = self.endian;
        let mut out = self.ident.to_vec();

        out.extend_from_slice(&self.byte_order);
        out.extend_from_slice(&write_u16(0x2a, endian));
        out.extend_from_slice(&write_u32(self.ifd0_offset, endian));
        let padding = self.ifd0_offset.saturating_sub(8) as usize;
        out.extend(std::iter::repeat(0u8).take(padding));

        let num = self
            .entry_num
            .unwrap_or_else(|| u16::try_from(self.entries.len()).expect("too many entries"));
        out.extend_from_slice(&write_u16(num, endian));
        for e in self.entries {
            out.extend_from_slice(&e.tag.to_be_bytes());
            out.extend_from_slice(&write_u16(e.format, endian));
            out.extend_from_slice(&write_u32(e.count, endian));
            out.extend_from_slice(&e.value);
        }
        // next IFD offset
        out.extend_from_slice(&[0u8; 4]);
        out
    }
}

/// A complete JPEG with a JFIF segment, an Exif APP1 segment holding a single
/// orientation entry, and a quantization table after it.
pub fn jpeg_with_orientation(v: u16, endian: Endianness) -> Vec<u8> {
    let exif = ExifBuilder::new(endian)
        .entry(Entry::short(0x010f, 0x4142, endian))
        .entry(Entry::orientation(v, endian))
        .build();
    JpegBuilder::new()
        .segment(0xFFE0, b"JFIF\0\x01\x02\0\0\x01\0\x01\0\0")
        .app1(&exif)
        .segment(0xFFDB, &[0u8; 65])
        .build()
}

pub fn write_u16(v: u16, endian: Endianness) -> [u8; 2] {
    match endian {
        Endianness::Little => v.to_le_bytes(),
        _ => v.to_be_bytes(),
    }
}

pub fn write_u32(v: u32, endian: Endianness) -> [u8; 4] {
    match endian {
        Endianness::Little => v.to_le_bytes(),
        _ => v.to_be_bytes(),
    }
}
