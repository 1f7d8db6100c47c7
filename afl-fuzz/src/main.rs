use std::io::Cursor;

fn main() {
    afl::fuzz!(|data: &[u8]| {
        let a = exif_orientation::read_orientation(data);
        let b = exif_orientation::read_orientation_seekable(Cursor::new(data));
        assert_eq!(a, b);
        assert!(a.code() <= 8);
    });
}
