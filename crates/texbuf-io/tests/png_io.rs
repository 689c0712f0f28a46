use approx::assert_abs_diff_eq;
use tempfile::tempdir;
use texbuf_core::{PixelBuffer, Vec3};
use texbuf_io::{ImageReader, ImageWriter, IoError, PngCodec, PngExt};

fn test_pattern(width: u32, height: u32) -> PixelBuffer {
    let mut image = PixelBuffer::new(width, height);
    for y in 0..height {
        for x in 0..width {
            let r = x as f32 / (width - 1) as f32;
            let g = y as f32 / (height - 1) as f32;
            image.set_texel(x, y, Vec3::new(r, g, 1.0 - r * g));
        }
    }
    image
}

#[test]
fn save_then_load_is_within_quantization() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("pattern.png");

    let image = test_pattern(24, 10);
    image.save_png(&path).expect("save png");
    assert!(path.exists());

    let mut loaded = PixelBuffer::default();
    assert!(loaded.is_empty());
    loaded.load_png(&path).expect("load png");

    assert!(!loaded.is_empty());
    assert_eq!(loaded.dimensions(), (24, 10));
    for (orig, back) in image.data().iter().zip(loaded.data()) {
        assert_abs_diff_eq!(orig, back, epsilon = 1.0 / 255.0 + 1e-6);
    }
}

#[test]
fn load_replaces_previous_dimensions() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("small.png");
    test_pattern(3, 2).save_png(&path).unwrap();

    let mut buf = PixelBuffer::new(100, 100);
    buf.load_png(&path).unwrap();
    assert_eq!(buf.dimensions(), (3, 2));
    assert_eq!(buf.len(), 3 * 2 * 3);
}

#[test]
fn failed_load_leaves_buffer_untouched() {
    let dir = tempdir().unwrap();

    let mut buf = test_pattern(4, 4);
    let before = buf.clone();

    let err = buf.load_png(dir.path().join("missing.png")).unwrap_err();
    assert!(matches!(err, IoError::Io(_)));
    assert_eq!(buf, before);

    let garbage = dir.path().join("garbage.png");
    std::fs::write(&garbage, b"not a png at all").unwrap();
    let err = buf.load_png(&garbage).unwrap_err();
    assert!(matches!(err, IoError::DecodeError(_)));
    assert_eq!(buf, before);
}

#[test]
fn failed_load_of_empty_buffer_stays_empty() {
    let dir = tempdir().unwrap();
    let mut buf = PixelBuffer::empty();
    assert!(buf.load_png(dir.path().join("nope.png")).is_err());
    assert!(buf.is_empty());
}

#[test]
fn save_reports_failure() {
    let dir = tempdir().unwrap();

    // Parent directory does not exist
    let path = dir.path().join("no_such_dir").join("out.png");
    let err = test_pattern(2, 2).save_png(&path).unwrap_err();
    assert!(matches!(err, IoError::Io(_)));

    // Nothing to encode; no file is created
    let path = dir.path().join("empty.png");
    let err = PixelBuffer::empty().save_png(&path).unwrap_err();
    assert!(matches!(err, IoError::EncodeError(_)));
    assert!(!path.exists());
}

#[test]
fn from_png_matches_codec_read() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("codec.png");

    let codec = PngCodec::new();
    codec.write(&path, &test_pattern(5, 5)).unwrap();

    let via_ext = PixelBuffer::from_png(&path).unwrap();
    let via_codec = codec.read(&path).unwrap();
    let via_fn = texbuf_io::read(&path).unwrap();
    assert_eq!(via_ext, via_codec);
    assert_eq!(via_ext, via_fn);
}

#[test]
fn loaded_texture_samples_like_the_original() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("texture.png");

    let image = test_pattern(8, 8);
    texbuf_io::write(&path, &image).unwrap();
    let texture = texbuf_io::read(&path).unwrap();

    for (u, v) in [(0.0, 0.0), (0.3, 0.7), (0.95, 0.1)] {
        let a = image.sample(u, v);
        let b = texture.sample(u, v);
        assert_abs_diff_eq!(a.x, b.x, epsilon = 1.0 / 255.0 + 1e-6);
        assert_abs_diff_eq!(a.y, b.y, epsilon = 1.0 / 255.0 + 1e-6);
        assert_abs_diff_eq!(a.z, b.z, epsilon = 1.0 / 255.0 + 1e-6);
    }
}
