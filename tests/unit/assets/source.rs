use std::io::Cursor;

use base64::Engine as _;

use super::*;
use crate::foundation::core::Rgba8;

fn png_bytes(w: u32, h: u32, px: [u8; 4]) -> Vec<u8> {
    let img = image::RgbaImage::from_pixel(w, h, image::Rgba(px));
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    buf
}

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir()
        .join("pixelate_unit")
        .join(format!("{name}_{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn local_source_reads_plain_relative_and_file_urls() {
    let dir = scratch_dir("local_source");
    let path = dir.join("cover.png");
    std::fs::write(&path, png_bytes(4, 3, [9, 8, 7, 255])).unwrap();

    let plain = LocalSource::new().load(path.to_str().unwrap()).unwrap();
    assert_eq!(plain.dimensions(), (4, 3));

    let relative = LocalSource::with_root(&dir).load("cover.png").unwrap();
    assert_eq!(relative, plain);

    let file_url = url::Url::from_file_path(&path).unwrap();
    let via_url = LocalSource::new().load(file_url.as_str()).unwrap();
    assert_eq!(via_url.pixel(0, 0), Rgba8::opaque(9, 8, 7));
}

#[test]
fn local_source_reads_data_urls() {
    let url = format!(
        "data:image/png;base64,{}",
        base64::engine::general_purpose::STANDARD.encode(png_bytes(2, 2, [1, 1, 1, 255]))
    );
    let s = LocalSource::new().load(&url).unwrap();
    assert_eq!(s.dimensions(), (2, 2));
}

#[test]
fn network_schemes_are_refused() {
    let err = LocalSource::new()
        .load("https://example.com/cover.jpg")
        .unwrap_err();
    assert!(matches!(err, PixelateError::Load(_)));
    assert!(err.to_string().contains("https"));
}

#[test]
fn missing_file_is_load_error() {
    let err = LocalSource::new()
        .load("/definitely/not/here/cover.png")
        .unwrap_err();
    assert!(matches!(err, PixelateError::Load(_)));
}

#[test]
fn memory_source_decodes_registered_bytes() {
    let src = MemorySource::new().with("mem://cover", png_bytes(5, 5, [0, 255, 0, 255]));
    assert_eq!(src.load("mem://cover").unwrap().dimensions(), (5, 5));
    assert!(matches!(
        src.load("mem://other"),
        Err(PixelateError::Load(_))
    ));
}

#[test]
fn memory_source_undecodable_bytes_are_load_errors() {
    let src = MemorySource::new().with("bad", b"nope".to_vec());
    assert!(matches!(src.load("bad"), Err(PixelateError::Load(_))));
}

#[test]
fn surface_source_returns_copies() {
    let surface = PixelSurface::filled(2, 2, Rgba8::opaque(3, 3, 3)).unwrap();
    let src = SurfaceSource::new().with("s", surface.clone());
    assert_eq!(src.load("s").unwrap(), surface);
    assert_eq!(src.load("s").unwrap(), surface);
}
