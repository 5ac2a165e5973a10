use assert_fs::TempDir;
use assert_fs::fixture::ChildPath;
use assert_fs::prelude::*;
use exif::experimental::Writer;
use exif::{Field, In, Rational, Tag, Value};
use std::io::Cursor;

fn field(tag: Tag, value: Value) -> Field {
    Field {
        tag,
        ifd_num: In::PRIMARY,
        value,
    }
}

/// EXIF fields of a typical shot taken with the named camera model.
pub fn camera_fields(model: &str) -> Vec<Field> {
    vec![
        field(Tag::Make, Value::Ascii(vec![b"Canon".to_vec()])),
        field(Tag::Model, Value::Ascii(vec![model.as_bytes().to_vec()])),
        field(Tag::Orientation, Value::Short(vec![1])),
        field(
            Tag::DateTimeOriginal,
            Value::Ascii(vec![b"2011:07:04 09:05:00".to_vec()]),
        ),
        field(Tag::ExposureProgram, Value::Short(vec![2])),
        field(Tag::FNumber, Value::Rational(vec![Rational { num: 56, denom: 10 }])),
        field(Tag::ExposureTime, Value::Rational(vec![Rational { num: 1, denom: 125 }])),
        field(Tag::PhotographicSensitivity, Value::Short(vec![200])),
        field(Tag::MeteringMode, Value::Short(vec![3])),
        field(Tag::WhiteBalance, Value::Short(vec![1])),
    ]
}

/// Minimal JPEG: SOI, an APP1 Exif segment holding `fields`, EOI.
pub fn jpeg_with_exif(fields: &[Field]) -> Vec<u8> {
    let mut writer = Writer::new();
    for f in fields {
        writer.push_field(f);
    }
    let mut tiff = Cursor::new(Vec::new());
    writer.write(&mut tiff, false).unwrap();
    let tiff = tiff.into_inner();

    let mut jpeg = vec![0xFF, 0xD8, 0xFF, 0xE1];
    jpeg.extend_from_slice(&((tiff.len() + 8) as u16).to_be_bytes());
    jpeg.extend_from_slice(b"Exif\0\0");
    jpeg.extend_from_slice(&tiff);
    jpeg.extend_from_slice(&[0xFF, 0xD9]);
    jpeg
}

/// A JPEG with no metadata segment at all.
pub fn jpeg_without_exif() -> Vec<u8> {
    vec![0xFF, 0xD8, 0xFF, 0xD9]
}

/// Photo directory with two tagged photos, one untagged photo and a stray text file.
pub fn setup_photo_dir(temp_dir: &TempDir) -> ChildPath {
    let photo_dir = temp_dir.child("photos");
    photo_dir
        .child("a.jpg")
        .write_binary(&jpeg_with_exif(&camera_fields("EOS 5D")))
        .unwrap();
    photo_dir
        .child("b.JPG")
        .write_binary(&jpeg_without_exif())
        .unwrap();
    photo_dir
        .child("c.jpeg")
        .write_binary(&jpeg_with_exif(&camera_fields("EOS 7D")))
        .unwrap();
    photo_dir.child("notes.txt").write_str("not a photo").unwrap();
    photo_dir
}
