use crate::photostat_core::error::{PhotostatError, Result};
use crate::photostat_core::labels::{
    AUTOFOCUS_MODES, COLOR_SPACES, EXPOSURE_PROGRAMS, EnumTable, LIGHT_SOURCES, METERING_MODES,
    ORIENTATIONS, WHITE_BALANCES,
};
use crate::photostat_core::record::PhotoRecord;
use exif::{Exif, In, Reader, Tag, Value};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use time::PrimitiveDateTime;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

/// Date format used in EXIF data.
const EXIF_DATE_FORMAT: &[BorrowedFormatItem] =
    format_description!("[year]:[month]:[day] [hour]:[minute]:[second]");

/// Catalog date column, e.g. `04.07.2011`.
const CATALOG_DATE_FORMAT: &[BorrowedFormatItem] = format_description!("[day].[month].[year]");

/// Catalog time column, e.g. `9:05`.
const CATALOG_TIME_FORMAT: &[BorrowedFormatItem] =
    format_description!("[hour padding:none]:[minute]");

/// Charset prefixes of the UserComment tag.
const COMMENT_PREFIX_LEN: usize = 8;
const COMMENT_UNICODE: &[u8; 8] = b"UNICODE\0";

/// Extract the catalog record for a photo.
///
/// Returns `Ok(None)` when the file carries no EXIF block or is not an image
/// the decoder understands. A block that breaks off or cannot be decoded is a
/// `MetadataExtraction` error, as are codes missing from a label table.
pub fn extract(path: &Path) -> Result<Option<PhotoRecord>> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);

    let exif = match Reader::new().read_from_container(&mut reader) {
        Ok(exif) => exif,
        Err(e @ (exif::Error::NotFound(_) | exif::Error::InvalidFormat(_))) => {
            log::debug!("No EXIF data in {}: {}", path.display(), e);
            return Ok(None);
        }
        Err(e) => {
            return Err(PhotostatError::MetadataExtraction {
                path: path.to_path_buf(),
                reason: e.to_string(),
            });
        }
    };

    build_record(&path.to_string_lossy(), &exif).map(Some)
}

/// Map a decoded EXIF block to a record for `file`.
pub fn build_record(file: &str, exif: &Exif) -> Result<PhotoRecord> {
    let mut record = PhotoRecord::new(file);

    if let Some(taken) = ascii(exif, Tag::DateTimeOriginal) {
        match PrimitiveDateTime::parse(&taken, EXIF_DATE_FORMAT) {
            Ok(taken) => {
                record.date = taken.format(CATALOG_DATE_FORMAT).ok();
                record.time = taken.format(CATALOG_TIME_FORMAT).ok();
            }
            Err(e) => log::debug!("Ignoring capture time {:?} of {}: {}", taken, file, e),
        }
    }

    record.pixel_x_dimension = uint(exif, Tag::PixelXDimension);
    record.pixel_y_dimension = uint(exif, Tag::PixelYDimension);
    record.manufacturer = ascii(exif, Tag::Make);
    record.model = ascii(exif, Tag::Model);
    record.exposure_program = label(exif, Tag::ExposureProgram, &EXPOSURE_PROGRAMS)?;
    record.f_number =
        rational(exif, Tag::FNumber).and_then(|(num, denom)| ratio(num.into(), denom.into()));
    record.exposure_time = rational(exif, Tag::ExposureTime)
        .and_then(|(num, denom)| format_fraction(num.into(), denom.into()));
    record.exposure_bias = srational(exif, Tag::ExposureBiasValue)
        .and_then(|(num, denom)| format_fraction(num.into(), denom.into()));
    record.iso = uint(exif, Tag::PhotographicSensitivity);
    record.focal_length_35mm_equivalent = uint(exif, Tag::FocalLengthIn35mmFilm);
    record.metering_mode = label(exif, Tag::MeteringMode, &METERING_MODES)?;
    record.autofocus_mode = label(exif, Tag::SensingMethod, &AUTOFOCUS_MODES)?;
    record.white_balance = label(exif, Tag::WhiteBalance, &WHITE_BALANCES)?;
    record.light_source = label(exif, Tag::LightSource, &LIGHT_SOURCES)?;
    record.orientation = label(exif, Tag::Orientation, &ORIENTATIONS)?;
    record.color_space = label(exif, Tag::ColorSpace, &COLOR_SPACES)?;
    record.user_comment = exif
        .get_field(Tag::UserComment, In::PRIMARY)
        .and_then(|field| match &field.value {
            Value::Undefined(bytes, _) => decode_user_comment(bytes, exif.little_endian()),
            _ => None,
        });

    Ok(record)
}

fn uint(exif: &Exif, tag: Tag) -> Option<u32> {
    exif.get_field(tag, In::PRIMARY)
        .and_then(|field| field.value.get_uint(0))
}

fn ascii(exif: &Exif, tag: Tag) -> Option<String> {
    let field = exif.get_field(tag, In::PRIMARY)?;
    match &field.value {
        Value::Ascii(parts) => parts.first().and_then(|bytes| non_blank(bytes)),
        _ => None,
    }
}

fn rational(exif: &Exif, tag: Tag) -> Option<(u32, u32)> {
    match &exif.get_field(tag, In::PRIMARY)?.value {
        Value::Rational(values) => values.first().map(|r| (r.num, r.denom)),
        _ => None,
    }
}

fn srational(exif: &Exif, tag: Tag) -> Option<(i32, i32)> {
    match &exif.get_field(tag, In::PRIMARY)?.value {
        Value::SRational(values) => values.first().map(|r| (r.num, r.denom)),
        _ => None,
    }
}

fn label(exif: &Exif, tag: Tag, table: &EnumTable) -> Result<Option<&'static str>> {
    uint(exif, tag).map(|code| table.label(code)).transpose()
}

fn ratio(num: f64, denom: f64) -> Option<f64> {
    (denom != 0.0).then(|| num / denom)
}

/// Render a rational as a reduced fraction, or a whole number when it divides.
///
/// Exposure times come out as `1/250`, exposure compensation as `-1/3`.
fn format_fraction(num: i64, denom: i64) -> Option<String> {
    if denom == 0 {
        return None;
    }
    let sign = if (num < 0) != (denom < 0) && num != 0 { "-" } else { "" };
    let (num, denom) = (num.unsigned_abs(), denom.unsigned_abs());
    let divisor = gcd(num, denom);
    let (num, denom) = (num / divisor, denom / divisor);
    if denom == 1 {
        Some(format!("{}{}", sign, num))
    } else {
        Some(format!("{}{}/{}", sign, num, denom))
    }
}

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a.max(1)
}

/// Text with trailing NULs and whitespace removed, `None` if nothing is left.
fn non_blank(bytes: &[u8]) -> Option<String> {
    let text = String::from_utf8_lossy(bytes);
    let text = text.trim_matches(|c: char| c == '\0' || c.is_whitespace());
    (!text.is_empty()).then(|| text.to_string())
}

/// Decode a UserComment value: an 8-byte charset id followed by the text.
fn decode_user_comment(bytes: &[u8], little_endian: bool) -> Option<String> {
    if bytes.len() <= COMMENT_PREFIX_LEN {
        return None;
    }
    let (charset, text) = bytes.split_at(COMMENT_PREFIX_LEN);

    if charset == COMMENT_UNICODE {
        let units: Vec<u16> = text
            .chunks_exact(2)
            .map(|pair| {
                let pair = [pair[0], pair[1]];
                if little_endian {
                    u16::from_le_bytes(pair)
                } else {
                    u16::from_be_bytes(pair)
                }
            })
            .collect();
        non_blank(String::from_utf16_lossy(&units).as_bytes())
    } else {
        non_blank(text)
    }
}
