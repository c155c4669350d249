//! tags/util.rs
//! Value coercion applied before a value is written and after it is read.

use super::constants::MAX_PICTURE_TYPE;
use crate::error::{Result, TagError};
use crate::types::{Artwork, MetadataValue, ValueKind};

/// Coerces a value into a field's declared type.
pub type Sanitizer = fn(&MetadataValue) -> Result<MetadataValue>;

fn rejected(kind: ValueKind, value: &MetadataValue) -> TagError {
    TagError::Sanitize {
        kind,
        value: value.to_string(),
    }
}

/// Parse common "boolean-ish" tag values.
/// Accepts: "1", "0", "true", "false", "yes", "no", "y", "n"
pub(crate) fn parse_boolish(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "y" => Some(true),
        "0" | "false" | "no" | "n" => Some(false),
        _ => None,
    }
}

pub fn sanitize_text(value: &MetadataValue) -> Result<MetadataValue> {
    match value {
        MetadataValue::Artwork(_) => Err(rejected(ValueKind::Text, value)),
        MetadataValue::Text(s) => Ok(MetadataValue::Text(s.clone())),
        other => Ok(MetadataValue::Text(other.to_frame_text())),
    }
}

/// Integers. Text like `"3/12"` keeps the part before the slash.
pub fn sanitize_int(value: &MetadataValue) -> Result<MetadataValue> {
    match value {
        MetadataValue::Integer(i) => Ok(MetadataValue::Integer(*i)),
        MetadataValue::Bool(b) => Ok(MetadataValue::Integer(i64::from(*b))),
        MetadataValue::Text(s) => s
            .split('/')
            .next()
            .and_then(|head| head.trim().parse::<i64>().ok())
            .map(MetadataValue::Integer)
            .ok_or_else(|| rejected(ValueKind::Integer, value)),
        MetadataValue::Artwork(_) => Err(rejected(ValueKind::Integer, value)),
    }
}

pub fn sanitize_bool(value: &MetadataValue) -> Result<MetadataValue> {
    match value {
        MetadataValue::Bool(b) => Ok(MetadataValue::Bool(*b)),
        MetadataValue::Integer(i) => Ok(MetadataValue::Bool(*i != 0)),
        MetadataValue::Text(s) => parse_boolish(s)
            .or_else(|| s.trim().parse::<i64>().ok().map(|i| i != 0))
            .map(MetadataValue::Bool)
            .ok_or_else(|| rejected(ValueKind::Boolean, value)),
        MetadataValue::Artwork(_) => Err(rejected(ValueKind::Boolean, value)),
    }
}

/// Years. Dates such as `"2019-05-01"` or `"2019-05"` keep the leading year digits.
pub fn sanitize_year(value: &MetadataValue) -> Result<MetadataValue> {
    match value {
        MetadataValue::Integer(i) if *i >= 0 => Ok(MetadataValue::Integer(*i)),
        MetadataValue::Text(s) => {
            let s = s.trim();
            let digits = s.bytes().take_while(u8::is_ascii_digit).count();
            s[..digits]
                .parse::<i64>()
                .map(MetadataValue::Integer)
                .map_err(|_| rejected(ValueKind::Integer, value))
        }
        MetadataValue::Integer(_) | MetadataValue::Bool(_) | MetadataValue::Artwork(_) => {
            Err(rejected(ValueKind::Integer, value))
        }
    }
}

/// Artwork lists. Every picture type must be a defined ID3 code.
pub fn sanitize_artwork(value: &MetadataValue) -> Result<Vec<Artwork>> {
    let MetadataValue::Artwork(artworks) = value else {
        return Err(rejected(ValueKind::ArtworkList, value));
    };
    for art in artworks {
        sanitize_picture_type(i64::from(art.picture_type))?;
    }
    Ok(artworks.clone())
}

pub fn sanitize_picture_type(code: i64) -> Result<u8> {
    u8::try_from(code)
        .ok()
        .filter(|c| *c <= MAX_PICTURE_TYPE)
        .ok_or_else(|| rejected(ValueKind::Integer, &MetadataValue::Integer(code)))
}

/// The sanitizer implied by a declared type.
pub(crate) fn default_sanitizer(kind: ValueKind) -> Sanitizer {
    match kind {
        ValueKind::Text => sanitize_text,
        ValueKind::Integer => sanitize_int,
        ValueKind::Boolean => sanitize_bool,
        ValueKind::ArtworkList => sanitize_artwork_value,
    }
}

fn sanitize_artwork_value(value: &MetadataValue) -> Result<MetadataValue> {
    sanitize_artwork(value).map(MetadataValue::Artwork)
}
