use crate::model::{parse_datetime, Error, Result};
use chrono::{DateTime, FixedOffset};
use serde_json::{from_str, Value};
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

/// A raw record read from a synced JSON snapshot.
///
/// Conversion never fails: a missing field, or one of the wrong JSON type, is absent.
pub trait Snapshot: Sized {
    const KIND: &'static str;

    fn from_value(value: &Value) -> Self;
}

/// Parses a JSON array of records.
pub fn parse_records<T: Snapshot>(json_str: &str) -> std::result::Result<Vec<T>, String> {
    let value: Value = from_str(json_str).map_err(|e| e.to_string())?;
    let Some(elements) = value.as_array() else {
        return Err(format!("expected a JSON array of {}", T::KIND));
    };
    Ok(elements.iter().map(T::from_value).collect())
}

/// Parses a single JSON object record.
pub fn parse_record<T: Snapshot>(json_str: &str) -> std::result::Result<T, String> {
    let value: Value = from_str(json_str).map_err(|e| e.to_string())?;
    if !value.is_object() {
        return Err(format!("expected a JSON object for {}", T::KIND));
    }
    Ok(T::from_value(&value))
}

pub fn read_records<T: Snapshot>(path: &Path) -> Result<Vec<T>> {
    let json_str = fs::read_to_string(path)?;
    let records = parse_records(&json_str).map_err(|reason| Error::Format {
        path: path.to_path_buf(),
        reason,
    })?;
    info!(path = %path.display(), count = records.len(), "loaded {}", T::KIND);
    Ok(records)
}

pub fn read_record<T: Snapshot>(path: &Path) -> Result<T> {
    let json_str = fs::read_to_string(path)?;
    let record = parse_record(&json_str).map_err(|reason| Error::Format {
        path: path.to_path_buf(),
        reason,
    })?;
    info!(path = %path.display(), "loaded {}", T::KIND);
    Ok(record)
}

/// Runs `loader` when `path` exists. A missing file means the source was never synced.
pub fn load_optional<T, F>(path: &Path, loader: F) -> Result<Option<T>>
where
    F: FnOnce(&Path) -> Result<T>,
{
    if !path.exists() {
        debug!(path = %path.display(), "snapshot not found, treating as not synced");
        return Ok(None);
    }
    loader(path).map(Some)
}

pub(crate) fn str_field(value: &Value, key: &str) -> Option<String> {
    value[key].as_str().map(String::from)
}

/// Counts are whole numbers; `3.0` is read as 3, fractional or negative values are absent.
pub(crate) fn u64_field(value: &Value, key: &str) -> Option<u64> {
    let field = &value[key];
    if let Some(count) = field.as_u64() {
        return Some(count);
    }
    let float = field.as_f64().filter(|f| *f >= 0.0)?;
    if float.fract() != 0.0 || float > u64::MAX as f64 {
        debug!(field = key, value = float, "ignoring non-integral count");
        return None;
    }
    Some(float as u64)
}

/// Presence in the JavaScript sense: not null, `false`, `0` or `""`.
pub(crate) fn truthy_field(value: &Value, key: &str) -> bool {
    match &value[key] {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

pub(crate) fn date_field(value: &Value, key: &str) -> Option<DateTime<FixedOffset>> {
    let raw = value[key].as_str()?;
    let parsed = parse_datetime(raw);
    if parsed.is_none() {
        debug!(field = key, raw, "ignoring unparseable date");
    }
    parsed
}

pub(crate) fn records_field<T: Snapshot>(value: &Value, key: &str) -> Vec<T> {
    match &value[key] {
        Value::Array(elements) => elements.iter().map(T::from_value).collect(),
        Value::Null => Vec::new(),
        _ => {
            warn!(field = key, "expected an array of {}, ignoring", T::KIND);
            Vec::new()
        }
    }
}
