use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde_json::{Map, Value};

use crate::errors::AppError;

/// One record of a hosted result set, keyed by column name.
pub type Row = Map<String, Value>;

/// An ordered result set exactly as the analytics API returned it:
/// uniformly shaped rows with named columns. Row order is whatever the
/// upstream query produced; nothing here re-sorts.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub rows: Vec<Row>,
}

impl Dataset {
    pub fn new(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

fn field<'a>(row: &'a Row, name: &str) -> Result<&'a Value, AppError> {
    row.get(name)
        .ok_or_else(|| AppError::MissingField(name.to_string()))
}

pub fn str_field(row: &Row, name: &str) -> Result<String, AppError> {
    match field(row, name)? {
        Value::String(s) => Ok(s.clone()),
        other => Ok(other.to_string()),
    }
}

pub fn f64_field(row: &Row, name: &str) -> Result<f64, AppError> {
    let value = field(row, name)?;
    match value {
        Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| AppError::External(format!("column '{}' is not a finite number", name))),
        Value::String(s) => s
            .parse::<f64>()
            .map_err(|e| AppError::External(format!("column '{}' is not numeric: {}", name, e))),
        _ => Err(AppError::External(format!(
            "column '{}' is not numeric",
            name
        ))),
    }
}

pub fn i64_field(row: &Row, name: &str) -> Result<i64, AppError> {
    let value = field(row, name)?;
    match value {
        // Counters sometimes come back as floats after upstream aggregation.
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .ok_or_else(|| AppError::External(format!("column '{}' is not an integer", name))),
        Value::String(s) => s
            .parse::<i64>()
            .map_err(|e| AppError::External(format!("column '{}' is not an integer: {}", name, e))),
        _ => Err(AppError::External(format!(
            "column '{}' is not an integer",
            name
        ))),
    }
}

pub fn datetime_field(row: &Row, name: &str) -> Result<DateTime<Utc>, AppError> {
    let raw = match field(row, name)? {
        Value::String(s) => s,
        other => {
            return Err(AppError::External(format!(
                "column '{}' is not a timestamp: {}",
                name, other
            )))
        }
    };
    parse_datetime(raw).ok_or_else(|| {
        AppError::External(format!("column '{}' has unparseable timestamp '{}'", name, raw))
    })
}

pub fn date_field(row: &Row, name: &str) -> Result<NaiveDate, AppError> {
    let raw = match field(row, name)? {
        Value::String(s) => s,
        other => {
            return Err(AppError::External(format!(
                "column '{}' is not a date: {}",
                name, other
            )))
        }
    };
    parse_date(raw)
        .ok_or_else(|| AppError::External(format!("column '{}' has unparseable date '{}'", name, raw)))
}

// The API emits RFC 3339 with offset, RFC 3339 without offset, or the plain
// "YYYY-MM-DD HH:MM:SS[.mmm]" form depending on the query. Timestamps
// without an offset are UTC.
fn parse_datetime(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    for fmt in [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S",
    ] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(DateTime::from_naive_utc_and_offset(naive, Utc));
        }
    }
    None
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    parse_datetime(raw).map(|dt| dt.date_naive())
}
