use std::fmt::{self, Write};

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Line protocol has no escape for line breaks in names.
#[derive(Debug, Error, PartialEq)]
#[error("{0:?} contains a line break and cannot be written as line protocol")]
pub struct LineBreakError(pub String);

/// A single field value of a time-series point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue {
    Integer(i64),
    Float(f64),
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Integer(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Float(value)
    }
}

/// One time-series point, rendered as a line of InfluxDB line protocol.
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    pub measurement: String,
    pub tags: Vec<(String, String)>,
    pub fields: Vec<(&'static str, FieldValue)>,
    pub timestamp: DateTime<Utc>,
}

impl Point {
    pub fn new(measurement: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            measurement: measurement.into(),
            tags: Vec::new(),
            fields: Vec::new(),
            timestamp,
        }
    }

    pub fn tag(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.tags.push((key.into(), value.into()));
        self
    }

    pub fn field(mut self, key: &'static str, value: impl Into<FieldValue>) -> Self {
        self.fields.push((key, value.into()));
        self
    }

    pub fn get_field(&self, key: &str) -> Option<FieldValue> {
        self.fields
            .iter()
            .find(|(name, _)| *name == key)
            .map(|(_, value)| *value)
    }

    /// Render the point as one line protocol line, without trailing newline.
    ///
    /// Non-finite floats cannot be represented and are left out. A line break
    /// in the measurement, a tag, or a field key is an error.
    pub fn to_line_protocol(&self) -> Result<String, LineBreakError> {
        let mut line = String::new();
        escape_into(&mut line, &self.measurement, &[',', ' '])?;
        for (key, value) in &self.tags {
            line.push(',');
            escape_into(&mut line, key, &[',', '=', ' '])?;
            line.push('=');
            escape_into(&mut line, value, &[',', '=', ' '])?;
        }

        let mut first = true;
        for (key, value) in &self.fields {
            if let FieldValue::Float(f) = value {
                if !f.is_finite() {
                    log::debug!("Skipping non-finite field {} on {}", key, self.measurement);
                    continue;
                }
            }
            line.push(if first { ' ' } else { ',' });
            first = false;
            escape_into(&mut line, key, &[',', '=', ' '])?;
            line.push('=');
            // Writing into a String cannot fail.
            let _ = write!(line, "{}", value);
        }

        if let Some(nanos) = self.timestamp.timestamp_nanos_opt() {
            let _ = write!(line, " {}", nanos);
        }
        Ok(line)
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Integer(i) => write!(f, "{}i", i),
            FieldValue::Float(v) => write!(f, "{}", v),
        }
    }
}

fn escape_into(out: &mut String, value: &str, special: &[char]) -> Result<(), LineBreakError> {
    if value.contains(['\n', '\r']) {
        return Err(LineBreakError(value.to_string()));
    }
    for c in value.chars() {
        if c == '\\' || special.contains(&c) {
            out.push('\\');
        }
        out.push(c);
    }
    Ok(())
}
