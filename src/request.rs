use std::collections::BTreeMap;

use serde::Serialize;

use crate::area::Area;
use crate::error::{Error, Result};

/// Value type for a request keyword.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RequestValue {
    Str(String),
    Int(i64),
    StrList(Vec<String>),
    IntList(Vec<i64>),
    FloatList(Vec<f64>),
}

impl From<&str> for RequestValue {
    fn from(value: &str) -> Self {
        RequestValue::Str(value.to_string())
    }
}

impl From<String> for RequestValue {
    fn from(value: String) -> Self {
        RequestValue::Str(value)
    }
}

impl From<&String> for RequestValue {
    fn from(value: &String) -> Self {
        RequestValue::Str(value.clone())
    }
}

impl From<i64> for RequestValue {
    fn from(value: i64) -> Self {
        RequestValue::Int(value)
    }
}

impl From<i32> for RequestValue {
    fn from(value: i32) -> Self {
        RequestValue::Int(value as i64)
    }
}

impl From<Vec<String>> for RequestValue {
    fn from(value: Vec<String>) -> Self {
        RequestValue::StrList(value)
    }
}

impl From<&[String]> for RequestValue {
    fn from(value: &[String]) -> Self {
        RequestValue::StrList(value.to_vec())
    }
}

impl From<Vec<&str>> for RequestValue {
    fn from(value: Vec<&str>) -> Self {
        RequestValue::StrList(value.into_iter().map(|s| s.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for RequestValue {
    fn from(value: [&str; N]) -> Self {
        RequestValue::StrList(value.into_iter().map(|s| s.to_string()).collect())
    }
}

impl From<Vec<i64>> for RequestValue {
    fn from(value: Vec<i64>) -> Self {
        RequestValue::IntList(value)
    }
}

impl From<Vec<f64>> for RequestValue {
    fn from(value: Vec<f64>) -> Self {
        RequestValue::FloatList(value)
    }
}

impl From<Area> for RequestValue {
    fn from(value: Area) -> Self {
        RequestValue::FloatList(value.to_nwse().to_vec())
    }
}

impl RequestValue {
    /// Parse a user-provided string into a best-effort [`RequestValue`].
    ///
    /// Meant for command line and config-file inputs where everything starts
    /// as a string.
    ///
    /// Rules:
    /// - `"2006"` -> `Int(2006)`
    /// - `"a,b,c"` -> `StrList([..])`
    /// - `"2006,2011"` -> `IntList([..])`
    /// - `"[49.5, 8, 47, 10]"` -> `FloatList([..])`
    /// - `"1990/to/1993"` -> `StrList(["1990", .., "1993"])`, see
    ///   [`expand_numeric_syntax`]
    /// - Otherwise -> `Str(..)`
    pub fn parse_auto(s: &str) -> Self {
        let mut t = s.trim();
        if t.contains('/') {
            if let Ok(items) = expand_numeric_syntax(t) {
                if items != [t] {
                    return RequestValue::StrList(items);
                }
            }
        }
        if t.starts_with('[') && t.ends_with(']') && t.len() >= 2 {
            t = &t[1..t.len() - 1];
            t = t.trim();
        }

        if t.contains(',') {
            let items: Vec<&str> = t
                .split(',')
                .map(|x| x.trim())
                .filter(|x| !x.is_empty())
                .collect();
            if items.is_empty() {
                return RequestValue::Str(String::new());
            }

            let ints: std::result::Result<Vec<i64>, _> =
                items.iter().map(|x| x.parse()).collect();
            if let Ok(ints) = ints {
                return RequestValue::IntList(ints);
            }
            let floats: std::result::Result<Vec<f64>, _> =
                items.iter().map(|x| x.parse()).collect();
            if let Ok(floats) = floats {
                return RequestValue::FloatList(floats);
            }
            RequestValue::StrList(items.into_iter().map(|x| x.to_string()).collect())
        } else if let Ok(v) = t.parse::<i64>() {
            RequestValue::Int(v)
        } else {
            RequestValue::Str(t.to_string())
        }
    }

    pub fn as_strings(&self) -> Vec<String> {
        match self {
            RequestValue::Str(s) => vec![s.clone()],
            RequestValue::Int(i) => vec![i.to_string()],
            RequestValue::StrList(xs) => xs.clone(),
            RequestValue::IntList(xs) => xs.iter().map(|x| x.to_string()).collect(),
            RequestValue::FloatList(xs) => xs.iter().map(|x| x.to_string()).collect(),
        }
    }
}

/// CDS request: keyword/value pairs sent as the `inputs` of a job.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Request {
    inner: BTreeMap<String, RequestValue>,
}

impl Request {
    pub fn new() -> Self {
        Self {
            inner: BTreeMap::new(),
        }
    }

    /// Insert a keyword/value pair (value can be a scalar or list).
    pub fn kw(mut self, key: impl Into<String>, value: impl Into<RequestValue>) -> Self {
        self.inner.insert(key.into(), value.into());
        self
    }

    /// Construct a request from string pairs.
    /// Values are parsed with [`RequestValue::parse_auto`].
    pub fn from_str_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: AsRef<str>,
    {
        let mut r = Self::new();
        for (k, v) in pairs {
            r = r.kw(k, RequestValue::parse_auto(v.as_ref()));
        }
        r
    }

    pub fn get(&self, key: &str) -> Option<&RequestValue> {
        self.inner.get(key)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn to_json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}

/// Expand a list-like value, accepting strings like `"1950/to/2024"` or
/// `"1951/to/2096/by/5"`.
pub fn expand_numeric_syntax(s: &str) -> Result<Vec<String>> {
    let tokens: Vec<&str> = s.split('/').filter(|t| !t.is_empty()).collect();
    if tokens.len() == 3 && tokens[1].eq_ignore_ascii_case("to") {
        // a/to/b
        let start: i64 = tokens[0].parse().map_err(|_| {
            Error::InvalidRequest(format!("cannot parse range start {tokens:?}"))
        })?;
        let end: i64 = tokens[2].parse().map_err(|_| {
            Error::InvalidRequest(format!("cannot parse range end {tokens:?}"))
        })?;
        if end < start {
            return Err(Error::InvalidRequest(format!(
                "range end {end} < start {start}"
            )));
        }
        return Ok((start..=end).map(|x| x.to_string()).collect());
    }

    if tokens.len() == 5
        && tokens[1].eq_ignore_ascii_case("to")
        && tokens[3].eq_ignore_ascii_case("by")
    {
        // a/to/b/by/step
        let start: i64 = tokens[0].parse().map_err(|_| {
            Error::InvalidRequest(format!("cannot parse range start {tokens:?}"))
        })?;
        let end: i64 = tokens[2].parse().map_err(|_| {
            Error::InvalidRequest(format!("cannot parse range end {tokens:?}"))
        })?;
        let by: i64 = tokens[4].parse().map_err(|_| {
            Error::InvalidRequest(format!("cannot parse range step {tokens:?}"))
        })?;
        if by <= 0 {
            return Err(Error::InvalidRequest(format!("range step must be >0, got {by}")));
        }
        if end < start {
            return Err(Error::InvalidRequest(format!(
                "range end {end} < start {start}"
            )));
        }

        let mut out = Vec::new();
        let mut cur = start;
        while cur <= end {
            out.push(cur.to_string());
            cur += by;
        }
        return Ok(out);
    }

    Ok(vec![s.to_string()])
}
