//! Codecs for the primitive value kinds a property may declare.
//!
//! Every kind parses a JSON value independently of the others. A property
//! tries its declared kinds in order and keeps the first that parses, so two
//! kinds whose grammars overlap (a plain string and a URI, say) are resolved
//! purely by declaration order.

use std::{cmp::Ordering, fmt, time::Duration};

use chrono::{DateTime, FixedOffset, Timelike, Utc};
use serde_json::{Map, Number, Value};

use crate::{
    errors::{LiteralError, SerializeError},
    iri::Iri,
};

/// Integral floats below this magnitude are exact as `i64`.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

lazy_static::lazy_static! {
    static ref MINUTES_ONLY_DATETIME: regex::Regex =
        regex::Regex::new(r"^(\d{4}-\d{2}-\d{2}T\d{2}:\d{2})(Z|z|[+-]\d{2}:\d{2})$").unwrap();
    static ref DURATION: regex::Regex = regex::Regex::new(
        r"^(-)?P(?:(\d+)Y)?(?:(\d+)M)?(?:(\d+)D)?(?:T(?:(\d+)H)?(?:(\d+)M)?(?:(\d+)(?:\.(\d{1,9}))?S)?)?$"
    )
    .unwrap();
    static ref MIME_TYPE: regex::Regex = regex::Regex::new(
        r#"^[A-Za-z0-9][A-Za-z0-9!#$&^_.+-]*/[A-Za-z0-9][A-Za-z0-9!#$&^_.+-]*(?:\s*;\s*[A-Za-z0-9!#$&^_.+-]+=(?:[^;"\s]+|"[^"]*"))*$"#
    )
    .unwrap();
    static ref BCP47: regex::Regex = regex::Regex::new(r"^[A-Za-z]{1,8}(?:-[A-Za-z0-9]{1,8})*$").unwrap();
    static ref LINK_RELATION: regex::Regex = regex::Regex::new(r"^[^\s,]+$").unwrap();
}

/// The closed set of primitive encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LiteralKind {
    String,
    LangString,
    Float,
    NonNegativeInteger,
    Boolean,
    DateTime,
    Duration,
    AnyUri,
    MimeType,
    Bcp47,
    LinkRelation,
}

impl LiteralKind {
    pub const ALL: [LiteralKind; 11] = [
        LiteralKind::String,
        LiteralKind::LangString,
        LiteralKind::Float,
        LiteralKind::NonNegativeInteger,
        LiteralKind::Boolean,
        LiteralKind::DateTime,
        LiteralKind::Duration,
        LiteralKind::AnyUri,
        LiteralKind::MimeType,
        LiteralKind::Bcp47,
        LiteralKind::LinkRelation,
    ];

    /// The datatype name as the vocabulary documents it.
    pub fn name(&self) -> &'static str {
        match self {
            LiteralKind::String => "xsd:string",
            LiteralKind::LangString => "rdf:langString",
            LiteralKind::Float => "xsd:float",
            LiteralKind::NonNegativeInteger => "xsd:nonNegativeInteger",
            LiteralKind::Boolean => "xsd:boolean",
            LiteralKind::DateTime => "xsd:dateTime",
            LiteralKind::Duration => "xsd:duration",
            LiteralKind::AnyUri => "xsd:anyURI",
            LiteralKind::MimeType => "rfc2045",
            LiteralKind::Bcp47 => "bcp47",
            LiteralKind::LinkRelation => "rfc5988",
        }
    }

    /// Whether the kind is read from a JSON object rather than a scalar.
    pub fn is_structured(&self) -> bool {
        matches!(self, LiteralKind::LangString)
    }

    pub fn parse(&self, raw: &Value) -> Result<Literal, LiteralError> {
        match self {
            LiteralKind::String => as_str(*self, raw).map(|s| Literal::String(s.to_owned())),
            LiteralKind::LangString => LangString::parse(raw).map(Literal::LangString),
            LiteralKind::Float => raw
                .as_f64()
                .map(Literal::Float)
                .ok_or_else(|| mismatch(*self, raw)),
            LiteralKind::NonNegativeInteger => raw
                .as_u64()
                .map(Literal::NonNegativeInteger)
                .ok_or_else(|| mismatch(*self, raw)),
            LiteralKind::Boolean => raw
                .as_bool()
                .map(Literal::Boolean)
                .ok_or_else(|| mismatch(*self, raw)),
            LiteralKind::DateTime => XsdDateTime::parse(as_str(*self, raw)?).map(Literal::DateTime),
            LiteralKind::Duration => XsdDuration::parse(as_str(*self, raw)?).map(Literal::Duration),
            LiteralKind::AnyUri => {
                let s = as_str(*self, raw)?;
                Iri::parse(s)
                    .map(Literal::AnyUri)
                    .map_err(|_| grammar(*self, s))
            }
            LiteralKind::MimeType => {
                matching(*self, &MIME_TYPE, as_str(*self, raw)?).map(Literal::MimeType)
            }
            LiteralKind::Bcp47 => matching(*self, &BCP47, as_str(*self, raw)?).map(Literal::Bcp47),
            LiteralKind::LinkRelation => {
                matching(*self, &LINK_RELATION, as_str(*self, raw)?).map(Literal::LinkRelation)
            }
        }
    }
}

impl fmt::Display for LiteralKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A parsed primitive value.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    String(String),
    LangString(LangString),
    Float(f64),
    NonNegativeInteger(u64),
    Boolean(bool),
    DateTime(XsdDateTime),
    Duration(XsdDuration),
    AnyUri(Iri),
    MimeType(String),
    Bcp47(String),
    LinkRelation(String),
}

impl Literal {
    pub fn kind(&self) -> LiteralKind {
        match self {
            Literal::String(_) => LiteralKind::String,
            Literal::LangString(_) => LiteralKind::LangString,
            Literal::Float(_) => LiteralKind::Float,
            Literal::NonNegativeInteger(_) => LiteralKind::NonNegativeInteger,
            Literal::Boolean(_) => LiteralKind::Boolean,
            Literal::DateTime(_) => LiteralKind::DateTime,
            Literal::Duration(_) => LiteralKind::Duration,
            Literal::AnyUri(_) => LiteralKind::AnyUri,
            Literal::MimeType(_) => LiteralKind::MimeType,
            Literal::Bcp47(_) => LiteralKind::Bcp47,
            Literal::LinkRelation(_) => LiteralKind::LinkRelation,
        }
    }

    /// Encodes the value. Only a non-finite float can fail.
    ///
    /// A float with no fractional part is written as a JSON integer.
    pub fn encode(&self) -> Result<Value, SerializeError> {
        let value = match self {
            Literal::String(s) | Literal::MimeType(s) | Literal::Bcp47(s) | Literal::LinkRelation(s) => {
                Value::String(s.clone())
            }
            Literal::LangString(l) => l.encode(),
            Literal::Float(f) if f.fract() == 0.0 && f.abs() < MAX_EXACT_INTEGER => Value::from(*f as i64),
            Literal::Float(f) => Number::from_f64(*f)
                .map(Value::Number)
                .ok_or(SerializeError::NonFiniteFloat(*f))?,
            Literal::NonNegativeInteger(n) => Value::from(*n),
            Literal::Boolean(b) => Value::Bool(*b),
            Literal::DateTime(dt) => Value::String(dt.to_string()),
            Literal::Duration(d) => Value::String(d.to_string()),
            Literal::AnyUri(iri) => Value::String(iri.as_str().to_owned()),
        };

        Ok(value)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Literal::String(s) | Literal::MimeType(s) | Literal::Bcp47(s) | Literal::LinkRelation(s) => {
                Some(s)
            }
            Literal::LangString(l) => Some(&l.value),
            Literal::AnyUri(iri) => Some(iri.as_str()),
            _ => None,
        }
    }

    /// Total order: kind first, then value within a kind.
    pub fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Literal::String(a), Literal::String(b))
            | (Literal::MimeType(a), Literal::MimeType(b))
            | (Literal::Bcp47(a), Literal::Bcp47(b))
            | (Literal::LinkRelation(a), Literal::LinkRelation(b)) => a.cmp(b),
            (Literal::LangString(a), Literal::LangString(b)) => {
                (&a.value, &a.language).cmp(&(&b.value, &b.language))
            }
            (Literal::Float(a), Literal::Float(b)) => a.total_cmp(b),
            (Literal::NonNegativeInteger(a), Literal::NonNegativeInteger(b)) => a.cmp(b),
            (Literal::Boolean(a), Literal::Boolean(b)) => a.cmp(b),
            (Literal::DateTime(a), Literal::DateTime(b)) => a.cmp(b),
            (Literal::Duration(a), Literal::Duration(b)) => a.cmp(b),
            (Literal::AnyUri(a), Literal::AnyUri(b)) => a.cmp(b),
            _ => self.kind().cmp(&other.kind()),
        }
    }
}

impl From<String> for Literal {
    fn from(s: String) -> Self {
        Literal::String(s)
    }
}

impl From<&str> for Literal {
    fn from(s: &str) -> Self {
        Literal::String(s.to_owned())
    }
}

impl From<bool> for Literal {
    fn from(b: bool) -> Self {
        Literal::Boolean(b)
    }
}

impl From<f64> for Literal {
    fn from(f: f64) -> Self {
        Literal::Float(f)
    }
}

impl From<u64> for Literal {
    fn from(n: u64) -> Self {
        Literal::NonNegativeInteger(n)
    }
}

impl From<DateTime<FixedOffset>> for Literal {
    fn from(dt: DateTime<FixedOffset>) -> Self {
        Literal::DateTime(XsdDateTime::new(dt))
    }
}

impl From<DateTime<Utc>> for Literal {
    fn from(dt: DateTime<Utc>) -> Self {
        Literal::DateTime(XsdDateTime::new(dt.fixed_offset()))
    }
}

impl From<XsdDateTime> for Literal {
    fn from(dt: XsdDateTime) -> Self {
        Literal::DateTime(dt)
    }
}

impl From<XsdDuration> for Literal {
    fn from(d: XsdDuration) -> Self {
        Literal::Duration(d)
    }
}

impl From<LangString> for Literal {
    fn from(l: LangString) -> Self {
        Literal::LangString(l)
    }
}

/// A single language-tagged string, written as a JSON-LD value object.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LangString {
    pub value: String,
    pub language: Option<String>,
}

impl LangString {
    pub fn new(value: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            language: Some(language.into()),
        }
    }

    fn parse(raw: &Value) -> Result<Self, LiteralError> {
        let kind = LiteralKind::LangString;
        let map = raw.as_object().ok_or_else(|| mismatch(kind, raw))?;

        if map.keys().any(|k| k != "@value" && k != "@language") {
            return Err(mismatch(kind, raw));
        }

        let value = map
            .get("@value")
            .and_then(Value::as_str)
            .ok_or_else(|| mismatch(kind, raw))?;

        let language = match map.get("@language") {
            None => None,
            Some(Value::String(tag)) if BCP47.is_match(tag) => Some(tag.clone()),
            Some(_) => return Err(mismatch(kind, raw)),
        };

        Ok(Self {
            value: value.to_owned(),
            language,
        })
    }

    fn encode(&self) -> Value {
        let mut map = Map::new();
        map.insert("@value".to_owned(), Value::String(self.value.clone()));
        if let Some(language) = &self.language {
            map.insert("@language".to_owned(), Value::String(language.clone()));
        }
        Value::Object(map)
    }
}

/// An `xsd:duration`, kept component-wise so it re-encodes as written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct XsdDuration {
    pub negative: bool,
    pub years: u64,
    pub months: u64,
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
    pub nanos: u32,
}

impl XsdDuration {
    pub fn parse(input: &str) -> Result<Self, LiteralError> {
        let kind = LiteralKind::Duration;
        let caps = DURATION.captures(input).ok_or_else(|| grammar(kind, input))?;

        // `P` and `PT` alone match the pattern but carry no component.
        let has_date = (2..=4).any(|i| caps.get(i).is_some());
        let has_time = (5..=7).any(|i| caps.get(i).is_some());
        if !(has_date || has_time) || (input.contains('T') && !has_time) {
            return Err(grammar(kind, input));
        }

        let number = |i: usize| -> Result<u64, LiteralError> {
            caps.get(i)
                .map(|m| m.as_str().parse::<u64>().map_err(|_| grammar(kind, input)))
                .unwrap_or(Ok(0))
        };

        let nanos = match caps.get(8) {
            Some(m) => {
                let digits = m.as_str();
                let scale = 10u32.pow(9 - digits.len() as u32);
                digits.parse::<u32>().map_err(|_| grammar(kind, input))? * scale
            }
            None => 0,
        };

        Ok(Self {
            negative: caps.get(1).is_some(),
            years: number(2)?,
            months: number(3)?,
            days: number(4)?,
            hours: number(5)?,
            minutes: number(6)?,
            seconds: number(7)?,
            nanos,
        })
    }

    /// Builds a duration from elapsed time, using days as the largest unit.
    pub fn from_std(duration: Duration) -> Self {
        let total = duration.as_secs();
        Self {
            days: total / 86_400,
            hours: (total % 86_400) / 3_600,
            minutes: (total % 3_600) / 60,
            seconds: total % 60,
            nanos: duration.subsec_nanos(),
            ..Default::default()
        }
    }

    /// Approximates calendar units: a year is 365 days and a month is 30.
    /// The sign is dropped. `None` when the total does not fit a `Duration`.
    pub fn to_std(&self) -> Option<Duration> {
        let days = self
            .years
            .checked_mul(365)?
            .checked_add(self.months.checked_mul(30)?)?
            .checked_add(self.days)?;
        let secs = days
            .checked_mul(86_400)?
            .checked_add(self.hours.checked_mul(3_600)?)?
            .checked_add(self.minutes.checked_mul(60)?)?
            .checked_add(self.seconds)?;
        Some(Duration::new(secs, self.nanos))
    }
}

impl fmt::Display for XsdDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            f.write_str("-")?;
        }
        f.write_str("P")?;

        for (n, unit) in [(self.years, 'Y'), (self.months, 'M'), (self.days, 'D')] {
            if n > 0 {
                write!(f, "{n}{unit}")?;
            }
        }

        let date_empty = self.years == 0 && self.months == 0 && self.days == 0;
        let time_empty = self.hours == 0 && self.minutes == 0 && self.seconds == 0 && self.nanos == 0;
        if time_empty && !date_empty {
            return Ok(());
        }

        f.write_str("T")?;
        if self.hours > 0 {
            write!(f, "{}H", self.hours)?;
        }
        if self.minutes > 0 {
            write!(f, "{}M", self.minutes)?;
        }
        if self.seconds > 0 || self.nanos > 0 || time_empty {
            write!(f, "{}", self.seconds)?;
            if self.nanos > 0 {
                let fraction = format!("{:09}", self.nanos);
                write!(f, ".{}", fraction.trim_end_matches('0'))?;
            }
            f.write_str("S")?;
        }

        Ok(())
    }
}

/// An `xsd:dateTime`.
///
/// A value read from RFC3339 text keeps that text and is written back as
/// read. Other values are written as RFC3339 with `Z` for UTC and only the
/// fractional digits they need. Equality and order compare instants.
#[derive(Debug, Clone)]
pub struct XsdDateTime {
    value: DateTime<FixedOffset>,
    lexical: Option<String>,
}

impl XsdDateTime {
    pub fn new(value: DateTime<FixedOffset>) -> Self {
        Self { value, lexical: None }
    }

    pub fn parse(input: &str) -> Result<Self, LiteralError> {
        if let Ok(value) = DateTime::parse_from_rfc3339(input) {
            return Ok(Self {
                value,
                lexical: Some(input.to_owned()),
            });
        }

        // Some producers omit the seconds. Those are written back with them.
        if let Some(caps) = MINUTES_ONLY_DATETIME.captures(input) {
            let padded = format!("{}:00{}", &caps[1], &caps[2]);
            if let Ok(value) = DateTime::parse_from_rfc3339(&padded) {
                return Ok(Self::new(value));
            }
        }

        Err(grammar(LiteralKind::DateTime, input))
    }

    pub fn value(&self) -> DateTime<FixedOffset> {
        self.value
    }
}

impl PartialEq for XsdDateTime {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for XsdDateTime {}

impl PartialOrd for XsdDateTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for XsdDateTime {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl fmt::Display for XsdDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(lexical) = &self.lexical {
            return f.write_str(lexical);
        }

        write!(f, "{}", self.value.format("%Y-%m-%dT%H:%M:%S"))?;
        // Leap seconds are carried as nanos past one billion.
        let nanos = self.value.nanosecond() % 1_000_000_000;
        if nanos > 0 {
            let fraction = format!("{nanos:09}");
            write!(f, ".{}", fraction.trim_end_matches('0'))?;
        }

        if self.value.offset().local_minus_utc() == 0 {
            f.write_str("Z")
        } else {
            write!(f, "{}", self.value.format("%:z"))
        }
    }
}

fn as_str(kind: LiteralKind, raw: &Value) -> Result<&str, LiteralError> {
    raw.as_str().ok_or_else(|| mismatch(kind, raw))
}

fn matching(kind: LiteralKind, pattern: &regex::Regex, input: &str) -> Result<String, LiteralError> {
    if pattern.is_match(input) {
        Ok(input.to_owned())
    } else {
        Err(grammar(kind, input))
    }
}

fn mismatch(kind: LiteralKind, raw: &Value) -> LiteralError {
    LiteralError::ShapeMismatch {
        kind,
        found: json_type(raw),
    }
}

fn grammar(kind: LiteralKind, input: &str) -> LiteralError {
    LiteralError::Grammar {
        kind,
        input: input.to_owned(),
    }
}

/// Names the JSON shape of a value, for error messages.
pub(crate) fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
