//! Logged sets and their category-specific fields.
//!
//! A [`Record`] is an immutable snapshot handed over by the persistence
//! layer. Its behaviour varies by category, which is modelled as the
//! [`RecordDetails`] tagged union so every place that scores, filters or
//! labels a record has to match each category explicitly.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::date;
use crate::error::ValidationError;

/// Kilometres per mile.
pub const KPH_PER_MPH: f64 = 1.609344;

/// Category tag of a record.
///
/// Declaration order is the stable enumeration order used for tie-breaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    Slalom,
    Tricks,
    Jump,
    Other,
}

impl EventType {
    /// All categories in stable enumeration order.
    pub const ALL: [EventType; 4] = [
        EventType::Slalom,
        EventType::Tricks,
        EventType::Jump,
        EventType::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Slalom => "slalom",
            Self::Tricks => "tricks",
            Self::Jump => "jump",
            Self::Other => "other",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Slalom => "Slalom",
            Self::Tricks => "Tricks",
            Self::Jump => "Jump",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Unit a boat speed was recorded in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpeedUnit {
    #[default]
    Kph,
    Mph,
}

impl SpeedUnit {
    /// Convert a value in this unit to km/h.
    pub fn to_kph(&self, value: f64) -> f64 {
        match self {
            Self::Kph => value,
            Self::Mph => value * KPH_PER_MPH,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Kph => "kph",
            Self::Mph => "mph",
        }
    }
}

impl FromStr for SpeedUnit {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "kph" | "km/h" | "kmh" => Ok(Self::Kph),
            "mph" => Ok(Self::Mph),
            other => Err(ValidationError::UnknownSpeedUnit(other.to_string())),
        }
    }
}

/// Fields of a slalom set. Rope length and speed are free text as entered.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SlalomDetails {
    /// Buoys at the final rope length, in quarter-buoy steps.
    #[serde(default)]
    pub buoys: Option<f64>,
    /// Rope length in meters, e.g. `"13"` or `"11.25m"`.
    #[serde(default)]
    pub rope_length: Option<String>,
    #[serde(default)]
    pub speed: Option<String>,
    /// Unit of `speed`. Unset means the configured default applies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speed_unit: Option<SpeedUnit>,
    /// Number of passes skied in the set.
    #[serde(default)]
    pub passes: Option<u32>,
}

impl SlalomDetails {
    /// Rope length in meters, if it parses.
    pub fn rope_meters(&self) -> Option<f64> {
        self.rope_length.as_deref().and_then(parse_leading_number)
    }

    /// Boat speed converted to km/h. Missing, unparseable or non-positive
    /// speeds give `None`.
    pub fn speed_kph(&self) -> Option<f64> {
        let raw = self.speed.as_deref().and_then(parse_leading_number)?;
        let kph = self.speed_unit.unwrap_or_default().to_kph(raw);
        (kph.is_finite() && kph > 0.0).then_some(kph)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrickDetails {
    #[serde(default)]
    pub trick_name: Option<String>,
    #[serde(default)]
    pub points: Option<u32>,
    /// Tricks from the catalog that were attempted in this set.
    #[serde(default)]
    pub trick_ids: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JumpDetails {
    #[serde(default)]
    pub distance_m: Option<f64>,
    #[serde(default)]
    pub ramp_height: Option<String>,
}

/// Category-specific payload, tagged by `event_type` on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event_type", rename_all = "snake_case")]
pub enum RecordDetails {
    Slalom(SlalomDetails),
    Tricks(TrickDetails),
    Jump(JumpDetails),
    Other,
}

impl RecordDetails {
    pub fn event_type(&self) -> EventType {
        match self {
            Self::Slalom(_) => EventType::Slalom,
            Self::Tricks(_) => EventType::Tricks,
            Self::Jump(_) => EventType::Jump,
            Self::Other => EventType::Other,
        }
    }
}

/// A logged set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: String,
    /// Local calendar day, `YYYY-MM-DD`. May carry a time suffix or be
    /// malformed when it comes from older clients.
    pub date: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub favorite: bool,
    #[serde(default)]
    pub duration_minutes: Option<u32>,
    #[serde(flatten)]
    pub details: RecordDetails,
}

impl Record {
    pub fn new(id: impl Into<String>, date: impl Into<String>, details: RecordDetails) -> Self {
        Self {
            id: id.into(),
            date: date.into(),
            notes: String::new(),
            favorite: false,
            duration_minutes: None,
            details,
        }
    }

    pub fn event_type(&self) -> EventType {
        self.details.event_type()
    }

    /// Date portion of the stored date, with any time suffix removed.
    pub fn day(&self) -> &str {
        date::date_part(&self.date)
    }

    pub fn slalom(&self) -> Option<&SlalomDetails> {
        match &self.details {
            RecordDetails::Slalom(details) => Some(details),
            _ => None,
        }
    }
}

/// Give every slalom set without a speed unit the configured `unit`.
/// Sets that name their unit are left alone.
pub fn apply_default_speed_unit(records: &mut [Record], unit: SpeedUnit) {
    for record in records {
        if let RecordDetails::Slalom(details) = &mut record.details {
            details.speed_unit.get_or_insert(unit);
        }
    }
}

/// A trick in the user's catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trick {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub learned: bool,
}

/// Parse the longest leading decimal number of a free-text field.
///
/// `"11.25m"` gives `11.25`, `" 52 kph"` gives `52.0`, `"abc"` gives `None`.
pub fn parse_leading_number(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }
    let mut digits = 0;
    let mut seen_dot = false;
    while end < bytes.len() {
        match bytes[end] {
            b'0'..=b'9' => digits += 1,
            b'.' if !seen_dot => seen_dot = true,
            _ => break,
        }
        end += 1;
    }
    if digits == 0 {
        return None;
    }
    s[..end].trim_end_matches('.').parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_leading_number_handles_units_and_noise() {
        assert_eq!(parse_leading_number("11.25m"), Some(11.25));
        assert_eq!(parse_leading_number(" 52 kph"), Some(52.0));
        assert_eq!(parse_leading_number(".5"), Some(0.5));
        assert_eq!(parse_leading_number("13."), Some(13.0));
        assert_eq!(parse_leading_number("-4"), Some(-4.0));
        assert_eq!(parse_leading_number("abc"), None);
        assert_eq!(parse_leading_number("."), None);
        assert_eq!(parse_leading_number(""), None);
    }

    #[test]
    fn speed_kph_converts_and_rejects_non_positive() {
        let mut details = SlalomDetails {
            speed: Some("34".into()),
            speed_unit: Some(SpeedUnit::Mph),
            ..Default::default()
        };
        let kph = details.speed_kph().unwrap();
        assert!((kph - 54.718).abs() < 0.01);

        details.speed = Some("0".into());
        assert_eq!(details.speed_kph(), None);
        details.speed = Some("fast".into());
        assert_eq!(details.speed_kph(), None);
        details.speed = None;
        assert_eq!(details.speed_kph(), None);
    }

    #[test]
    fn default_speed_unit_fills_only_unset_sets() {
        let json = r#"[
            {"id": "a", "date": "2024-07-04", "event_type": "slalom", "speed": "34"},
            {"id": "b", "date": "2024-07-04", "event_type": "slalom", "speed": "55",
             "speed_unit": "kph"},
            {"id": "c", "date": "2024-07-04", "event_type": "other"}
        ]"#;
        let mut records: Vec<Record> = serde_json::from_str(json).unwrap();
        apply_default_speed_unit(&mut records, SpeedUnit::Mph);

        assert_eq!(records[0].slalom().unwrap().speed_unit, Some(SpeedUnit::Mph));
        assert_eq!(records[1].slalom().unwrap().speed_unit, Some(SpeedUnit::Kph));
        assert_eq!(records[2].slalom(), None);
    }

    #[test]
    fn speed_unit_from_str() {
        assert_eq!("MPH".parse::<SpeedUnit>(), Ok(SpeedUnit::Mph));
        assert_eq!("km/h".parse::<SpeedUnit>(), Ok(SpeedUnit::Kph));
        assert!("knots".parse::<SpeedUnit>().is_err());
    }

    #[test]
    fn record_json_uses_event_type_tag() {
        let json = r#"{
            "id": "r1",
            "date": "2024-07-04",
            "favorite": true,
            "event_type": "slalom",
            "buoys": 3.5,
            "rope_length": "13",
            "speed": "55"
        }"#;
        let record: Record = serde_json::from_str(json).unwrap();
        assert_eq!(record.event_type(), EventType::Slalom);
        assert!(record.favorite);
        let slalom = record.slalom().unwrap();
        assert_eq!(slalom.buoys, Some(3.5));
        assert_eq!(slalom.rope_meters(), Some(13.0));
        assert_eq!(slalom.speed_unit, None);
        assert_eq!(slalom.speed_kph(), Some(55.0));

        let other: Record = serde_json::from_str(
            r#"{"id":"r2","date":"2024-07-05","event_type":"other"}"#,
        )
        .unwrap();
        assert_eq!(other.event_type(), EventType::Other);
        assert!(other.slalom().is_none());
    }

    #[test]
    fn record_day_strips_time() {
        let record = Record::new("r", "2024-07-04T22:15:00Z", RecordDetails::Other);
        assert_eq!(record.day(), "2024-07-04");
    }

    #[test]
    fn event_type_order_is_stable() {
        assert!(EventType::Slalom < EventType::Tricks);
        assert_eq!(EventType::ALL[3], EventType::Other);
        assert_eq!(EventType::Jump.to_string(), "Jump");
    }
}
