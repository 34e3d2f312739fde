use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Clock event direction. The upstream store encodes it as the boolean
/// `isPunchIn` field, so the enum serde-converts through `bool`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "bool", into = "bool")]
pub enum PunchKind {
    In,
    Out,
}

impl PunchKind {
    pub fn is_in(&self) -> bool {
        matches!(self, PunchKind::In)
    }

    pub fn is_out(&self) -> bool {
        matches!(self, PunchKind::Out)
    }
}

impl From<bool> for PunchKind {
    fn from(is_punch_in: bool) -> Self {
        if is_punch_in {
            PunchKind::In
        } else {
            PunchKind::Out
        }
    }
}

impl From<PunchKind> for bool {
    fn from(kind: PunchKind) -> bool {
        kind.is_in()
    }
}

/// Geographic coordinates attached to a punch. Informational only; the
/// reconciliation logic never reads them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

/// A single clock-in or clock-out event.
///
/// Timestamps are parsed at the serde boundary: a malformed ISO-8601 string in
/// the payload fails deserialization with an error instead of carrying an
/// invalid instant into the hour arithmetic.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Punch {
    pub id: String,
    #[serde(rename = "isPunchIn")]
    pub kind: PunchKind,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<GeoPoint>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl Punch {
    pub fn new(id: impl Into<String>, kind: PunchKind, timestamp: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            kind,
            timestamp,
            location: None,
            note: None,
        }
    }

    /// RFC 3339 rendering of the punch instant, used for the raw timestamp
    /// fields of the summary record.
    pub fn timestamp_raw(&self) -> String {
        self.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}
