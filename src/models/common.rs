use std::fmt;

use chrono::{ DateTime, TimeZone, Utc };
use serde::{ Deserialize, Serialize };

/// Identifier of a stored record. Ids start at 1 and are never reused.
pub type RecordId = u64;

/// Caller identity supplied by the host for every invocation
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Principal(String);

impl Principal {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Principal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Principal {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Principal {
    fn from(name: String) -> Self {
        Self(name)
    }
}

/// Milliseconds since the Unix epoch, as reported by the injected clock
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(u64);

impl Timestamp {
    pub const fn from_millis(millis: u64) -> Self {
        Self(millis)
    }

    pub const fn as_millis(&self) -> u64 {
        self.0
    }

    /// Wall-clock view of the timestamp, `None` when it falls outside chrono's range
    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        let millis = i64::try_from(self.0).ok()?;
        Utc.timestamp_millis_opt(millis).single()
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_datetime() {
            Some(dt) => write!(f, "{}", dt.to_rfc3339()),
            None => write!(f, "{}ms", self.0),
        }
    }
}

/// Numeric error codes reported in the tagged result of an invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    NotFound = 1,
    Unauthorized = 2,
}

impl ErrorCode {
    pub const fn as_u32(self) -> u32 {
        self as u32
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorCode::NotFound => write!(f, "NotFound({})", self.as_u32()),
            ErrorCode::Unauthorized => write!(f, "Unauthorized({})", self.as_u32()),
        }
    }
}

/// The kinds of record held across the registries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RecordKind {
    Building,
    InventoryItem,
    MaintenanceRecord,
    WaterReading,
    LeakAlert,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RecordKind::Building => "building",
            RecordKind::InventoryItem => "inventory item",
            RecordKind::MaintenanceRecord => "maintenance record",
            RecordKind::WaterReading => "water reading",
            RecordKind::LeakAlert => "leak alert",
        };
        f.write_str(name)
    }
}
