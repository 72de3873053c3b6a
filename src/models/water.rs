use std::fmt;

use serde::{ Deserialize, Serialize };

use crate::models::common::{ Principal, RecordId, Timestamp };

/// A meter reading; never modified once stored
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WaterReading {
    pub building_id: RecordId,
    pub timestamp: Timestamp,
    pub meter_reading: u64,
    pub reader: Principal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u32", try_from = "u32")]
pub enum AlertStatus {
    Active,
    Resolved,
}

impl AlertStatus {
    pub const fn code(self) -> u32 {
        match self {
            AlertStatus::Active => 1,
            AlertStatus::Resolved => 2,
        }
    }

    pub const fn from_code(code: u32) -> Option<Self> {
        match code {
            1 => Some(AlertStatus::Active),
            2 => Some(AlertStatus::Resolved),
            _ => None,
        }
    }
}

impl From<AlertStatus> for u32 {
    fn from(status: AlertStatus) -> Self {
        status.code()
    }
}

impl TryFrom<u32> for AlertStatus {
    type Error = String;

    fn try_from(code: u32) -> Result<Self, Self::Error> {
        AlertStatus::from_code(code).ok_or_else(|| format!("unknown alert status code {}", code))
    }
}

impl fmt::Display for AlertStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlertStatus::Active => write!(f, "active"),
            AlertStatus::Resolved => write!(f, "resolved"),
        }
    }
}

/// Raised when consumption at a building exceeds its threshold
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeakAlert {
    pub building_id: RecordId,
    pub detected_at: Timestamp,
    pub consumption_rate: u64,
    pub threshold: u64,
    pub status: AlertStatus,
}
