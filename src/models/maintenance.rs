use std::fmt;

use serde::{ Deserialize, Serialize };

use crate::models::common::{ RecordId, Timestamp };

/// Kind of maintenance work
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u32", try_from = "u32")]
pub enum MaintenanceType {
    Inspection,
    Repair,
}

impl MaintenanceType {
    pub const fn code(self) -> u32 {
        match self {
            MaintenanceType::Inspection => 1,
            MaintenanceType::Repair => 2,
        }
    }

    pub const fn from_code(code: u32) -> Option<Self> {
        match code {
            1 => Some(MaintenanceType::Inspection),
            2 => Some(MaintenanceType::Repair),
            _ => None,
        }
    }
}

impl From<MaintenanceType> for u32 {
    fn from(kind: MaintenanceType) -> Self {
        kind.code()
    }
}

impl TryFrom<u32> for MaintenanceType {
    type Error = String;

    fn try_from(code: u32) -> Result<Self, Self::Error> {
        MaintenanceType::from_code(code).ok_or_else(|| format!("unknown maintenance type code {}", code))
    }
}

impl fmt::Display for MaintenanceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MaintenanceType::Inspection => write!(f, "inspection"),
            MaintenanceType::Repair => write!(f, "repair"),
        }
    }
}

/// Lifecycle of a maintenance task.
///
/// The usual flow is scheduled, in progress, then completed or cancelled, but the
/// registry accepts any status at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u32", try_from = "u32")]
pub enum MaintenanceStatus {
    Scheduled,
    InProgress,
    Completed,
    Cancelled,
}

impl MaintenanceStatus {
    pub const fn code(self) -> u32 {
        match self {
            MaintenanceStatus::Scheduled => 1,
            MaintenanceStatus::InProgress => 2,
            MaintenanceStatus::Completed => 3,
            MaintenanceStatus::Cancelled => 4,
        }
    }

    pub const fn from_code(code: u32) -> Option<Self> {
        match code {
            1 => Some(MaintenanceStatus::Scheduled),
            2 => Some(MaintenanceStatus::InProgress),
            3 => Some(MaintenanceStatus::Completed),
            4 => Some(MaintenanceStatus::Cancelled),
            _ => None,
        }
    }
}

impl From<MaintenanceStatus> for u32 {
    fn from(status: MaintenanceStatus) -> Self {
        status.code()
    }
}

impl TryFrom<u32> for MaintenanceStatus {
    type Error = String;

    fn try_from(code: u32) -> Result<Self, Self::Error> {
        MaintenanceStatus::from_code(code).ok_or_else(|| format!("unknown maintenance status code {}", code))
    }
}

impl fmt::Display for MaintenanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MaintenanceStatus::Scheduled => write!(f, "scheduled"),
            MaintenanceStatus::InProgress => write!(f, "in progress"),
            MaintenanceStatus::Completed => write!(f, "completed"),
            MaintenanceStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// A scheduled maintenance or inspection task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceRecord {
    pub building_id: RecordId,
    pub inventory_id: Option<RecordId>,
    pub maintenance_type: MaintenanceType,
    pub description: String,
    pub scheduled_date: Timestamp,
    pub status: MaintenanceStatus,
    pub assigned_to: String,
    pub completion_date: Option<Timestamp>,
    pub notes: Option<String>,
}

/// Everything needed to schedule a task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceRequest {
    pub building_id: RecordId,
    pub inventory_id: Option<RecordId>,
    pub maintenance_type: MaintenanceType,
    pub description: String,
    pub scheduled_date: Timestamp,
    pub assigned_to: String,
}

impl MaintenanceRequest {
    pub fn into_record(self) -> MaintenanceRecord {
        MaintenanceRecord {
            building_id: self.building_id,
            inventory_id: self.inventory_id,
            maintenance_type: self.maintenance_type,
            description: self.description,
            scheduled_date: self.scheduled_date,
            status: MaintenanceStatus::Scheduled,
            assigned_to: self.assigned_to,
            completion_date: None,
            notes: None,
        }
    }
}
