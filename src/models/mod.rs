pub mod common;
pub mod building;
pub mod inventory;
pub mod maintenance;
pub mod water;
pub mod outcome;

// Re-export common model types
pub use common::{ErrorCode, Principal, RecordId, RecordKind, Timestamp};
pub use building::{Building, BuildingUpdate};
pub use inventory::{InventoryItem, InventoryItemUpdate, ItemType, NewInventoryItem};
pub use maintenance::{MaintenanceRecord, MaintenanceRequest, MaintenanceStatus, MaintenanceType};
pub use water::{AlertStatus, LeakAlert, WaterReading};
pub use outcome::TxOutcome;
