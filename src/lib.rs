pub mod models;
pub mod traits;
pub mod errors;
pub mod config;
pub mod implementations;
#[cfg(test)]
pub mod tests;

// Re-export core components
pub use config::{ClockConfig, ClockMode, ConfigError, LedgerConfig, OutputFormat};
pub use errors::{DispatchError, ErrorSeverity, RecoverableError, RegistryError, RegistryResult};
pub use implementations::{
    building_registry::BuildingRegistry,
    clock::{ManualClock, SystemClock},
    dispatcher::{Invocation, RegistryName, OPERATIONS},
    script::{ReplayScript, ScriptError, ScriptStep},
    inventory_registry::InventoryRegistry,
    ledger::{BuildingLedger, LedgerSnapshot},
    maintenance_registry::MaintenanceRegistry,
    store::{MemoryStore, RecordTable},
    water_usage_registry::WaterUsageRegistry,
};
pub use models::{
    common::{
        ErrorCode,
        Principal,
        RecordId,
        RecordKind,
        Timestamp,
    },
    building::{
        Building,
        BuildingUpdate,
    },
    inventory::{
        InventoryItem,
        InventoryItemUpdate,
        ItemType,
        NewInventoryItem,
        UnassignedCode,
    },
    maintenance::{
        MaintenanceRecord,
        MaintenanceRequest,
        MaintenanceStatus,
        MaintenanceType,
    },
    water::{
        AlertStatus,
        LeakAlert,
        WaterReading,
    },
    outcome::TxOutcome,
};
pub use traits::{
    Clock,
    RecordStore,
};
