use std::sync::Arc;

use serde::Serialize;

use crate::implementations::building_registry::BuildingRegistry;
use crate::implementations::clock::SystemClock;
use crate::implementations::inventory_registry::InventoryRegistry;
use crate::implementations::maintenance_registry::MaintenanceRegistry;
use crate::implementations::water_usage_registry::WaterUsageRegistry;
use crate::models::building::Building;
use crate::models::common::RecordId;
use crate::models::inventory::InventoryItem;
use crate::models::maintenance::MaintenanceRecord;
use crate::models::water::{ LeakAlert, WaterReading };
use crate::traits::clock::Clock;

/// The four registries side by side, reading time from one shared clock.
///
/// The registries stay independent: nothing here checks a `building_id` on one
/// registry against another.
#[derive(Debug)]
pub struct BuildingLedger<C: Clock + Clone = Arc<SystemClock>> {
    pub buildings: BuildingRegistry<C>,
    pub inventory: InventoryRegistry,
    pub maintenance: MaintenanceRegistry<C>,
    pub water: WaterUsageRegistry<C>,
}

impl Default for BuildingLedger<Arc<SystemClock>> {
    fn default() -> Self {
        Self::new(Arc::new(SystemClock::new()))
    }
}

impl<C: Clock + Clone> BuildingLedger<C> {
    pub fn new(clock: C) -> Self {
        Self {
            buildings: BuildingRegistry::new(clock.clone()),
            inventory: InventoryRegistry::new(),
            maintenance: MaintenanceRegistry::new(clock.clone()),
            water: WaterUsageRegistry::new(clock),
        }
    }

    pub fn snapshot(&self) -> LedgerSnapshot<'_> {
        LedgerSnapshot {
            buildings: Table::new(self.buildings.last_building_id(), self.buildings.buildings()),
            inventory: Table::new(self.inventory.last_inventory_id(), self.inventory.items()),
            maintenance: Table::new(self.maintenance.last_maintenance_id(), self.maintenance.records()),
            water_readings: Table::new(self.water.last_reading_id(), self.water.readings()),
            leak_alerts: Table::new(self.water.last_alert_id(), self.water.alerts()),
        }
    }
}

/// Serializable view of every counter and record in a ledger
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerSnapshot<'a> {
    pub buildings: Table<'a, Building>,
    pub inventory: Table<'a, InventoryItem>,
    pub maintenance: Table<'a, MaintenanceRecord>,
    pub water_readings: Table<'a, WaterReading>,
    pub leak_alerts: Table<'a, LeakAlert>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Table<'a, V> {
    pub last_id: RecordId,
    pub records: Vec<Entry<'a, V>>,
}

#[derive(Debug, Serialize)]
pub struct Entry<'a, V> {
    pub id: RecordId,
    #[serde(flatten)]
    pub record: &'a V,
}

impl<'a, V> Table<'a, V> {
    fn new(last_id: RecordId, entries: Vec<(RecordId, &'a V)>) -> Self {
        Self {
            last_id,
            records: entries
                .into_iter()
                .map(|(id, record)| Entry { id, record })
                .collect(),
        }
    }
}
