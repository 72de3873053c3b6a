use log::{ debug, warn };

use crate::errors::RegistryResult;
use crate::implementations::store::RecordTable;
use crate::models::common::{ RecordId, RecordKind, Timestamp };
use crate::models::inventory::{ InventoryItem, InventoryItemUpdate, NewInventoryItem };

/// Registry of fixtures and equipment.
///
/// There is no owner on an item: any caller may edit or remove any entry, and the
/// `building_id` is stored as given.
#[derive(Debug)]
pub struct InventoryRegistry {
    items: RecordTable<InventoryItem>,
}

impl Default for InventoryRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl InventoryRegistry {
    pub fn new() -> Self {
        Self {
            items: RecordTable::new(RecordKind::InventoryItem),
        }
    }

    pub fn add_inventory_item(&mut self, item: NewInventoryItem) -> RecordId {
        let building_id = item.building_id;
        let id = self.items.create(item.into_item());
        debug!("Added inventory item {} to building {}", id, building_id);
        id
    }

    pub fn get_inventory_item(&self, id: RecordId) -> Option<&InventoryItem> {
        self.items.get(id)
    }

    /// Replace description, location, manufacturer and model
    pub fn update_inventory_item(
        &mut self,
        id: RecordId,
        update: InventoryItemUpdate
    ) -> RegistryResult<()> {
        let item = self.items.get_mut(id).map_err(log_rejection)?;
        update.apply_to(item);
        debug!("Updated inventory item {}", id);
        Ok(())
    }

    pub fn update_maintenance_date(&mut self, id: RecordId, date: Timestamp) -> RegistryResult<()> {
        let item = self.items.get_mut(id).map_err(log_rejection)?;
        item.last_maintenance_date = Some(date);
        debug!("Inventory item {} last maintained at {}", id, date);
        Ok(())
    }

    pub fn remove_inventory_item(&mut self, id: RecordId) -> RegistryResult<InventoryItem> {
        let item = self.items.remove(id).map_err(log_rejection)?;
        debug!("Removed inventory item {}", id);
        Ok(item)
    }

    pub fn last_inventory_id(&self) -> RecordId {
        self.items.last_id()
    }

    pub fn items(&self) -> Vec<(RecordId, &InventoryItem)> {
        self.items.entries()
    }
}

fn log_rejection(err: crate::errors::RegistryError) -> crate::errors::RegistryError {
    warn!("Rejected inventory mutation: {}", err);
    err
}
