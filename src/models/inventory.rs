use std::fmt;

use serde::{ Deserialize, Serialize };

use crate::models::common::{ RecordId, Timestamp };

/// Fixture or equipment category, carried on the wire as a numeric code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u32", from = "u32")]
pub enum ItemType {
    Sink,
    Toilet,
    WaterHeater,
    Other(UnassignedCode),
}

/// A type code with no named category. Only [`ItemType::from_code`] builds one, so
/// `Other` never shadows `Sink`, `Toilet` or `WaterHeater`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UnassignedCode(u32);

impl UnassignedCode {
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl ItemType {
    pub const fn code(self) -> u32 {
        match self {
            ItemType::Sink => 1,
            ItemType::Toilet => 2,
            ItemType::WaterHeater => 4,
            ItemType::Other(code) => code.get(),
        }
    }

    pub const fn from_code(code: u32) -> Self {
        match code {
            1 => ItemType::Sink,
            2 => ItemType::Toilet,
            4 => ItemType::WaterHeater,
            other => ItemType::Other(UnassignedCode(other)),
        }
    }
}

impl From<ItemType> for u32 {
    fn from(item_type: ItemType) -> Self {
        item_type.code()
    }
}

impl From<u32> for ItemType {
    fn from(code: u32) -> Self {
        ItemType::from_code(code)
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemType::Sink => write!(f, "sink"),
            ItemType::Toilet => write!(f, "toilet"),
            ItemType::WaterHeater => write!(f, "water heater"),
            ItemType::Other(code) => write!(f, "type {}", code.get()),
        }
    }
}

/// A fixture installed in a building
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItem {
    /// Informational link; not checked against the building registry
    pub building_id: RecordId,
    pub item_type: ItemType,
    pub description: String,
    pub location: String,
    pub installation_date: Timestamp,
    pub manufacturer: String,
    pub model: String,
    pub last_maintenance_date: Option<Timestamp>,
}

/// Everything needed to add a new inventory item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewInventoryItem {
    pub building_id: RecordId,
    pub item_type: ItemType,
    pub description: String,
    pub location: String,
    pub installation_date: Timestamp,
    pub manufacturer: String,
    pub model: String,
}

impl NewInventoryItem {
    pub fn into_item(self) -> InventoryItem {
        InventoryItem {
            building_id: self.building_id,
            item_type: self.item_type,
            description: self.description,
            location: self.location,
            installation_date: self.installation_date,
            manufacturer: self.manufacturer,
            model: self.model,
            last_maintenance_date: None,
        }
    }
}

/// The descriptive fields of an item that may be edited after installation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryItemUpdate {
    pub description: String,
    pub location: String,
    pub manufacturer: String,
    pub model: String,
}

impl InventoryItemUpdate {
    pub fn apply_to(self, item: &mut InventoryItem) {
        item.description = self.description;
        item.location = self.location;
        item.manufacturer = self.manufacturer;
        item.model = self.model;
    }
}
