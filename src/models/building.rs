use serde::{ Deserialize, Serialize };

use crate::models::common::{ Principal, Timestamp };

/// A registered building
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Building {
    pub name: String,
    pub address: String,
    /// The only principal allowed to update or transfer this building
    pub owner: Principal,
    pub year_built: u32,
    pub total_floors: u32,
    pub registration_date: Timestamp,
}

/// The owner-editable fields of a building
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildingUpdate {
    pub name: String,
    pub address: String,
    pub year_built: u32,
    pub total_floors: u32,
}

impl BuildingUpdate {
    /// Overwrite the editable fields; owner and registration date are out of reach
    pub fn apply_to(self, building: &mut Building) {
        building.name = self.name;
        building.address = self.address;
        building.year_built = self.year_built;
        building.total_floors = self.total_floors;
    }
}
