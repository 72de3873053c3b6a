use log::{ debug, warn };

use crate::errors::{ RegistryError, RegistryResult };
use crate::implementations::clock::SystemClock;
use crate::implementations::store::RecordTable;
use crate::models::building::{ Building, BuildingUpdate };
use crate::models::common::{ Principal, RecordId, RecordKind };
use crate::traits::clock::Clock;

/// Registry of buildings. Every mutation after registration is restricted to the owner.
#[derive(Debug)]
pub struct BuildingRegistry<C: Clock = SystemClock> {
    buildings: RecordTable<Building>,
    clock: C,
}

impl Default for BuildingRegistry<SystemClock> {
    fn default() -> Self {
        Self::new(SystemClock::new())
    }
}

impl<C: Clock> BuildingRegistry<C> {
    pub fn new(clock: C) -> Self {
        Self {
            buildings: RecordTable::new(RecordKind::Building),
            clock,
        }
    }

    /// Register a building owned by `sender`. Always succeeds.
    pub fn register_building(
        &mut self,
        name: impl Into<String>,
        address: impl Into<String>,
        year_built: u32,
        total_floors: u32,
        sender: &Principal
    ) -> RecordId {
        let building = Building {
            name: name.into(),
            address: address.into(),
            owner: sender.clone(),
            year_built,
            total_floors,
            registration_date: self.clock.now(),
        };
        let id = self.buildings.create(building);
        debug!("Registered building {} for {}", id, sender);
        id
    }

    pub fn get_building(&self, id: RecordId) -> Option<&Building> {
        self.buildings.get(id)
    }

    /// Replace name, address, year built and floor count
    pub fn update_building(
        &mut self,
        id: RecordId,
        update: BuildingUpdate,
        sender: &Principal
    ) -> RegistryResult<()> {
        let building = self.owned_by(id, sender)?;
        update.apply_to(building);
        debug!("Updated building {}", id);
        Ok(())
    }

    /// Hand the building over to `new_owner`; nothing else changes
    pub fn transfer_building(
        &mut self,
        id: RecordId,
        new_owner: Principal,
        sender: &Principal
    ) -> RegistryResult<()> {
        let building = self.owned_by(id, sender)?;
        debug!("Transferring building {} from {} to {}", id, building.owner, new_owner);
        building.owner = new_owner;
        Ok(())
    }

    pub fn last_building_id(&self) -> RecordId {
        self.buildings.last_id()
    }

    pub fn buildings(&self) -> Vec<(RecordId, &Building)> {
        self.buildings.entries()
    }

    fn owned_by(&mut self, id: RecordId, sender: &Principal) -> RegistryResult<&mut Building> {
        let building = self.buildings.get_mut(id).map_err(|e| {
            warn!("Rejected building mutation: {}", e);
            e
        })?;
        if &building.owner != sender {
            let err = RegistryError::Unauthorized {
                kind: RecordKind::Building,
                id,
                sender: sender.clone(),
            };
            warn!("Rejected building mutation: {}", err);
            return Err(err);
        }
        Ok(building)
    }
}
