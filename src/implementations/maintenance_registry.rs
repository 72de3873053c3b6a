use log::{ debug, warn };

use crate::errors::{ RegistryError, RegistryResult };
use crate::implementations::clock::SystemClock;
use crate::implementations::store::RecordTable;
use crate::models::common::{ RecordId, RecordKind };
use crate::models::maintenance::{ MaintenanceRecord, MaintenanceRequest, MaintenanceStatus };
use crate::traits::clock::Clock;

/// Registry of maintenance and inspection tasks
#[derive(Debug)]
pub struct MaintenanceRegistry<C: Clock = SystemClock> {
    records: RecordTable<MaintenanceRecord>,
    clock: C,
}

impl Default for MaintenanceRegistry<SystemClock> {
    fn default() -> Self {
        Self::new(SystemClock::new())
    }
}

impl<C: Clock> MaintenanceRegistry<C> {
    pub fn new(clock: C) -> Self {
        Self {
            records: RecordTable::new(RecordKind::MaintenanceRecord),
            clock,
        }
    }

    /// Schedule a task. It starts out `Scheduled` with no completion date or notes.
    pub fn schedule_maintenance(&mut self, request: MaintenanceRequest) -> RecordId {
        let building_id = request.building_id;
        let id = self.records.create(request.into_record());
        debug!("Scheduled maintenance {} for building {}", id, building_id);
        id
    }

    pub fn get_maintenance_record(&self, id: RecordId) -> Option<&MaintenanceRecord> {
        self.records.get(id)
    }

    /// Set the status directly. No transition rules are applied.
    pub fn update_maintenance_status(
        &mut self,
        id: RecordId,
        status: MaintenanceStatus
    ) -> RegistryResult<()> {
        let record = self.record_mut(id)?;
        debug!("Maintenance {} status {} -> {}", id, record.status, status);
        record.status = status;
        Ok(())
    }

    pub fn complete_maintenance(&mut self, id: RecordId, notes: impl Into<String>) -> RegistryResult<()> {
        let now = self.clock.now();
        let record = self.record_mut(id)?;
        record.status = MaintenanceStatus::Completed;
        record.completion_date = Some(now);
        record.notes = Some(notes.into());
        debug!("Completed maintenance {} at {}", id, now);
        Ok(())
    }

    /// Cancel the task. A completion date set earlier is left as it was.
    pub fn cancel_maintenance(&mut self, id: RecordId, notes: impl Into<String>) -> RegistryResult<()> {
        let record = self.record_mut(id)?;
        record.status = MaintenanceStatus::Cancelled;
        record.notes = Some(notes.into());
        debug!("Cancelled maintenance {}", id);
        Ok(())
    }

    pub fn last_maintenance_id(&self) -> RecordId {
        self.records.last_id()
    }

    pub fn records(&self) -> Vec<(RecordId, &MaintenanceRecord)> {
        self.records.entries()
    }

    fn record_mut(&mut self, id: RecordId) -> RegistryResult<&mut MaintenanceRecord> {
        self.records.get_mut(id).map_err(|err: RegistryError| {
            warn!("Rejected maintenance mutation: {}", err);
            err
        })
    }
}
