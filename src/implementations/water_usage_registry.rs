use log::{ debug, warn };

use crate::errors::RegistryResult;
use crate::implementations::clock::SystemClock;
use crate::implementations::store::RecordTable;
use crate::models::common::{ Principal, RecordId, RecordKind };
use crate::models::water::{ AlertStatus, LeakAlert, WaterReading };
use crate::traits::clock::Clock;

/// Meter readings and leak alerts. Readings and alerts keep separate counters.
#[derive(Debug)]
pub struct WaterUsageRegistry<C: Clock = SystemClock> {
    readings: RecordTable<WaterReading>,
    alerts: RecordTable<LeakAlert>,
    clock: C,
}

impl Default for WaterUsageRegistry<SystemClock> {
    fn default() -> Self {
        Self::new(SystemClock::new())
    }
}

impl<C: Clock> WaterUsageRegistry<C> {
    pub fn new(clock: C) -> Self {
        Self {
            readings: RecordTable::new(RecordKind::WaterReading),
            alerts: RecordTable::new(RecordKind::LeakAlert),
            clock,
        }
    }

    pub fn add_water_reading(
        &mut self,
        building_id: RecordId,
        meter_reading: u64,
        reader: &Principal
    ) -> RecordId {
        let reading = WaterReading {
            building_id,
            timestamp: self.clock.now(),
            meter_reading,
            reader: reader.clone(),
        };
        let id = self.readings.create(reading);
        debug!("Recorded water reading {} for building {}: {}", id, building_id, meter_reading);
        id
    }

    pub fn get_water_reading(&self, id: RecordId) -> Option<&WaterReading> {
        self.readings.get(id)
    }

    pub fn create_leak_alert(
        &mut self,
        building_id: RecordId,
        consumption_rate: u64,
        threshold: u64
    ) -> RecordId {
        let alert = LeakAlert {
            building_id,
            detected_at: self.clock.now(),
            consumption_rate,
            threshold,
            status: AlertStatus::Active,
        };
        let id = self.alerts.create(alert);
        debug!(
            "Leak alert {} raised for building {} ({} over threshold {})",
            id,
            building_id,
            consumption_rate,
            threshold
        );
        id
    }

    pub fn get_leak_alert(&self, id: RecordId) -> Option<&LeakAlert> {
        self.alerts.get(id)
    }

    /// Mark the alert resolved. Resolving an already resolved alert succeeds.
    pub fn resolve_leak_alert(&mut self, id: RecordId) -> RegistryResult<()> {
        let alert = self.alerts.get_mut(id).map_err(|err| {
            warn!("Rejected leak alert resolution: {}", err);
            err
        })?;
        alert.status = AlertStatus::Resolved;
        debug!("Resolved leak alert {}", id);
        Ok(())
    }

    pub fn last_reading_id(&self) -> RecordId {
        self.readings.last_id()
    }

    pub fn last_alert_id(&self) -> RecordId {
        self.alerts.last_id()
    }

    pub fn readings(&self) -> Vec<(RecordId, &WaterReading)> {
        self.readings.entries()
    }

    pub fn alerts(&self) -> Vec<(RecordId, &LeakAlert)> {
        self.alerts.entries()
    }
}
