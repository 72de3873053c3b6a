use std::fmt;

use log::{ debug, info };
use serde::{ Deserialize, Serialize };
use serde_json::Value;

use crate::errors::{ DispatchError, RegistryResult };
use crate::implementations::ledger::BuildingLedger;
use crate::models::building::BuildingUpdate;
use crate::models::common::{ Principal, RecordId, Timestamp };
use crate::models::inventory::{ InventoryItemUpdate, ItemType, NewInventoryItem };
use crate::models::maintenance::{ MaintenanceRequest, MaintenanceStatus, MaintenanceType };
use crate::models::outcome::TxOutcome;
use crate::traits::clock::Clock;

/// The registry an invocation is addressed to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RegistryName {
    Building,
    Inventory,
    Maintenance,
    WaterUsage,
}

impl fmt::Display for RegistryName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryName::Building => write!(f, "building"),
            RegistryName::Inventory => write!(f, "inventory"),
            RegistryName::Maintenance => write!(f, "maintenance"),
            RegistryName::WaterUsage => write!(f, "waterUsage"),
        }
    }
}

/// Operation names accepted by each registry, with their positional parameters
pub const OPERATIONS: &[(RegistryName, &[(&str, &[&str])])] = &[
    (
        RegistryName::Building,
        &[
            ("registerBuilding", &["name", "address", "yearBuilt", "totalFloors"]),
            ("getBuilding", &["buildingId"]),
            ("updateBuilding", &["buildingId", "name", "address", "yearBuilt", "totalFloors"]),
            ("transferBuilding", &["buildingId", "newOwner"]),
            ("lastBuildingId", &[]),
        ],
    ),
    (
        RegistryName::Inventory,
        &[
            (
                "addInventoryItem",
                &[
                    "buildingId",
                    "itemType",
                    "description",
                    "location",
                    "installationDate",
                    "manufacturer",
                    "model",
                ],
            ),
            ("getInventoryItem", &["inventoryId"]),
            ("updateInventoryItem", &["inventoryId", "description", "location", "manufacturer", "model"]),
            ("updateMaintenanceDate", &["inventoryId", "maintenanceDate"]),
            ("removeInventoryItem", &["inventoryId"]),
            ("lastInventoryId", &[]),
        ],
    ),
    (
        RegistryName::Maintenance,
        &[
            (
                "scheduleMaintenance",
                &["buildingId", "inventoryId", "maintenanceType", "description", "scheduledDate", "assignedTo"],
            ),
            ("getMaintenanceRecord", &["maintenanceId"]),
            ("updateMaintenanceStatus", &["maintenanceId", "status"]),
            ("completeMaintenance", &["maintenanceId", "notes"]),
            ("cancelMaintenance", &["maintenanceId", "notes"]),
            ("lastMaintenanceId", &[]),
        ],
    ),
    (
        RegistryName::WaterUsage,
        &[
            ("addWaterReading", &["buildingId", "meterReading"]),
            ("getWaterReading", &["readingId"]),
            ("createLeakAlert", &["buildingId", "consumptionRate", "threshold"]),
            ("getLeakAlert", &["alertId"]),
            ("resolveLeakAlert", &["alertId"]),
            ("lastReadingId", &[]),
            ("lastAlertId", &[]),
        ],
    ),
];

/// One call from the host: operation name, positional arguments and the caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invocation {
    pub registry: RegistryName,
    pub operation: String,
    #[serde(default)]
    pub args: Vec<Value>,
    pub sender: Principal,
}

impl Invocation {
    pub fn new(
        registry: RegistryName,
        operation: impl Into<String>,
        args: Vec<Value>,
        sender: impl Into<Principal>
    ) -> Self {
        Self {
            registry,
            operation: operation.into(),
            args,
            sender: sender.into(),
        }
    }
}

/// Positional argument reader for a single invocation
struct Args<'a> {
    operation: &'a str,
    values: &'a [Value],
}

impl<'a> Args<'a> {
    fn new(invocation: &'a Invocation) -> Self {
        Self {
            operation: &invocation.operation,
            values: &invocation.args,
        }
    }

    fn arity(&self, expected: usize) -> Result<(), DispatchError> {
        if self.values.len() != expected {
            return Err(DispatchError::Arity {
                operation: self.operation.to_string(),
                expected,
                actual: self.values.len(),
            });
        }
        Ok(())
    }

    fn invalid(&self, index: usize, reason: impl Into<String>) -> DispatchError {
        DispatchError::InvalidArgument {
            operation: self.operation.to_string(),
            index,
            reason: reason.into(),
        }
    }

    fn u64(&self, index: usize) -> Result<u64, DispatchError> {
        self.values[index]
            .as_u64()
            .ok_or_else(|| self.invalid(index, format!("expected an unsigned integer, got {}", self.values[index])))
    }

    fn u32(&self, index: usize) -> Result<u32, DispatchError> {
        let value = self.u64(index)?;
        u32::try_from(value).map_err(|_| self.invalid(index, format!("{} does not fit in 32 bits", value)))
    }

    fn id(&self, index: usize) -> Result<RecordId, DispatchError> {
        self.u64(index)
    }

    fn optional_id(&self, index: usize) -> Result<Option<RecordId>, DispatchError> {
        if self.values[index].is_null() {
            return Ok(None);
        }
        self.id(index).map(Some)
    }

    fn timestamp(&self, index: usize) -> Result<Timestamp, DispatchError> {
        self.u64(index).map(Timestamp::from_millis)
    }

    fn string(&self, index: usize) -> Result<String, DispatchError> {
        self.values[index]
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| self.invalid(index, format!("expected a string, got {}", self.values[index])))
    }

    fn principal(&self, index: usize) -> Result<Principal, DispatchError> {
        self.string(index).map(Principal::from)
    }
}

impl<C: Clock + Clone> BuildingLedger<C> {
    /// Route an invocation to its registry and wrap the result in the tagged envelope.
    ///
    /// Declined operations come back as `TxOutcome::Failure`; `Err` is reserved for
    /// invocations that could not be decoded, and those leave every registry untouched.
    pub fn dispatch(&mut self, invocation: &Invocation) -> Result<TxOutcome, DispatchError> {
        debug!(
            "Dispatching {}.{} from {} with {} args",
            invocation.registry,
            invocation.operation,
            invocation.sender,
            invocation.args.len()
        );
        let outcome = match invocation.registry {
            RegistryName::Building => self.dispatch_building(invocation)?,
            RegistryName::Inventory => self.dispatch_inventory(invocation)?,
            RegistryName::Maintenance => self.dispatch_maintenance(invocation)?,
            RegistryName::WaterUsage => self.dispatch_water(invocation)?,
        };
        info!("{}.{} -> {}", invocation.registry, invocation.operation, outcome);
        Ok(outcome)
    }

    fn dispatch_building(&mut self, invocation: &Invocation) -> Result<TxOutcome, DispatchError> {
        let args = Args::new(invocation);
        let sender = &invocation.sender;
        match invocation.operation.as_str() {
            "registerBuilding" => {
                args.arity(4)?;
                let id = self.buildings.register_building(
                    args.string(0)?,
                    args.string(1)?,
                    args.u32(2)?,
                    args.u32(3)?,
                    sender
                );
                Ok(created(id))
            }
            "getBuilding" => {
                args.arity(1)?;
                read(self.buildings.get_building(args.id(0)?))
            }
            "updateBuilding" => {
                args.arity(5)?;
                let id = args.id(0)?;
                let update = BuildingUpdate {
                    name: args.string(1)?,
                    address: args.string(2)?,
                    year_built: args.u32(3)?,
                    total_floors: args.u32(4)?,
                };
                Ok(settle(self.buildings.update_building(id, update, sender)))
            }
            "transferBuilding" => {
                args.arity(2)?;
                let id = args.id(0)?;
                let new_owner = args.principal(1)?;
                Ok(settle(self.buildings.transfer_building(id, new_owner, sender)))
            }
            "lastBuildingId" => {
                args.arity(0)?;
                Ok(created(self.buildings.last_building_id()))
            }
            _ => Err(unknown(invocation)),
        }
    }

    fn dispatch_inventory(&mut self, invocation: &Invocation) -> Result<TxOutcome, DispatchError> {
        let args = Args::new(invocation);
        match invocation.operation.as_str() {
            "addInventoryItem" => {
                args.arity(7)?;
                let item = NewInventoryItem {
                    building_id: args.id(0)?,
                    item_type: ItemType::from_code(args.u32(1)?),
                    description: args.string(2)?,
                    location: args.string(3)?,
                    installation_date: args.timestamp(4)?,
                    manufacturer: args.string(5)?,
                    model: args.string(6)?,
                };
                Ok(created(self.inventory.add_inventory_item(item)))
            }
            "getInventoryItem" => {
                args.arity(1)?;
                read(self.inventory.get_inventory_item(args.id(0)?))
            }
            "updateInventoryItem" => {
                args.arity(5)?;
                let id = args.id(0)?;
                let update = InventoryItemUpdate {
                    description: args.string(1)?,
                    location: args.string(2)?,
                    manufacturer: args.string(3)?,
                    model: args.string(4)?,
                };
                Ok(settle(self.inventory.update_inventory_item(id, update)))
            }
            "updateMaintenanceDate" => {
                args.arity(2)?;
                let id = args.id(0)?;
                let date = args.timestamp(1)?;
                Ok(settle(self.inventory.update_maintenance_date(id, date)))
            }
            "removeInventoryItem" => {
                args.arity(1)?;
                Ok(settle(self.inventory.remove_inventory_item(args.id(0)?).map(|_| ())))
            }
            "lastInventoryId" => {
                args.arity(0)?;
                Ok(created(self.inventory.last_inventory_id()))
            }
            _ => Err(unknown(invocation)),
        }
    }

    fn dispatch_maintenance(&mut self, invocation: &Invocation) -> Result<TxOutcome, DispatchError> {
        let args = Args::new(invocation);
        match invocation.operation.as_str() {
            "scheduleMaintenance" => {
                args.arity(6)?;
                let type_code = args.u32(2)?;
                let maintenance_type = MaintenanceType::from_code(type_code).ok_or_else(||
                    args.invalid(2, format!("unknown maintenance type code {}", type_code))
                )?;
                let request = MaintenanceRequest {
                    building_id: args.id(0)?,
                    inventory_id: args.optional_id(1)?,
                    maintenance_type,
                    description: args.string(3)?,
                    scheduled_date: args.timestamp(4)?,
                    assigned_to: args.string(5)?,
                };
                Ok(created(self.maintenance.schedule_maintenance(request)))
            }
            "getMaintenanceRecord" => {
                args.arity(1)?;
                read(self.maintenance.get_maintenance_record(args.id(0)?))
            }
            "updateMaintenanceStatus" => {
                args.arity(2)?;
                let id = args.id(0)?;
                let status_code = args.u32(1)?;
                let status = MaintenanceStatus::from_code(status_code).ok_or_else(||
                    args.invalid(1, format!("unknown maintenance status code {}", status_code))
                )?;
                Ok(settle(self.maintenance.update_maintenance_status(id, status)))
            }
            "completeMaintenance" => {
                args.arity(2)?;
                let id = args.id(0)?;
                let notes = args.string(1)?;
                Ok(settle(self.maintenance.complete_maintenance(id, notes)))
            }
            "cancelMaintenance" => {
                args.arity(2)?;
                let id = args.id(0)?;
                let notes = args.string(1)?;
                Ok(settle(self.maintenance.cancel_maintenance(id, notes)))
            }
            "lastMaintenanceId" => {
                args.arity(0)?;
                Ok(created(self.maintenance.last_maintenance_id()))
            }
            _ => Err(unknown(invocation)),
        }
    }

    fn dispatch_water(&mut self, invocation: &Invocation) -> Result<TxOutcome, DispatchError> {
        let args = Args::new(invocation);
        match invocation.operation.as_str() {
            "addWaterReading" => {
                args.arity(2)?;
                let building_id = args.id(0)?;
                let meter_reading = args.u64(1)?;
                Ok(created(self.water.add_water_reading(building_id, meter_reading, &invocation.sender)))
            }
            "getWaterReading" => {
                args.arity(1)?;
                read(self.water.get_water_reading(args.id(0)?))
            }
            "createLeakAlert" => {
                args.arity(3)?;
                let id = self.water.create_leak_alert(args.id(0)?, args.u64(1)?, args.u64(2)?);
                Ok(created(id))
            }
            "getLeakAlert" => {
                args.arity(1)?;
                read(self.water.get_leak_alert(args.id(0)?))
            }
            "resolveLeakAlert" => {
                args.arity(1)?;
                Ok(settle(self.water.resolve_leak_alert(args.id(0)?)))
            }
            "lastReadingId" => {
                args.arity(0)?;
                Ok(created(self.water.last_reading_id()))
            }
            "lastAlertId" => {
                args.arity(0)?;
                Ok(created(self.water.last_alert_id()))
            }
            _ => Err(unknown(invocation)),
        }
    }
}

fn created(id: RecordId) -> TxOutcome {
    TxOutcome::Success(Value::from(id))
}

/// A missing record reads as `null`, never as an error
fn read<T: Serialize>(record: Option<&T>) -> Result<TxOutcome, DispatchError> {
    Ok(TxOutcome::Success(serde_json::to_value(record)?))
}

fn settle(result: RegistryResult<()>) -> TxOutcome {
    match result {
        Ok(()) => TxOutcome::accepted(),
        Err(err) => err.into(),
    }
}

fn unknown(invocation: &Invocation) -> DispatchError {
    DispatchError::UnknownOperation {
        registry: invocation.registry.to_string(),
        operation: invocation.operation.clone(),
    }
}
