#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use log::info;
    use serde_json::json;

    use crate::implementations::clock::ManualClock;
    use crate::implementations::dispatcher::Invocation;
    use crate::implementations::ledger::BuildingLedger;
    use crate::implementations::script::ReplayScript;
    use crate::models::building::BuildingUpdate;
    use crate::models::common::{ Principal, Timestamp };
    use crate::models::inventory::{ ItemType, NewInventoryItem };
    use crate::models::maintenance::{ MaintenanceRequest, MaintenanceStatus, MaintenanceType };
    use crate::tests::{ setup, test_clock };

    #[test]
    fn register_update_transfer_scenario() {
        setup();
        let mut ledger = BuildingLedger::new(test_clock());
        let owner1 = Principal::new("owner1");

        let id = ledger.buildings.register_building("Office Building", "123 Main St", 2010, 5, &owner1);
        assert_eq!(id, 1);
        assert_eq!(ledger.buildings.get_building(1).unwrap().owner, owner1);

        let update = BuildingUpdate {
            name: "Hijacked".to_string(),
            address: "Nowhere".to_string(),
            year_built: 1900,
            total_floors: 1,
        };
        let outcome: crate::models::outcome::TxOutcome = ledger.buildings
            .update_building(1, update, &Principal::new("unauthorized"))
            .unwrap_err()
            .into();
        assert_eq!(serde_json::to_value(&outcome).unwrap(), json!({"success": false, "error": 2}));

        ledger.buildings.transfer_building(1, Principal::new("owner2"), &owner1).unwrap();
        assert_eq!(ledger.buildings.get_building(1).unwrap().owner, Principal::new("owner2"));
        assert_eq!(ledger.buildings.get_building(1).unwrap().name, "Office Building");
    }

    // Counters belong to their own registry: ids restart at 1 for each record kind.
    #[test]
    fn registries_keep_independent_counters() {
        setup();
        let mut ledger = BuildingLedger::new(test_clock());
        let owner = Principal::new("owner1");

        assert_eq!(ledger.buildings.register_building("A", "a", 2000, 1, &owner), 1);
        assert_eq!(ledger.buildings.register_building("B", "b", 2000, 1, &owner), 2);
        let item = NewInventoryItem {
            building_id: 2,
            item_type: ItemType::Toilet,
            description: "Toilet".to_string(),
            location: "2F".to_string(),
            installation_date: Timestamp::from_millis(0),
            manufacturer: "Acme".to_string(),
            model: "T1".to_string(),
        };
        assert_eq!(ledger.inventory.add_inventory_item(item), 1);
        let request = MaintenanceRequest {
            building_id: 2,
            inventory_id: Some(1),
            maintenance_type: MaintenanceType::Repair,
            description: "Leaking flush valve".to_string(),
            scheduled_date: Timestamp::from_millis(0),
            assigned_to: "technician1".to_string(),
        };
        assert_eq!(ledger.maintenance.schedule_maintenance(request), 1);
        assert_eq!(ledger.water.add_water_reading(2, 10, &owner), 1);
        assert_eq!(ledger.water.create_leak_alert(2, 150, 100), 1);
        assert_eq!(ledger.buildings.register_building("C", "c", 2000, 1, &owner), 3);
    }

    // Maintenance for a building that does not exist is accepted as-is.
    #[test]
    fn building_references_are_not_checked_across_registries() {
        setup();
        let mut ledger = BuildingLedger::new(test_clock());
        let request = MaintenanceRequest {
            building_id: 42,
            inventory_id: Some(7),
            maintenance_type: MaintenanceType::Inspection,
            description: "Orphan inspection".to_string(),
            scheduled_date: Timestamp::from_millis(0),
            assigned_to: "technician1".to_string(),
        };
        let id = ledger.maintenance.schedule_maintenance(request);
        assert!(ledger.buildings.get_building(42).is_none());
        assert!(ledger.inventory.get_inventory_item(7).is_none());
        assert_eq!(ledger.maintenance.get_maintenance_record(id).unwrap().status, MaintenanceStatus::Scheduled);
    }

    #[test]
    fn shared_clock_orders_events_across_registries() {
        setup();
        let clock = Arc::new(ManualClock::new(Timestamp::from_millis(10), 5));
        let mut ledger = BuildingLedger::new(clock.clone());
        let owner = Principal::new("owner1");

        ledger.buildings.register_building("A", "a", 2000, 1, &owner);
        ledger.water.add_water_reading(1, 100, &owner);
        ledger.water.create_leak_alert(1, 150, 100);

        assert_eq!(ledger.buildings.get_building(1).unwrap().registration_date, Timestamp::from_millis(10));
        assert_eq!(ledger.water.get_water_reading(1).unwrap().timestamp, Timestamp::from_millis(15));
        assert_eq!(ledger.water.get_leak_alert(1).unwrap().detected_at, Timestamp::from_millis(20));
        assert_eq!(clock.peek(), Timestamp::from_millis(25));
    }

    #[test]
    fn replayed_script_matches_direct_calls() {
        setup();
        let script = ReplayScript::from_yaml_str(
            r#"
sender: owner1
steps:
  - { registry: building, operation: registerBuilding, args: ["Office Building", "123 Main St", 2010, 5] }
  - { registry: building, operation: updateBuilding, args: [1, "x", "y", 2012, 6], sender: unauthorized }
  - { registry: building, operation: transferBuilding, args: [1, "owner2"] }
  - { registry: building, operation: getBuilding, args: [1] }
"#
        ).unwrap();

        let mut ledger = BuildingLedger::new(test_clock());
        let outcomes = script
            .invocations()
            .unwrap()
            .iter()
            .map(|invocation: &Invocation| ledger.dispatch(invocation).unwrap())
            .collect::<Vec<_>>();
        info!("Replay outcomes: {:?}", outcomes);

        assert_eq!(serde_json::to_value(&outcomes[0]).unwrap(), json!({"success": true, "value": 1}));
        assert_eq!(serde_json::to_value(&outcomes[1]).unwrap(), json!({"success": false, "error": 2}));
        assert_eq!(serde_json::to_value(&outcomes[2]).unwrap(), json!({"success": true, "value": true}));
        assert_eq!(outcomes[3].value().unwrap()["owner"], json!("owner2"));
        assert_eq!(outcomes[3].value().unwrap()["name"], json!("Office Building"));

        let snapshot = serde_json::to_value(ledger.snapshot()).unwrap();
        assert_eq!(snapshot["buildings"]["lastId"], json!(1));
        assert_eq!(snapshot["buildings"]["records"][0]["id"], json!(1));
        assert_eq!(snapshot["buildings"]["records"][0]["owner"], json!("owner2"));
        assert_eq!(snapshot["leakAlerts"]["records"], json!([]));
    }
}
