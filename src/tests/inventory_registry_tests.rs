#[cfg(test)]
mod tests {
    use crate::errors::RegistryError;
    use crate::implementations::inventory_registry::InventoryRegistry;
    use crate::models::common::{ ErrorCode, RecordKind, Timestamp };
    use crate::models::inventory::{ InventoryItemUpdate, ItemType, NewInventoryItem };
    use crate::tests::setup;

    fn new_item(building_id: u64, item_type: ItemType, description: &str) -> NewInventoryItem {
        NewInventoryItem {
            building_id,
            item_type,
            description: description.to_string(),
            location: "First Floor Kitchen".to_string(),
            installation_date: Timestamp::from_millis(1_620_000_000),
            manufacturer: "SinkCo".to_string(),
            model: "Model X100".to_string(),
        }
    }

    #[test]
    fn add_stores_item_without_maintenance_date() {
        setup();
        let mut registry = InventoryRegistry::new();

        let id = registry.add_inventory_item(new_item(1, ItemType::Sink, "Kitchen Sink"));
        assert_eq!(id, 1);

        let item = registry.get_inventory_item(1).unwrap();
        assert_eq!(item.building_id, 1);
        assert_eq!(item.item_type, ItemType::Sink);
        assert_eq!(item.description, "Kitchen Sink");
        assert_eq!(item.location, "First Floor Kitchen");
        assert_eq!(item.manufacturer, "SinkCo");
        assert_eq!(item.model, "Model X100");
        assert_eq!(item.last_maintenance_date, None);
    }

    #[test]
    fn update_replaces_descriptive_fields_only() {
        setup();
        let mut registry = InventoryRegistry::new();
        registry.add_inventory_item(new_item(3, ItemType::Sink, "Old Description"));
        registry.update_maintenance_date(1, Timestamp::from_millis(1_640_000_000)).unwrap();

        registry
            .update_inventory_item(1, InventoryItemUpdate {
                description: "New Description".to_string(),
                location: "New Location".to_string(),
                manufacturer: "New Manufacturer".to_string(),
                model: "New Model".to_string(),
            })
            .unwrap();

        let item = registry.get_inventory_item(1).unwrap();
        assert_eq!(item.description, "New Description");
        assert_eq!(item.location, "New Location");
        assert_eq!(item.manufacturer, "New Manufacturer");
        assert_eq!(item.model, "New Model");
        assert_eq!(item.building_id, 3);
        assert_eq!(item.item_type, ItemType::Sink);
        assert_eq!(item.installation_date, Timestamp::from_millis(1_620_000_000));
        assert_eq!(item.last_maintenance_date, Some(Timestamp::from_millis(1_640_000_000)));
    }

    #[test]
    fn maintenance_date_is_set() {
        setup();
        let mut registry = InventoryRegistry::new();
        registry.add_inventory_item(new_item(1, ItemType::WaterHeater, "Water Heater"));

        registry.update_maintenance_date(1, Timestamp::from_millis(1_650_000_000)).unwrap();

        assert_eq!(
            registry.get_inventory_item(1).unwrap().last_maintenance_date,
            Some(Timestamp::from_millis(1_650_000_000))
        );
    }

    #[test]
    fn remove_deletes_and_second_remove_is_not_found() {
        setup();
        let mut registry = InventoryRegistry::new();
        registry.add_inventory_item(new_item(1, ItemType::Sink, "Kitchen Sink"));

        let removed = registry.remove_inventory_item(1).unwrap();
        assert_eq!(removed.description, "Kitchen Sink");
        assert!(registry.get_inventory_item(1).is_none());

        let err = registry.remove_inventory_item(1).unwrap_err();
        assert_eq!(err, RegistryError::NotFound { kind: RecordKind::InventoryItem, id: 1 });
        assert_eq!(err.code(), ErrorCode::NotFound);
    }

    #[test]
    fn removed_ids_are_not_reused() {
        setup();
        let mut registry = InventoryRegistry::new();
        registry.add_inventory_item(new_item(1, ItemType::Sink, "a"));
        registry.remove_inventory_item(1).unwrap();

        let id = registry.add_inventory_item(new_item(1, ItemType::Toilet, "b"));
        assert_eq!(id, 2);
        assert_eq!(registry.last_inventory_id(), 2);
        assert_eq!(registry.items().len(), 1);
    }

    #[test]
    fn mutations_on_unknown_item_are_not_found() {
        setup();
        let mut registry = InventoryRegistry::new();

        let update = InventoryItemUpdate {
            description: "d".to_string(),
            location: "l".to_string(),
            manufacturer: "m".to_string(),
            model: "x".to_string(),
        };
        assert_eq!(registry.update_inventory_item(5, update).unwrap_err().code(), ErrorCode::NotFound);
        assert_eq!(
            registry.update_maintenance_date(5, Timestamp::from_millis(1)).unwrap_err().code(),
            ErrorCode::NotFound
        );
        assert!(registry.items().is_empty());
    }

    // Items are accepted for buildings that were never registered anywhere.
    #[test]
    fn building_id_is_not_validated() {
        setup();
        let mut registry = InventoryRegistry::new();
        let id = registry.add_inventory_item(new_item(999, ItemType::from_code(3), "Shower"));
        assert_eq!(registry.get_inventory_item(id).unwrap().building_id, 999);
        assert_eq!(registry.get_inventory_item(id).unwrap().item_type.code(), 3);
    }

    #[test]
    fn item_type_codes() {
        assert_eq!(ItemType::Sink.code(), 1);
        assert_eq!(ItemType::Toilet.code(), 2);
        assert_eq!(ItemType::WaterHeater.code(), 4);
        assert_eq!(ItemType::from_code(4), ItemType::WaterHeater);
        assert!(matches!(ItemType::from_code(7), ItemType::Other(code) if code.get() == 7));
    }

    // Assigned codes always decode to their named variant, never to Other.
    #[test]
    fn assigned_codes_never_become_other() {
        for code in [1, 2, 4] {
            assert!(!matches!(ItemType::from_code(code), ItemType::Other(_)));
        }
        assert_eq!(ItemType::from_code(1), ItemType::Sink);
        assert_eq!(ItemType::from_code(3).code(), 3);
        assert_eq!(ItemType::from_code(3).to_string(), "type 3");

        let decoded: ItemType = serde_json::from_str("1").unwrap();
        assert_eq!(decoded, ItemType::Sink);
        let other = ItemType::from_code(9);
        let json = serde_json::to_string(&other).unwrap();
        assert_eq!(json, "9");
        assert_eq!(serde_json::from_str::<ItemType>(&json).unwrap(), other);
    }
}
