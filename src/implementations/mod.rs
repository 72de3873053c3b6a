pub mod clock;
pub mod store;
pub mod building_registry;
pub mod inventory_registry;
pub mod maintenance_registry;
pub mod water_usage_registry;
pub mod ledger;
pub mod dispatcher;
pub mod script;
