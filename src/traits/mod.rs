pub mod clock;
pub mod record_store;

// Re-export traits
pub use clock::Clock;
pub use record_store::RecordStore;
