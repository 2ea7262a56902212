mod memory;

pub use memory::InMemoryHistoryStore;
