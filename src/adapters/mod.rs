/// Adapters - concrete implementations of the port traits
pub mod storage;
