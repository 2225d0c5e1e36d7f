pub mod mock;
pub mod store;
