pub mod store;

pub use store::JsonFileNewsStore;
