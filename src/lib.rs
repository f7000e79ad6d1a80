#![warn(rust_2018_idioms)]

pub mod adapter;
pub mod config;
pub mod domain;
pub mod error;
pub mod port;
pub mod query;
pub mod service;
pub mod telemetry;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use adapter::json_file::JsonFileNewsStore;
pub use domain::{NewsDraft, NewsRecord};
pub use error::NewsError;
pub use port::{NewsStore, StoreSnapshot};
pub use service::NewsService;
