pub mod news;

pub use news::{NewsDraft, NewsRecord};
