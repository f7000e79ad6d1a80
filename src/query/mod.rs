//! Stateless views over the record sequence returned by a [`crate::port::NewsStore`].
//!
//! Nothing here touches the backing store; the functions compose freely and
//! the news listings, jornada listings and search results all paginate the
//! same way.

pub mod filter;
pub mod jornada;
pub mod pagination;

pub use filter::{filter_by_date_bucket, filter_by_title_contains};
pub use jornada::Jornada;
pub use pagination::{Page, paginate, parse_page};
