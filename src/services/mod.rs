pub mod catalog;

pub use self::catalog::{service as catalog, CatalogState};
