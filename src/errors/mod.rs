pub mod error_mapper;

pub use error_mapper::{map_catalog_load_error, map_lookup_error};
