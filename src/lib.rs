pub mod catalogs;
pub mod collections;
pub mod config;
pub mod core;
pub mod error;
pub mod logging;
