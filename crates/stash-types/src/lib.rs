//! Shapes shared by the storage layer and the HTTP layer.

pub mod api;
pub mod datetime;
pub mod models;
