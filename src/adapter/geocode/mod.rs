//! Geocode Adapter
//!
//! HeartRails Geo API クライアント

pub mod heartrails;
mod models;

pub use heartrails::HeartRailsGeocodeProvider;
