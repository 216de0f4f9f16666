//! data pipeline for the EV Infrastructure Readiness Index (EIRI) dashboard.
//!
//! [`ingest`] turns a comma-delimited metrics table into canonical
//! [`model::CountryMetric`] records, and [`geo`] resolves the display
//! coordinates of each record against a country centroid table.
pub mod geo;
pub mod ingest;
pub mod model;
