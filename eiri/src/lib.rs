//! dashboard-facing layer over [`eiri_core`]: configuration, session state,
//! the data contracts each visual binds to, and the `eiri` command line tool.
pub mod app;
pub mod config;
pub mod session;
pub mod view;
