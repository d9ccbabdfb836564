//! Inkpal - accessible color palettes
//!
//! CLI and HTTP front end for the `contrast-palette` crate.
//! This library exposes modules for integration testing.

pub mod api;
pub mod error;
pub mod models;
pub mod server;
pub mod services;
