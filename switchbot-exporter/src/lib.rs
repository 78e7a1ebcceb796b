//! Prometheus exporter for SwitchBot thermo-hygrometers.
//!
//! This crate bridges the SwitchBot cloud API to Prometheus. Each scrape of
//! `/metrics?target=<device id>` resolves the device's display name, fetches
//! its latest reading, and answers with `switchbot_temperature` and
//! `switchbot_humidity` gauges rendered from a registry built for that
//! request alone.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐     ┌─────────────────┐     ┌─────────────────┐
//! │   Prometheus    │────>│   HTTP Server   │────>│  SwitchBot API  │
//! │ (?target=<id>)  │     │ (per-request    │     │  (v1.0 cloud)   │
//! └─────────────────┘     │    registry)    │     └─────────────────┘
//!                         └─────────────────┘
//! ```
//!
//! # Usage
//!
//! Export the account token and run the binary, optionally with a
//! configuration file:
//!
//! ```bash
//! SWITCHBOT_TOKEN=... switchbot-exporter --config config.json5
//! ```
//!
//! # Configuration
//!
//! See [`config::ExporterConfig`] for configuration options.

pub mod config;
pub mod http;
pub mod scrape;

pub use config::ExporterConfig;
pub use http::HttpServer;
