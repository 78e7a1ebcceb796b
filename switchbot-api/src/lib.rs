//! SwitchBot Cloud API Client
//!
//! This crate provides a typed async client for the SwitchBot v1.0 cloud API:
//!
//! - [`client`] - Authenticated HTTP client, device-name resolution, thermometer readings
//! - [`model`] - Wire types for the v1.0 response envelopes
//! - [`error`] - Error types
//!
//! The client covers the two read-only endpoints the exporter needs:
//! `GET /v1.0/devices` for the account's device directory and
//! `GET /v1.0/devices/{id}/status` for the latest reading of one device.

pub mod client;
pub mod error;
pub mod model;

// Re-export commonly used types at the crate root
pub use client::{Client, ClientConfig, DEFAULT_ENDPOINT};
pub use error::{Error, Result};
pub use model::{
    Device, DeviceDirectory, DevicesResponse, InfraredRemote, StatusResponse, ThermometerStatus,
};
