//! Wire types for the SwitchBot v1.0 cloud API.
//!
//! Every v1.0 response wraps its payload in a `{statusCode, body, message}`
//! envelope. All fields default when absent, so a status payload from a
//! device class without temperature or humidity decodes to zero values
//! instead of failing.

use serde::Deserialize;

/// Response envelope for `GET /v1.0/devices`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DevicesResponse {
    #[serde(default)]
    pub status_code: i32,
    #[serde(default)]
    pub body: DeviceDirectory,
    #[serde(default)]
    pub message: String,
}

/// Response envelope for `GET /v1.0/devices/{id}/status`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusResponse {
    #[serde(default)]
    pub status_code: i32,
    #[serde(default)]
    pub body: ThermometerStatus,
    #[serde(default)]
    pub message: String,
}

/// Body of the device-directory response.
///
/// Physical devices and infrared remotes arrive in separate lists. Only the
/// primary list carries devices that can report sensor readings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceDirectory {
    #[serde(default)]
    pub device_list: Vec<Device>,
    #[serde(default)]
    pub infrared_remote_list: Vec<InfraredRemote>,
}

/// One entry in the primary device list.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    #[serde(default)]
    pub device_id: String,
    #[serde(default)]
    pub device_name: String,
    #[serde(default)]
    pub device_type: String,
    #[serde(default)]
    pub enable_cloud_service: bool,
    #[serde(default)]
    pub hub_device_id: String,
}

/// One entry in the infrared-remote list.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InfraredRemote {
    #[serde(default)]
    pub device_id: String,
    #[serde(default)]
    pub device_name: String,
    #[serde(default)]
    pub remote_type: String,
    #[serde(default)]
    pub hub_device_id: String,
}

/// Latest reading reported by a thermo-hygrometer.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThermometerStatus {
    #[serde(default)]
    pub device_id: String,
    #[serde(default)]
    pub device_type: String,
    #[serde(default)]
    pub hub_device_id: String,
    /// Relative humidity in percent.
    #[serde(default)]
    pub humidity: i64,
    /// Temperature in degrees Celsius.
    #[serde(default)]
    pub temperature: f64,
}
