//! Authenticated client for the SwitchBot v1.0 cloud API.
//!
//! The client performs plain GET requests with the account token in the
//! `Authorization` header, checks the HTTP status, and decodes the JSON
//! envelope. Name resolution and reading fetches are thin wrappers over the
//! two v1.0 endpoints.

use std::time::Duration;

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::model::{DeviceDirectory, DevicesResponse, StatusResponse, ThermometerStatus};

/// Default base URL of the SwitchBot cloud API.
pub const DEFAULT_ENDPOINT: &str = "https://api.switch-bot.com";

/// Connection settings for [`Client`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the SwitchBot API.
    pub endpoint: String,

    /// Total per-request timeout, covering connect, send, and body read.
    pub timeout: Duration,

    /// Timeout for establishing the connection.
    pub connect_timeout: Duration,

    /// Retry a request once after a transport-level failure. Non-200
    /// statuses and undecodable bodies are never retried.
    pub retry: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: Duration::from_secs(10),
            connect_timeout: Duration::from_secs(5),
            retry: false,
        }
    }
}

/// Client for the SwitchBot v1.0 cloud API.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Clone)]
pub struct Client {
    http: reqwest::Client,
    token: String,
    endpoint: String,
    retry: bool,
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // The token is a credential and stays out of Debug output.
        f.debug_struct("Client")
            .field("endpoint", &self.endpoint)
            .field("retry", &self.retry)
            .finish_non_exhaustive()
    }
}

impl Client {
    /// Create a client with the default configuration.
    pub fn new(token: impl Into<String>) -> Result<Self> {
        Self::with_config(token, ClientConfig::default())
    }

    /// Create a client with an explicit configuration.
    pub fn with_config(token: impl Into<String>, config: ClientConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()
            .map_err(Error::Build)?;

        Ok(Self {
            http,
            token: token.into(),
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            retry: config.retry,
        })
    }

    /// Fetch the device directory for the account.
    pub async fn devices(&self) -> Result<DeviceDirectory> {
        let url = format!("{}/v1.0/devices", self.endpoint);
        let response: DevicesResponse = self.get(&url).await?;
        Ok(response.body)
    }

    /// Resolve a device id to its configured display name.
    ///
    /// Only the primary device list is scanned. Infrared remotes live in a
    /// separate list and cannot report sensor readings, so an id found
    /// there still resolves to [`Error::DeviceNotFound`]. Matching is
    /// case-sensitive.
    pub async fn device_name(&self, device_id: &str) -> Result<String> {
        let directory = self.devices().await?;

        let name = directory
            .device_list
            .iter()
            .find(|device| device.device_id == device_id)
            .map(|device| device.device_name.clone())
            .ok_or_else(|| Error::DeviceNotFound(device_id.to_string()))?;

        debug!(device_id = %device_id, device_name = %name, "Resolved device name");
        Ok(name)
    }

    /// Fetch the latest reading for one device.
    ///
    /// The device class is not validated here: a status payload without
    /// temperature or humidity fields decodes to zero values.
    pub async fn thermometer_status(&self, device_id: &str) -> Result<ThermometerStatus> {
        let url = format!("{}/v1.0/devices/{}/status", self.endpoint, device_id);
        let response: StatusResponse = self.get(&url).await?;
        Ok(response.body)
    }

    /// Perform one authenticated GET, retrying once on a transport failure
    /// when retries are enabled.
    async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        match self.get_once(url).await {
            Err(e @ Error::Transport { .. }) if self.retry => {
                warn!(url = %url, error = %e, "Transport failure, retrying once");
                self.get_once(url).await
            }
            other => other,
        }
    }

    async fn get_once<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let response = self
            .http
            .get(url)
            .header("Authorization", &self.token)
            .header("Content-Type", "application/json")
            .send()
            .await
            .map_err(|e| Error::Transport {
                url: url.to_string(),
                source: e,
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(Error::Status {
                status,
                url: url.to_string(),
            });
        }

        let body = response.bytes().await.map_err(|e| Error::Transport {
            url: url.to_string(),
            source: e,
        })?;

        debug!(url = %url, bytes = body.len(), "SwitchBot API response received");

        serde_json::from_slice(&body).map_err(|e| Error::Decode {
            url: url.to_string(),
            source: e,
        })
    }
}
