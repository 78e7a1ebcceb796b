//! Per-scrape metric registry construction and text rendering.
//!
//! Every scrape builds a fresh [`Registry`] holding exactly the two gauge
//! families for the requested device, renders it, and drops it with the
//! request. Nothing metric-related survives between requests, so label
//! values from one target can never appear in another target's response.

use prometheus::{Encoder, GaugeVec, Opts, Registry, TextEncoder};
use thiserror::Error;

use switchbot_api::ThermometerStatus;

/// Metric namespace; families render as `switchbot_temperature` and
/// `switchbot_humidity`.
const NAMESPACE: &str = "switchbot";

/// Label names carried by both gauge families.
const LABELS: &[&str] = &["device_name", "device_id"];

/// Errors from registry construction or encoding.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Prometheus error: {0}")]
    Prometheus(#[from] prometheus::Error),
    #[error("UTF-8 conversion error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Build a registry scoped to a single scrape.
pub fn build_registry(
    device_name: &str,
    device_id: &str,
    reading: &ThermometerStatus,
) -> Result<Registry, RenderError> {
    let registry = Registry::new();

    let temperature = GaugeVec::new(
        Opts::new(
            "temperature",
            "Temperature measured with a Switchbot thermo-hygrometer",
        )
        .namespace(NAMESPACE),
        LABELS,
    )?;

    let humidity = GaugeVec::new(
        Opts::new(
            "humidity",
            "Humidity measured with a Switchbot thermo-hygrometer",
        )
        .namespace(NAMESPACE),
        LABELS,
    )?;

    registry.register(Box::new(temperature.clone()))?;
    registry.register(Box::new(humidity.clone()))?;

    temperature
        .with_label_values(&[device_name, device_id])
        .set(reading.temperature);
    humidity
        .with_label_values(&[device_name, device_id])
        .set(reading.humidity as f64);

    Ok(registry)
}

/// Render a registry in the Prometheus text exposition format.
pub fn encode_registry(registry: &Registry) -> Result<String, RenderError> {
    let encoder = TextEncoder::new();
    let mut buffer = Vec::new();
    encoder.encode(&registry.gather(), &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reading(temperature: f64, humidity: i64) -> ThermometerStatus {
        ThermometerStatus {
            device_id: "ABC123".to_string(),
            device_type: "Meter".to_string(),
            hub_device_id: "000000000000".to_string(),
            humidity,
            temperature,
        }
    }

    #[test]
    fn test_registry_contains_both_families() {
        let registry = build_registry("Living Room", "ABC123", &reading(23.5, 41)).unwrap();
        let output = encode_registry(&registry).unwrap();

        // Label pairs render sorted by label name.
        assert!(output.contains(
            "switchbot_temperature{device_id=\"ABC123\",device_name=\"Living Room\"} 23.5"
        ));
        assert!(
            output
                .contains("switchbot_humidity{device_id=\"ABC123\",device_name=\"Living Room\"} 41")
        );
        assert!(output.contains("# TYPE switchbot_temperature gauge"));
        assert!(output.contains("# TYPE switchbot_humidity gauge"));
        assert!(
            output.contains("# HELP switchbot_humidity Humidity measured with a Switchbot thermo-hygrometer")
        );
    }

    #[test]
    fn test_zero_reading_renders_zeroes() {
        let registry = build_registry("Hallway Plug", "PLUG01", &reading(0.0, 0)).unwrap();
        let output = encode_registry(&registry).unwrap();

        assert!(
            output.contains("switchbot_temperature{device_id=\"PLUG01\",device_name=\"Hallway Plug\"} 0")
        );
        assert!(
            output.contains("switchbot_humidity{device_id=\"PLUG01\",device_name=\"Hallway Plug\"} 0")
        );
    }

    #[test]
    fn test_registries_are_independent() {
        let first = build_registry("Living Room", "ABC123", &reading(23.5, 41)).unwrap();
        let second = build_registry("Bedroom", "DEF456", &reading(19.0, 55)).unwrap();

        let first_output = encode_registry(&first).unwrap();
        let second_output = encode_registry(&second).unwrap();

        assert!(first_output.contains("ABC123"));
        assert!(!first_output.contains("DEF456"));
        assert!(second_output.contains("DEF456"));
        assert!(!second_output.contains("ABC123"));
    }

    #[test]
    fn test_label_values_are_escaped() {
        let registry = build_registry("Shelf \"A\"", "ABC123", &reading(21.0, 40)).unwrap();
        let output = encode_registry(&registry).unwrap();

        assert!(output.contains("device_name=\"Shelf \\\"A\\\"\""));
    }
}
