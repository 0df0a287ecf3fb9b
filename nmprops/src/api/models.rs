use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// Options handed out by the IPv4 DHCP server, keyed by option name.
///
/// Values are unwrapped from their D-Bus variant envelope into plain JSON
/// values. NetworkManager currently reports every option as a string
/// (`"dhcp_lease_time" => "3600"`), but other shapes are preserved as-is.
pub type Dhcp4Options = BTreeMap<String, serde_json::Value>;

/// Serialisable view of a DHCP4Config object.
///
/// Serialises to a single-key object:
///
/// ```json
/// {"Options":{"dhcp_lease_time":"3600","routers":"192.0.2.1"}}
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dhcp4Snapshot {
    #[serde(rename = "Options")]
    pub options: Dhcp4Options,
}

/// Errors that can occur while talking to NetworkManager objects.
#[derive(Debug, Error)]
pub enum NmError {
    /// A D-Bus communication error occurred.
    #[error("D-Bus error: {0}")]
    Dbus(#[from] zbus::Error),

    /// The remote side answered with a standard D-Bus error.
    #[error("D-Bus error reply: {0}")]
    Fdo(#[from] zbus::fdo::Error),

    /// A bus, interface or member name failed validation.
    #[error("invalid D-Bus name: {0}")]
    Name(#[from] zbus::names::Error),

    /// A value could not be encoded or decoded.
    #[error("variant error: {0}")]
    Variant(#[from] zvariant::Error),

    /// The property exists but holds a value of a different shape.
    #[error("unexpected variant type for '{property}'")]
    UnexpectedType { property: String },

    /// A property or method name is not of the form `<interface>.<Member>`.
    #[error("'{0}' is not a qualified member name")]
    InvalidMemberName(String),

    /// No device with the given interface name is known to NetworkManager.
    #[error("no device with interface '{0}'")]
    DeviceNotFound(String),

    /// JSON serialisation failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
