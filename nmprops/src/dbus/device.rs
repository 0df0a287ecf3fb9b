//! NetworkManager Device proxy.

use zbus::{Result, proxy};
use zvariant::OwnedObjectPath;

/// Proxy for NetworkManager device interface.
///
/// Only the properties needed to find a device's DHCPv4 configuration are
/// declared here.
#[proxy(
    interface = "org.freedesktop.NetworkManager.Device",
    default_service = "org.freedesktop.NetworkManager"
)]
pub trait NMDevice {
    /// The network interface name (e.g., "eth0").
    #[zbus(property)]
    fn interface(&self) -> Result<String>;

    /// Path of the device's DHCP4Config object, or `/` without a lease.
    #[zbus(property, name = "Dhcp4Config")]
    fn dhcp4_config(&self) -> Result<OwnedObjectPath>;
}
