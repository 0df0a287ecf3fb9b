//! Constants for NetworkManager D-Bus names.
//!
//! Property names are fully qualified (`<interface>.<Property>`), the form
//! accepted by [`PropertyAccessor::get_property`](crate::PropertyAccessor::get_property).

/// Well-known bus names.
pub mod service {
    pub const NETWORK_MANAGER: &str = "org.freedesktop.NetworkManager";
}

/// D-Bus interface names.
pub mod interface {
    pub const NETWORK_MANAGER: &str = "org.freedesktop.NetworkManager";
    pub const DEVICE: &str = "org.freedesktop.NetworkManager.Device";
    pub const DHCP4_CONFIG: &str = "org.freedesktop.NetworkManager.DHCP4Config";
}

/// Fully qualified property names.
pub mod property {
    /// Configuration options returned by the IPv4 DHCP server (`a{sv}`).
    pub const DHCP4_CONFIG_OPTIONS: &str = "org.freedesktop.NetworkManager.DHCP4Config.Options";
    pub const DEVICE_INTERFACE: &str = "org.freedesktop.NetworkManager.Device.Interface";
    pub const DEVICE_DHCP4_CONFIG: &str = "org.freedesktop.NetworkManager.Device.Dhcp4Config";
}

/// Well-known object paths.
pub mod path {
    pub const NETWORK_MANAGER: &str = "/org/freedesktop/NetworkManager";

    /// NetworkManager's placeholder for "no object".
    pub const NONE: &str = "/";
}
